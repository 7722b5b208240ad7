use std::process::ExitCode;

use tracing::{error, info};
use uuid::Uuid;

/// Identity attached to every lifecycle record of this process.
#[derive(Clone, Copy)]
struct Instance {
    id: Uuid,
    pid: u32,
}

impl Instance {
    fn current() -> Self {
        Self { id: Uuid::new_v4(), pid: std::process::id() }
    }

    fn report_panics(self) {
        std::panic::set_hook(Box::new(move |panic| {
            let location = panic.location().map(|l| format!("{}:{}", l.file(), l.line()));
            error!(
                app = "products_orders",
                phase = "crashed",
                instance = %self.id,
                pid = self.pid,
                location = location.as_deref().unwrap_or("unknown"),
                "{panic}"
            );
        }));
    }

    fn fail(self, phase: &'static str, err: &dyn std::fmt::Display) -> ExitCode {
        error!(app = "products_orders", phase, instance = %self.id, pid = self.pid, error = %err, "exiting with failure");
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    // .env must be loaded before the subscriber reads RUST_LOG / LOG_FORMAT
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance = Instance::current();
    instance.report_panics();

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => return instance.fail("config", &e),
    };
    let rt = match server::build_runtime(cfg.server.worker_threads) {
        Ok(rt) => rt,
        Err(e) => return instance.fail("runtime", &e),
    };

    info!(
        app = "products_orders",
        phase = "boot",
        instance = %instance.id,
        pid = instance.pid,
        version = env!("CARGO_PKG_VERSION"),
        addr = %cfg.server.bind_addr(),
        workers = rt.metrics().num_workers(),
        "booting"
    );

    if let Err(e) = rt.block_on(server::serve(cfg)) {
        return instance.fail("serve", &e);
    }
    info!(app = "products_orders", phase = "shutdown", instance = %instance.id, "drained and stopped");
    ExitCode::SUCCESS
}
