
/// CRUD operations tests for products and orders
pub mod crud_tests;

use crate::db::{connect_with_config, DatabaseConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database for one test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
