use axum::{
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, Message};

use crate::{errors::JsonApiError, observability, openapi::ApiDoc};

pub mod orders;
pub mod products;

/// Shared handler state; the pool hands each query its own connection.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Welcome message", body = crate::openapi::MessageDoc)))]
pub async fn root() -> Json<Message> {
    Json(Message::new("Welcome to Products & Orders API!"))
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "healthy" })
}

/// Ids arrive as i64 so an out-of-range id is a missing row (404) rather than a rejected path.
pub(crate) fn row_id(id: i64, entity: &str) -> Result<i32, JsonApiError> {
    i32::try_from(id).map_err(|_| JsonApiError::not_found(entity))
}

async fn metrics() -> (StatusCode, String) {
    observability::encode_metrics()
}

/// Build the full application router: status routes, the products/orders API and docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Collection routes answer with and without the trailing slash
    let api = Router::new()
        .route("/api/products", get(products::list).post(products::create))
        .route("/api/products/", get(products::list).post(products::create))
        .route(
            "/api/products/:id",
            get(products::get).put(products::update).delete(products::delete),
        )
        .route("/api/products/:id/orders", get(products::list_orders))
        .route("/api/orders", get(orders::list).post(orders::create))
        .route("/api/orders/", get(orders::list).post(orders::create))
        .route("/api/orders/:id", get(orders::get).delete(orders::delete));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(middleware::from_fn(observability::track_metrics))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_id_outside_i32_is_not_found() {
        assert_eq!(row_id(42, "Product").ok(), Some(42));
        assert_eq!(row_id(-7, "Order").ok(), Some(-7));

        let err = row_id(3_000_000_000, "Product").unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.detail.as_deref(), Some("Product not found"));
    }
}
