use axum::{extract::{Path, Query, State}, Json};
use tracing::info;

use common::{pagination::OffsetLimit, types::Message};
use models::order;
use service::order_service::{self, OrderInput};

use crate::{errors::JsonApiError, routes::{row_id, ServerState}};

#[utoipa::path(
    get, path = "/api/orders/", tag = "orders",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Max rows (default 100)")
    ),
    responses((status = 200, description = "List OK", body = [crate::openapi::OrderDoc]))
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<OffsetLimit>) -> Result<Json<Vec<order::Model>>, JsonApiError> {
    let list = order_service::list_orders(&state.db, q).await?;
    info!(count = list.len(), "list orders");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::OrderDoc),
        (status = 404, description = "Order not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<order::Model>, JsonApiError> {
    let id = row_id(id, "Order")?;
    order_service::get_order(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("Order"))
}

#[utoipa::path(
    post, path = "/api/orders/", tag = "orders",
    request_body = crate::openapi::OrderInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::OrderDoc),
        (status = 404, description = "Product not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<OrderInput>) -> Result<Json<order::Model>, JsonApiError> {
    info!(customer = %input.customer_name, product_id = input.product_id, quantity = input.quantity, "order_create_request");
    let created = order_service::create_order(&state.db, &input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    delete, path = "/api/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Order not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Message>, JsonApiError> {
    let id = row_id(id, "Order")?;
    if order_service::delete_order(&state.db, id).await? {
        info!(id, "deleted order");
        Ok(Json(Message::new("Order deleted successfully")))
    } else {
        Err(JsonApiError::not_found("Order"))
    }
}
