use axum::{extract::{Path, Query, State}, Json};
use tracing::info;

use common::{pagination::OffsetLimit, types::Message};
use models::{order, product};
use service::product_service::{self, ProductInput};

use crate::{errors::JsonApiError, routes::{row_id, ServerState}};

#[utoipa::path(
    get, path = "/api/products/", tag = "products",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Max rows (default 100)")
    ),
    responses((status = 200, description = "List OK", body = [crate::openapi::ProductDoc]))
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<OffsetLimit>) -> Result<Json<Vec<product::Model>>, JsonApiError> {
    let list = product_service::list_products(&state.db, q).await?;
    info!(count = list.len(), "list products");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 404, description = "Product not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<product::Model>, JsonApiError> {
    let id = row_id(id, "Product")?;
    match product_service::get_product(&state.db, id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(JsonApiError::not_found("Product")),
    }
}

#[utoipa::path(
    post, path = "/api/products/", tag = "products",
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Product already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<ProductInput>) -> Result<Json<product::Model>, JsonApiError> {
    info!(name = %input.name, price = input.price, "product_create_request");
    let created = product_service::create_product(&state.db, &input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 400, description = "Name taken by another product", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Product not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i64>, Json(input): Json<ProductInput>) -> Result<Json<product::Model>, JsonApiError> {
    let id = row_id(id, "Product")?;
    let updated = product_service::update_product(&state.db, id, &input).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Product has existing orders", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Product not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Message>, JsonApiError> {
    let id = row_id(id, "Product")?;
    if product_service::delete_product(&state.db, id).await? {
        info!(id, "deleted product");
        Ok(Json(Message::new("Product deleted successfully")))
    } else {
        Err(JsonApiError::not_found("Product"))
    }
}

#[utoipa::path(
    get, path = "/api/products/{id}/orders", tag = "products",
    params(
        ("id" = i64, Path, description = "Product ID"),
        ("skip" = Option<u64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Max rows (default 100)")
    ),
    responses(
        (status = 200, description = "Orders of the product", body = [crate::openapi::OrderDoc]),
        (status = 404, description = "Product not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_orders(State(state): State<ServerState>, Path(id): Path<i64>, Query(q): Query<OffsetLimit>) -> Result<Json<Vec<order::Model>>, JsonApiError> {
    let id = row_id(id, "Product")?;
    let list = product_service::list_product_orders(&state.db, id, q).await?;
    Ok(Json(list))
}
