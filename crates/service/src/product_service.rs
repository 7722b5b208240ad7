use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use common::pagination::OffsetLimit;
use models::errors::ModelError;
use models::order;
use models::product::{self, Entity as ProductEntity};
use crate::errors::ServiceError;

/// Body accepted by both create and full update.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// List products ordered by id within the offset/limit window.
pub async fn list_products(db: &DatabaseConnection, page: OffsetLimit) -> Result<Vec<product::Model>, ServiceError> {
    let (offset, limit) = page.normalize();
    let rows = ProductEntity::find()
        .order_by_asc(product::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Get a product by id.
pub async fn get_product(db: &DatabaseConnection, id: i32) -> Result<Option<product::Model>, ServiceError> {
    let found = ProductEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Create a product; names are unique.
pub async fn create_product(db: &DatabaseConnection, input: &ProductInput) -> Result<product::Model, ServiceError> {
    if product::find_by_name(db, &input.name).await?.is_some() {
        return Err(ServiceError::Conflict("Product already exists".into()));
    }
    let created = product::create(db, &input.name, input.description.as_deref(), input.price)
        .await
        .map_err(|e| match e {
            // lost a race against a concurrent insert of the same name
            ModelError::Conflict(_) => ServiceError::Conflict("Product already exists".into()),
            other => other.into(),
        })?;
    info!(id = created.id, name = %created.name, "product created");
    Ok(created)
}

/// Replace all fields of a product. Keeping the current name is not a conflict.
pub async fn update_product(db: &DatabaseConnection, id: i32, input: &ProductInput) -> Result<product::Model, ServiceError> {
    let current = ProductEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else { return Err(ServiceError::not_found("Product")); };

    product::validate_price(input.price)?;

    let name_taken = || ServiceError::Conflict(format!("Product with name '{}' already exists", input.name));
    if input.name != existing.name {
        let other = ProductEntity::find()
            .filter(product::Column::Name.eq(input.name.as_str()))
            .filter(product::Column::Id.ne(id))
            .one(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        if other.is_some() {
            return Err(name_taken());
        }
    }

    let mut am: product::ActiveModel = existing.into();
    am.name = Set(input.name.clone());
    am.description = Set(input.description.clone());
    am.price = Set(input.price);
    let updated = am.update(db).await.map_err(|e| match ModelError::from_write(e) {
        ModelError::Conflict(_) => name_taken(),
        other => other.into(),
    })?;
    info!(id = updated.id, "product updated");
    Ok(updated)
}

/// Delete a product; returns false if it did not exist.
///
/// A product that still has orders is kept and reported as a conflict.
pub async fn delete_product(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let Some(existing) = get_product(db, id).await? else { return Ok(false); };
    let order_count = existing
        .find_related(order::Entity)
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if order_count > 0 {
        return Err(ServiceError::Conflict("Product has existing orders".into()));
    }
    let res = ProductEntity::delete_by_id(id).exec(db).await.map_err(|e| match ModelError::from_write(e) {
        ModelError::Conflict(_) => ServiceError::Conflict("Product has existing orders".into()),
        other => other.into(),
    })?;
    Ok(res.rows_affected > 0)
}

/// Orders placed against a product, ordered by id.
pub async fn list_product_orders(db: &DatabaseConnection, id: i32, page: OffsetLimit) -> Result<Vec<order::Model>, ServiceError> {
    let Some(existing) = get_product(db, id).await? else { return Err(ServiceError::not_found("Product")); };
    let (offset, limit) = page.normalize();
    let rows = existing
        .find_related(order::Entity)
        .order_by_asc(order::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}
