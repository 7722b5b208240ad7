use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};
use tracing::info;

use common::pagination::OffsetLimit;
use models::errors::ModelError;
use models::order::{self, Entity as OrderEntity};
use models::product;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderInput {
    pub customer_name: String,
    pub quantity: i32,
    pub product_id: i32,
}

/// List orders ordered by id within the offset/limit window.
pub async fn list_orders(db: &DatabaseConnection, page: OffsetLimit) -> Result<Vec<order::Model>, ServiceError> {
    let (offset, limit) = page.normalize();
    let rows = OrderEntity::find()
        .order_by_asc(order::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Get an order by id.
pub async fn get_order(db: &DatabaseConnection, id: i32) -> Result<Option<order::Model>, ServiceError> {
    let found = OrderEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Create an order for an existing product.
pub async fn create_order(db: &DatabaseConnection, input: &OrderInput) -> Result<order::Model, ServiceError> {
    let owner = product::Entity::find_by_id(input.product_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if owner.is_none() {
        return Err(ServiceError::not_found("Product"));
    }
    let created = order::create(db, &input.customer_name, input.quantity, input.product_id)
        .await
        .map_err(|e| match e {
            // product removed between the lookup and the insert
            ModelError::Conflict(_) => ServiceError::not_found("Product"),
            other => other.into(),
        })?;
    info!(id = created.id, product_id = created.product_id, "order created");
    Ok(created)
}

/// Delete an order; returns true if deleted.
pub async fn delete_order(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = OrderEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_service::{create_product, ProductInput};
    use crate::test_support::get_db;

    async fn seed_product(db: &DatabaseConnection) -> Result<product::Model, anyhow::Error> {
        let input = ProductInput { name: "Chair".into(), description: None, price: 49.0 };
        Ok(create_product(db, &input).await?)
    }

    #[tokio::test]
    async fn order_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let p = seed_product(&db).await?;

        let o = create_order(&db, &OrderInput { customer_name: "Dana".into(), quantity: 3, product_id: p.id }).await?;
        let found = get_order(&db, o.id).await?.unwrap();
        assert_eq!(found.customer_name, "Dana");
        assert_eq!(found.quantity, 3);
        assert_eq!(found.product_id, p.id);

        let listed = list_orders(&db, OffsetLimit::default()).await?;
        assert_eq!(listed, vec![found]);

        assert!(delete_order(&db, o.id).await?);
        assert!(get_order(&db, o.id).await?.is_none());
        assert!(!delete_order(&db, o.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn missing_product_is_not_found_and_creates_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_order(&db, &OrderInput { customer_name: "Eve".into(), quantity: 1, product_id: 404 })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Product not found"));
        assert!(list_orders(&db, OffsetLimit::default()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_orders_window() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let p = seed_product(&db).await?;
        for i in 0..4 {
            create_order(&db, &OrderInput { customer_name: format!("c{i}"), quantity: i + 1, product_id: p.id }).await?;
        }
        let page = list_orders(&db, OffsetLimit::new(2, 10)).await?;
        let names: Vec<&str> = page.iter().map(|o| o.customer_name.as_str()).collect();
        assert_eq!(names, vec!["c2", "c3"]);
        Ok(())
    }
}
