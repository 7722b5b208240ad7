use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, product};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_name: String,
    pub quantity: i32,
    pub product_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Product }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity)
                .from(Column::ProductId)
                .to(product::Column::Id)
                .into(),
        }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert an order; the caller is expected to have checked `product_id`.
pub async fn create(
    db: &DatabaseConnection,
    customer_name: &str,
    quantity: i32,
    product_id: i32,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        customer_name: Set(customer_name.to_string()),
        quantity: Set(quantity),
        product_id: Set(product_id),
    };
    am.insert(db).await.map_err(errors::ModelError::from_write)
}
