use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, order};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Orders }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Orders => Entity::has_many(order::Entity).into(),
        }
    }
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Orders.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() {
        return Err(errors::ModelError::Validation("price must be a finite number".into()));
    }
    Ok(())
}

/// Look up a product by its exact name.
pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Name.eq(name)).one(db).await?)
}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    description: Option<&str>,
    price: f64,
) -> Result<Model, errors::ModelError> {
    validate_price(price)?;
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(description.map(str::to_string)),
        price: Set(price),
    };
    am.insert(db).await.map_err(errors::ModelError::from_write)
}
