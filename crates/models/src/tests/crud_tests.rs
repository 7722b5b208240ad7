use super::setup_test_db;
use crate::errors::ModelError;
use crate::{order, product};
use sea_orm::{EntityTrait, ModelTrait, PaginatorTrait};
use anyhow::Result;

/// Test product insert and lookup
#[tokio::test]
async fn test_product_create_and_find() -> Result<()> {
    let db = setup_test_db().await?;

    let p = product::create(&db, "Widget", Some("A small widget"), 9.99).await?;
    assert!(p.id > 0);

    let found = product::Entity::find_by_id(p.id).one(&db).await?.expect("product");
    assert_eq!(found, p);

    let by_name = product::find_by_name(&db, "Widget").await?;
    assert_eq!(by_name.map(|m| m.id), Some(p.id));
    assert!(product::find_by_name(&db, "Gadget").await?.is_none());
    Ok(())
}

/// Unique name is enforced by the schema as well
#[tokio::test]
async fn test_product_unique_name_is_conflict() -> Result<()> {
    let db = setup_test_db().await?;
    product::create(&db, "Widget", None, 1.0).await?;

    let err = product::create(&db, "Widget", None, 2.0).await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");
    assert_eq!(product::Entity::find().count(&db).await?, 1);
    Ok(())
}

/// Names are stored as given, blank ones included; only the price must be finite
#[tokio::test]
async fn test_blank_names_stored_as_given() -> Result<()> {
    let db = setup_test_db().await?;
    let p = product::create(&db, "", None, 1.0).await?;
    assert_eq!(p.name, "");
    assert_eq!(product::find_by_name(&db, "").await?.map(|m| m.id), Some(p.id));

    let o = order::create(&db, "", 1, p.id).await?;
    assert_eq!(o.customer_name, "");

    let err = product::create(&db, "Widget", None, f64::NAN).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)), "got {err:?}");
    Ok(())
}

/// Orders link back to their product through the relation
#[tokio::test]
async fn test_order_relations() -> Result<()> {
    let db = setup_test_db().await?;
    let p = product::create(&db, "Widget", None, 3.5).await?;
    let o1 = order::create(&db, "Alice", 2, p.id).await?;
    let o2 = order::create(&db, "Bob", 1, p.id).await?;

    let orders = p.find_related(order::Entity).all(&db).await?;
    let mut ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![o1.id, o2.id]);

    let owner = o1.find_related(product::Entity).one(&db).await?.expect("product");
    assert_eq!(owner.id, p.id);
    Ok(())
}

/// The FK refuses orders pointing at a missing product
#[tokio::test]
async fn test_order_foreign_key_enforced() -> Result<()> {
    let db = setup_test_db().await?;
    let err = order::create(&db, "Alice", 1, 4242).await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");
    assert_eq!(order::Entity::find().count(&db).await?, 0);
    Ok(())
}
