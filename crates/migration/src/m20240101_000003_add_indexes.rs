use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Orders: lookups by customer
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_customer_name")
                    .table(Orders::Table)
                    .col(Orders::CustomerName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Orders: join/filter by product
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_product")
                    .table(Orders::Table)
                    .col(Orders::ProductId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_orders_customer_name").table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orders_product").table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Orders { Table, CustomerName, ProductId }
