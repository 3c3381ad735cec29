use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Orders {
    Table,
    StartupId,
    CreatorId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on orders.startup_id for the startup's order list
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_startup_id")
                    .table(Orders::Table)
                    .col(Orders::StartupId)
                    .to_owned(),
            )
            .await?;

        // Index on orders.creator_id for the creator's order list
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_creator_id")
                    .table(Orders::Table)
                    .col(Orders::CreatorId)
                    .to_owned(),
            )
            .await?;

        // Both lists are served newest-first
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_created_at")
                    .table(Orders::Table)
                    .col(Orders::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_orders_created_at").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_orders_creator_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_orders_startup_id").to_owned())
            .await
    }
}
