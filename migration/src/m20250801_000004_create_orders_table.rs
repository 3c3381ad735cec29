use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `orders` table and its columns.
#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    StartupId,
    CreatorId,
    Status,
    ProjectTitle,
    ProjectBrief,
    ProductName,
    ProductType,
    ProductDescription,
    CompanyName,
    WebsiteLink,
    InstagramHandle,
    VideoType,
    DeadlineDays,
    Price,
    ProductMediaUrls,
    FinalVideoUrl,
    FinalDriveLink,
    DeliveryNote,
    RevisionNote,
    CreatedAt,
    UpdatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Orders::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Orders::StartupId).uuid().not_null())
                    .col(ColumnDef::new(Orders::CreatorId).uuid().not_null())
                    .col(ColumnDef::new(Orders::Status).string().not_null())
                    .col(ColumnDef::new(Orders::ProjectTitle).string().not_null())
                    .col(ColumnDef::new(Orders::ProjectBrief).text().not_null())
                    .col(ColumnDef::new(Orders::ProductName).string().not_null())
                    .col(ColumnDef::new(Orders::ProductType).string().not_null())
                    .col(ColumnDef::new(Orders::ProductDescription).text().null())
                    .col(ColumnDef::new(Orders::CompanyName).string().null())
                    .col(ColumnDef::new(Orders::WebsiteLink).string().null())
                    .col(ColumnDef::new(Orders::InstagramHandle).string().null())
                    .col(ColumnDef::new(Orders::VideoType).string().not_null())
                    .col(ColumnDef::new(Orders::DeadlineDays).integer().not_null())
                    .col(ColumnDef::new(Orders::Price).integer().not_null())
                    .col(
                        ColumnDef::new(Orders::ProductMediaUrls)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Orders::FinalVideoUrl).string().null())
                    .col(ColumnDef::new(Orders::FinalDriveLink).string().null())
                    .col(ColumnDef::new(Orders::DeliveryNote).text().null())
                    .col(ColumnDef::new(Orders::RevisionNote).text().null())
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Orders::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_startup_id")
                            .from(Orders::Table, Orders::StartupId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_creator_id")
                            .from(Orders::Table, Orders::CreatorId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}
