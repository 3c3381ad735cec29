use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `startup_profiles` table and its columns.
#[derive(DeriveIden)]
enum StartupProfiles {
    Table,
    UserId,
    CompanyName,
    Phone,
    Website,
    Description,
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
                    .table(StartupProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StartupProfiles::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StartupProfiles::CompanyName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StartupProfiles::Phone).string().not_null())
                    .col(ColumnDef::new(StartupProfiles::Website).string().null())
                    .col(ColumnDef::new(StartupProfiles::Description).text().null())
                    .col(
                        ColumnDef::new(StartupProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StartupProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_startup_profiles_user_id")
                            .from(StartupProfiles::Table, StartupProfiles::UserId)
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
            .drop_table(Table::drop().table(StartupProfiles::Table).to_owned())
            .await
    }
}
