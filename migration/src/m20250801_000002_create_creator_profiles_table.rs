use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `creator_profiles` table and its columns.
#[derive(DeriveIden)]
enum CreatorProfiles {
    Table,
    UserId,
    CreatorName,
    Phone,
    Headline,
    Niches,
    PortfolioLink,
    ProfileImage,
    ThumbnailUrl,
    SampleVideoUrl,
    SampleImageUrl,
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
                    .table(CreatorProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreatorProfiles::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CreatorProfiles::CreatorName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CreatorProfiles::Phone).string().not_null())
                    .col(ColumnDef::new(CreatorProfiles::Headline).string().null())
                    .col(ColumnDef::new(CreatorProfiles::Niches).string().null())
                    .col(
                        ColumnDef::new(CreatorProfiles::PortfolioLink)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(CreatorProfiles::ProfileImage).string().null())
                    .col(ColumnDef::new(CreatorProfiles::ThumbnailUrl).string().null())
                    .col(
                        ColumnDef::new(CreatorProfiles::SampleVideoUrl)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CreatorProfiles::SampleImageUrl)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CreatorProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CreatorProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_creator_profiles_user_id")
                            .from(CreatorProfiles::Table, CreatorProfiles::UserId)
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
            .drop_table(Table::drop().table(CreatorProfiles::Table).to_owned())
            .await
    }
}
