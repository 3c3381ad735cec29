use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Marketplace role, stored as a lowercase string. Chosen exactly once after
/// the first login; everything an account can do hangs off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Role {
    #[sea_orm(string_value = "startup")]
    Startup,
    #[sea_orm(string_value = "creator")]
    Creator,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Startup => "startup",
            Role::Creator => "creator",
        }
    }
}

/// SeaORM entity for the `profiles` table.
///
/// One row per Supabase auth identity (`id` equals the auth user UUID).
/// `role` is null until the account picks a side of the marketplace.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::creator_profiles::Entity")]
    CreatorProfile,
    #[sea_orm(has_one = "super::startup_profiles::Entity")]
    StartupProfile,
}

impl Related<super::creator_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatorProfile.def()
    }
}

impl Related<super::startup_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StartupProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Used internally by the auth middleware to create a profile row from JWT
/// claims the first time an identity is seen.
#[derive(Debug, Clone)]
pub struct CreateProfileFromAuth {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
}

/// Request body for `POST /api/auth/choose-role`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChooseRole {
    pub role: Role,
}

/// A profile representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl From<Model> for ProfileResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            full_name: m.full_name,
            phone: m.phone,
            role: m.role,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
