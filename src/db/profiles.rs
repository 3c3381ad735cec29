use sea_orm::*;
use uuid::Uuid;

use crate::models::profiles::{self, CreateProfileFromAuth, Role};

/// Find a profile by Supabase auth UUID, creating it from JWT claims on
/// first sight (called by the auth middleware). New rows start with no role.
pub async fn find_or_create_from_auth(
    db: &DatabaseConnection,
    input: CreateProfileFromAuth,
) -> Result<profiles::Model, DbErr> {
    if let Some(existing) = profiles::Entity::find_by_id(input.id).one(db).await? {
        return Ok(existing);
    }

    let new_profile = profiles::ActiveModel {
        id: Set(input.id),
        email: Set(input.email),
        full_name: Set(input.full_name),
        phone: Set(None),
        role: Set(None),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_profile.insert(db).await
}

/// Fetch a single profile by ID.
pub async fn get_profile_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<profiles::Model>, DbErr> {
    profiles::Entity::find_by_id(id).one(db).await
}

/// Record the once-only role choice. The caller is responsible for rejecting
/// accounts whose role is already set.
pub async fn set_role(
    db: &DatabaseConnection,
    id: Uuid,
    role: Role,
) -> Result<profiles::Model, DbErr> {
    let profile = profiles::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Profile not found".to_string()))?;

    let mut active: profiles::ActiveModel = profile.into();
    active.role = Set(Some(role));
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}
