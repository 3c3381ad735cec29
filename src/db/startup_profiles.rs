use sea_orm::*;
use uuid::Uuid;

use crate::models::startup_profiles::{self, UpsertStartupProfile};

/// Fetch a single startup profile by owner.
pub async fn get_startup_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<startup_profiles::Model>, DbErr> {
    startup_profiles::Entity::find_by_id(user_id).one(db).await
}

/// Insert or update the caller's startup profile.
pub async fn upsert_startup_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: UpsertStartupProfile,
) -> Result<startup_profiles::Model, DbErr> {
    match startup_profiles::Entity::find_by_id(user_id).one(db).await? {
        Some(existing) => {
            let mut active: startup_profiles::ActiveModel = existing.into();
            active.company_name = Set(input.company_name);
            active.phone = Set(input.phone);
            active.website = Set(input.website);
            active.description = Set(input.description);
            active.updated_at = Set(Some(chrono::Utc::now()));
            active.update(db).await
        }
        None => {
            let new_profile = startup_profiles::ActiveModel {
                user_id: Set(user_id),
                company_name: Set(input.company_name),
                phone: Set(input.phone),
                website: Set(input.website),
                description: Set(input.description),
                created_at: Set(chrono::Utc::now()),
                updated_at: Set(None),
            };
            new_profile.insert(db).await
        }
    }
}
