use sea_orm::*;
use uuid::Uuid;

use crate::models::creator_profiles::{self, UpsertCreatorProfile};

/// Fetch every creator profile (the marketplace directory).
pub async fn get_all_creator_profiles(
    db: &DatabaseConnection,
) -> Result<Vec<creator_profiles::Model>, DbErr> {
    creator_profiles::Entity::find()
        .order_by_desc(creator_profiles::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single creator profile by owner.
pub async fn get_creator_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<creator_profiles::Model>, DbErr> {
    creator_profiles::Entity::find_by_id(user_id).one(db).await
}

/// Insert or update the caller's creator profile.
pub async fn upsert_creator_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: UpsertCreatorProfile,
) -> Result<creator_profiles::Model, DbErr> {
    match creator_profiles::Entity::find_by_id(user_id).one(db).await? {
        Some(existing) => {
            let mut active: creator_profiles::ActiveModel = existing.into();
            active.creator_name = Set(input.creator_name);
            active.phone = Set(input.phone);
            active.headline = Set(input.headline);
            active.niches = Set(input.niches);
            active.portfolio_link = Set(input.portfolio_link);
            active.profile_image = Set(input.profile_image);
            active.thumbnail_url = Set(input.thumbnail_url);
            active.sample_video_url = Set(input.sample_video_url);
            active.sample_image_url = Set(input.sample_image_url);
            active.updated_at = Set(Some(chrono::Utc::now()));
            active.update(db).await
        }
        None => {
            let new_profile = creator_profiles::ActiveModel {
                user_id: Set(user_id),
                creator_name: Set(input.creator_name),
                phone: Set(input.phone),
                headline: Set(input.headline),
                niches: Set(input.niches),
                portfolio_link: Set(input.portfolio_link),
                profile_image: Set(input.profile_image),
                thumbnail_url: Set(input.thumbnail_url),
                sample_video_url: Set(input.sample_video_url),
                sample_image_url: Set(input.sample_image_url),
                created_at: Set(chrono::Utc::now()),
                updated_at: Set(None),
            };
            new_profile.insert(db).await
        }
    }
}
