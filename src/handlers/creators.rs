use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::authorization::require_role;
use crate::auth::middleware::AuthenticatedProfile;
use crate::cache::{RedisCache, keys};
use crate::db::creator_profiles as creator_db;
use crate::error::ApiError;
use crate::models::creator_profiles::{CreatorCard, UpsertCreatorProfile};
use crate::models::profiles::Role;

/// Query params for the creator directory.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatorListQuery {
    pub search: Option<String>,
}

/// GET /api/creators — the marketplace directory, optionally filtered by a
/// case-insensitive substring over name and niches. Results are cached per
/// normalized query for five minutes.
pub async fn list_creators(
    _profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    query: web::Query<CreatorListQuery>,
) -> Result<HttpResponse, ApiError> {
    let search = query
        .into_inner()
        .search
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    let cache_key = keys::creator_list(&search);

    match cache.get::<Vec<CreatorCard>>(&cache_key).await {
        Ok(Some(cached)) => return Ok(HttpResponse::Ok().json(cached)),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {e}"),
    }

    let cards: Vec<CreatorCard> = creator_db::get_all_creator_profiles(db.get_ref())
        .await?
        .into_iter()
        .map(CreatorCard::from)
        .filter(|c| c.matches_search(&search))
        .collect();

    let _ = cache.set(&cache_key, &cards, Some(300)).await;

    Ok(HttpResponse::Ok().json(cards))
}

/// GET /api/creators/{user_id} — a single creator card.
pub async fn get_creator(
    _profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let cache_key = keys::creator(&user_id.to_string());

    match cache.get::<CreatorCard>(&cache_key).await {
        Ok(Some(cached)) => return Ok(HttpResponse::Ok().json(cached)),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {e}"),
    }

    let card: CreatorCard = creator_db::get_creator_profile(db.get_ref(), user_id)
        .await?
        .map(CreatorCard::from)
        .ok_or_else(|| ApiError::NotFound(format!("Creator {user_id}")))?;

    let _ = cache.set(&cache_key, &card, Some(900)).await;

    Ok(HttpResponse::Ok().json(card))
}

/// PUT /api/creators/me — create or update the caller's creator profile.
/// Invalidates the directory cache so new cards show up immediately.
pub async fn upsert_my_profile(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    body: web::Json<UpsertCreatorProfile>,
) -> Result<HttpResponse, ApiError> {
    let caller = profile.0;
    require_role(&caller, Role::Creator)?;

    let input = body.into_inner();
    if input.creator_name.trim().is_empty() {
        return Err(ApiError::Validation("Creator name is required".to_string()));
    }
    if input.phone.trim().is_empty() {
        return Err(ApiError::Validation("Phone number is required".to_string()));
    }

    let saved = creator_db::upsert_creator_profile(db.get_ref(), caller.id, input).await?;

    let _ = cache.delete(&keys::creator(&caller.id.to_string())).await;
    let _ = cache.delete_pattern(keys::creator_list_pattern()).await;

    Ok(HttpResponse::Ok().json(saved))
}
