use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::authorization::require_role;
use crate::auth::middleware::AuthenticatedProfile;
use crate::db::startup_profiles as startup_db;
use crate::error::ApiError;
use crate::models::profiles::Role;
use crate::models::startup_profiles::UpsertStartupProfile;

/// GET /api/startups/me — the caller's company profile.
pub async fn my_profile(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let caller = profile.0;

    let company = startup_db::get_startup_profile(db.get_ref(), caller.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Startup profile".to_string()))?;

    Ok(HttpResponse::Ok().json(company))
}

/// PUT /api/startups/me — create or update the caller's company profile.
pub async fn upsert_my_profile(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpsertStartupProfile>,
) -> Result<HttpResponse, ApiError> {
    let caller = profile.0;
    require_role(&caller, Role::Startup)?;

    let input = body.into_inner();
    if input.company_name.trim().is_empty() {
        return Err(ApiError::Validation("Company name is required".to_string()));
    }
    if input.phone.trim().is_empty() {
        return Err(ApiError::Validation("Phone number is required".to_string()));
    }

    let saved = startup_db::upsert_startup_profile(db.get_ref(), caller.id, input).await?;
    Ok(HttpResponse::Ok().json(saved))
}
