use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AuthenticatedProfile;
use crate::db::profiles as profile_db;
use crate::error::ApiError;
use crate::models::profiles::{ChooseRole, ProfileResponse};

/// GET /api/auth/me — the currently authenticated profile.
pub async fn me(profile: AuthenticatedProfile) -> impl Responder {
    HttpResponse::Ok().json(ProfileResponse::from(profile.0))
}

/// POST /api/auth/choose-role — pick a side of the marketplace, exactly once.
pub async fn choose_role(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    body: web::Json<ChooseRole>,
) -> Result<HttpResponse, ApiError> {
    if profile.0.role.is_some() {
        return Err(ApiError::RoleConflict);
    }

    let updated = profile_db::set_role(db.get_ref(), profile.0.id, body.into_inner().role).await?;
    Ok(HttpResponse::Ok().json(ProfileResponse::from(updated)))
}
