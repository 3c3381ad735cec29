use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::auth::jwks::JwksCache;
use crate::auth::jwt;
use crate::db::profiles::find_or_create_from_auth;
use crate::error::ApiError;
use crate::models::profiles::{self, CreateProfileFromAuth};

/// The authenticated actor for a request, resolved to its `profiles` row.
///
/// Every protected handler takes this extractor as an argument; there is no
/// ambient identity state anywhere in the process.
pub struct AuthenticatedProfile(pub profiles::Model);

impl FromRequest for AuthenticatedProfile {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or(ApiError::NotAuthenticated)?;

            let token = auth_header
                .strip_prefix("Bearer ")
                .ok_or(ApiError::NotAuthenticated)?;

            // 2. Validate the JWT against the cached JWKS.
            let jwks_cache = req.app_data::<web::Data<Arc<JwksCache>>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("JWKS cache not configured")
            })?;

            let claims = jwt::validate_token(token, jwks_cache.get_ref())
                .await
                .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

            // 3. Extract identity from claims.
            let user_id = claims
                .user_id()
                .map_err(actix_web::error::ErrorUnauthorized)?;

            let email = claims
                .user_email()
                .ok_or_else(|| actix_web::error::ErrorUnauthorized("No email in token claims"))?;

            // 4. Resolve to a profile row, creating it on first sight.
            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("Database not configured")
                })?;

            let profile = find_or_create_from_auth(
                db.get_ref(),
                CreateProfileFromAuth {
                    id: user_id,
                    email,
                    full_name: claims.full_name(),
                },
            )
            .await
            .map_err(|e| {
                actix_web::error::ErrorInternalServerError(format!("Database error: {e}"))
            })?;

            Ok(AuthenticatedProfile(profile))
        })
    }
}
