use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::models::orders::{LifecycleAction, Status};

/// Application-level error type returned by every endpoint on failure.
///
/// Errors are terminal for the triggering operation: nothing is retried and
/// no partial order state is left behind (status-changing writes only happen
/// after all dependent uploads succeed).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input. Surfaced verbatim.
    #[error("{0}")]
    Validation(String),

    /// The order is not in a status that allows the attempted action.
    #[error("Order is {status}, cannot {action} it")]
    InvalidTransition {
        status: &'static str,
        action: &'static str,
    },

    #[error("{0} not found")]
    NotFound(String),

    /// No identity bound to the calling context.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The caller is authenticated but is not the party this operation
    /// belongs to.
    #[error("{0}")]
    Forbidden(String),

    /// The account already picked a marketplace role.
    #[error("Role is already set and cannot be changed")]
    RoleConflict,

    /// Blob storage collaborator failure. Retryable by the user.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl ApiError {
    /// Shorthand for the state-machine precondition failure.
    pub fn invalid_transition(status: Status, action: LifecycleAction) -> Self {
        ApiError::InvalidTransition {
            status: status.as_str(),
            action: action.as_str(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidTransition { .. } => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::RoleConflict => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::BAD_GATEWAY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self, ApiError::Database(_) | ApiError::Storage(_)) {
            tracing::error!("{self}");
        }
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}
