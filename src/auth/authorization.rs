use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::orders as order_db;
use crate::error::ApiError;
use crate::models::orders;
use crate::models::profiles::{self, Role};

/// Require that the caller has picked the given marketplace role.
pub fn require_role(profile: &profiles::Model, role: Role) -> Result<(), ApiError> {
    match profile.role {
        Some(r) if r == role => Ok(()),
        Some(_) => Err(ApiError::Forbidden(format!(
            "This operation is only available to {} accounts",
            role.as_str()
        ))),
        None => Err(ApiError::Forbidden(
            "Choose a marketplace role before using this operation".to_string(),
        )),
    }
}

/// Load an order and verify the caller is the assigned creator.
pub async fn load_order_for_creator(
    db: &DatabaseConnection,
    order_id: Uuid,
    creator_id: Uuid,
) -> Result<orders::Model, ApiError> {
    let order = order_db::get_order_by_id(db, order_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {order_id}")))?;

    if order.creator_id != creator_id {
        return Err(ApiError::Forbidden(
            "Only the assigned creator can act on this order".to_string(),
        ));
    }

    Ok(order)
}

/// Load an order and verify the caller is the startup that placed it.
pub async fn load_order_for_startup(
    db: &DatabaseConnection,
    order_id: Uuid,
    startup_id: Uuid,
) -> Result<orders::Model, ApiError> {
    let order = order_db::get_order_by_id(db, order_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {order_id}")))?;

    if order.startup_id != startup_id {
        return Err(ApiError::Forbidden(
            "Only the startup that placed this order can act on it".to_string(),
        ));
    }

    Ok(order)
}

/// Load an order and verify the caller is one of its two parties.
pub async fn load_order_for_party(
    db: &DatabaseConnection,
    order_id: Uuid,
    actor_id: Uuid,
) -> Result<orders::Model, ApiError> {
    let order = order_db::get_order_by_id(db, order_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {order_id}")))?;

    if order.startup_id != actor_id && order.creator_id != actor_id {
        return Err(ApiError::Forbidden(
            "You are not a party to this order".to_string(),
        ));
    }

    Ok(order)
}
