use actix_web::{HttpRequest, HttpResponse, web};
use actix_ws::Message;
use futures_util::StreamExt;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::auth::jwks::JwksCache;
use crate::auth::jwt;
use crate::db::orders as order_db;
use crate::db::profiles as profile_db;
use crate::models::orders::{self, Status};
use crate::models::profiles::Role;

/// How often the feed re-reads the caller's order list.
///
/// The feed is a read-refresh, not a change subscription: it only promises
/// to eventually reflect the latest persisted rows. Closing the socket
/// cancels the loop; there is nothing else to clean up.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(3);

/// Query params for the WebSocket handshake endpoint.
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    pub token: String,
}

/// Messages the feed pushes to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedMessage {
    /// The caller's full order list, newest first. Sent on connect and then
    /// whenever the list changes.
    Orders { orders: Vec<orders::Model> },
}

/// GET /api/orders/ws?token=<jwt>
///
/// Upgrades the HTTP connection to a WebSocket. Authenticates via query
/// param token (browsers can't send Authorization headers during the
/// WebSocket handshake). The caller must have chosen a role; it decides
/// which side of the order table the feed watches.
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    query: web::Query<WsQuery>,
    db: web::Data<DatabaseConnection>,
    jwks_cache: web::Data<Arc<JwksCache>>,
) -> Result<HttpResponse, actix_web::Error> {
    let claims = jwt::validate_token(&query.token, jwks_cache.get_ref())
        .await
        .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

    let user_id = claims
        .user_id()
        .map_err(actix_web::error::ErrorUnauthorized)?;

    let profile = profile_db::get_profile_by_id(db.get_ref(), user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Database error: {e}")))?
        .ok_or_else(|| actix_web::error::ErrorForbidden("No profile for this identity"))?;

    let role = profile.role.ok_or_else(|| {
        actix_web::error::ErrorForbidden("Choose a marketplace role before subscribing")
    })?;

    let (response, session, msg_stream) = actix_ws::handle(&req, stream)?;

    let db_clone = db.get_ref().clone();
    actix_web::rt::spawn(run_feed(session, msg_stream, db_clone, user_id, role));

    Ok(response)
}

/// Drives one feed session: polls the order table on a fixed interval and
/// pushes the list when it differs from the last push.
async fn run_feed(
    mut session: actix_ws::Session,
    mut msg_stream: actix_ws::MessageStream,
    db: DatabaseConnection,
    actor_id: Uuid,
    role: Role,
) {
    let mut interval = tokio::time::interval(REFRESH_INTERVAL);
    let mut last_seen: Option<Vec<(Uuid, Status, chrono::DateTime<chrono::Utc>)>> = None;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let result = match role {
                    Role::Startup => order_db::get_orders_by_startup(&db, actor_id).await,
                    Role::Creator => order_db::get_orders_by_creator(&db, actor_id).await,
                };

                let orders = match result {
                    Ok(orders) => orders,
                    Err(e) => {
                        tracing::warn!("Order feed query failed: {e}");
                        continue;
                    }
                };

                let fingerprint: Vec<_> = orders
                    .iter()
                    .map(|o| (o.id, o.status, o.updated_at))
                    .collect();
                if last_seen.as_ref() == Some(&fingerprint) {
                    continue;
                }

                let payload = match serde_json::to_string(&FeedMessage::Orders { orders }) {
                    Ok(json) => json,
                    Err(_) => continue,
                };
                if session.text(payload).await.is_err() {
                    break;
                }
                last_seen = Some(fingerprint);
            }
            // Client traffic: answer pings, exit on close or error. The feed
            // has no client-to-server protocol.
            Some(msg) = msg_stream.next() => {
                match msg {
                    Ok(Message::Ping(bytes)) => {
                        if session.pong(&bytes).await.is_err() {
                            break;
                        }
                    }
                    Ok(Message::Close(_)) | Err(_) => break,
                    _ => {}
                }
            }
            else => break,
        }
    }

    let _ = session.close(None).await;
}
