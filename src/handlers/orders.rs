use actix_multipart::form::{MultipartForm, bytes::Bytes, text::Text};
use actix_web::{HttpResponse, web};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization::{
    load_order_for_creator, load_order_for_party, load_order_for_startup, require_role,
};
use crate::auth::middleware::AuthenticatedProfile;
use crate::db::creator_profiles as creator_db;
use crate::db::orders as order_db;
use crate::error::ApiError;
use crate::metrics::{DashboardMetrics, creator_metrics, startup_metrics};
use crate::models::orders::{
    DeliveryChannel, LifecycleAction, NewOrder, OrderListQuery, ProductType, RequestRevision,
};
use crate::models::profiles::Role;
use crate::storage::{DELIVERY_BUCKET, PRODUCT_MEDIA_BUCKET, StorageClient, object_path};

/// Default deliverable label when the hire form leaves it blank.
const DEFAULT_VIDEO_TYPE: &str = "1 Reel (15-30 sec)";

// ── Multipart forms ──

/// Body of `POST /api/orders`. Text fields are all optional at the parsing
/// layer so missing ones surface as validation errors in a stable order
/// instead of generic multipart failures.
#[derive(Debug, MultipartForm)]
pub struct CreateOrderForm {
    pub creator_id: Option<Text<Uuid>>,
    pub project_title: Option<Text<String>>,
    pub project_brief: Option<Text<String>>,
    pub product_name: Option<Text<String>>,
    pub product_type: Option<Text<String>>,
    pub product_description: Option<Text<String>>,
    pub company_name: Option<Text<String>>,
    pub website_link: Option<Text<String>>,
    pub instagram_handle: Option<Text<String>>,
    pub video_type: Option<Text<String>>,
    pub deadline_days: Option<Text<i32>>,
    #[multipart(rename = "media")]
    pub media: Vec<Bytes>,
}

/// Body of `POST /api/orders/{id}/deliver`: a `video` file part or a
/// `drive_link` text part, never both, plus an optional note.
#[derive(Debug, MultipartForm)]
pub struct DeliverOrderForm {
    pub video: Option<Bytes>,
    pub drive_link: Option<Text<String>>,
    pub note: Option<Text<String>>,
}

fn required_text(field: Option<Text<String>>, label: &str) -> Result<String, ApiError> {
    field
        .map(|t| t.into_inner().trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation(format!("{label} is required")))
}

fn optional_text(field: Option<Text<String>>) -> Option<String> {
    field
        .map(|t| t.into_inner().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn content_type_of(file: &Bytes, fallback: &str) -> String {
    file.content_type
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

// ── Handlers ──

/// POST /api/orders — a startup hires a creator.
///
/// All product media uploads must succeed before the order row is written;
/// any upload failure aborts the whole operation with nothing persisted.
pub async fn create_order(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    storage: web::Data<StorageClient>,
    MultipartForm(form): MultipartForm<CreateOrderForm>,
) -> Result<HttpResponse, ApiError> {
    let startup = profile.0;
    require_role(&startup, Role::Startup)?;

    let creator_id = form
        .creator_id
        .map(|t| t.into_inner())
        .ok_or_else(|| ApiError::Validation("Creator id is required".to_string()))?;

    // Required brief fields, checked in the order the hire form checks them.
    let project_title = required_text(form.project_title, "Project title")?;
    let product_name = required_text(form.product_name, "Product / brand name")?;
    let product_type_raw = required_text(form.product_type, "Product type")?;
    let product_type = ProductType::parse(&product_type_raw).ok_or_else(|| {
        ApiError::Validation("Product type must be \"physical\" or \"online\"".to_string())
    })?;
    let project_brief = required_text(form.project_brief, "Brief / requirements")?;

    // Media is optional by default, required for physical products.
    if product_type == ProductType::Physical && form.media.is_empty() {
        return Err(ApiError::Validation(
            "Physical products need at least one product image or video".to_string(),
        ));
    }

    if creator_id == startup.id {
        return Err(ApiError::Validation(
            "You cannot place an order with yourself".to_string(),
        ));
    }

    creator_db::get_creator_profile(db.get_ref(), creator_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Creator {creator_id}")))?;

    // Upload every media file before touching the orders table.
    let mut media_urls = Vec::with_capacity(form.media.len());
    for file in &form.media {
        let path = object_path(startup.id, "product", file.file_name.as_deref());
        let content_type = content_type_of(file, "application/octet-stream");
        let url = storage
            .store(PRODUCT_MEDIA_BUCKET, &path, file.data.to_vec(), &content_type)
            .await
            .map_err(ApiError::Storage)?;
        media_urls.push(url);
    }

    let order = order_db::insert_order(
        db.get_ref(),
        NewOrder {
            startup_id: startup.id,
            creator_id,
            project_title,
            project_brief,
            product_name,
            product_type,
            product_description: optional_text(form.product_description),
            company_name: optional_text(form.company_name),
            website_link: optional_text(form.website_link),
            instagram_handle: optional_text(form.instagram_handle),
            video_type: optional_text(form.video_type)
                .unwrap_or_else(|| DEFAULT_VIDEO_TYPE.to_string()),
            deadline_days: form.deadline_days.map(|t| t.into_inner()).unwrap_or(3),
            product_media_urls: media_urls,
        },
    )
    .await?;

    Ok(HttpResponse::Created().json(order))
}

/// POST /api/orders/{id}/accept — the assigned creator takes the job.
pub async fn accept_order(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let creator = profile.0;
    require_role(&creator, Role::Creator)?;

    let order = load_order_for_creator(db.get_ref(), path.into_inner(), creator.id).await?;
    let next = order
        .status
        .apply(LifecycleAction::Accept)
        .ok_or_else(|| ApiError::invalid_transition(order.status, LifecycleAction::Accept))?;

    let updated = order_db::update_order_status(db.get_ref(), order, next).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// POST /api/orders/{id}/reject — the assigned creator declines the job.
pub async fn reject_order(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let creator = profile.0;
    require_role(&creator, Role::Creator)?;

    let order = load_order_for_creator(db.get_ref(), path.into_inner(), creator.id).await?;
    let next = order
        .status
        .apply(LifecycleAction::Reject)
        .ok_or_else(|| ApiError::invalid_transition(order.status, LifecycleAction::Reject))?;

    let updated = order_db::update_order_status(db.get_ref(), order, next).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// POST /api/orders/{id}/deliver — the creator hands over the final work,
/// either as an uploaded video or an external drive link.
///
/// The upload (when that channel is used) completes before the row update,
/// so a storage failure leaves the order untouched.
pub async fn deliver_order(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    storage: web::Data<StorageClient>,
    path: web::Path<Uuid>,
    MultipartForm(form): MultipartForm<DeliverOrderForm>,
) -> Result<HttpResponse, ApiError> {
    let creator = profile.0;
    require_role(&creator, Role::Creator)?;

    let order = load_order_for_creator(db.get_ref(), path.into_inner(), creator.id).await?;
    if order.status.apply(LifecycleAction::Deliver).is_none() {
        return Err(ApiError::invalid_transition(
            order.status,
            LifecycleAction::Deliver,
        ));
    }

    let drive_link = optional_text(form.drive_link);
    if form.video.is_some() && drive_link.is_some() {
        return Err(ApiError::Validation(
            "Provide either a video upload or a drive link, not both".to_string(),
        ));
    }

    let channel = if let Some(video) = &form.video {
        let path = object_path(creator.id, "delivery", video.file_name.as_deref());
        let content_type = content_type_of(video, "video/mp4");
        let url = storage
            .store(DELIVERY_BUCKET, &path, video.data.to_vec(), &content_type)
            .await
            .map_err(ApiError::Storage)?;
        DeliveryChannel::UploadedVideo(url)
    } else if let Some(link) = drive_link {
        if !link.starts_with("http") {
            return Err(ApiError::Validation(
                "Drive link must be a valid http(s) URL".to_string(),
            ));
        }
        DeliveryChannel::DriveLink(link)
    } else {
        return Err(ApiError::Validation(
            "Provide a video upload or a drive link".to_string(),
        ));
    };

    let updated =
        order_db::record_delivery(db.get_ref(), order, channel, optional_text(form.note)).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// POST /api/orders/{id}/request-revision — the startup sends the work back
/// with a note before it has been delivered in final form.
pub async fn request_revision(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<RequestRevision>,
) -> Result<HttpResponse, ApiError> {
    let startup = profile.0;
    require_role(&startup, Role::Startup)?;

    let order = load_order_for_startup(db.get_ref(), path.into_inner(), startup.id).await?;
    if order
        .status
        .apply(LifecycleAction::RequestRevision)
        .is_none()
    {
        return Err(ApiError::invalid_transition(
            order.status,
            LifecycleAction::RequestRevision,
        ));
    }

    let updated =
        order_db::record_revision_request(db.get_ref(), order, body.into_inner().note).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// POST /api/orders/{id}/complete — the startup accepts the delivery,
/// closing the order.
pub async fn complete_order(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let startup = profile.0;
    require_role(&startup, Role::Startup)?;

    let order = load_order_for_startup(db.get_ref(), path.into_inner(), startup.id).await?;
    let next = order
        .status
        .apply(LifecycleAction::Complete)
        .ok_or_else(|| ApiError::invalid_transition(order.status, LifecycleAction::Complete))?;

    let updated = order_db::update_order_status(db.get_ref(), order, next).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// GET /api/orders — the caller's orders, newest first, optionally filtered
/// by a case-insensitive substring over title/company/product.
pub async fn list_orders(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    query: web::Query<OrderListQuery>,
) -> Result<HttpResponse, ApiError> {
    let actor = profile.0;

    let orders = match actor.role {
        Some(Role::Startup) => order_db::get_orders_by_startup(db.get_ref(), actor.id).await?,
        Some(Role::Creator) => order_db::get_orders_by_creator(db.get_ref(), actor.id).await?,
        None => {
            return Err(ApiError::Forbidden(
                "Choose a marketplace role before listing orders".to_string(),
            ));
        }
    };

    let search = query.into_inner().search.unwrap_or_default();
    let filtered: Vec<_> = orders
        .into_iter()
        .filter(|o| o.matches_search(&search))
        .collect();

    Ok(HttpResponse::Ok().json(filtered))
}

/// GET /api/orders/{id} — either party of the order.
pub async fn get_order(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let order = load_order_for_party(db.get_ref(), path.into_inner(), profile.0.id).await?;
    Ok(HttpResponse::Ok().json(order))
}

/// GET /api/orders/metrics — dashboard numbers for the caller's role.
pub async fn get_metrics(
    profile: AuthenticatedProfile,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let actor = profile.0;

    let metrics = match actor.role {
        Some(Role::Startup) => {
            let orders = order_db::get_orders_by_startup(db.get_ref(), actor.id).await?;
            DashboardMetrics::Startup(startup_metrics(&orders))
        }
        Some(Role::Creator) => {
            let orders = order_db::get_orders_by_creator(db.get_ref(), actor.id).await?;
            DashboardMetrics::Creator(creator_metrics(&orders, Utc::now()))
        }
        None => {
            return Err(ApiError::Forbidden(
                "Choose a marketplace role before reading metrics".to_string(),
            ));
        }
    };

    Ok(HttpResponse::Ok().json(metrics))
}
