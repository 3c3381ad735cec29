use sea_orm::*;
use uuid::Uuid;

use crate::models::orders::{self, DeliveryChannel, NewOrder, Status, price_for_deadline};

/// Insert a new order. Price is derived from the deadline here so no caller
/// can write its own figure; status always starts at Pending.
pub async fn insert_order(
    db: &DatabaseConnection,
    input: NewOrder,
) -> Result<orders::Model, DbErr> {
    let now = chrono::Utc::now();

    let new_order = orders::ActiveModel {
        id: Set(Uuid::new_v4()),
        startup_id: Set(input.startup_id),
        creator_id: Set(input.creator_id),
        status: Set(Status::Pending),
        project_title: Set(input.project_title),
        project_brief: Set(input.project_brief),
        product_name: Set(input.product_name),
        product_type: Set(input.product_type),
        product_description: Set(input.product_description),
        company_name: Set(input.company_name),
        website_link: Set(input.website_link),
        instagram_handle: Set(input.instagram_handle),
        video_type: Set(input.video_type),
        deadline_days: Set(input.deadline_days),
        price: Set(price_for_deadline(input.deadline_days)),
        product_media_urls: Set(input.product_media_urls),
        final_video_url: Set(None),
        final_drive_link: Set(None),
        delivery_note: Set(None),
        revision_note: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    new_order.insert(db).await
}

/// Fetch a single order by ID.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<orders::Model>, DbErr> {
    orders::Entity::find_by_id(id).one(db).await
}

/// Orders placed by a startup, newest first.
pub async fn get_orders_by_startup(
    db: &DatabaseConnection,
    startup_id: Uuid,
) -> Result<Vec<orders::Model>, DbErr> {
    orders::Entity::find()
        .filter(orders::Column::StartupId.eq(startup_id))
        .order_by_desc(orders::Column::CreatedAt)
        // Stable tiebreak so repeated reads return an identical sequence.
        .order_by_asc(orders::Column::Id)
        .all(db)
        .await
}

/// Orders assigned to a creator, newest first.
pub async fn get_orders_by_creator(
    db: &DatabaseConnection,
    creator_id: Uuid,
) -> Result<Vec<orders::Model>, DbErr> {
    orders::Entity::find()
        .filter(orders::Column::CreatorId.eq(creator_id))
        .order_by_desc(orders::Column::CreatedAt)
        .order_by_asc(orders::Column::Id)
        .all(db)
        .await
}

/// Move an order to `next` and stamp `updated_at`. Callers must have checked
/// the transition through `Status::apply` first.
pub async fn update_order_status(
    db: &DatabaseConnection,
    order: orders::Model,
    next: Status,
) -> Result<orders::Model, DbErr> {
    let mut active: orders::ActiveModel = order.into();
    active.status = Set(next);
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await
}

/// Record a delivery: set the chosen channel, clear the other, store the
/// note, and move to Delivered. One of the two channel fields is always
/// null after this write.
pub async fn record_delivery(
    db: &DatabaseConnection,
    order: orders::Model,
    channel: DeliveryChannel,
    note: Option<String>,
) -> Result<orders::Model, DbErr> {
    let mut active: orders::ActiveModel = order.into();

    match channel {
        DeliveryChannel::UploadedVideo(url) => {
            active.final_video_url = Set(Some(url));
            active.final_drive_link = Set(None);
        }
        DeliveryChannel::DriveLink(link) => {
            active.final_drive_link = Set(Some(link));
            active.final_video_url = Set(None);
        }
    }

    active.delivery_note = Set(note);
    active.status = Set(Status::Delivered);
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await
}

/// Record a revision request from the startup and move to RevisionRequested.
pub async fn record_revision_request(
    db: &DatabaseConnection,
    order: orders::Model,
    note: Option<String>,
) -> Result<orders::Model, DbErr> {
    let mut active: orders::ActiveModel = order.into();
    active.revision_note = Set(note);
    active.status = Set(Status::RevisionRequested);
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await
}
