use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order status stored as a lowercase string in the database.
///
/// The full lifecycle:
///
/// ```text
/// pending ──> in_progress ──> delivered ──> completed
///    │             │              ▲
///    │             └──> revision_requested
///    └──> rejected
/// ```
///
/// `rejected` and `completed` are terminal. Every mutation endpoint checks
/// the edge it wants to take through [`Status::apply`] before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "delivered")]
    Delivered,
    #[sea_orm(string_value = "revision_requested")]
    RevisionRequested,
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// The actions the two parties can take on an order.
///
/// Accept, Reject and Deliver belong to the creator; RequestRevision and
/// Complete belong to the startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Accept,
    Reject,
    Deliver,
    RequestRevision,
    Complete,
}

impl Status {
    /// The status an order moves to when `action` is taken from `self`,
    /// or `None` when the edge does not exist in the lifecycle.
    pub fn apply(self, action: LifecycleAction) -> Option<Status> {
        use LifecycleAction::*;
        use Status::*;

        match (self, action) {
            (Pending, Accept) => Some(InProgress),
            (Pending, Reject) => Some(Rejected),
            (InProgress, Deliver) => Some(Delivered),
            (InProgress, RequestRevision) => Some(RevisionRequested),
            (RevisionRequested, Deliver) => Some(Delivered),
            (Delivered, Complete) => Some(Completed),
            _ => None,
        }
    }

    /// Terminal statuses never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Rejected | Status::Completed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Rejected => "rejected",
            Status::Delivered => "delivered",
            Status::RevisionRequested => "revision_requested",
            Status::Completed => "completed",
        }
    }
}

impl LifecycleAction {
    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleAction::Accept => "accept",
            LifecycleAction::Reject => "reject",
            LifecycleAction::Deliver => "deliver",
            LifecycleAction::RequestRevision => "request a revision on",
            LifecycleAction::Complete => "complete",
        }
    }
}

/// Product category on the order brief. Physical products must ship at least
/// one media file so the creator has something to film against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ProductType {
    #[sea_orm(string_value = "physical")]
    Physical,
    #[sea_orm(string_value = "online")]
    Online,
}

impl ProductType {
    /// Parse the lowercase form used on the wire.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "physical" => Some(ProductType::Physical),
            "online" => Some(ProductType::Online),
            _ => None,
        }
    }
}

/// Price in whole currency units, derived from the requested turnaround.
/// Unknown turnarounds fall back to the 3-day rate.
pub fn price_for_deadline(deadline_days: i32) -> i32 {
    match deadline_days {
        1 => 2000,
        3 => 1500,
        4 => 1000,
        _ => 1500,
    }
}

/// SeaORM entity for the `orders` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub startup_id: Uuid,
    pub creator_id: Uuid,
    pub status: Status,

    pub project_title: String,
    #[sea_orm(column_type = "Text")]
    pub project_brief: String,
    pub product_name: String,
    pub product_type: ProductType,
    #[sea_orm(column_type = "Text", nullable)]
    pub product_description: Option<String>,
    pub company_name: Option<String>,
    pub website_link: Option<String>,
    pub instagram_handle: Option<String>,
    pub video_type: String,

    pub deadline_days: i32,
    pub price: i32,
    pub product_media_urls: Vec<String>,

    pub final_video_url: Option<String>,
    pub final_drive_link: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub delivery_note: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub revision_note: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::StartupId",
        to = "super::profiles::Column::Id"
    )]
    Startup,
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::CreatorId",
        to = "super::profiles::Column::Id"
    )]
    Creator,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Case-insensitive substring match over the searchable brief fields.
    /// A blank query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }

        self.project_title.to_lowercase().contains(&q)
            || self
                .company_name
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&q))
            || self.product_name.to_lowercase().contains(&q)
    }
}

// ── DTOs ──

/// Fully validated input for inserting an order row. Built by the create
/// handler after media uploads have succeeded.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub startup_id: Uuid,
    pub creator_id: Uuid,
    pub project_title: String,
    pub project_brief: String,
    pub product_name: String,
    pub product_type: ProductType,
    pub product_description: Option<String>,
    pub company_name: Option<String>,
    pub website_link: Option<String>,
    pub instagram_handle: Option<String>,
    pub video_type: String,
    pub deadline_days: i32,
    pub product_media_urls: Vec<String>,
}

/// The mutually exclusive channels a creator can deliver through.
#[derive(Debug, Clone)]
pub enum DeliveryChannel {
    /// Public URL of an uploaded video asset.
    UploadedVideo(String),
    /// External link pasted by the creator.
    DriveLink(String),
}

/// Request body for `POST /api/orders/{id}/request-revision`.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestRevision {
    pub note: Option<String>,
}

/// Query params for order listing.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderListQuery {
    pub search: Option<String>,
}
