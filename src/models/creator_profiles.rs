use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `creator_profiles` table.
///
/// Public-facing creator card plus the private contact phone. Media fields
/// hold URLs; the backend never gates profile writes on uploads.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "creator_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub creator_name: String,
    pub phone: String,
    pub headline: Option<String>,
    pub niches: Option<String>,
    pub portfolio_link: Option<String>,
    pub profile_image: Option<String>,
    pub thumbnail_url: Option<String>,
    pub sample_video_url: Option<String>,
    pub sample_image_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::UserId",
        to = "super::profiles::Column::Id"
    )]
    Profile,
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for `PUT /api/creators/me` (insert-or-update).
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertCreatorProfile {
    pub creator_name: String,
    pub phone: String,
    pub headline: Option<String>,
    pub niches: Option<String>,
    pub portfolio_link: Option<String>,
    pub profile_image: Option<String>,
    pub thumbnail_url: Option<String>,
    pub sample_video_url: Option<String>,
    pub sample_image_url: Option<String>,
}

/// Public card shown in the marketplace directory. Never leaks the phone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorCard {
    pub user_id: Uuid,
    pub creator_name: String,
    pub headline: Option<String>,
    pub niches: Option<String>,
    pub portfolio_link: Option<String>,
    pub profile_image: Option<String>,
    pub thumbnail_url: Option<String>,
    pub sample_video_url: Option<String>,
    pub sample_image_url: Option<String>,
}

impl From<Model> for CreatorCard {
    fn from(m: Model) -> Self {
        Self {
            user_id: m.user_id,
            creator_name: m.creator_name,
            headline: m.headline,
            niches: m.niches,
            portfolio_link: m.portfolio_link,
            profile_image: m.profile_image,
            thumbnail_url: m.thumbnail_url,
            sample_video_url: m.sample_video_url,
            sample_image_url: m.sample_image_url,
        }
    }
}

impl CreatorCard {
    /// Case-insensitive substring match over name and niches; a blank query
    /// matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }

        self.creator_name.to_lowercase().contains(&q)
            || self
                .niches
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&q))
    }
}
