use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Festival {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub date_from: NaiveDate,
    pub date_until: NaiveDate,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub poster: Option<String>,
    pub description: String,
    pub slogan: Option<String>,
    #[sqlx(json)]
    pub languages: Vec<String>,
    pub accommodation_offered: bool,
    pub mixer_shows: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sparse update payload. `null` and absent both deserialize to `None`
/// and leave the stored value untouched; `id`, `user_id` and the audit
/// timestamps are not patchable.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct FestivalPatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_until: Option<NaiveDate>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub poster: Option<String>,
    pub description: Option<String>,
    pub slogan: Option<String>,
    pub languages: Option<Vec<String>>,
    pub accommodation_offered: Option<bool>,
    pub mixer_shows: Option<bool>,
}
