use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Show {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub show_starts: DateTime<Utc>,
    pub doors_open: Option<DateTime<Utc>>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub poster: Option<String>,
    pub description: String,
    pub slogan: Option<String>,
    pub email: Option<String>,
    #[sqlx(json)]
    pub groups: Vec<String>,
    pub tickets_link: Option<String>,
    pub location_name: Option<String>,
    pub location_link: Option<String>,
    pub ticket_price: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sparse update payload, same rules as `FestivalPatch`.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ShowPatch {
    pub name: Option<String>,
    pub show_starts: Option<DateTime<Utc>>,
    pub doors_open: Option<DateTime<Utc>>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub poster: Option<String>,
    pub description: Option<String>,
    pub slogan: Option<String>,
    pub email: Option<String>,
    pub groups: Option<Vec<String>>,
    pub tickets_link: Option<String>,
    pub location_name: Option<String>,
    pub location_link: Option<String>,
    pub ticket_price: Option<String>,
}
