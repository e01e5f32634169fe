use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateFestivalRequest {
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
    #[serde(default)]
    pub languages: Vec<String>,
    pub accommodation_offered: Option<bool>,
    pub mixer_shows: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateShowRequest {
    pub name: String,
    pub show_starts: DateTime<Utc>,
    pub doors_open: Option<DateTime<Utc>>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub poster: Option<String>,
    pub description: String,
    pub slogan: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    pub tickets_link: Option<String>,
    pub location_name: Option<String>,
    pub location_link: Option<String>,
    pub ticket_price: Option<String>,
}
