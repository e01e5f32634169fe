use serde::Serialize;

use crate::domain::models::{festival::Festival, show::Show};

/// Detail view of a record plus the server-side edit decision, so the UI
/// can show or hide its edit controls without re-deriving ownership.
#[derive(Serialize)]
pub struct FestivalDetailResponse {
    #[serde(flatten)]
    pub festival: Festival,
    pub can_edit: bool,
}

#[derive(Serialize)]
pub struct ShowDetailResponse {
    #[serde(flatten)]
    pub show: Show,
    pub can_edit: bool,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
}
