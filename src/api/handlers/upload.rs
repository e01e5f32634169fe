use axum::{extract::{Multipart, State}, response::IntoResponse, Json};
use crate::api::dtos::responses::UploadResponse;
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub const MAX_UPLOAD_BYTES: usize = 3 * 1024 * 1024;

const DEFAULT_DIRECTORY: &str = "show-posters";

pub async fn upload_poster(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut directory = DEFAULT_DIRECTORY.to_string();

    while let Some(field) = multipart.next_field().await
        .map_err(|_| AppError::Validation("Malformed multipart body".into()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                let bytes = field.bytes().await
                    .map_err(|_| AppError::Validation("Could not read uploaded file".into()))?;
                file = Some((file_name, content_type, bytes.to_vec()));
            }
            "directory" => {
                directory = field.text().await
                    .map_err(|_| AppError::Validation("Could not read directory field".into()))?;
            }
            _ => {}
        }
    }

    let (file_name, content_type, bytes) = file
        .ok_or_else(|| AppError::Validation("No file provided".into()))?;

    if !content_type.starts_with("image/") {
        return Err(AppError::Validation("File must be an image".into()));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation("Image exceeds the 3 MB limit".into()));
    }

    info!("Uploading poster {} ({} bytes) for user: {}", file_name, bytes.len(), user.id);

    let url = state.image_service.ingest(&file_name, &content_type, bytes, &directory).await?;

    Ok(Json(UploadResponse { url }))
}
