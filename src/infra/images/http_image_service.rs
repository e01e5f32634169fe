use crate::domain::ports::ImageService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

// Posters wider than this get scaled down by the image service,
// preserving aspect ratio; smaller images pass through untouched.
const MAX_POSTER_WIDTH: u32 = 700;

pub struct HttpImageService {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpImageService {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[derive(Deserialize)]
struct IngestResponse {
    url: String,
}

#[async_trait]
impl ImageService for HttpImageService {
    async fn ingest(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        directory: &str
    ) -> Result<String, AppError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|_| AppError::Validation("File must be an image".into()))?;

        let form = Form::new()
            .part("file", part)
            .text("directory", directory.to_string())
            .text("max_width", MAX_POSTER_WIDTH.to_string());

        let res = self.client.post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Image service connection error: {}", e);
                error!("{}", msg);
                AppError::Upstream(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Image service failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::Upstream(msg));
        }

        let body: IngestResponse = res.json().await
            .map_err(|e| AppError::Upstream(format!("Image service returned an invalid body: {}", e)))?;

        Ok(body.url)
    }
}
