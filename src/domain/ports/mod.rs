use crate::domain::models::{festival::Festival, show::Show};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait FestivalRepository: Send + Sync {
    async fn create(&self, festival: &Festival) -> Result<Festival, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Festival>, AppError>;
    async fn list(&self) -> Result<Vec<Festival>, AppError>;
    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Festival>, AppError>;
    async fn update(&self, festival: &Festival) -> Result<Option<Festival>, AppError>;
    async fn delete(&self, id: &str) -> Result<Option<Festival>, AppError>;
}

#[async_trait]
pub trait ShowRepository: Send + Sync {
    async fn create(&self, show: &Show) -> Result<Show, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Show>, AppError>;
    async fn list(&self) -> Result<Vec<Show>, AppError>;
    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Show>, AppError>;
    async fn update(&self, show: &Show) -> Result<Option<Show>, AppError>;
    async fn delete(&self, id: &str) -> Result<Option<Show>, AppError>;
}

#[async_trait]
pub trait ImageService: Send + Sync {
    async fn ingest(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        directory: &str
    ) -> Result<String, AppError>;
}
