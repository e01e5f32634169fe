use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{FestivalRepository, ImageService, ShowRepository};
use crate::domain::services::access::AccessPolicy;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub festival_repo: Arc<dyn FestivalRepository>,
    pub show_repo: Arc<dyn ShowRepository>,
    pub image_service: Arc<dyn ImageService>,
    pub access: AccessPolicy,
}
