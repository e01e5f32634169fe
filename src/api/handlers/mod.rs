pub mod festival;
pub mod health;
pub mod show;
pub mod sitemap;
pub mod upload;

use crate::error::AppError;
use std::collections::HashMap;

const DEFAULT_PAST_LIMIT: usize = 20;
const MAX_PAST_LIMIT: usize = 100;

pub(crate) fn parse_limit(params: &HashMap<String, String>) -> Result<usize, AppError> {
    match params.get("limit") {
        None => Ok(DEFAULT_PAST_LIMIT),
        Some(raw) => {
            let limit: usize = raw.parse()
                .map_err(|_| AppError::Validation("limit must be a non-negative integer".into()))?;
            Ok(limit.min(MAX_PAST_LIMIT))
        }
    }
}
