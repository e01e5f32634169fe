use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::api::extractors::auth::{bearer_or_cookie_token, verify_token};
use crate::domain::models::auth::Identity;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

pub struct MaybeAuthUser(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = match bearer_or_cookie_token(parts) {
            Some(token) => token,
            None => return Ok(MaybeAuthUser(None)),
        };

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        match verify_token(&token, &app_state.config.jwt_public_key) {
            Ok(identity) => Ok(MaybeAuthUser(Some(identity))),
            // Invalid token (expired, bad signature) -> treat as guest
            Err(_) => Ok(MaybeAuthUser(None)),
        }
    }
}
