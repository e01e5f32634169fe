use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use crate::domain::models::auth::{Claims, Identity};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::Cookies;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tracing::Span;

pub struct AuthUser(pub Identity);

/// Session tokens arrive either as a bearer header (API clients) or the
/// `access_token` cookie set by the web frontend.
pub(crate) fn bearer_or_cookie_token(parts: &Parts) -> Option<String> {
    if let Some(value) = parts.headers.get(header::AUTHORIZATION) {
        if let Ok(value) = value.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    parts.extensions.get::<Cookies>()
        .and_then(|cookies| cookies.get("access_token"))
        .map(|cookie| cookie.value().to_string())
}

pub(crate) fn verify_token(token: &str, public_key_pem: &str) -> Result<Identity, AppError> {
    let decoding_key = DecodingKey::from_ed_pem(public_key_pem.as_bytes())
        .map_err(|_| AppError::Internal)?;

    let mut validation = Validation::new(Algorithm::EdDSA);
    validation.set_audience(&["improfestivals-web"]);

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|_| AppError::Unauthorized)?;

    Ok(Identity { id: token_data.claims.sub })
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_or_cookie_token(parts).ok_or(AppError::Unauthorized)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let identity = verify_token(&token, &app_state.config.jwt_public_key)?;

        Span::current().record("user_id", identity.id.as_str());

        Ok(AuthUser(identity))
    }
}
