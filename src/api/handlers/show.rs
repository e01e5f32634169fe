use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::{
    requests::CreateShowRequest,
    responses::ShowDetailResponse,
};
use crate::api::extractors::{auth::AuthUser, maybe_auth::MaybeAuthUser};
use crate::api::handlers::parse_limit;
use crate::domain::models::show::{Show, ShowPatch};
use crate::domain::services::{lifecycle, timeline};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub async fn create_show(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateShowRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating show: {} for user: {}", payload.name, user.id);

    let now = Utc::now();
    let show = Show {
        id: Uuid::new_v4().to_string(),
        user_id: user.id,
        name: payload.name,
        show_starts: payload.show_starts,
        doors_open: payload.doors_open,
        website: payload.website,
        instagram: payload.instagram,
        poster: payload.poster,
        description: payload.description,
        slogan: payload.slogan,
        email: payload.email,
        groups: payload.groups,
        tickets_link: payload.tickets_link,
        location_name: payload.location_name,
        location_link: payload.location_link,
        ticket_price: payload.ticket_price,
        created_at: now,
        updated_at: now,
    };

    lifecycle::validate_show(&show)?;

    let created = state.show_repo.create(&show).await?;
    Ok(Json(created))
}

pub async fn list_shows(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let shows = state.show_repo.list().await?;
    Ok(Json(shows))
}

pub async fn list_upcoming_shows(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let shows = state.show_repo.list().await?;
    Ok(Json(timeline::upcoming(Utc::now(), shows)))
}

pub async fn list_past_shows(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let limit = parse_limit(&params)?;
    let shows = state.show_repo.list().await?;
    Ok(Json(timeline::past(Utc::now(), shows, limit)))
}

pub async fn list_my_shows(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let shows = state.show_repo.list_by_owner(&user.id).await?;
    Ok(Json(shows))
}

pub async fn get_show(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(maybe_user): MaybeAuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let show = state.show_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("Show '{}' not found", id)))?;

    let caller = maybe_user.as_ref().map(|u| u.id.as_str());
    let can_edit = state.access.can_edit(caller, &show.user_id);

    Ok(Json(ShowDetailResponse { show, can_edit }))
}

pub async fn update_show(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<ShowPatch>,
) -> Result<impl IntoResponse, AppError> {
    let mut show = state.show_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound("Show not found".into()))?;

    if !state.access.can_edit(Some(&user.id), &show.user_id) {
        return Err(AppError::Forbidden(format!("user {} may not edit show {}", user.id, id)));
    }

    lifecycle::apply_show_patch(&mut show, payload, Utc::now());
    lifecycle::validate_show(&show)?;

    let updated = state.show_repo.update(&show).await?
        .ok_or_else(|| AppError::NotFound("Show not found".into()))?;

    info!("Show updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_show(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let show = state.show_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound("Show not found".into()))?;

    if !state.access.can_edit(Some(&user.id), &show.user_id) {
        return Err(AppError::Forbidden(format!("user {} may not delete show {}", user.id, id)));
    }

    let deleted = state.show_repo.delete(&id).await?
        .ok_or_else(|| AppError::NotFound("Show not found".into()))?;

    info!("Show deleted: {}", id);
    Ok(Json(deleted))
}
