use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::{
    requests::CreateFestivalRequest,
    responses::FestivalDetailResponse,
};
use crate::api::extractors::{auth::AuthUser, maybe_auth::MaybeAuthUser};
use crate::api::handlers::parse_limit;
use crate::domain::models::festival::{Festival, FestivalPatch};
use crate::domain::services::{lifecycle, timeline};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub async fn create_festival(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateFestivalRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating festival: {} for user: {}", payload.name, user.id);

    let now = Utc::now();
    let festival = Festival {
        id: Uuid::new_v4().to_string(),
        user_id: user.id,
        name: payload.name,
        country: payload.country,
        city: payload.city,
        date_from: payload.date_from,
        date_until: payload.date_until,
        website: payload.website,
        instagram: payload.instagram,
        poster: payload.poster,
        description: payload.description,
        slogan: payload.slogan,
        languages: payload.languages,
        accommodation_offered: payload.accommodation_offered.unwrap_or(false),
        mixer_shows: payload.mixer_shows.unwrap_or(false),
        created_at: now,
        updated_at: now,
    };

    lifecycle::validate_festival(&festival)?;

    let created = state.festival_repo.create(&festival).await?;
    Ok(Json(created))
}

pub async fn list_festivals(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let festivals = state.festival_repo.list().await?;
    Ok(Json(festivals))
}

pub async fn list_upcoming_festivals(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let festivals = state.festival_repo.list().await?;
    let today = Utc::now().date_naive();
    Ok(Json(timeline::upcoming(today, festivals)))
}

pub async fn list_past_festivals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let limit = parse_limit(&params)?;
    let festivals = state.festival_repo.list().await?;
    let today = Utc::now().date_naive();
    Ok(Json(timeline::past(today, festivals, limit)))
}

pub async fn list_my_festivals(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let festivals = state.festival_repo.list_by_owner(&user.id).await?;
    Ok(Json(festivals))
}

pub async fn get_festival(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(maybe_user): MaybeAuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let festival = state.festival_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("Festival '{}' not found", id)))?;

    let caller = maybe_user.as_ref().map(|u| u.id.as_str());
    let can_edit = state.access.can_edit(caller, &festival.user_id);

    Ok(Json(FestivalDetailResponse { festival, can_edit }))
}

pub async fn update_festival(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<FestivalPatch>,
) -> Result<impl IntoResponse, AppError> {
    let mut festival = state.festival_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound("Festival not found".into()))?;

    if !state.access.can_edit(Some(&user.id), &festival.user_id) {
        return Err(AppError::Forbidden(format!("user {} may not edit festival {}", user.id, id)));
    }

    lifecycle::apply_festival_patch(&mut festival, payload, Utc::now());
    lifecycle::validate_festival(&festival)?;

    let updated = state.festival_repo.update(&festival).await?
        .ok_or_else(|| AppError::NotFound("Festival not found".into()))?;

    info!("Festival updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_festival(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let festival = state.festival_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound("Festival not found".into()))?;

    if !state.access.can_edit(Some(&user.id), &festival.user_id) {
        return Err(AppError::Forbidden(format!("user {} may not delete festival {}", user.id, id)));
    }

    let deleted = state.festival_repo.delete(&id).await?
        .ok_or_else(|| AppError::NotFound("Festival not found".into()))?;

    info!("Festival deleted: {}", id);
    Ok(Json(deleted))
}
