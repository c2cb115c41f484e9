//! # Gym Handlers

use super::{coordinate, page_or_default};
use crate::server::AppState;
use crate::services::{
    make_create_gym_service, make_fetch_nearby_gyms_service, make_search_gyms_service,
    SearchGymsInput,
};
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
};
use lib_core::dto::{CreateGymRequest, GymResponse, GymsResponse, NearbyGymsQuery, SearchGymsQuery};
use lib_core::model::GymForCreate;
use lib_core::AppError;
use lib_utils::validate_not_empty;
use tracing::instrument;

/// `POST /gyms` - register a gym. Admin only.
#[instrument(skip(state, req), fields(title = %req.title))]
pub async fn create_gym(
    State(state): State<AppState>,
    Json(req): Json<CreateGymRequest>,
) -> Result<(StatusCode, Json<GymResponse>), AppError> {
    validate_not_empty(&req.title, "title").map_err(AppError::Validation)?;
    coordinate(req.latitude, req.longitude)?;

    let gym = make_create_gym_service(&state)
        .execute(GymForCreate {
            title: req.title,
            description: req.description,
            phone: req.phone,
            latitude: req.latitude,
            longitude: req.longitude,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(GymResponse { gym })))
}

/// `GET /gyms/search?q=&page=`
#[instrument(skip(state))]
pub async fn search_gyms(
    State(state): State<AppState>,
    Query(query): Query<SearchGymsQuery>,
) -> Result<Json<GymsResponse>, AppError> {
    let page = page_or_default(query.page)?;

    let gyms = make_search_gyms_service(&state)
        .execute(SearchGymsInput { query: query.q, page })
        .await?;

    Ok(Json(GymsResponse { gyms }))
}

/// `GET /gyms/nearby?latitude=&longitude=`
#[instrument(skip(state))]
pub async fn nearby_gyms(
    State(state): State<AppState>,
    Query(query): Query<NearbyGymsQuery>,
) -> Result<Json<GymsResponse>, AppError> {
    let user = coordinate(query.latitude, query.longitude)?;

    let gyms = make_fetch_nearby_gyms_service(&state).execute(user).await?;

    Ok(Json(GymsResponse { gyms }))
}
