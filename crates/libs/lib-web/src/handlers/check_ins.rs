//! # Check-in Handlers

use super::{coordinate, page_or_default, parse_id};
use crate::server::AppState;
use crate::services::{
    make_check_in_service, make_fetch_user_check_ins_history_service,
    make_get_user_metrics_service, make_validate_check_in_service, CheckInInput,
    FetchUserCheckInsHistoryInput,
};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    Extension,
};
use lib_auth::Claims;
use lib_core::dto::{
    CheckInResponse, CheckInsResponse, CreateCheckInRequest, MetricsResponse, PageQuery,
};
use lib_core::AppError;
use tracing::instrument;

/// `POST /gyms/{gym_id}/check-ins` - check in at a gym from the given position.
#[instrument(skip(state, claims, req), fields(user_id = %claims.sub))]
pub async fn create_check_in(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(gym_id): Path<String>,
    Json(req): Json<CreateCheckInRequest>,
) -> Result<(StatusCode, Json<CheckInResponse>), AppError> {
    let gym_id = parse_id(&gym_id, "gym_id")?;
    let user = coordinate(req.latitude, req.longitude)?;

    let check_in = make_check_in_service(&state)
        .execute(CheckInInput {
            user_id: claims.sub,
            gym_id,
            user_latitude: user.latitude,
            user_longitude: user.longitude,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CheckInResponse { check_in })))
}

/// `GET /check-ins/history?page=`
#[instrument(skip(state, claims), fields(user_id = %claims.sub))]
pub async fn history(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CheckInsResponse>, AppError> {
    let page = page_or_default(query.page)?;

    let check_ins = make_fetch_user_check_ins_history_service(&state)
        .execute(FetchUserCheckInsHistoryInput {
            user_id: claims.sub,
            page,
        })
        .await?;

    Ok(Json(CheckInsResponse { check_ins }))
}

/// `GET /check-ins/metrics`
#[instrument(skip(state, claims), fields(user_id = %claims.sub))]
pub async fn metrics(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<MetricsResponse>, AppError> {
    let check_ins_count = make_get_user_metrics_service(&state)
        .execute(&claims.sub)
        .await?;

    Ok(Json(MetricsResponse { check_ins_count }))
}

/// `PATCH /check-ins/{check_in_id}/validate` - admin only.
#[instrument(skip(state))]
pub async fn validate_check_in(
    State(state): State<AppState>,
    Path(check_in_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let check_in_id = parse_id(&check_in_id, "check_in_id")?;

    make_validate_check_in_service(&state)
        .execute(&check_in_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
