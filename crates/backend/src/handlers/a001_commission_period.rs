use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_commission_period::aggregate::{
    CommissionPeriod, CommissionPeriodDto, OpenPeriod,
};
use contracts::domain::common::RecordId;

use crate::domain::a001_commission_period::service;
use crate::shared::error::ApiError;

/// GET /api/finance/commission_period
pub async fn list_all() -> Result<Json<Vec<CommissionPeriod>>, ApiError> {
    Ok(Json(service::list_all().await?))
}

/// POST /api/finance/commission_period
pub async fn create(
    Json(dto): Json<CommissionPeriodDto>,
) -> Result<(StatusCode, Json<CommissionPeriod>), ApiError> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/finance/commission_period/:id
pub async fn update(
    Path(id): Path<RecordId>,
    Json(dto): Json<CommissionPeriodDto>,
) -> Result<Json<CommissionPeriod>, ApiError> {
    Ok(Json(service::update(id, dto).await?))
}

/// DELETE /api/finance/commission_period/:id
pub async fn delete(Path(id): Path<RecordId>) -> Result<StatusCode, ApiError> {
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/finance/commission_period/open
pub async fn open_period() -> Result<Json<OpenPeriod>, ApiError> {
    service::open_period()
        .await?
        .map(Json)
        .ok_or(ApiError::Missing("no open commission period"))
}
