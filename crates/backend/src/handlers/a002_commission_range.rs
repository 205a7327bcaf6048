use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_commission_range::aggregate::{CommissionRange, CommissionRangeDto};
use contracts::domain::common::RecordId;

use crate::domain::a002_commission_range::service;
use crate::shared::error::ApiError;

/// GET /api/finance/commission_structure
pub async fn list_all() -> Result<Json<Vec<CommissionRange>>, ApiError> {
    Ok(Json(service::list_all().await?))
}

/// POST /api/finance/commission_structure
pub async fn create(
    Json(dto): Json<CommissionRangeDto>,
) -> Result<(StatusCode, Json<CommissionRange>), ApiError> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/finance/commission_structure/:id
pub async fn update(
    Path(id): Path<RecordId>,
    Json(dto): Json<CommissionRangeDto>,
) -> Result<Json<CommissionRange>, ApiError> {
    Ok(Json(service::update(id, dto).await?))
}

/// DELETE /api/finance/commission_structure/:id
pub async fn delete(Path(id): Path<RecordId>) -> Result<StatusCode, ApiError> {
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
