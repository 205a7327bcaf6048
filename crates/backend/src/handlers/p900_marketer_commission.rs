use axum::Json;
use contracts::projections::p900_marketer_commission::CommissionRecord;

use crate::projections::p900_marketer_commission::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

/// GET /api/finance/marketers_commission
pub async fn list_all() -> Result<Json<Vec<CommissionRecord>>, ApiError> {
    Ok(Json(repository::list_all(get_connection()).await?))
}
