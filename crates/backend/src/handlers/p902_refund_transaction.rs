use axum::Json;
use contracts::projections::p902_refund_transaction::RefundTransaction;

use crate::projections::p902_refund_transaction::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

/// GET /api/finance/refund_transaction
pub async fn list_all() -> Result<Json<Vec<RefundTransaction>>, ApiError> {
    Ok(Json(repository::list_all(get_connection()).await?))
}
