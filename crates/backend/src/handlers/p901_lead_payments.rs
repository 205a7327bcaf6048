use axum::{extract::Query, Json};
use contracts::projections::p901_lead_payments::{
    LeadCommission, PaymentHistory, PaymentHistoryQuery,
};

use crate::projections::p901_lead_payments::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

/// GET /api/finance/commission
pub async fn list_leads() -> Result<Json<Vec<LeadCommission>>, ApiError> {
    Ok(Json(repository::list_leads(get_connection()).await?))
}

/// GET /api/finance/Commission-history?lead_file_id=
pub async fn payment_history(
    Query(query): Query<PaymentHistoryQuery>,
) -> Result<Json<Vec<PaymentHistory>>, ApiError> {
    let lead_file = query.lead_file_id.trim();
    if lead_file.is_empty() {
        return Err(ApiError::Validation("lead_file_id is required".into()));
    }
    Ok(Json(repository::list_history(get_connection(), lead_file).await?))
}
