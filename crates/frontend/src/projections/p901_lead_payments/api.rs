use contracts::projections::p901_lead_payments::dto::{
    LeadCommission, PaymentHistory, PaymentHistoryQuery, HISTORY_PATH, LEADS_PATH,
};
use contracts::shared::fetched::Fetched;

use crate::shared::crud_client;

pub async fn fetch_leads() -> Fetched<Vec<LeadCommission>> {
    crud_client::fetch(LEADS_PATH).await
}

/// Payments recorded against one lead file
pub async fn fetch_payment_history(lead_file: &str) -> Fetched<Vec<PaymentHistory>> {
    let query = PaymentHistoryQuery {
        lead_file_id: lead_file.to_string(),
    };
    Fetched::from_result(crud_client::get_json_with_query(HISTORY_PATH, &query).await)
}
