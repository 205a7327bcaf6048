use contracts::projections::p902_refund_transaction::dto::{RefundTransaction, REFUNDS_PATH};
use contracts::shared::fetched::Fetched;

use crate::shared::crud_client;

pub async fn fetch_refunds() -> Fetched<Vec<RefundTransaction>> {
    crud_client::fetch(REFUNDS_PATH).await
}
