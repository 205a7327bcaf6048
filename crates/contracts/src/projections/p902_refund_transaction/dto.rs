use serde::{Deserialize, Serialize};

use crate::domain::common::{HasId, RecordId};
use crate::shared::amount::deserialize_amount;

pub const REFUNDS_PATH: &str = "/api/finance/refund_transaction";

/// Reversal of payments on a lead file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundTransaction {
    pub id: RecordId,
    pub marketer: String,
    pub lead_file: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub previous_total_paid: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub new_total_paid: f64,
    pub recorded_at: String,
}

impl RefundTransaction {
    /// Amount taken back by the refund
    pub fn refunded_amount(&self) -> f64 {
        self.previous_total_paid - self.new_total_paid
    }
}

impl HasId for RefundTransaction {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refunded_amount_is_the_drop_in_total_paid() {
        let refund: RefundTransaction = serde_json::from_str(
            r#"{
                "id": 1,
                "marketer": "Jane Wanjiku",
                "lead_file": "LF-1001",
                "previous_total_paid": "300000.00",
                "new_total_paid": "120000.00",
                "recorded_at": "2025-03-02T09:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(refund.refunded_amount(), 180000.0);
    }
}
