use serde::{Deserialize, Serialize};

use super::period::PeriodKey;
use crate::domain::common::{HasId, RecordId};
use crate::shared::amount::deserialize_amount;

pub const COMMISSIONS_PATH: &str = "/api/finance/marketers_commission";
pub const OPEN_PERIOD_PATH: &str = "/api/finance/commission_period/open";

/// One marketer's commission computation for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRecord {
    pub id: RecordId,
    pub marketer: String,
    #[serde(alias = "total_amount", deserialize_with = "deserialize_amount")]
    pub total_commissionable_amount: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub commission_percentage: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub commission_earned: f64,
    #[serde(default)]
    pub calculated_at: Option<String>,
    pub period_start: String,
    pub period_end: String,
    /// Id of the commission period the record was computed in
    #[serde(default)]
    pub commission_period: Option<RecordId>,
}

impl CommissionRecord {
    pub fn period_key(&self) -> PeriodKey {
        PeriodKey::new(&self.period_start, &self.period_end)
    }
}

impl HasId for CommissionRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_total_amount_name_is_accepted() {
        let record: CommissionRecord = serde_json::from_str(
            r#"{
                "id": 1,
                "marketer": "Jane Wanjiku",
                "total_amount": "250000.00",
                "commission_percentage": 2.5,
                "commission_earned": "6250.00",
                "calculated_at": "2025-03-31T18:00:00Z",
                "period_start": "2025-01-01",
                "period_end": "2025-03-31",
                "commission_period": 1
            }"#,
        )
        .unwrap();
        assert_eq!(record.total_commissionable_amount, 250000.0);
        assert_eq!(record.commission_earned, 6250.0);
        assert_eq!(record.period_key().as_str(), "2025-01-01_2025-03-31");
    }

    #[test]
    fn optional_fields_default() {
        let record: CommissionRecord = serde_json::from_str(
            r#"{
                "id": 2,
                "marketer": "Otieno",
                "total_commissionable_amount": 100,
                "commission_percentage": 1,
                "commission_earned": 1,
                "period_start": "2025-04-01",
                "period_end": "2025-06-30"
            }"#,
        )
        .unwrap();
        assert_eq!(record.calculated_at, None);
        assert_eq!(record.commission_period, None);
    }
}
