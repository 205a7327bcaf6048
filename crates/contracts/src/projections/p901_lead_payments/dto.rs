use serde::{Deserialize, Serialize};

use crate::domain::common::{HasId, RecordId};
use crate::shared::amount::deserialize_amount;

pub const HISTORY_PATH: &str = "/api/finance/Commission-history";
pub const LEADS_PATH: &str = "/api/finance/commission";

/// Lead file with its payment progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadCommission {
    pub id: RecordId,
    pub lead_file: String,
    #[serde(default)]
    pub marketer: Option<String>,
    #[serde(default)]
    pub plot_number: Option<String>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub purchase_price: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_paid: f64,
    /// Share of the purchase price paid so far
    #[serde(deserialize_with = "deserialize_amount")]
    pub percentage: f64,
}

impl LeadCommission {
    /// Case-insensitive substring match on marketer, plot number or lead file
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [
            self.marketer.as_deref(),
            self.plot_number.as_deref(),
            Some(self.lead_file.as_str()),
        ]
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(&term))
    }
}

impl HasId for LeadCommission {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Query of the lazily loaded payment history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentHistoryQuery {
    pub lead_file_id: String,
}

/// One recorded payment against a lead file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentHistory {
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_paid: f64,
    #[serde(default)]
    pub plot_number: Option<String>,
    #[serde(default)]
    pub paid_status: Option<String>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub current_amount: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub prev_amount: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub percentage: f64,
    #[serde(default)]
    pub commission_qualifies: bool,
    pub date_recorded: String,
}

/// Filter leads by the search box value, keeping order
pub fn search_leads(leads: &[LeadCommission], term: &str) -> Vec<LeadCommission> {
    leads
        .iter()
        .filter(|lead| lead.matches_search(term))
        .cloned()
        .collect()
}
