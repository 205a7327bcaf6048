use contracts::domain::a001_commission_period::aggregate::OpenPeriod;
use contracts::projections::p900_marketer_commission::dto::{
    CommissionRecord, COMMISSIONS_PATH, OPEN_PERIOD_PATH,
};
use contracts::shared::fetched::Fetched;

use crate::shared::crud_client;

/// All commission records, every period
pub async fn fetch_commissions() -> Fetched<Vec<CommissionRecord>> {
    crud_client::fetch(COMMISSIONS_PATH).await
}

/// The currently open period; a 404 means none is open
pub async fn fetch_open_period() -> Fetched<OpenPeriod> {
    crud_client::fetch(OPEN_PERIOD_PATH).await
}
