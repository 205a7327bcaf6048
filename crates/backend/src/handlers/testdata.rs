use axum::http::StatusCode;

use crate::shared::data::testdata::{self, SeedOutcome};
use crate::shared::error::ApiError;

/// POST /api/finance/testdata
pub async fn insert_test_data() -> Result<StatusCode, ApiError> {
    match testdata::insert_test_data().await? {
        SeedOutcome::Seeded => Ok(StatusCode::CREATED),
        SeedOutcome::Skipped => Ok(StatusCode::OK),
    }
}
