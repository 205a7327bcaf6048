use super::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;
use contracts::domain::a001_commission_period::aggregate::{
    CommissionPeriod, CommissionPeriodDto, OpenPeriod,
};
use contracts::domain::common::RecordId;
use contracts::shared::format::parse_datetime;

fn validate(dto: &CommissionPeriodDto) -> anyhow::Result<()> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e).into())
}

pub async fn list_all() -> anyhow::Result<Vec<CommissionPeriod>> {
    repository::list_all(get_connection()).await
}

pub async fn create(dto: CommissionPeriodDto) -> anyhow::Result<CommissionPeriod> {
    validate(&dto)?;
    let created = repository::insert(get_connection(), &dto).await?;
    tracing::info!(
        "Created commission period {} ({} - {})",
        created.id,
        created.start_date,
        created.end_date
    );
    Ok(created)
}

pub async fn update(id: RecordId, dto: CommissionPeriodDto) -> anyhow::Result<CommissionPeriod> {
    validate(&dto)?;
    repository::update(get_connection(), id, &dto)
        .await?
        .ok_or_else(|| ApiError::NotFound(id).into())
}

pub async fn delete(id: RecordId) -> anyhow::Result<()> {
    if repository::delete(get_connection(), id).await? {
        tracing::info!("Deleted commission period {}", id);
        Ok(())
    } else {
        Err(ApiError::NotFound(id).into())
    }
}

/// The open period the marketer-commission filter highlights
pub async fn open_period() -> anyhow::Result<Option<OpenPeriod>> {
    let opened = repository::list_opened(get_connection()).await?;
    Ok(latest_open(&opened))
}

/// Latest `Opened` period by start date, as date-only bounds
pub fn latest_open(periods: &[CommissionPeriod]) -> Option<OpenPeriod> {
    periods
        .iter()
        .filter(|p| p.is_open())
        .max_by_key(|p| parse_datetime(&p.start_date))
        .map(CommissionPeriod::as_open_period)
}
