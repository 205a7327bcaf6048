use super::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;
use contracts::domain::a002_commission_range::aggregate::{CommissionRange, CommissionRangeDto};
use contracts::domain::common::RecordId;

fn validate(dto: &CommissionRangeDto) -> anyhow::Result<()> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e).into())
}

pub async fn list_all() -> anyhow::Result<Vec<CommissionRange>> {
    repository::list_all(get_connection()).await
}

pub async fn create(dto: CommissionRangeDto) -> anyhow::Result<CommissionRange> {
    validate(&dto)?;
    let created = repository::insert(get_connection(), &dto).await?;
    tracing::info!(
        "Created commission range {} ({} - {} at {}%)",
        created.id,
        created.lower_limit,
        created.upper_limit,
        created.percentage
    );
    Ok(created)
}

pub async fn update(id: RecordId, dto: CommissionRangeDto) -> anyhow::Result<CommissionRange> {
    validate(&dto)?;
    repository::update(get_connection(), id, &dto)
        .await?
        .ok_or_else(|| ApiError::NotFound(id).into())
}

pub async fn delete(id: RecordId) -> anyhow::Result<()> {
    if repository::delete(get_connection(), id).await? {
        tracing::info!("Deleted commission range {}", id);
        Ok(())
    } else {
        Err(ApiError::NotFound(id).into())
    }
}

/// Percentage of the first range containing `amount`, ranges ordered by lower limit
pub fn rate_for(ranges: &[CommissionRange], amount: f64) -> Option<f64> {
    ranges
        .iter()
        .find(|range| range.contains(amount))
        .map(|range| range.percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(id: RecordId, lower: f64, upper: f64, percentage: f64) -> CommissionRange {
        CommissionRange {
            id,
            lower_limit: lower,
            upper_limit: upper,
            percentage,
        }
    }

    #[test]
    fn rate_comes_from_the_containing_range() {
        let ranges = vec![
            range(1, 1.0, 500_000.0, 2.0),
            range(2, 500_000.01, 2_000_000.0, 3.0),
        ];
        assert_eq!(rate_for(&ranges, 250_000.0), Some(2.0));
        assert_eq!(rate_for(&ranges, 500_000.0), Some(2.0));
        assert_eq!(rate_for(&ranges, 1_500_000.0), Some(3.0));
        assert_eq!(rate_for(&ranges, 5_000_000.0), None);
        assert_eq!(rate_for(&[], 10.0), None);
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let dto = CommissionRangeDto {
            lower_limit: 10.0,
            upper_limit: 5.0,
            percentage: 1.0,
        };
        let api: ApiError = validate(&dto).unwrap_err().into();
        assert!(matches!(api, ApiError::Validation(_)));
    }
}
