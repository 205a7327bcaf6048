use chrono::Utc;
use contracts::domain::a002_commission_range::aggregate::{CommissionRange, CommissionRangeDto};
use contracts::domain::common::RecordId;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_commission_range")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub lower_limit: f64,
    pub upper_limit: f64,
    pub percentage: f64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CommissionRange {
    fn from(m: Model) -> Self {
        CommissionRange {
            id: m.id,
            lower_limit: m.lower_limit,
            upper_limit: m.upper_limit,
            percentage: m.percentage,
        }
    }
}

/// Ranges by ascending lower limit
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<CommissionRange>> {
    let items = Entity::find()
        .order_by_asc(Column::LowerLimit)
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(
    db: &DatabaseConnection,
    dto: &CommissionRangeDto,
) -> anyhow::Result<CommissionRange> {
    let now = Utc::now();
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        lower_limit: Set(dto.lower_limit),
        upper_limit: Set(dto.upper_limit),
        percentage: Set(dto.percentage),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    Ok(active.insert(db).await?.into())
}

/// `None` when no range has this id
pub async fn update(
    db: &DatabaseConnection,
    id: RecordId,
    dto: &CommissionRangeDto,
) -> anyhow::Result<Option<CommissionRange>> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    active.lower_limit = Set(dto.lower_limit);
    active.upper_limit = Set(dto.upper_limit);
    active.percentage = Set(dto.percentage);
    active.updated_at = Set(Some(Utc::now()));
    Ok(Some(active.update(db).await?.into()))
}

pub async fn delete(db: &DatabaseConnection, id: RecordId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn count(db: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find().count(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;

    fn dto(lower: f64, upper: f64, percentage: f64) -> CommissionRangeDto {
        CommissionRangeDto {
            lower_limit: lower,
            upper_limit: upper,
            percentage,
        }
    }

    #[tokio::test]
    async fn ranges_list_by_lower_limit() {
        let db = memory_connection().await;
        insert(&db, &dto(500_000.0, 1_000_000.0, 3.0)).await.unwrap();
        insert(&db, &dto(1.0, 499_999.99, 2.0)).await.unwrap();

        let ranges = list_all(&db).await.unwrap();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].lower_limit, 1.0);
        assert_eq!(ranges[1].percentage, 3.0);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let db = memory_connection().await;
        let created = insert(&db, &dto(1.0, 10.0, 1.0)).await.unwrap();

        let updated = update(&db, created.id, &dto(1.0, 20.0, 1.5))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.upper_limit, 20.0);
        assert_eq!(updated.percentage, 1.5);

        assert!(update(&db, 999, &dto(1.0, 2.0, 1.0)).await.unwrap().is_none());
        assert!(delete(&db, created.id).await.unwrap());
        assert!(!delete(&db, created.id).await.unwrap());
        assert_eq!(count(&db).await.unwrap(), 0);
    }
}
