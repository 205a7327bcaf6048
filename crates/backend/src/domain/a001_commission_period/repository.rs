use chrono::Utc;
use contracts::domain::a001_commission_period::aggregate::{
    CommissionPeriod, CommissionPeriodDto, PeriodStatus,
};
use contracts::domain::common::RecordId;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_commission_period")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CommissionPeriod {
    fn from(m: Model) -> Self {
        let status = PeriodStatus::parse(&m.status).unwrap_or_else(|e| {
            tracing::warn!("Commission period {}: {}, treating as Closed", m.id, e);
            PeriodStatus::Closed
        });
        CommissionPeriod {
            id: m.id,
            start_date: m.start_date,
            end_date: m.end_date,
            status,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<CommissionPeriod>> {
    let items = Entity::find()
        .order_by_asc(Column::StartDate)
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Periods with status `Opened`, latest start first
pub async fn list_opened(db: &DatabaseConnection) -> anyhow::Result<Vec<CommissionPeriod>> {
    let items = Entity::find()
        .filter(Column::Status.eq(PeriodStatus::Opened.as_str()))
        .order_by_desc(Column::StartDate)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(
    db: &DatabaseConnection,
    dto: &CommissionPeriodDto,
) -> anyhow::Result<CommissionPeriod> {
    let now = Utc::now();
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        start_date: Set(dto.start_date.clone()),
        end_date: Set(dto.end_date.clone()),
        status: Set(dto.status.as_str().to_string()),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    Ok(active.insert(db).await?.into())
}

/// `None` when no period has this id
pub async fn update(
    db: &DatabaseConnection,
    id: RecordId,
    dto: &CommissionPeriodDto,
) -> anyhow::Result<Option<CommissionPeriod>> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    active.start_date = Set(dto.start_date.clone());
    active.end_date = Set(dto.end_date.clone());
    active.status = Set(dto.status.as_str().to_string());
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

    fn dto(start: &str, end: &str, status: PeriodStatus) -> CommissionPeriodDto {
        CommissionPeriodDto {
            start_date: start.into(),
            end_date: end.into(),
            status,
        }
    }

    #[tokio::test]
    async fn insert_update_delete_round_trip() {
        let db = memory_connection().await;

        let created = insert(
            &db,
            &dto("2025-01-01T00:00:00Z", "2025-03-31T23:59:59Z", PeriodStatus::Opened),
        )
        .await
        .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.status, PeriodStatus::Opened);

        let updated = update(
            &db,
            created.id,
            &dto("2025-01-01T00:00:00Z", "2025-03-31T23:59:59Z", PeriodStatus::Closed),
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(updated.status, PeriodStatus::Closed);

        assert!(update(&db, created.id + 100, &dto("a", "b", PeriodStatus::Closed))
            .await
            .unwrap()
            .is_none());

        assert!(delete(&db, created.id).await.unwrap());
        assert!(!delete(&db, created.id).await.unwrap());
        assert_eq!(count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn opened_periods_come_latest_first() {
        let db = memory_connection().await;
        for (start, end, status) in [
            ("2025-01-01T00:00:00Z", "2025-03-31T23:59:59Z", PeriodStatus::Opened),
            ("2025-04-01T00:00:00Z", "2025-06-30T23:59:59Z", PeriodStatus::Opened),
            ("2025-07-01T00:00:00Z", "2025-09-30T23:59:59Z", PeriodStatus::Closed),
        ] {
            insert(&db, &dto(start, end, status)).await.unwrap();
        }

        let opened = list_opened(&db).await.unwrap();
        assert_eq!(opened.len(), 2);
        assert_eq!(opened[0].start_date, "2025-04-01T00:00:00Z");
        assert_eq!(list_all(&db).await.unwrap().len(), 3);
    }
}
