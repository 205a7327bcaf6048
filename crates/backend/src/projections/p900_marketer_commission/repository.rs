use anyhow::Result;
use contracts::projections::p900_marketer_commission::CommissionRecord;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

/// Commission computed for one marketer over one period
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "p900_marketer_commission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub marketer: String,
    pub total_commissionable_amount: f64,
    pub commission_percentage: f64,
    pub commission_earned: f64,
    pub calculated_at: Option<String>,
    pub period_start: String,
    pub period_end: String,
    pub commission_period: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CommissionRecord {
    fn from(m: Model) -> Self {
        CommissionRecord {
            id: m.id,
            marketer: m.marketer,
            total_commissionable_amount: m.total_commissionable_amount,
            commission_percentage: m.commission_percentage,
            commission_earned: m.commission_earned,
            calculated_at: m.calculated_at,
            period_start: m.period_start,
            period_end: m.period_end,
            commission_period: m.commission_period,
        }
    }
}

/// Latest periods first, then by marketer
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<CommissionRecord>> {
    let items = Entity::find()
        .order_by_desc(Column::PeriodStart)
        .order_by_asc(Column::Marketer)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Insert a computed record; `id` of the input is ignored
pub async fn insert(db: &DatabaseConnection, record: &CommissionRecord) -> Result<CommissionRecord> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        marketer: Set(record.marketer.clone()),
        total_commissionable_amount: Set(record.total_commissionable_amount),
        commission_percentage: Set(record.commission_percentage),
        commission_earned: Set(record.commission_earned),
        calculated_at: Set(record.calculated_at.clone()),
        period_start: Set(record.period_start.clone()),
        period_end: Set(record.period_end.clone()),
        commission_period: Set(record.commission_period),
    };
    Ok(active.insert(db).await?.into())
}

pub async fn count(db: &DatabaseConnection) -> Result<u64> {
    Ok(Entity::find().count(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;

    fn record(marketer: &str, start: &str, end: &str) -> CommissionRecord {
        CommissionRecord {
            id: 0,
            marketer: marketer.into(),
            total_commissionable_amount: 400_000.0,
            commission_percentage: 2.0,
            commission_earned: 8_000.0,
            calculated_at: Some("2025-03-31T18:00:00Z".into()),
            period_start: start.into(),
            period_end: end.into(),
            commission_period: Some(1),
        }
    }

    #[tokio::test]
    async fn records_list_latest_period_first() {
        let db = memory_connection().await;
        insert(&db, &record("Wanjiku", "2025-01-01", "2025-03-31")).await.unwrap();
        insert(&db, &record("Otieno", "2025-04-01", "2025-06-30")).await.unwrap();
        insert(&db, &record("Achieng", "2025-04-01", "2025-06-30")).await.unwrap();

        let records = list_all(&db).await.unwrap();
        let marketers: Vec<_> = records.iter().map(|r| r.marketer.as_str()).collect();
        assert_eq!(marketers, vec!["Achieng", "Otieno", "Wanjiku"]);
        assert!(records.iter().all(|r| r.id > 0));

        let wire = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(wire["total_commissionable_amount"], 400_000.0);
        assert_eq!(wire["period_start"], "2025-04-01");
        assert_eq!(count(&db).await.unwrap(), 3);
    }
}
