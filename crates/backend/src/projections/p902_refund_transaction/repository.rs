use anyhow::Result;
use contracts::projections::p902_refund_transaction::RefundTransaction;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "p902_refund_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub marketer: String,
    pub lead_file: String,
    pub previous_total_paid: f64,
    pub new_total_paid: f64,
    pub recorded_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for RefundTransaction {
    fn from(m: Model) -> Self {
        RefundTransaction {
            id: m.id,
            marketer: m.marketer,
            lead_file: m.lead_file,
            previous_total_paid: m.previous_total_paid,
            new_total_paid: m.new_total_paid,
            recorded_at: m.recorded_at,
        }
    }
}

/// Most recent refunds first
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<RefundTransaction>> {
    let items = Entity::find()
        .order_by_desc(Column::RecordedAt)
        .order_by_desc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(db: &DatabaseConnection, refund: &RefundTransaction) -> Result<RefundTransaction> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        marketer: Set(refund.marketer.clone()),
        lead_file: Set(refund.lead_file.clone()),
        previous_total_paid: Set(refund.previous_total_paid),
        new_total_paid: Set(refund.new_total_paid),
        recorded_at: Set(refund.recorded_at.clone()),
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

    fn refund(lead_file: &str, recorded_at: &str) -> RefundTransaction {
        RefundTransaction {
            id: 0,
            marketer: "Wanjiku".into(),
            lead_file: lead_file.into(),
            previous_total_paid: 300_000.0,
            new_total_paid: 250_000.0,
            recorded_at: recorded_at.into(),
        }
    }

    #[tokio::test]
    async fn newest_refund_comes_first() {
        let db = memory_connection().await;
        insert(&db, &refund("LF-001", "2025-02-10T09:00:00Z")).await.unwrap();
        insert(&db, &refund("LF-002", "2025-05-01T12:30:00Z")).await.unwrap();

        let refunds = list_all(&db).await.unwrap();
        assert_eq!(refunds.len(), 2);
        assert_eq!(refunds[0].lead_file, "LF-002");
        assert_eq!(refunds[0].refunded_amount(), 50_000.0);
    }
}
