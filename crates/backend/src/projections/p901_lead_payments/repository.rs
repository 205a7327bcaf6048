use anyhow::Result;
use contracts::projections::p901_lead_payments::{LeadCommission, PaymentHistory};
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

/// Lead files with their payment progress
pub mod lead {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "p901_lead_commission")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        #[sea_orm(unique)]
        pub lead_file: String,
        pub marketer: Option<String>,
        pub plot_number: Option<String>,
        pub purchase_price: f64,
        pub total_paid: f64,
        pub percentage: f64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Payments recorded against a lead file
pub mod history {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "p901_payment_history")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub lead_file: String,
        pub total_paid: f64,
        pub plot_number: Option<String>,
        pub paid_status: Option<String>,
        pub current_amount: f64,
        pub prev_amount: f64,
        pub percentage: f64,
        pub commission_qualifies: bool,
        pub date_recorded: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<lead::Model> for LeadCommission {
    fn from(m: lead::Model) -> Self {
        LeadCommission {
            id: m.id,
            lead_file: m.lead_file,
            marketer: m.marketer,
            plot_number: m.plot_number,
            purchase_price: m.purchase_price,
            total_paid: m.total_paid,
            percentage: m.percentage,
        }
    }
}

impl From<history::Model> for PaymentHistory {
    fn from(m: history::Model) -> Self {
        PaymentHistory {
            total_paid: m.total_paid,
            plot_number: m.plot_number,
            paid_status: m.paid_status,
            current_amount: m.current_amount,
            prev_amount: m.prev_amount,
            percentage: m.percentage,
            commission_qualifies: m.commission_qualifies,
            date_recorded: m.date_recorded,
        }
    }
}

pub async fn list_leads(db: &DatabaseConnection) -> Result<Vec<LeadCommission>> {
    let items = lead::Entity::find()
        .order_by_asc(lead::Column::LeadFile)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Payments of one lead file in the order they were recorded
pub async fn list_history(db: &DatabaseConnection, lead_file: &str) -> Result<Vec<PaymentHistory>> {
    let items = history::Entity::find()
        .filter(history::Column::LeadFile.eq(lead_file))
        .order_by_asc(history::Column::DateRecorded)
        .order_by_asc(history::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert_lead(db: &DatabaseConnection, lead: &LeadCommission) -> Result<LeadCommission> {
    let active = lead::ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        lead_file: Set(lead.lead_file.clone()),
        marketer: Set(lead.marketer.clone()),
        plot_number: Set(lead.plot_number.clone()),
        purchase_price: Set(lead.purchase_price),
        total_paid: Set(lead.total_paid),
        percentage: Set(lead.percentage),
    };
    Ok(active.insert(db).await?.into())
}

pub async fn insert_payment(
    db: &DatabaseConnection,
    lead_file: &str,
    payment: &PaymentHistory,
) -> Result<()> {
    let active = history::ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        lead_file: Set(lead_file.to_string()),
        total_paid: Set(payment.total_paid),
        plot_number: Set(payment.plot_number.clone()),
        paid_status: Set(payment.paid_status.clone()),
        current_amount: Set(payment.current_amount),
        prev_amount: Set(payment.prev_amount),
        percentage: Set(payment.percentage),
        commission_qualifies: Set(payment.commission_qualifies),
        date_recorded: Set(payment.date_recorded.clone()),
    };
    active.insert(db).await?;
    Ok(())
}

pub async fn count_leads(db: &DatabaseConnection) -> Result<u64> {
    Ok(lead::Entity::find().count(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;

    fn lead(lead_file: &str) -> LeadCommission {
        LeadCommission {
            id: 0,
            lead_file: lead_file.into(),
            marketer: Some("Wanjiku".into()),
            plot_number: Some("PLT-12".into()),
            purchase_price: 1_000_000.0,
            total_paid: 300_000.0,
            percentage: 30.0,
        }
    }

    fn payment(total_paid: f64, current: f64, date: &str) -> PaymentHistory {
        PaymentHistory {
            total_paid,
            plot_number: Some("PLT-12".into()),
            paid_status: Some("Partially Paid".into()),
            current_amount: current,
            prev_amount: total_paid - current,
            percentage: total_paid / 10_000.0,
            commission_qualifies: false,
            date_recorded: date.into(),
        }
    }

    #[tokio::test]
    async fn history_is_scoped_to_the_lead_file() {
        let db = memory_connection().await;
        insert_lead(&db, &lead("LF-002")).await.unwrap();
        insert_lead(&db, &lead("LF-001")).await.unwrap();

        insert_payment(&db, "LF-001", &payment(300_000.0, 200_000.0, "2025-02-01T10:00:00Z"))
            .await
            .unwrap();
        insert_payment(&db, "LF-001", &payment(100_000.0, 100_000.0, "2025-01-05T10:00:00Z"))
            .await
            .unwrap();
        insert_payment(&db, "LF-002", &payment(50_000.0, 50_000.0, "2025-01-10T10:00:00Z"))
            .await
            .unwrap();

        let leads = list_leads(&db).await.unwrap();
        assert_eq!(leads[0].lead_file, "LF-001");
        assert_eq!(count_leads(&db).await.unwrap(), 2);

        let history = list_history(&db, "LF-001").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].current_amount, 100_000.0);
        assert_eq!(history[1].prev_amount, 100_000.0);

        assert!(list_history(&db, "LF-404").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_lead_file_is_rejected() {
        let db = memory_connection().await;
        insert_lead(&db, &lead("LF-001")).await.unwrap();
        assert!(insert_lead(&db, &lead("LF-001")).await.is_err());
    }
}
