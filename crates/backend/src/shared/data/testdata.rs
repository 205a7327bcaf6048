//! Demo rows for a fresh database
//!
//! Seeds two quarters of commission history, an open quarter without
//! records yet, the commission structure, a handful of lead files with their
//! payment history and two refunds. Skipped when periods already exist.

use anyhow::Result;
use contracts::domain::a001_commission_period::aggregate::{CommissionPeriodDto, PeriodStatus};
use contracts::domain::a002_commission_range::aggregate::CommissionRangeDto;
use contracts::projections::p900_marketer_commission::CommissionRecord;
use contracts::projections::p901_lead_payments::{LeadCommission, PaymentHistory};
use contracts::projections::p902_refund_transaction::RefundTransaction;
use sea_orm::DatabaseConnection;

use crate::domain::a001_commission_period::repository as periods;
use crate::domain::a002_commission_range::repository as ranges;
use crate::domain::a002_commission_range::service::rate_for;
use crate::projections::p900_marketer_commission::repository as commissions;
use crate::projections::p901_lead_payments::repository as leads;
use crate::projections::p902_refund_transaction::repository as refunds;
use crate::shared::data::db::get_connection;

/// Share of the purchase price after which a payment earns commission
const QUALIFYING_PERCENTAGE: f64 = 30.0;

const PERIODS: &[(&str, &str, PeriodStatus)] = &[
    ("2024-10-01T00:00:00Z", "2024-12-31T23:59:59Z", PeriodStatus::Closed),
    ("2025-01-01T00:00:00Z", "2025-03-31T23:59:59Z", PeriodStatus::Closed),
    ("2025-04-01T00:00:00Z", "2025-06-30T23:59:59Z", PeriodStatus::Opened),
];

const RANGES: &[(f64, f64, f64)] = &[
    (1.0, 500_000.0, 2.0),
    (500_000.01, 2_000_000.0, 3.0),
    (2_000_000.01, 10_000_000.0, 4.5),
];

/// (marketer, commissionable amount) per closed period
const SALES: &[(&str, f64)] = &[
    ("Jane Wanjiku", 1_250_000.0),
    ("Brian Otieno", 420_000.0),
    ("Mary Achieng", 2_750_000.0),
];

/// (lead file, marketer, plot, purchase price, payments in order)
const LEADS: &[(&str, Option<&str>, Option<&str>, f64, &[(f64, &str)])] = &[
    (
        "LF-1001",
        Some("Jane Wanjiku"),
        Some("PLT-014"),
        1_500_000.0,
        &[
            (150_000.0, "2025-01-06T09:15:00Z"),
            (450_000.0, "2025-02-03T11:40:00Z"),
            (300_000.0, "2025-04-10T14:05:00Z"),
        ],
    ),
    (
        "LF-1002",
        Some("Brian Otieno"),
        Some("PLT-027"),
        850_000.0,
        &[(100_000.0, "2025-03-12T10:00:00Z")],
    ),
    (
        "LF-1003",
        Some("Mary Achieng"),
        Some("PLT-031"),
        2_400_000.0,
        &[
            (1_200_000.0, "2024-11-20T08:30:00Z"),
            (1_200_000.0, "2025-01-28T16:45:00Z"),
        ],
    ),
    ("LF-1004", None, None, 600_000.0, &[]),
];

/// (marketer, lead file, previous total paid, new total paid, recorded at)
const REFUNDS: &[(&str, &str, f64, f64, &str)] = &[
    ("Brian Otieno", "LF-1002", 250_000.0, 100_000.0, "2025-03-10T12:00:00Z"),
    ("Jane Wanjiku", "LF-1001", 950_000.0, 900_000.0, "2025-05-02T09:20:00Z"),
];

/// Whether demo rows were written or the database already had data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded,
    Skipped,
}

pub async fn insert_test_data() -> Result<SeedOutcome> {
    seed(get_connection()).await
}

pub async fn seed(db: &DatabaseConnection) -> Result<SeedOutcome> {
    if periods::count(db).await? > 0 {
        tracing::info!("Test data skipped: commission periods already exist");
        return Ok(SeedOutcome::Skipped);
    }

    let mut created_periods = Vec::with_capacity(PERIODS.len());
    for (start_date, end_date, status) in PERIODS {
        let dto = CommissionPeriodDto {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            status: *status,
        };
        created_periods.push(periods::insert(db, &dto).await?);
    }

    for (lower_limit, upper_limit, percentage) in RANGES {
        let dto = CommissionRangeDto {
            lower_limit: *lower_limit,
            upper_limit: *upper_limit,
            percentage: *percentage,
        };
        ranges::insert(db, &dto).await?;
    }
    let structure = ranges::list_all(db).await?;

    let mut record_count = 0;
    for (index, period) in created_periods.iter().filter(|p| !p.is_open()).enumerate() {
        let bounds = period.as_open_period();
        for (marketer, amount) in SALES {
            // later quarters sell a little more
            let amount = amount * (1.0 + 0.1 * index as f64);
            let percentage = rate_for(&structure, amount).unwrap_or_default();
            let record = CommissionRecord {
                id: 0,
                marketer: marketer.to_string(),
                total_commissionable_amount: amount,
                commission_percentage: percentage,
                commission_earned: round_cents(amount * percentage / 100.0),
                calculated_at: Some(period.end_date.clone()),
                period_start: bounds.period_start.clone(),
                period_end: bounds.period_end.clone(),
                commission_period: Some(period.id),
            };
            commissions::insert(db, &record).await?;
            record_count += 1;
        }
    }

    for (lead_file, marketer, plot_number, purchase_price, payments) in LEADS {
        let history = payment_history(*purchase_price, plot_number.map(str::to_string), payments);
        let total_paid = history.last().map(|p| p.total_paid).unwrap_or_default();
        let lead = LeadCommission {
            id: 0,
            lead_file: lead_file.to_string(),
            marketer: marketer.map(str::to_string),
            plot_number: plot_number.map(str::to_string),
            purchase_price: *purchase_price,
            total_paid,
            percentage: paid_percentage(total_paid, *purchase_price),
        };
        leads::insert_lead(db, &lead).await?;
        for payment in &history {
            leads::insert_payment(db, lead_file, payment).await?;
        }
    }

    for (marketer, lead_file, previous_total_paid, new_total_paid, recorded_at) in REFUNDS {
        let refund = RefundTransaction {
            id: 0,
            marketer: marketer.to_string(),
            lead_file: lead_file.to_string(),
            previous_total_paid: *previous_total_paid,
            new_total_paid: *new_total_paid,
            recorded_at: recorded_at.to_string(),
        };
        refunds::insert(db, &refund).await?;
    }

    tracing::info!(
        "Test data inserted: {} periods, {} ranges, {} commission records, {} leads, {} refunds",
        PERIODS.len(),
        RANGES.len(),
        record_count,
        LEADS.len(),
        REFUNDS.len()
    );
    Ok(SeedOutcome::Seeded)
}

/// Running totals of a lead's payments
fn payment_history(
    purchase_price: f64,
    plot_number: Option<String>,
    payments: &[(f64, &str)],
) -> Vec<PaymentHistory> {
    let mut total_paid = 0.0;
    payments
        .iter()
        .map(|(amount, date_recorded)| {
            let prev_amount = total_paid;
            total_paid += amount;
            let percentage = paid_percentage(total_paid, purchase_price);
            PaymentHistory {
                total_paid,
                plot_number: plot_number.clone(),
                paid_status: Some(paid_status(total_paid, purchase_price).to_string()),
                current_amount: *amount,
                prev_amount,
                percentage,
                commission_qualifies: percentage >= QUALIFYING_PERCENTAGE,
                date_recorded: date_recorded.to_string(),
            }
        })
        .collect()
}

fn paid_percentage(total_paid: f64, purchase_price: f64) -> f64 {
    if purchase_price <= 0.0 {
        return 0.0;
    }
    round_cents(total_paid / purchase_price * 100.0)
}

fn paid_status(total_paid: f64, purchase_price: f64) -> &'static str {
    if total_paid >= purchase_price {
        "Fully Paid"
    } else {
        "Partially Paid"
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_commission_period::service::latest_open;

    #[test]
    fn history_accumulates_payments() {
        let history = payment_history(
            1_000_000.0,
            Some("PLT-1".into()),
            &[(100_000.0, "2025-01-01T00:00:00Z"), (250_000.0, "2025-02-01T00:00:00Z")],
        );
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].prev_amount, 0.0);
        assert!(!history[0].commission_qualifies);
        assert_eq!(history[1].prev_amount, 100_000.0);
        assert_eq!(history[1].total_paid, 350_000.0);
        assert_eq!(history[1].percentage, 35.0);
        assert!(history[1].commission_qualifies);
        assert_eq!(history[1].paid_status.as_deref(), Some("Partially Paid"));
    }

    #[test]
    fn zero_price_has_zero_percentage() {
        assert_eq!(paid_percentage(10.0, 0.0), 0.0);
    }

    #[tokio::test]
    async fn seeding_runs_once() {
        let db = crate::shared::data::db::memory_connection().await;
        assert_eq!(seed(&db).await.unwrap(), SeedOutcome::Seeded);
        assert_eq!(seed(&db).await.unwrap(), SeedOutcome::Skipped);

        let records = commissions::list_all(&db).await.unwrap();
        assert_eq!(records.len(), SALES.len() * 2);
        assert!(records.iter().all(|r| r.commission_earned > 0.0));

        let open = latest_open(&periods::list_opened(&db).await.unwrap()).unwrap();
        assert_eq!(open.period_start, "2025-04-01");
        assert!(records
            .iter()
            .all(|r| r.period_start != open.period_start));

        assert_eq!(leads::count_leads(&db).await.unwrap(), LEADS.len() as u64);
        let history = leads::list_history(&db, "LF-1001").await.unwrap();
        assert_eq!(history.last().unwrap().total_paid, 900_000.0);
        assert_eq!(refunds::count(&db).await.unwrap(), REFUNDS.len() as u64);
    }
}
