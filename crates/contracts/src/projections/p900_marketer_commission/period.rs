//! Period filter of the marketer-commission view
//!
//! Commission records carry their `(period_start, period_end)` pair. The
//! filter control lists every distinct pair once, in the order the records
//! first mention it, with the currently open period (fetched separately)
//! prepended when no record belongs to it yet.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::dto::CommissionRecord;
use crate::domain::a001_commission_period::aggregate::OpenPeriod;

const CURRENT_SUFFIX: &str = " (Current)";
const ALL_VALUE: &str = "all";

/// Composite key `"{period_start}_{period_end}"`
///
/// `%` and `_` inside either bound are percent-encoded, so the separator
/// occurs exactly once and distinct pairs never share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodKey(String);

impl PeriodKey {
    pub fn new(period_start: &str, period_end: &str) -> Self {
        Self(format!("{}_{}", encode_bound(period_start), encode_bound(period_end)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn encode_bound(bound: &str) -> String {
    bound.replace('%', "%25").replace('_', "%5F")
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entry of the period filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub key: PeriodKey,
    pub label: String,
    pub period_start: String,
    pub period_end: String,
}

impl Period {
    pub fn new(period_start: &str, period_end: &str) -> Self {
        Self {
            key: PeriodKey::new(period_start, period_end),
            label: format!("{} – {}", period_start, period_end),
            period_start: period_start.to_string(),
            period_end: period_end.to_string(),
        }
    }

    /// Entry for the open period, labelled "(Current)"
    pub fn current(open: &OpenPeriod) -> Self {
        let mut period = Self::new(&open.period_start, &open.period_end);
        period.label.push_str(CURRENT_SUFFIX);
        period
    }
}

/// Which rows the table shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PeriodSelection {
    #[default]
    All,
    Period(PeriodKey),
}

impl PeriodSelection {
    /// Decode the value of the `<select>` control
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL_VALUE {
            Self::All
        } else {
            Self::Period(PeriodKey(value.to_string()))
        }
    }

    /// Encode for the `<select>` control
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_VALUE,
            Self::Period(key) => key.as_str(),
        }
    }
}

/// One `Period` per distinct `(period_start, period_end)` pair, first occurrence wins
pub fn derive_distinct_periods(records: &[CommissionRecord]) -> Vec<Period> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert((record.period_start.as_str(), record.period_end.as_str())))
        .map(|record| Period::new(&record.period_start, &record.period_end))
        .collect()
}

/// Prepend the open period unless it is absent or already listed
pub fn merge_open_period(periods: Vec<Period>, open: Option<&OpenPeriod>) -> Vec<Period> {
    let Some(open) = open else {
        return periods;
    };
    let key = PeriodKey::new(&open.period_start, &open.period_end);
    if periods.iter().any(|p| p.key == key) {
        return periods;
    }

    let mut merged = Vec::with_capacity(periods.len() + 1);
    merged.push(Period::current(open));
    merged.extend(periods);
    merged
}

/// Derive and merge in one step, as the filter control needs
pub fn period_options(records: &[CommissionRecord], open: Option<&OpenPeriod>) -> Vec<Period> {
    merge_open_period(derive_distinct_periods(records), open)
}

/// Records of the selected period in their original order
pub fn filter_by_period(
    records: &[CommissionRecord],
    selection: &PeriodSelection,
) -> Vec<CommissionRecord> {
    match selection {
        PeriodSelection::All => records.to_vec(),
        PeriodSelection::Period(key) => records
            .iter()
            .filter(|record| record.period_key() == *key)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, start: &str, end: &str) -> CommissionRecord {
        CommissionRecord {
            id,
            marketer: format!("marketer-{}", id),
            total_commissionable_amount: 1000.0 * id as f64,
            commission_percentage: 2.0,
            commission_earned: 20.0 * id as f64,
            calculated_at: None,
            period_start: start.into(),
            period_end: end.into(),
            commission_period: None,
        }
    }

    fn keys(periods: &[Period]) -> Vec<&str> {
        periods.iter().map(|p| p.key.as_str()).collect()
    }

    #[test]
    fn empty_input_yields_no_periods() {
        assert!(derive_distinct_periods(&[]).is_empty());
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let records = vec![
            record(1, "2025-01", "2025-03"),
            record(2, "2025-01", "2025-03"),
            record(3, "2025-04", "2025-06"),
        ];
        let periods = derive_distinct_periods(&records);
        assert_eq!(keys(&periods), vec!["2025-01_2025-03", "2025-04_2025-06"]);
    }

    #[test]
    fn later_duplicates_are_dropped_even_when_interleaved() {
        let records = vec![
            record(1, "2025-04", "2025-06"),
            record(2, "2025-01", "2025-03"),
            record(3, "2025-04", "2025-06"),
            record(4, "2024-10", "2024-12"),
            record(5, "2025-01", "2025-03"),
        ];
        let periods = derive_distinct_periods(&records);
        assert!(periods.len() <= records.len());
        assert_eq!(
            keys(&periods),
            vec!["2025-04_2025-06", "2025-01_2025-03", "2024-10_2024-12"]
        );
        let unique: HashSet<_> = periods.iter().map(|p| p.key.clone()).collect();
        assert_eq!(unique.len(), periods.len());
    }

    #[test]
    fn same_start_different_end_are_distinct() {
        let records = vec![
            record(1, "2025-01-01", "2025-03-31"),
            record(2, "2025-01-01", "2025-02-28"),
        ];
        assert_eq!(derive_distinct_periods(&records).len(), 2);
    }

    #[test]
    fn underscores_in_bounds_keep_pairs_apart() {
        let records = vec![record(1, "a_b", "c"), record(2, "a", "b_c")];
        let periods = derive_distinct_periods(&records);
        assert_eq!(periods.len(), 2);
        assert_ne!(periods[0].key, periods[1].key);

        let selection = PeriodSelection::parse(PeriodKey::new("a_b", "c").as_str());
        let ids: Vec<_> = filter_by_period(&records, &selection)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn absent_open_period_leaves_list_unchanged() {
        let periods = derive_distinct_periods(&[record(1, "2025-01", "2025-03")]);
        assert_eq!(merge_open_period(periods.clone(), None), periods);
    }

    #[test]
    fn known_open_period_is_not_duplicated() {
        let periods = vec![Period::new("2025-01", "2025-03")];
        let open = OpenPeriod::new("2025-01", "2025-03");
        let merged = merge_open_period(periods.clone(), Some(&open));
        assert_eq!(merged, periods);
        assert!(!merged[0].label.ends_with(CURRENT_SUFFIX));
    }

    #[test]
    fn new_open_period_is_prepended_as_current() {
        let open = OpenPeriod::new("2025-04", "2025-06");
        let merged = merge_open_period(Vec::new(), Some(&open));
        assert_eq!(merged.len(), 1);
        assert!(merged[0].label.contains("(Current)"));
        assert_eq!(merged[0].key.as_str(), "2025-04_2025-06");

        let merged = merge_open_period(vec![Period::new("2025-01", "2025-03")], Some(&open));
        assert_eq!(keys(&merged), vec!["2025-04_2025-06", "2025-01_2025-03"]);
        assert!(merged[0].label.ends_with(CURRENT_SUFFIX));
    }

    #[test]
    fn period_options_compose_derive_and_merge() {
        let records = vec![record(1, "2025-01", "2025-03"), record(2, "2025-01", "2025-03")];
        let open = OpenPeriod::new("2025-04", "2025-06");
        let options = period_options(&records, Some(&open));
        assert_eq!(keys(&options), vec!["2025-04_2025-06", "2025-01_2025-03"]);
    }

    #[test]
    fn filter_all_returns_everything() {
        let records = vec![record(1, "2025-01", "2025-03"), record(2, "2025-04", "2025-06")];
        assert_eq!(filter_by_period(&records, &PeriodSelection::All), records);
    }

    #[test]
    fn filter_by_key_preserves_order() {
        let records = vec![
            record(1, "2025-01", "2025-03"),
            record(2, "2025-04", "2025-06"),
            record(3, "2025-01", "2025-03"),
        ];
        let selection = PeriodSelection::Period(PeriodKey::new("2025-01", "2025-03"));
        let ids: Vec<_> = filter_by_period(&records, &selection)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn unknown_key_yields_empty() {
        let records = vec![record(1, "2025-01", "2025-03")];
        let selection = PeriodSelection::parse("1999-01_1999-03");
        assert!(filter_by_period(&records, &selection).is_empty());
    }

    #[test]
    fn selection_round_trips_through_select_value() {
        assert_eq!(PeriodSelection::parse("all"), PeriodSelection::All);
        assert_eq!(PeriodSelection::parse(""), PeriodSelection::All);
        let selection = PeriodSelection::parse("2025-01_2025-03");
        assert_eq!(
            selection,
            PeriodSelection::Period(PeriodKey::new("2025-01", "2025-03"))
        );
        assert_eq!(selection.as_value(), "2025-01_2025-03");
        assert_eq!(PeriodSelection::All.as_value(), "all");
    }
}
