use serde::{Deserialize, Serialize};

use crate::domain::common::{FinanceResource, HasId, RecordId};
use crate::shared::format::{date_part, format_datetime, parse_datetime};
use crate::shared::metadata::{ColumnSpec, FieldKind, FieldSpec, FormValues, ValidationRules};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodStatus {
    #[default]
    Opened,
    Closed,
}

impl PeriodStatus {
    pub const ALL: &'static [&'static str] = &["Opened", "Closed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Opened => "Opened",
            Self::Closed => "Closed",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim() {
            "Opened" => Ok(Self::Opened),
            "Closed" => Ok(Self::Closed),
            other => Err(format!("Unknown period status: {}", other)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Commission calculation window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionPeriod {
    pub id: RecordId,
    pub start_date: String,
    pub end_date: String,
    pub status: PeriodStatus,
}

impl CommissionPeriod {
    pub fn is_open(&self) -> bool {
        self.status == PeriodStatus::Opened
    }

    /// The `(period_start, period_end)` pair commission records are tagged with
    pub fn as_open_period(&self) -> OpenPeriod {
        OpenPeriod {
            period_start: date_part(&self.start_date).to_string(),
            period_end: date_part(&self.end_date).to_string(),
            id: Some(self.id),
        }
    }
}

/// The currently active period as served by `/commission_period/open`
///
/// Only the two bounds matter to the period filter; the id is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenPeriod {
    pub period_start: String,
    pub period_end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
}

impl OpenPeriod {
    pub fn new(period_start: impl Into<String>, period_end: impl Into<String>) -> Self {
        Self {
            period_start: period_start.into(),
            period_end: period_end.into(),
            id: None,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionPeriodDto {
    pub start_date: String,
    pub end_date: String,
    pub status: PeriodStatus,
}

impl CommissionPeriodDto {
    pub fn validate(&self) -> Result<(), String> {
        let start = parse_datetime(&self.start_date)
            .ok_or_else(|| format!("Invalid start date: {}", self.start_date))?;
        let end = parse_datetime(&self.end_date)
            .ok_or_else(|| format!("Invalid end date: {}", self.end_date))?;
        if end <= start {
            return Err("End Date must be after Start Date".into());
        }
        Ok(())
    }
}

/// Normalize a `datetime-local` form value to an RFC 3339 UTC timestamp
fn to_utc_timestamp(raw: &str, label: &str) -> Result<String, String> {
    parse_datetime(raw)
        .map(|dt| dt.and_utc().format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .ok_or_else(|| format!("{} is not a valid date", label))
}

/// `datetime-local` inputs take `YYYY-MM-DDTHH:MM`
fn to_input_value(timestamp: &str) -> String {
    timestamp.chars().take(16).collect()
}

const START_DATE: FieldSpec = FieldSpec {
    name: "start_date",
    label: "Start Date",
    kind: FieldKind::DateTime,
    validation: ValidationRules::required(),
};

const END_DATE: FieldSpec = FieldSpec {
    name: "end_date",
    label: "End Date",
    kind: FieldKind::DateTime,
    validation: ValidationRules::required(),
};

const STATUS: FieldSpec = FieldSpec {
    name: "status",
    label: "Status",
    kind: FieldKind::Select(PeriodStatus::ALL),
    validation: ValidationRules::required(),
};

const FIELDS: &[FieldSpec] = &[START_DATE, END_DATE, STATUS];

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::left("ID"),
    ColumnSpec::right("Start Date"),
    ColumnSpec::right("End Date"),
    ColumnSpec::right("Status"),
];

impl HasId for CommissionPeriod {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl FinanceResource for CommissionPeriod {
    type Dto = CommissionPeriodDto;

    fn resource_path() -> &'static str {
        "/api/finance/commission_period"
    }

    fn element_name() -> &'static str {
        "Commission Period"
    }

    fn list_name() -> &'static str {
        "Commission Periods"
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns() -> &'static [ColumnSpec] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format_datetime(&self.start_date),
            format_datetime(&self.end_date),
            self.status.as_str().to_string(),
        ]
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("start_date", to_input_value(&self.start_date))
            .with("end_date", to_input_value(&self.end_date))
            .with("status", self.status.as_str())
    }

    fn dto_from_form(form: &FormValues) -> Result<Self::Dto, String> {
        let dto = CommissionPeriodDto {
            start_date: to_utc_timestamp(&START_DATE.read_string(form)?, START_DATE.label)?,
            end_date: to_utc_timestamp(&END_DATE.read_string(form)?, END_DATE.label)?,
            status: PeriodStatus::parse(&STATUS.read_string(form)?)?,
        };
        dto.validate()?;
        Ok(dto)
    }
}
