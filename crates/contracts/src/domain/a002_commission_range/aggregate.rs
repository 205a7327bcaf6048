use serde::{Deserialize, Serialize};

use crate::domain::common::{FinanceResource, HasId, RecordId};
use crate::shared::amount::deserialize_amount;
use crate::shared::format::{format_money, format_percent};
use crate::shared::metadata::{ColumnSpec, FieldKind, FieldSpec, FormValues, ValidationRules};

// ============================================================================
// Aggregate
// ============================================================================

/// Commission structure band: sales between the limits earn `percentage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRange {
    pub id: RecordId,
    #[serde(deserialize_with = "deserialize_amount")]
    pub lower_limit: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub upper_limit: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub percentage: f64,
}

impl CommissionRange {
    /// Whether a commissionable amount falls into this band
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.lower_limit && amount <= self.upper_limit
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRangeDto {
    pub lower_limit: f64,
    pub upper_limit: f64,
    pub percentage: f64,
}

impl CommissionRangeDto {
    pub fn validate(&self) -> Result<(), String> {
        for (value, field) in [
            (self.lower_limit, &LOWER_LIMIT),
            (self.upper_limit, &UPPER_LIMIT),
            (self.percentage, &PERCENTAGE),
        ] {
            field.validation.validate_number(value, field.label)?;
        }
        if self.lower_limit > self.upper_limit {
            return Err("Lower Limit must not exceed Upper Limit".into());
        }
        Ok(())
    }
}

const LOWER_LIMIT: FieldSpec = FieldSpec {
    name: "lower_limit",
    label: "Lower Limit (KES)",
    kind: FieldKind::Number { step: "0.01" },
    validation: ValidationRules::positive(),
};

const UPPER_LIMIT: FieldSpec = FieldSpec {
    name: "upper_limit",
    label: "Upper Limit (KES)",
    kind: FieldKind::Number { step: "0.01" },
    validation: ValidationRules::positive(),
};

const PERCENTAGE: FieldSpec = FieldSpec {
    name: "percentage",
    label: "Percentage (%)",
    kind: FieldKind::Number { step: "0.01" },
    validation: ValidationRules {
        max: Some(100.0),
        ..ValidationRules::positive()
    },
};

const FIELDS: &[FieldSpec] = &[LOWER_LIMIT, UPPER_LIMIT, PERCENTAGE];

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::left("ID"),
    ColumnSpec::right("Lower Limit"),
    ColumnSpec::right("Upper Limit"),
    ColumnSpec::right("Percentage"),
];

impl HasId for CommissionRange {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl FinanceResource for CommissionRange {
    type Dto = CommissionRangeDto;

    fn resource_path() -> &'static str {
        "/api/finance/commission_structure"
    }

    fn element_name() -> &'static str {
        "Commission Range"
    }

    fn list_name() -> &'static str {
        "Commission Ranges"
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
            format_money(self.lower_limit),
            format_money(self.upper_limit),
            format_percent(self.percentage),
        ]
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("lower_limit", self.lower_limit.to_string())
            .with("upper_limit", self.upper_limit.to_string())
            .with("percentage", self.percentage.to_string())
    }

    fn dto_from_form(form: &FormValues) -> Result<Self::Dto, String> {
        let dto = CommissionRangeDto {
            lower_limit: LOWER_LIMIT.read_number(form)?,
            upper_limit: UPPER_LIMIT.read_number(form)?,
            percentage: PERCENTAGE.read_number(form)?,
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(lower: &str, upper: &str, percentage: &str) -> FormValues {
        FormValues::new()
            .with("lower_limit", lower)
            .with("upper_limit", upper)
            .with("percentage", percentage)
    }

    #[test]
    fn valid_form_parses_numbers() {
        let dto = CommissionRange::dto_from_form(&form("100000", "500000.50", "2.5")).unwrap();
        assert_eq!(
            dto,
            CommissionRangeDto {
                lower_limit: 100000.0,
                upper_limit: 500000.5,
                percentage: 2.5,
            }
        );
    }

    #[test]
    fn non_numeric_values_rejected() {
        let err = CommissionRange::dto_from_form(&form("abc", "10", "1")).unwrap_err();
        assert_eq!(err, "Lower Limit (KES) must be a valid number");
    }

    #[test]
    fn non_positive_values_rejected() {
        let err = CommissionRange::dto_from_form(&form("10", "0", "1")).unwrap_err();
        assert_eq!(err, "Upper Limit (KES) must be greater than 0");
        assert!(CommissionRange::dto_from_form(&form("10", "20", "-1")).is_err());
    }

    #[test]
    fn percentage_capped_at_hundred() {
        assert!(CommissionRange::dto_from_form(&form("10", "20", "100")).is_ok());
        assert!(CommissionRange::dto_from_form(&form("10", "20", "100.5")).is_err());
    }

    #[test]
    fn inverted_limits_rejected() {
        let err = CommissionRange::dto_from_form(&form("500", "100", "3")).unwrap_err();
        assert_eq!(err, "Lower Limit must not exceed Upper Limit");
    }

    #[test]
    fn decimal_strings_from_api_are_accepted() {
        let range: CommissionRange = serde_json::from_str(
            r#"{"id": 4, "lower_limit": "1000.00", "upper_limit": 5000, "percentage": "2.50"}"#,
        )
        .unwrap();
        assert_eq!(range.lower_limit, 1000.0);
        assert!(range.contains(2500.0));
        assert!(!range.contains(5000.01));
        assert_eq!(
            range.cells(),
            vec!["4", "KES 1,000.00", "KES 5,000.00", "2.50%"]
        );
    }

    #[test]
    fn edit_form_round_trips() {
        let range = CommissionRange {
            id: 1,
            lower_limit: 1.5,
            upper_limit: 20.0,
            percentage: 3.0,
        };
        let dto = CommissionRange::dto_from_form(&range.to_form()).unwrap();
        assert_eq!(
            dto,
            CommissionRangeDto {
                lower_limit: range.lower_limit,
                upper_limit: range.upper_limit,
                percentage: range.percentage,
            }
        );
    }
}
