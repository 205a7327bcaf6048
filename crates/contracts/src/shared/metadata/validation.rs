//! Validation rules for form fields

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationRules {
    pub required: bool,
    /// Inclusive lower bound
    pub min: Option<f64>,
    /// Exclusive lower bound (`value > bound`)
    pub greater_than: Option<f64>,
    pub max: Option<f64>,
}

impl ValidationRules {
    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            greater_than: None,
            max: None,
        }
    }

    /// Required strictly positive number
    pub const fn positive() -> Self {
        Self {
            required: true,
            min: None,
            greater_than: Some(0.0),
            max: None,
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", field_label));
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{} must be a valid number", field_label));
        }

        if let Some(bound) = self.greater_than {
            if value <= bound {
                return Err(format!("{} must be greater than {}", field_label, bound));
            }
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }

    /// Parse a form string as a number and validate it
    pub fn parse_number(&self, raw: &str, field_label: &str) -> Result<f64, String> {
        self.validate_string(raw, field_label)?;
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("{} must be a valid number", field_label))?;
        self.validate_number(value, field_label)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_negative() {
        let rules = ValidationRules::positive();
        assert!(rules.parse_number("0", "Percentage").is_err());
        assert!(rules.parse_number("-5", "Percentage").is_err());
        assert_eq!(rules.parse_number(" 12.5 ", "Percentage"), Ok(12.5));
    }

    #[test]
    fn parse_number_reports_field_label() {
        let rules = ValidationRules::positive();
        let err = rules.parse_number("abc", "Lower Limit").unwrap_err();
        assert_eq!(err, "Lower Limit must be a valid number");
        let err = rules.parse_number("", "Lower Limit").unwrap_err();
        assert_eq!(err, "Lower Limit is required");
    }

    #[test]
    fn required_string_rejects_blank() {
        assert!(ValidationRules::required().validate_string("Opened", "Status").is_ok());
        assert!(ValidationRules::required()
            .validate_string("   ", "Status")
            .is_err());
    }

    #[test]
    fn non_finite_numbers_rejected() {
        let rules = ValidationRules::positive();
        assert!(rules.validate_number(f64::NAN, "Amount").is_err());
        assert!(rules.parse_number("inf", "Amount").is_err());
    }
}
