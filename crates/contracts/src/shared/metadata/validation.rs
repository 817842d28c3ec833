//! Validation rules for form fields

use crate::domain::common::ValidationError;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Numeric range, both ends inclusive
    pub const fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::none()
        }
    }

    /// Numeric lower bound only
    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            ..Self::none()
        }
    }

    pub const fn max_length(max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..Self::none()
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &'static str) -> Result<(), ValidationError> {
        if self.required && value.trim().is_empty() {
            return Err(ValidationError::Required(field_label));
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(ValidationError::TooShort {
                    field: field_label,
                    min,
                });
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(ValidationError::TooLong {
                    field: field_label,
                    max,
                });
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &'static str) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotANumber(field_label));
        }

        let out_of_range = self.min.map_or(false, |min| value < min)
            || self.max.map_or(false, |max| value > max);
        if !out_of_range {
            return Ok(());
        }

        match (self.min, self.max) {
            (Some(min), Some(max)) => Err(ValidationError::OutOfRange {
                field: field_label,
                min,
                max,
            }),
            (Some(min), None) if min == 0.0 => Err(ValidationError::Negative(field_label)),
            _ => Err(ValidationError::OutOfRange {
                field: field_label,
                min: self.min.unwrap_or(f64::MIN),
                max: self.max.unwrap_or(f64::MAX),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Name"),
            Err(ValidationError::Required("Name"))
        );
        assert!(rules.validate_string("Green Acres", "Name").is_ok());
        assert!(ValidationRules::none().validate_string("", "Name").is_ok());
    }

    #[test]
    fn test_max_length_counts_chars() {
        let rules = ValidationRules::max_length(5);
        assert!(rules.validate_string("12345", "Zip").is_ok());
        assert_eq!(
            rules.validate_string("123456", "Zip"),
            Err(ValidationError::TooLong { field: "Zip", max: 5 })
        );
    }

    #[test]
    fn test_range_is_inclusive() {
        let rules = ValidationRules::range(-90.0, 90.0);
        assert!(rules.validate_number(90.0, "Latitude").is_ok());
        assert!(rules.validate_number(-90.0, "Latitude").is_ok());
        assert_eq!(
            rules.validate_number(90.5, "Latitude"),
            Err(ValidationError::OutOfRange {
                field: "Latitude",
                min: -90.0,
                max: 90.0
            })
        );
    }

    #[test]
    fn test_non_negative_and_nan() {
        let rules = ValidationRules::at_least(0.0);
        assert_eq!(
            rules.validate_number(-1.0, "Extent"),
            Err(ValidationError::Negative("Extent"))
        );
        assert_eq!(
            rules.validate_number(f64::NAN, "Extent"),
            Err(ValidationError::NotANumber("Extent"))
        );
    }
}
