//! Descriptor types and the generic form access trait

use super::field_type::FieldKind;
use super::validation::ValidationRules;
use crate::domain::common::ValidationError;

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Key passed to `EditableForm::field_value` / `set_field_value`
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
    pub read_only: bool,
    pub validation: ValidationRules,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            placeholder: None,
            read_only: false,
            validation: ValidationRules::none(),
        }
    }

    pub const fn with_validation(mut self, validation: ValidationRules) -> Self {
        self.validation = validation;
        self
    }

    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Check a raw input value against the field's rules
    pub fn validate(&self, raw: &str) -> Result<(), ValidationError> {
        self.validation.validate_string(raw, self.label)?;
        if self.kind.is_numeric() && !raw.trim().is_empty() {
            let value: f64 = raw
                .trim()
                .parse()
                .map_err(|_| ValidationError::NotANumber(self.label))?;
            self.validation.validate_number(value, self.label)?;
        }
        Ok(())
    }
}

/// Titled group of fields rendered as one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSection {
    pub title: &'static str,
    /// Icon name understood by the frontend icon helper
    pub icon: &'static str,
    pub fields: &'static [FieldDescriptor],
}

/// Entity editable through a descriptor-driven form
pub trait EditableForm {
    /// Sections in render order
    fn sections() -> &'static [FormSection];

    /// Current value of a field as input text; unknown names yield an empty string
    fn field_value(&self, name: &str) -> String;

    /// Apply raw input text to a field; unknown names are ignored
    fn set_field_value(&mut self, name: &str, value: &str);

    /// Run every descriptor's rules against the current values
    fn validate_fields(&self) -> Result<(), ValidationError> {
        for section in Self::sections() {
            for field in section.fields {
                field.validate(&self.field_value(field.name))?;
            }
        }
        Ok(())
    }
}

/// Parse a number field; blank input becomes 0, malformed text becomes NaN so that
/// validation reports it instead of saving a silent 0
pub(crate) fn parse_number(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }
    value.parse().unwrap_or(f64::NAN)
}

/// Parse an optional number field; blank or malformed input clears it
pub(crate) fn parse_optional_number(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

/// Render a number for an input without a trailing `.0`
pub(crate) fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_validates_numeric_text() {
        let field = FieldDescriptor::new("extent", "Extent", FieldKind::Number)
            .with_validation(ValidationRules::at_least(0.0));
        assert!(field.validate("12.5").is_ok());
        assert!(field.validate("").is_ok());
        assert_eq!(field.validate("abc"), Err(ValidationError::NotANumber("Extent")));
        assert_eq!(field.validate("-3"), Err(ValidationError::Negative("Extent")));
        assert_eq!(field.validate("inf"), Err(ValidationError::NotANumber("Extent")));
        assert_eq!(field.validate("1e400"), Err(ValidationError::NotANumber("Extent")));
        assert_eq!(field.validate("NaN"), Err(ValidationError::NotANumber("Extent")));
    }

    #[test]
    fn test_number_helpers() {
        assert_eq!(parse_number(" 4.5 "), 4.5);
        assert_eq!(parse_number("  "), 0.0);
        assert!(parse_number("x").is_nan());
        assert_eq!(parse_optional_number(""), None);
        assert_eq!(number_text(50.0), "50");
        assert_eq!(number_text(2.5), "2.5");
    }
}
