use crate::shared::metadata::{FieldDescriptor, FieldKind, ValidationRules};
use serde::{Deserialize, Serialize};

/// Postal address shared by layouts and customers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub addressline1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addressline2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Address fields in form order
pub const ADDRESS_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("addressline1", "Address Line 1", FieldKind::Text),
    FieldDescriptor::new("addressline2", "Address Line 2", FieldKind::Text),
    FieldDescriptor::new("city", "City", FieldKind::Text),
    FieldDescriptor::new("state", "State", FieldKind::Text),
    FieldDescriptor::new("zip", "Zip", FieldKind::Text)
        .with_validation(ValidationRules::max_length(10)),
    FieldDescriptor::new("country", "Country", FieldKind::Text),
];

impl Address {
    /// Single-line form: `line1[, line2], city, state zip, country`
    pub fn format(&self) -> String {
        let line2 = match self.addressline2.as_deref() {
            Some(l) if !l.is_empty() => format!(", {}", l),
            _ => String::new(),
        };
        format!(
            "{}{}, {}, {} {}, {}",
            self.addressline1, line2, self.city, self.state, self.zip, self.country
        )
    }

    /// Read an address field by descriptor name
    pub fn field_value(&self, name: &str) -> Option<String> {
        let value = match name {
            "addressline1" => self.addressline1.clone(),
            "addressline2" => self.addressline2.clone().unwrap_or_default(),
            "city" => self.city.clone(),
            "state" => self.state.clone(),
            "zip" => self.zip.clone(),
            "country" => self.country.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Write an address field by descriptor name; returns false for unknown names
    pub fn set_field_value(&mut self, name: &str, value: &str) -> bool {
        match name {
            "addressline1" => self.addressline1 = value.to_string(),
            "addressline2" => {
                self.addressline2 = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "city" => self.city = value.to_string(),
            "state" => self.state = value.to_string(),
            "zip" => self.zip = value.to_string(),
            "country" => self.country = value.to_string(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address {
            addressline1: "123 Main St".into(),
            addressline2: None,
            city: "Anytown".into(),
            state: "CA".into(),
            zip: "12345".into(),
            country: "USA".into(),
        }
    }

    #[test]
    fn test_format_without_second_line() {
        assert_eq!(sample().format(), "123 Main St, Anytown, CA 12345, USA");
    }

    #[test]
    fn test_format_with_second_line() {
        let mut a = sample();
        a.addressline2 = Some("Suite 4".into());
        assert_eq!(a.format(), "123 Main St, Suite 4, Anytown, CA 12345, USA");

        a.addressline2 = Some(String::new());
        assert_eq!(a.format(), "123 Main St, Anytown, CA 12345, USA");
    }

    #[test]
    fn test_field_access_by_name() {
        let mut a = sample();
        assert!(a.set_field_value("city", "Rivertown"));
        assert!(a.set_field_value("addressline2", ""));
        assert!(!a.set_field_value("latitude", "1"));
        assert_eq!(a.field_value("city").as_deref(), Some("Rivertown"));
        assert_eq!(a.addressline2, None);
        assert_eq!(a.field_value("name"), None);
    }
}
