use crate::domain::common::address::ADDRESS_FIELDS;
use crate::domain::common::{Address, AggregateId, AggregateRoot, ValidationError};
use crate::shared::format::format_phone_number;
use crate::shared::metadata::{EditableForm, FieldDescriptor, FieldKind, FormSection};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl AggregateId for CustomerId {
    fn as_str(&self) -> &str {
        &self.0
    }

    fn from_string(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Buyer that plots can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(flatten)]
    pub address: Address,
}

impl Customer {
    pub fn new_for_insert() -> Self {
        Self {
            id: CustomerId::new_v4(),
            ..Self::default()
        }
    }

    pub fn display_phone(&self) -> String {
        format_phone_number(&self.phone)
    }

    /// Validate before saving
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ValidationError::RequiredAll("Name and Email"));
        }
        self.validate_fields()
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

const CONTACT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("name", "Name", FieldKind::Text),
    FieldDescriptor::new("email", "Email", FieldKind::Email),
    FieldDescriptor::new("phone", "Phone", FieldKind::Phone).with_placeholder("1234567890"),
];

const CUSTOMER_SECTIONS: &[FormSection] = &[
    FormSection {
        title: "Contact",
        icon: "user",
        fields: CONTACT_FIELDS,
    },
    FormSection {
        title: "Address",
        icon: "map-pin",
        fields: ADDRESS_FIELDS,
    },
];

impl EditableForm for Customer {
    fn sections() -> &'static [FormSection] {
        CUSTOMER_SECTIONS
    }

    fn field_value(&self, name: &str) -> String {
        match name {
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            other => self.address.field_value(other).unwrap_or_default(),
        }
    }

    fn set_field_value(&mut self, name: &str, value: &str) {
        match name {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            other => {
                self.address.set_field_value(other, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_email_required() {
        let mut c = Customer::new_for_insert();
        assert_eq!(
            c.validate().unwrap_err().to_string(),
            "Name and Email are required."
        );

        c.name = "John Doe".into();
        assert!(c.validate().is_err());

        c.email = "john.doe@example.com".into();
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn test_zip_length_checked() {
        let mut c = Customer::new_for_insert();
        c.name = "John".into();
        c.email = "j@example.com".into();
        c.set_field_value("zip", "12345678901");
        assert_eq!(
            c.validate(),
            Err(ValidationError::TooLong { field: "Zip", max: 10 })
        );
    }

    #[test]
    fn test_display_phone() {
        let c = Customer {
            phone: "1234567890".into(),
            ..Customer::default()
        };
        assert_eq!(c.display_phone(), "+1 (123) - 456 - 7890");
    }
}
