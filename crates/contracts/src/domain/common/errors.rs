use thiserror::Error;

/// Form-level validation failure.
///
/// Messages are shown verbatim in a blocking alert, so they read as full sentences.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A single mandatory field is blank
    #[error("{0} is required.")]
    Required(&'static str),

    /// A group of mandatory fields, at least one of them blank
    #[error("{0} are required.")]
    RequiredAll(&'static str),

    #[error("{0} must be greater than 0.")]
    NotPositive(&'static str),

    #[error("{0} must not be negative.")]
    Negative(&'static str),

    #[error("{0} must be a number.")]
    NotANumber(&'static str),

    #[error("{field} must be between {min} and {max}.")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} must contain at least {min} characters.")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must not exceed {max} characters.")]
    TooLong { field: &'static str, max: usize },

    #[error("Min Size must not be greater than Max Size.")]
    InvalidSizeRange,

    #[error("Valid From must not be later than Valid To.")]
    InvalidValidityWindow,
}

/// Store mutation rejected; the backing list is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{collection} with ID {id} already exists")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    #[error("{collection} with ID {id} not found")]
    NotFound {
        collection: &'static str,
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_match_form_alerts() {
        assert_eq!(ValidationError::Required("Code").to_string(), "Code is required.");
        assert_eq!(
            ValidationError::RequiredAll("Name and Email").to_string(),
            "Name and Email are required."
        );
        assert_eq!(
            ValidationError::NotPositive("Discount Value").to_string(),
            "Discount Value must be greater than 0."
        );
    }

    #[test]
    fn test_store_error_messages() {
        let err = StoreError::DuplicateId {
            collection: "customer",
            id: "c1".into(),
        };
        assert_eq!(err.to_string(), "customer with ID c1 already exists");
    }
}
