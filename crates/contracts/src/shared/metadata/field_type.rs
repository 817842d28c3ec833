//! Value kinds of form fields

/// Kind of value a form field holds; selects the input widget and parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,
    Email,
    Phone,
}

impl FieldKind {
    /// HTML input type for the field
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Email => "email",
            Self::Phone => "tel",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number)
    }
}
