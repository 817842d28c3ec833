//! Static form descriptors for entities
//!
//! Every editable entity declares its form as a table of `FieldDescriptor`s grouped
//! into `FormSection`s. A generic renderer walks the table and reads/writes values
//! through `EditableForm`, so no per-entity input markup is needed.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::EditableForm;
//!
//! for section in Customer::sections() {
//!     for field in section.fields {
//!         println!("{}: {}", field.label, customer.field_value(field.name));
//!     }
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use types::{EditableForm, FieldDescriptor, FormSection};
pub use validation::ValidationRules;
pub(crate) use types::{number_text, parse_number, parse_optional_number};
