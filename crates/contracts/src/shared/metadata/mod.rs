//! Form and table schema for finance resources
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::common::FinanceResource;
//!
//! for field in CommissionRange::fields() {
//!     println!("{}: {}", field.name, field.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::{Align, FieldKind};
pub use types::{ColumnSpec, FieldSpec, FormValues};
pub use validation::ValidationRules;
