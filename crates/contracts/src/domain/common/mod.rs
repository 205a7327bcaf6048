//! Common types and traits for finance resources

pub mod finance_resource;

pub use finance_resource::{FinanceResource, HasId, RecordId};
