pub mod amount;
pub mod fetched;
pub mod format;
pub mod list_state;
pub mod metadata;
