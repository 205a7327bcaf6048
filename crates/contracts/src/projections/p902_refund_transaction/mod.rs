pub mod dto;

pub use dto::RefundTransaction;
