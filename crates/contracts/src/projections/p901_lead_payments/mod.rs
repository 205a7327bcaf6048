pub mod dto;

pub use dto::{search_leads, LeadCommission, PaymentHistory, PaymentHistoryQuery};
