pub mod p900_marketer_commission;
pub mod p901_lead_payments;
pub mod p902_refund_transaction;
