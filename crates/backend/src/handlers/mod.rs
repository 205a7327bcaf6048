pub mod a001_commission_period;
pub mod a002_commission_range;
pub mod p900_marketer_commission;
pub mod p901_lead_payments;
pub mod p902_refund_transaction;
pub mod testdata;
