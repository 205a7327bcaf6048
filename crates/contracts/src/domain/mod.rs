pub mod a001_commission_period;
pub mod a002_commission_range;
pub mod common;
