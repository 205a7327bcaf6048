pub mod dto;
pub mod period;

pub use dto::CommissionRecord;
pub use period::{
    derive_distinct_periods, filter_by_period, merge_open_period, period_options, Period,
    PeriodKey, PeriodSelection,
};
