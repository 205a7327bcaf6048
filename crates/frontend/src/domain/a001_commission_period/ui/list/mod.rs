use crate::shared::components::crud_table::CrudTable;
use contracts::domain::a001_commission_period::aggregate::CommissionPeriod;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CommissionPeriodList() -> impl IntoView {
    view! { <CrudTable<CommissionPeriod> /> }
}
