use crate::shared::components::crud_table::CrudTable;
use contracts::domain::a002_commission_range::aggregate::CommissionRange;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CommissionRangeList() -> impl IntoView {
    view! { <CrudTable<CommissionRange> /> }
}
