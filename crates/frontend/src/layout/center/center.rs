use crate::domain::a001_commission_period::ui::list::CommissionPeriodList;
use crate::domain::a002_commission_range::ui::list::CommissionRangeList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_marketer_commission::ui::list::MarketerCommissionList;
use crate::projections::p901_lead_payments::ui::list::LeadPaymentsList;
use crate::projections::p902_refund_transaction::ui::list::RefundList;
use contracts::system::shell::Page;
use leptos::prelude::*;

/// Content area showing the page selected in the shell
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let page = Memo::new(move |_| ctx.current_page());

    view! {
        <div data-zone="center" class="content-area">
            {move || match page.get() {
                Page::LeadsPayments => view! { <LeadPaymentsList /> }.into_any(),
                Page::CommissionPeriods => view! { <CommissionPeriodList /> }.into_any(),
                Page::CommissionRanges => view! { <CommissionRangeList /> }.into_any(),
                Page::MarketerCommissions => view! { <MarketerCommissionList /> }.into_any(),
                Page::Refunds => view! { <RefundList /> }.into_any(),
            }}
        </div>
    }
}
