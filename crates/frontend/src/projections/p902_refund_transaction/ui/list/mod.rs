use contracts::projections::p902_refund_transaction::dto::RefundTransaction;
use contracts::shared::fetched::Fetched;
use contracts::shared::format::format_datetime;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::projections::p902_refund_transaction::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table_cell_money::TableCellMoney;

const COLUMNS: usize = 6;

#[component]
pub fn RefundList() -> impl IntoView {
    let refunds = RwSignal::new(None::<Fetched<Vec<RefundTransaction>>>);

    spawn_local(async move {
        let fetched = api::fetch_refunds().await;
        if let Some(reason) = fetched.failure() {
            log::error!("Error fetching refunds: {}", reason);
        }
        refunds.set(Some(fetched));
    });

    view! {
        <div class="page">
            <PageHeader title="Refunds" />

            {move || refunds.with(|r| r.as_ref().and_then(|f| f.failure().map(str::to_string))).map(|e| view! {
                <div class="alert alert--error">{format!("Failed to load refunds: {}", e)}</div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Marketer"</th>
                            <th class="table__header-cell">"Lead File"</th>
                            <th class="table__header-cell table__header-cell--right">"Previous Total Paid"</th>
                            <th class="table__header-cell table__header-cell--right">"New Total Paid"</th>
                            <th class="table__header-cell table__header-cell--right">"Refunded"</th>
                            <th class="table__header-cell table__header-cell--right">"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match refunds.get() {
                            None => view! {
                                <tr><td class="table__cell table__cell--empty" colspan=COLUMNS.to_string()>"Loading refunds..."</td></tr>
                            }.into_any(),
                            Some(fetched) => {
                                let rows = fetched.loaded().unwrap_or_default();
                                if rows.is_empty() {
                                    return view! {
                                        <tr><td class="table__cell table__cell--empty" colspan=COLUMNS.to_string()>"No refunds found."</td></tr>
                                    }.into_any();
                                }
                                rows.into_iter().map(|refund| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{refund.marketer.clone()}</td>
                                        <td class="table__cell">{refund.lead_file.clone()}</td>
                                        <TableCellMoney value=refund.previous_total_paid />
                                        <TableCellMoney value=refund.new_total_paid />
                                        <TableCellMoney value=refund.refunded_amount() bold=true />
                                        <td class="table__cell table__cell--right">{format_datetime(&refund.recorded_at)}</td>
                                    </tr>
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
