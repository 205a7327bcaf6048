//! Marketer commissions with a period filter
//!
//! Records and the open period are fetched independently; the filter options
//! and the visible rows are memos over those two signals and the selection.

use contracts::domain::a001_commission_period::aggregate::OpenPeriod;
use contracts::projections::p900_marketer_commission::dto::CommissionRecord;
use contracts::projections::p900_marketer_commission::period::{
    filter_by_period, period_options, PeriodSelection,
};
use contracts::shared::format::{format_datetime, format_money, format_percent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::projections::p900_marketer_commission::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table_cell_money::TableCellMoney;

const COLUMNS: usize = 9;

#[component]
pub fn MarketerCommissionList() -> impl IntoView {
    let records = RwSignal::new(Vec::<CommissionRecord>::new());
    let loading = RwSignal::new(true);
    let open_period = RwSignal::new(None::<OpenPeriod>);
    let selection = RwSignal::new(PeriodSelection::All);

    spawn_local(async move {
        let rows = api::fetch_commissions()
            .await
            .unwrap_or_default_logged("Error fetching commissions");
        records.set(rows);
        loading.set(false);
    });

    spawn_local(async move {
        let open = api::fetch_open_period()
            .await
            .loaded_or_log("Error fetching open period");
        open_period.set(open);
    });

    let options = Memo::new(move |_| {
        records.with(|rows| open_period.with(|open| period_options(rows, open.as_ref())))
    });
    let visible = Memo::new(move |_| {
        records.with(|rows| selection.with(|selected| filter_by_period(rows, selected)))
    });
    let total_earned = Memo::new(move |_| {
        visible.with(|rows| rows.iter().map(|r| r.commission_earned).sum::<f64>())
    });

    let empty_message = move || {
        if selection.with(|s| *s == PeriodSelection::All) {
            "No commissions found."
        } else {
            "No commissions for the selected period."
        }
    };

    view! {
        <div class="page">
            <PageHeader
                title="Marketer Commissions"
                subtitle=Signal::derive(move || {
                    Some(format!("Total earned: {}", format_money(total_earned.get())))
                })
            >
                <label class="form__label" for="period-filter">"Period"</label>
                <select
                    id="period-filter"
                    class="form__select"
                    prop:value=move || selection.with(|s| s.as_value().to_string())
                    on:change=move |ev| selection.set(PeriodSelection::parse(&event_target_value(&ev)))
                >
                    <option value="all">"All Periods"</option>
                    <For
                        each=move || options.get()
                        key=|period| period.key.clone()
                        children=|period| view! {
                            <option value=period.key.to_string()>{period.label}</option>
                        }
                    />
                </select>
            </PageHeader>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"Marketer"</th>
                            <th class="table__header-cell table__header-cell--right">"Total Amount (KES)"</th>
                            <th class="table__header-cell table__header-cell--right">"Commission %"</th>
                            <th class="table__header-cell table__header-cell--right">"Commission Earned (KES)"</th>
                            <th class="table__header-cell table__header-cell--right">"Calculated At"</th>
                            <th class="table__header-cell table__header-cell--right">"Period Start"</th>
                            <th class="table__header-cell table__header-cell--right">"Period End"</th>
                            <th class="table__header-cell table__header-cell--right">"Commission Period"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan=COLUMNS.to_string()>"Loading commissions..."</td></tr>
                                }.into_any();
                            }
                            let rows = visible.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan=COLUMNS.to_string()>{empty_message()}</td></tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|row| view! {
                                <tr class="table__row">
                                    <th class="table__cell table__cell--bold" scope="row">{row.id}</th>
                                    <td class="table__cell">{row.marketer}</td>
                                    <TableCellMoney value=row.total_commissionable_amount />
                                    <td class="table__cell table__cell--right">{format_percent(row.commission_percentage)}</td>
                                    <TableCellMoney value=row.commission_earned bold=true />
                                    <td class="table__cell table__cell--right">
                                        {row.calculated_at.as_deref().map(format_datetime).unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell table__cell--right">{row.period_start}</td>
                                    <td class="table__cell table__cell--right">{row.period_end}</td>
                                    <td class="table__cell table__cell--right">
                                        {row.commission_period.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())}
                                    </td>
                                </tr>
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
