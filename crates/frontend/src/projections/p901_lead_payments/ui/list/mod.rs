//! Leads and payments
//!
//! Rows expand to show the lead's payment history, fetched the first time a
//! row is opened and kept for later toggles.

use contracts::projections::p901_lead_payments::dto::{search_leads, LeadCommission, PaymentHistory};
use contracts::shared::format::{format_datetime, format_money, format_percent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::projections::p901_lead_payments::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::icons::icon;

const COLUMNS: usize = 7;

#[component]
pub fn LeadPaymentsList() -> impl IntoView {
    let leads = RwSignal::new(Vec::<LeadCommission>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());

    spawn_local(async move {
        let rows = api::fetch_leads()
            .await
            .unwrap_or_default_logged("Error fetching leads");
        leads.set(rows);
        loading.set(false);
    });

    let visible = Memo::new(move |_| leads.with(|rows| search.with(|term| search_leads(rows, term))));
    // rows are keyed below so expanded rows survive a search edit
    let is_empty = Memo::new(move |_| visible.with(Vec::is_empty));

    view! {
        <div class="page">
            <PageHeader title="Leads & Payments">
                <input
                    type="search"
                    class="form__input page-header__search"
                    placeholder="Search by Marketer, Plot No, or Lead ID"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </PageHeader>

            <div class="table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--expander"></th>
                            <th class="table__header-cell">"Lead ID"</th>
                            <th class="table__header-cell table__header-cell--right">"Marketer"</th>
                            <th class="table__header-cell table__header-cell--right">"Plot No"</th>
                            <th class="table__header-cell table__header-cell--right">"Purchase Price"</th>
                            <th class="table__header-cell table__header-cell--right">"Total Paid"</th>
                            <th class="table__header-cell table__header-cell--right">"Paid (%)"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan=COLUMNS.to_string()>"Loading leads..."</td></tr>
                                }.into_any();
                            }
                            if is_empty.get() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan=COLUMNS.to_string()>"No matching leads found."</td></tr>
                                }.into_any();
                            }
                            view! {
                                <For
                                    each=move || visible.get()
                                    key=|lead| lead.id
                                    children=|lead| view! { <LeadRow lead=lead /> }
                                />
                            }.into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Payment history of one lead, loaded on first expand
#[derive(Debug, Clone, PartialEq)]
enum History {
    NotLoaded,
    Loading,
    Loaded(Vec<PaymentHistory>),
}

#[component]
fn LeadRow(lead: LeadCommission) -> impl IntoView {
    let open = RwSignal::new(false);
    let history = RwSignal::new(History::NotLoaded);
    let lead_file = StoredValue::new(lead.lead_file.clone());

    let toggle = move |_| {
        let opening = !open.get_untracked();
        if opening && history.with_untracked(|h| *h == History::NotLoaded) {
            history.set(History::Loading);
            spawn_local(async move {
                let lead_file = lead_file.get_value();
                let payments = api::fetch_payment_history(&lead_file)
                    .await
                    .unwrap_or_default_logged("Error fetching payments");
                history.set(History::Loaded(payments));
            });
        }
        open.set(opening);
    };

    view! {
        <tr class="table__row main-row">
            <td class="table__cell table__cell--expander">
                <button
                    class="expand-btn"
                    class:rotate=move || open.get()
                    aria-label="expand row"
                    disabled=move || history.with(|h| *h == History::Loading)
                    on:click=toggle
                >
                    {icon("chevron-down")}
                </button>
            </td>
            <th class="table__cell table__cell--bold" scope="row">{lead.lead_file.clone()}</th>
            <td class="table__cell table__cell--right">{lead.marketer.clone().unwrap_or_default()}</td>
            <td class="table__cell table__cell--right">{lead.plot_number.clone().unwrap_or_default()}</td>
            <TableCellMoney value=lead.purchase_price />
            <TableCellMoney value=lead.total_paid />
            <td class="table__cell table__cell--right">{format_percent(lead.percentage)}</td>
        </tr>
        <Show when=move || open.get()>
            <tr>
                <td colspan=COLUMNS.to_string() class="history-cell">
                    <div class="history-panel">
                        <h6 class="history-panel__title">"Payments"</h6>
                        {move || match history.get() {
                            History::NotLoaded | History::Loading => view! {
                                <p class="history-panel__note">"Loading payments..."</p>
                            }.into_any(),
                            History::Loaded(payments) if payments.is_empty() => view! {
                                <p class="history-panel__note">"No payments found."</p>
                            }.into_any(),
                            History::Loaded(payments) => view! { <PaymentTable payments=payments /> }.into_any(),
                        }}
                    </div>
                </td>
            </tr>
        </Show>
    }
}

#[component]
fn PaymentTable(payments: Vec<PaymentHistory>) -> impl IntoView {
    view! {
        <table class="history-table" aria-label="payments">
            <thead>
                <tr>
                    <th>"Total Paid (KES)"</th>
                    <th>"Plot Number"</th>
                    <th>"Paid Status"</th>
                    <th>"Current Amount"</th>
                    <th>"Prev Amount"</th>
                    <th>"Percentage"</th>
                    <th>"Comm Qualifies"</th>
                    <th>"Date Recorded"</th>
                </tr>
            </thead>
            <tbody>
                {payments.into_iter().map(|payment| view! {
                    <tr>
                        <td>{format_money(payment.total_paid)}</td>
                        <td>{payment.plot_number.unwrap_or_default()}</td>
                        <td>{payment.paid_status.unwrap_or_default()}</td>
                        <td>{format_money(payment.current_amount)}</td>
                        <td>{format_money(payment.prev_amount)}</td>
                        <td>{format_percent(payment.percentage)}</td>
                        <td>{if payment.commission_qualifies { "Yes" } else { "No" }}</td>
                        <td>{format_datetime(&payment.date_recorded)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
