//! Right-aligned table cell for KES amounts

use contracts::shared::format::format_money;
use leptos::prelude::*;

#[component]
pub fn TableCellMoney(
    value: f64,
    /// Bold text, used for earned commission
    #[prop(optional)]
    bold: bool,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--money" class:table__cell--bold=bold>
            {format_money(value)}
        </td>
    }
}
