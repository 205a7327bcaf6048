//! Modal form fields generated from a resource's field schema

use contracts::domain::common::FinanceResource;
use contracts::shared::metadata::{FieldKind, FieldSpec, FormValues};
use leptos::prelude::*;

/// Initial values of the create form: selects start on their first option
pub fn blank_form<R: FinanceResource>() -> FormValues {
    R::fields()
        .iter()
        .fold(FormValues::new(), |form, field| {
            let initial = field.kind.options().first().copied().unwrap_or("");
            form.with(field.name, initial)
        })
}

/// Whether any displayed cell contains the search term, ignoring case
pub fn row_matches(cells: &[String], term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty() || cells.iter().any(|cell| cell.to_lowercase().contains(&term))
}

#[component]
pub fn FormField(field: &'static FieldSpec, values: RwSignal<FormValues>) -> impl IntoView {
    let name = field.name;
    let current = move || values.with(|v| v.get(name).to_string());
    let required = field.validation.is_required();

    let input = match field.kind {
        FieldKind::Select(options) => view! {
            <select
                id=name
                name=name
                class="form__select"
                required=required
                prop:value=current
                on:change=move |ev| values.update(|v| v.set(name, event_target_value(&ev)))
            >
                {options.iter().map(|option| view! {
                    <option value=*option>{*option}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
        kind => {
            let step = match kind {
                FieldKind::Number { step } => Some(step),
                _ => None,
            };
            view! {
                <input
                    id=name
                    name=name
                    class="form__input"
                    type=kind.as_str()
                    step=step
                    required=required
                    prop:value=current
                    on:input=move |ev| values.update(|v| v.set(name, event_target_value(&ev)))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=name>{field.label}</label>
            {input}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_commission_period::aggregate::CommissionPeriod;
    use contracts::domain::a002_commission_range::aggregate::CommissionRange;

    #[test]
    fn blank_form_preselects_first_option() {
        let form = blank_form::<CommissionPeriod>();
        assert_eq!(form.get("status"), "Opened");
        assert_eq!(form.get("start_date"), "");
    }

    #[test]
    fn blank_numeric_form_fails_validation() {
        let form = blank_form::<CommissionRange>();
        assert!(form.is_empty());
        assert!(CommissionRange::dto_from_form(&form).is_err());
    }

    #[test]
    fn search_matches_any_cell() {
        let cells = vec!["3".to_string(), "KES 1,000.00".to_string(), "Closed".to_string()];
        assert!(row_matches(&cells, "closed"));
        assert!(row_matches(&cells, "1,000"));
        assert!(row_matches(&cells, ""));
        assert!(!row_matches(&cells, "opened"));
    }
}
