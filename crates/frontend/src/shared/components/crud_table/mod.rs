//! Generic list page for a `FinanceResource`
//!
//! The table, the create/edit modal and the delete confirmation are driven by
//! one `ListState` value; every change goes through `ListState::reduce`.

pub mod form;

use std::marker::PhantomData;

use contracts::domain::common::{FinanceResource, HasId};
use contracts::shared::fetched::Fetched;
use contracts::shared::list_state::{ListAction, ListState, TableBody};
use contracts::shared::metadata::FormValues;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::form::{blank_form, row_matches, FormField};
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud_client;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[component]
pub fn CrudTable<R: FinanceResource>(#[prop(optional)] _resource: PhantomData<R>) -> impl IntoView {
    let state = RwSignal::new(ListState::<R>::new());
    let values = RwSignal::new(FormValues::new());
    let form_error = RwSignal::new(None::<String>);
    let action_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let dispatch = move |action: ListAction<R>| {
        state.update(|s| *s = std::mem::take(s).reduce(action));
    };

    let load = move || {
        spawn_local(async move {
            match Fetched::from_result(crud_client::list::<R>().await) {
                Fetched::Loaded(rows) => dispatch(ListAction::Loaded(rows)),
                Fetched::Failed(reason) => {
                    log::error!("Failed to load {}: {}", R::list_name(), reason);
                    dispatch(ListAction::LoadFailed(reason));
                }
            }
        });
    };

    let open_create = move || {
        values.set(blank_form::<R>());
        form_error.set(None);
        dispatch(ListAction::OpenCreate);
    };

    let open_edit = move |row: R| {
        values.set(row.to_form());
        form_error.set(None);
        dispatch(ListAction::OpenEdit(row));
    };

    let close_modal = Callback::new(move |_| dispatch(ListAction::CloseModal));
    let cancel_delete = Callback::new(move |_| dispatch(ListAction::CancelDelete));

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let dto = match R::dto_from_form(&values.get_untracked()) {
            Ok(dto) => dto,
            Err(e) => {
                form_error.set(Some(e));
                return;
            }
        };
        form_error.set(None);
        saving.set(true);

        let editing = state.with_untracked(|s| s.modal.editing().map(HasId::id));
        spawn_local(async move {
            let result = match editing {
                Some(id) => crud_client::update::<R>(id, &dto)
                    .await
                    .map(ListAction::Updated),
                None => crud_client::create::<R>(&dto)
                    .await
                    .map(ListAction::Created),
            };
            saving.set(false);
            match result {
                Ok(action) => dispatch(action),
                Err(e) => {
                    log::error!("Failed to save {}: {}", R::element_name(), e);
                    form_error.set(Some(format!("Failed to save: {}", e)));
                }
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(id) = state.with_untracked(|s| s.pending_delete) else {
            return;
        };
        spawn_local(async move {
            match crud_client::delete::<R>(id).await {
                Ok(()) => {
                    action_error.set(None);
                    dispatch(ListAction::Deleted(id));
                }
                Err(e) => {
                    log::error!("Failed to delete {} {}: {}", R::element_name(), id, e);
                    action_error.set(Some(format!("Failed to delete: {}", e)));
                    dispatch(ListAction::CancelDelete);
                }
            }
        });
    };

    let visible = Memo::new(move |_| {
        state.with(|s| {
            s.rows
                .iter()
                .filter(|row| row_matches(&row.cells(), &s.search))
                .cloned()
                .collect::<Vec<R>>()
        })
    });

    let modal_title = move || {
        let verb = if state.with(|s| s.modal.editing().is_some()) {
            "Edit"
        } else {
            "Add"
        };
        format!("{} {}", verb, R::element_name())
    };

    // one extra column for the row actions
    let colspan = (R::columns().len() + 1).to_string();

    load();

    view! {
        <div class="page">
            <PageHeader title=R::list_name()>
                <input
                    type="search"
                    class="form__input page-header__search"
                    placeholder="Search..."
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| dispatch(ListAction::SetSearch(event_target_value(&ev)))
                />
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--primary" on:click=move |_| open_create()>
                    {icon("plus")}
                    {format!("Add {}", R::element_name())}
                </button>
            </PageHeader>

            {move || state.with(|s| s.failure().map(str::to_string)).map(|e| view! {
                <div class="alert alert--error">{format!("Failed to load {}: {}", R::list_name().to_lowercase(), e)}</div>
            })}
            {move || action_error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {R::columns().iter().map(|column| view! {
                                <th class="table__header-cell" style:text-align=column.align.as_str()>
                                    {column.label}
                                </th>
                            }).collect_view()}
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible.get();
                            match state.with(|s| s.body_for(rows.len())) {
                                TableBody::Loading => view! {
                                    <tr><td class="table__cell table__cell--empty" colspan=colspan.clone()>"Loading..."</td></tr>
                                }.into_any(),
                                TableBody::Empty => view! {
                                    <tr><td class="table__cell table__cell--empty" colspan=colspan.clone()>{R::empty_message()}</td></tr>
                                }.into_any(),
                                TableBody::Rows => rows.into_iter().map(|row| {
                                    let id = row.id();
                                    let cells = row.cells();
                                    view! {
                                        <tr class="table__row">
                                            {cells.into_iter().zip(R::columns()).map(|(cell, column)| view! {
                                                <td class="table__cell" style:text-align=column.align.as_str()>{cell}</td>
                                            }).collect_view()}
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--icon"
                                                    title="Edit"
                                                    on:click=move |_| open_edit(row.clone())
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Delete"
                                                    on:click=move |_| dispatch(ListAction::RequestDelete(id))
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any(),
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || state.with(|s| s.modal.is_open())>
                <Modal title=modal_title() on_close=close_modal>
                    <form class="form" on:submit=submit>
                        {move || form_error.get().map(|e| view! {
                            <div class="alert alert--error">{e}</div>
                        })}
                        {R::fields().iter().map(|field| view! {
                            <FormField field=field values=values />
                        }).collect_view()}
                        <div class="form__actions">
                            <button type="button" class="button button--secondary" on:click=move |_| close_modal.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="button button--primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>

            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <Modal title="Confirm Delete" on_close=cancel_delete>
                    <p class="modal-text">{R::delete_prompt()}</p>
                    <div class="form__actions">
                        <button class="button button--secondary" on:click=move |_| cancel_delete.run(())>
                            "Cancel"
                        </button>
                        <button class="button button--danger" on:click=confirm_delete>
                            "Delete"
                        </button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
