//! View state of a list page as an explicit value
//!
//! Every user action or fetch completion is a `ListAction`; the next state is
//! computed by `ListState::reduce` without mutating shared fields.

use crate::domain::common::{HasId, RecordId};

/// Whether the rows have arrived
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Modal form state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState<T> {
    #[default]
    Closed,
    Creating,
    Editing(T),
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            Self::Editing(item) => Some(item),
            _ => None,
        }
    }
}

/// What the table body should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Empty,
    Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<T> {
    Loaded(Vec<T>),
    LoadFailed(String),
    OpenCreate,
    OpenEdit(T),
    CloseModal,
    Created(T),
    Updated(T),
    RequestDelete(RecordId),
    CancelDelete,
    Deleted(RecordId),
    SetSearch(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub load: LoadState,
    pub rows: Vec<T>,
    pub modal: ModalState<T>,
    pub pending_delete: Option<RecordId>,
    pub search: String,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            load: LoadState::Loading,
            rows: Vec::new(),
            modal: ModalState::Closed,
            pending_delete: None,
            search: String::new(),
        }
    }
}

impl<T: HasId + Clone> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(self, action: ListAction<T>) -> Self {
        match action {
            ListAction::Loaded(rows) => Self {
                load: LoadState::Ready,
                rows,
                ..self
            },
            ListAction::LoadFailed(reason) => Self {
                load: LoadState::Failed(reason),
                rows: Vec::new(),
                ..self
            },
            ListAction::OpenCreate => Self {
                modal: ModalState::Creating,
                ..self
            },
            ListAction::OpenEdit(item) => Self {
                modal: ModalState::Editing(item),
                ..self
            },
            ListAction::CloseModal => Self {
                modal: ModalState::Closed,
                ..self
            },
            ListAction::Created(item) => {
                let mut rows = self.rows;
                rows.push(item);
                Self {
                    rows,
                    modal: ModalState::Closed,
                    ..self
                }
            }
            ListAction::Updated(item) => {
                let id = item.id();
                let rows = self
                    .rows
                    .into_iter()
                    .map(|row| if row.id() == id { item.clone() } else { row })
                    .collect();
                Self {
                    rows,
                    modal: ModalState::Closed,
                    ..self
                }
            }
            ListAction::RequestDelete(id) => Self {
                pending_delete: Some(id),
                ..self
            },
            ListAction::CancelDelete => Self {
                pending_delete: None,
                ..self
            },
            ListAction::Deleted(id) => Self {
                rows: self.rows.into_iter().filter(|row| row.id() != id).collect(),
                pending_delete: None,
                ..self
            },
            ListAction::SetSearch(search) => Self { search, ..self },
        }
    }

    /// Body state for a given set of visible rows
    pub fn body_for(&self, visible: usize) -> TableBody {
        match self.load {
            LoadState::Loading => TableBody::Loading,
            _ if visible == 0 => TableBody::Empty,
            _ => TableBody::Rows,
        }
    }

    pub fn body(&self) -> TableBody {
        self.body_for(self.rows.len())
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: RecordId,
        name: &'static str,
    }

    impl HasId for Row {
        fn id(&self) -> RecordId {
            self.id
        }
    }

    fn row(id: RecordId, name: &'static str) -> Row {
        Row { id, name }
    }

    fn loaded() -> ListState<Row> {
        ListState::new().reduce(ListAction::Loaded(vec![row(1, "a"), row(2, "b")]))
    }

    #[test]
    fn starts_loading_then_ready() {
        let state: ListState<Row> = ListState::new();
        assert_eq!(state.body(), TableBody::Loading);
        let state = state.reduce(ListAction::Loaded(vec![]));
        assert_eq!(state.load, LoadState::Ready);
        assert_eq!(state.body(), TableBody::Empty);
        assert_eq!(loaded().body(), TableBody::Rows);
    }

    #[test]
    fn load_failure_renders_empty() {
        let state = loaded().reduce(ListAction::LoadFailed("HTTP error: 500".into()));
        assert!(state.rows.is_empty());
        assert_eq!(state.failure(), Some("HTTP error: 500"));
        assert_eq!(state.body(), TableBody::Empty);
    }

    #[test]
    fn created_appends_and_closes_modal() {
        let state = loaded()
            .reduce(ListAction::OpenCreate)
            .reduce(ListAction::Created(row(3, "c")));
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.rows.last(), Some(&row(3, "c")));
        assert_eq!(state.rows.len(), 3);
    }

    #[test]
    fn updated_replaces_by_id_in_place() {
        let state = loaded()
            .reduce(ListAction::OpenEdit(row(1, "a")))
            .reduce(ListAction::Updated(row(1, "z")));
        assert_eq!(state.rows, vec![row(1, "z"), row(2, "b")]);
        assert!(!state.modal.is_open());
    }

    #[test]
    fn delete_needs_request_and_removes_by_id() {
        let state = loaded().reduce(ListAction::RequestDelete(2));
        assert_eq!(state.pending_delete, Some(2));
        let cancelled = state.clone().reduce(ListAction::CancelDelete);
        assert_eq!(cancelled.rows.len(), 2);
        assert_eq!(cancelled.pending_delete, None);
        let deleted = state.reduce(ListAction::Deleted(2));
        assert_eq!(deleted.rows, vec![row(1, "a")]);
        assert_eq!(deleted.pending_delete, None);
    }

    #[test]
    fn modal_editing_exposes_item() {
        let state = loaded().reduce(ListAction::OpenEdit(row(2, "b")));
        assert_eq!(state.modal.editing(), Some(&row(2, "b")));
        assert!(state.modal.is_open());
    }

    #[test]
    fn search_is_kept_in_state() {
        let state = loaded().reduce(ListAction::SetSearch("plot".into()));
        assert_eq!(state.search, "plot");
        assert_eq!(state.body_for(0), TableBody::Empty);
    }
}
