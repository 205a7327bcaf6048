use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::metadata::{ColumnSpec, FieldSpec, FormValues};

/// Identifier assigned by the finance API
pub type RecordId = i64;

/// Anything a list page can key its rows by
pub trait HasId {
    fn id(&self) -> RecordId;
}

/// A CRUD-able finance entity
///
/// One implementation per entity replaces a hand-written table, modal and
/// fetch code: the REST path, the form schema and the row rendering are all
/// the generic table and client need.
pub trait FinanceResource:
    HasId + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Payload sent on create and update
    type Dto: Serialize + Clone + Send + Sync + 'static;

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// REST collection path, e.g. `/api/finance/commission_structure`
    fn resource_path() -> &'static str;

    /// Singular name for UI, e.g. "Commission Range"
    fn element_name() -> &'static str;

    /// Plural name for UI, e.g. "Commission Ranges"
    fn list_name() -> &'static str;

    /// Editable fields, in form order
    fn fields() -> &'static [FieldSpec];

    /// Table columns, excluding the actions column
    fn columns() -> &'static [ColumnSpec];

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Display values, one per entry of `columns()`
    fn cells(&self) -> Vec<String>;

    /// Current values for the edit form
    fn to_form(&self) -> FormValues;

    /// Parse and validate the submitted form
    fn dto_from_form(form: &FormValues) -> Result<Self::Dto, String>;

    // ============================================================================
    // Defaults
    // ============================================================================

    /// URL of a single record
    fn item_path(id: RecordId) -> String {
        format!("{}/{}", Self::resource_path(), id)
    }

    /// Confirmation shown before deleting a record
    fn delete_prompt() -> String {
        format!("Delete this {}?", Self::element_name().to_lowercase())
    }

    /// Empty-state text of the table
    fn empty_message() -> String {
        format!("No {} found.", Self::list_name().to_lowercase())
    }
}
