use crate::api::ApiError;

use super::state::FieldEdit;

pub enum Msg {
    /// view → edit.
    Edit,
    /// edit → view, discarding unsaved changes.
    CancelEdit,
    Field(FieldEdit),
    Save,
    Delete,
    Close,
    /// The owner finished a create/update/delete issued in session `epoch`.
    Settled {
        epoch: u64,
        result: Result<(), ApiError>,
    },
}
