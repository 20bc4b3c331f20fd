use common::model::place::{Place, PlaceDraft, PlaceId};

use crate::api::ApiError;
use crate::components::place_modal::Reply;

pub enum Msg {
    Load,
    Loaded(Result<Vec<Place>, ApiError>),

    OpenAdd,
    OpenPlace(Place),
    CloseModal,

    // Requests coming from the dialog; each carries the dialog's reply.
    Create(PlaceDraft, Reply),
    Update(PlaceId, PlaceDraft, Reply),
    Delete(PlaceId, Reply),

    /// Trash button on a card.
    CardDelete(Place),

    // Server confirmed a mutation. The list is reconciled before `reply` fires.
    Created {
        place: Place,
        reply: Reply,
    },
    Updated {
        id: PlaceId,
        place: Place,
        reply: Reply,
    },
    Removed {
        id: PlaceId,
        reply: Option<Reply>,
    },

    CardDeleteFailed(ApiError),
}
