//! Properties for the `PlaceModal`.
//!
//! The modal never talks to the API itself. Each mutation is handed to the
//! owner together with a `Reply` callback; the owner performs the request,
//! reconciles its own state, and answers through the reply so the modal can
//! close or show the error.

use common::model::place::{PlaceDraft, PlaceId};
use yew::prelude::*;

use crate::api::ApiError;
use crate::components::confirm::{browser_confirm, Confirm};

use super::state::ModalSession;

/// Owner's answer to a mutation request.
pub type Reply = Callback<Result<(), ApiError>>;

#[derive(Properties, PartialEq)]
pub struct PlaceModalProps {
    /// The open session, or `None` while the dialog is closed.
    #[prop_or_default]
    pub session: Option<ModalSession>,

    /// Asks the owner to tear the session down.
    pub on_close: Callback<()>,

    pub on_create: Callback<(PlaceDraft, Reply)>,

    pub on_update: Callback<(PlaceId, PlaceDraft, Reply)>,

    pub on_delete: Callback<(PlaceId, Reply)>,

    /// Asked before a delete goes out; defaults to `window.confirm`.
    #[prop_or_else(browser_confirm)]
    pub confirm: Confirm,
}
