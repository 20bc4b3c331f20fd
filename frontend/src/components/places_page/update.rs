//! Update function for the places page.
//!
//! Network calls run on `spawn_local`; their outcome comes back as a message
//! so every state change still happens inside `update`. Mutations requested
//! by the dialog reconcile the list first and only then answer the dialog.
//!
//! The request bodies (`create`, `save`, `delete`, `delete_from_card`) and
//! the reconciling half of the update (`apply`) take no component context.

use common::model::place::{PlaceDraft, PlaceId};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::PlacesApi;
use crate::components::place_modal::Reply;

use super::messages::Msg;
use super::state::PlacesPage;

/// Mutates `page` for `msg`; returns `true` when the view must re-render.
pub fn update(page: &mut PlacesPage, ctx: &Context<PlacesPage>, msg: Msg) -> bool {
    let props = ctx.props();
    let api = props.api.clone();
    let link = ctx.link().clone();

    match msg {
        Msg::Load => {
            page.begin_load();
            spawn_local(async move {
                link.send_message(Msg::Loaded(api.list().await));
            });
            true
        }
        Msg::Create(draft, reply) => {
            spawn_local(async move {
                if let Some(msg) = create(&api, draft, reply).await {
                    link.send_message(msg);
                }
            });
            false
        }
        Msg::Update(id, draft, reply) => {
            spawn_local(async move {
                if let Some(msg) = save(&api, id, draft, reply).await {
                    link.send_message(msg);
                }
            });
            false
        }
        Msg::Delete(id, reply) => {
            spawn_local(async move {
                if let Some(msg) = delete(&api, id, reply).await {
                    link.send_message(msg);
                }
            });
            false
        }
        Msg::CardDelete(place) => {
            let confirm = &props.confirm;
            let Some(id) =
                page.confirm_card_delete(&place, |prompt| confirm.emit(prompt.to_string()))
            else {
                return false;
            };
            spawn_local(async move {
                link.send_message(delete_from_card(&api, id).await);
            });
            false
        }
        msg => apply(page, msg),
    }
}

/// Creates the place. On failure the dialog is answered right away and there
/// is nothing left for the page to do.
pub async fn create(api: &PlacesApi, draft: PlaceDraft, reply: Reply) -> Option<Msg> {
    match api.create(&draft).await {
        Ok(place) => Some(Msg::Created { place, reply }),
        Err(err) => {
            reply.emit(Err(err));
            None
        }
    }
}

pub async fn save(api: &PlacesApi, id: PlaceId, draft: PlaceDraft, reply: Reply) -> Option<Msg> {
    match api.update(id, &draft).await {
        Ok(place) => Some(Msg::Updated { id, place, reply }),
        Err(err) => {
            reply.emit(Err(err));
            None
        }
    }
}

pub async fn delete(api: &PlacesApi, id: PlaceId, reply: Reply) -> Option<Msg> {
    match api.remove(id).await {
        Ok(()) => Some(Msg::Removed {
            id,
            reply: Some(reply),
        }),
        Err(err) => {
            reply.emit(Err(err));
            None
        }
    }
}

pub async fn delete_from_card(api: &PlacesApi, id: PlaceId) -> Msg {
    match api.remove(id).await {
        Ok(()) => Msg::Removed { id, reply: None },
        Err(err) => Msg::CardDeleteFailed(err),
    }
}

/// Handles every message that only touches page state. Request messages are
/// ignored here.
pub fn apply(page: &mut PlacesPage, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(result) => {
            match &result {
                Ok(places) => log::info!("loaded {} places", places.len()),
                Err(err) => log::error!("failed to load places: {err}"),
            }
            page.finish_load(result);
            true
        }
        Msg::OpenAdd => {
            page.open_add();
            true
        }
        Msg::OpenPlace(place) => {
            page.open_view(place);
            true
        }
        Msg::CloseModal => {
            page.close_modal();
            true
        }
        Msg::Created { place, reply } => {
            log::info!("created place {} ({})", place.id, place.title);
            page.apply_created(place);
            reply.emit(Ok(()));
            true
        }
        Msg::Updated { id, place, reply } => {
            log::info!("updated place {id}");
            page.apply_updated(id, place);
            reply.emit(Ok(()));
            true
        }
        Msg::Removed { id, reply } => {
            log::info!("removed place {id}");
            page.apply_removed(id);
            if let Some(reply) = reply {
                reply.emit(Ok(()));
            }
            true
        }
        Msg::CardDeleteFailed(err) => {
            log::error!("failed to delete place: {err}");
            page.card_delete_failed(&err);
            true
        }
        Msg::Load
        | Msg::Create(..)
        | Msg::Update(..)
        | Msg::Delete(..)
        | Msg::CardDelete(_) => false,
    }
}
