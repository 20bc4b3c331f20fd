//! Update function for the place dialog.
//!
//! State transitions live in `state.rs`; this layer forwards mutations to the
//! owner through the props callbacks and routes the owner's replies back in
//! as `Msg::Settled`, tagged with the session epoch they were issued in.

use yew::prelude::*;

use super::messages::Msg;
use super::props::Reply;
use super::state::{ModalSession, PlaceModal, SaveRequest, Settled};

/// Mutates `modal` for `msg`; returns `true` when the view must re-render.
pub fn update(modal: &mut PlaceModal, ctx: &Context<PlaceModal>, msg: Msg) -> bool {
    let props = ctx.props();
    let target = props.session.as_ref().and_then(ModalSession::target);

    match msg {
        Msg::Edit => modal.begin_edit(),
        Msg::CancelEdit => modal.cancel_edit(target),
        Msg::Field(edit) => modal.edit_field(edit),
        Msg::Save => {
            let Some(request) = modal.begin_save(target) else {
                return false;
            };
            let reply = reply_for(ctx, modal.epoch);
            match request {
                SaveRequest::Create(draft) => props.on_create.emit((draft, reply)),
                SaveRequest::Update(id, draft) => props.on_update.emit((id, draft, reply)),
            }
            true
        }
        Msg::Delete => {
            let confirm = &props.confirm;
            let Some(id) = modal.begin_delete(target, |prompt| confirm.emit(prompt.to_string()))
            else {
                return false;
            };
            props.on_delete.emit((id, reply_for(ctx, modal.epoch)));
            true
        }
        Msg::Close => {
            if modal.can_close() {
                props.on_close.emit(());
            }
            false
        }
        Msg::Settled { epoch, result } => {
            if let Err(err) = &result {
                log::warn!("place request failed: {err}");
            }
            match modal.settle(epoch, result) {
                Settled::Close => {
                    props.on_close.emit(());
                    true
                }
                Settled::Stay => true,
                Settled::Stale => {
                    log::debug!("dropping reply from session {epoch}");
                    false
                }
            }
        }
    }
}

fn reply_for(ctx: &Context<PlaceModal>, epoch: u64) -> Reply {
    ctx.link()
        .callback(move |result| Msg::Settled { epoch, result })
}
