//! Place dialog: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, and view rendering.
//!
//! The owner passes the open session through props. Both on creation and on
//! every props change the component re-synchronizes its internal state
//! machine, which resets only when the session identity actually changed.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
pub use props::{PlaceModalProps, Reply};
pub use state::{ModalSession, PlaceModal};

impl Component for PlaceModal {
    type Message = Msg;
    type Properties = PlaceModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut modal = PlaceModal::new();
        modal.sync(ctx.props().session.as_ref());
        modal
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.sync(ctx.props().session.as_ref());
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.sync_category_select();
    }
}
