//! Places page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, and view rendering.
//!
//! The page owns the list of places and the dialog session. On first render
//! it requests the list from the backend.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
pub use props::PlacesPageProps;
pub use state::PlacesPage;

impl Component for PlacesPage {
    type Message = Msg;
    type Properties = PlacesPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PlacesPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }
}
