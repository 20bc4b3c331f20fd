use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FabAddProps {
    pub on_click: Callback<()>,
}

/// Floating "+" button that starts an add session.
pub struct FabAdd;

impl Component for FabAdd {
    type Message = ();
    type Properties = FabAddProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FabAdd
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_click = ctx.props().on_click.reform(|_: MouseEvent| ());
        html! {
            <button class="fab" type="button" onclick={on_click} aria-label="Добавить место">
                { "+" }
            </button>
        }
    }
}
