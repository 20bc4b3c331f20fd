use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub children: Children,
}

/// Responsive grid the place cards are laid out in, in child order.
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="grid">
                { for ctx.props().children.iter() }
            </section>
        }
    }
}
