//! Overlay container for dialogs.
//!
//! Children are mounted only while `open` is set. The sheet carries the
//! dialog semantics (`role`, `aria-modal`, `aria-labelledby`) and turns the
//! Escape key into `on_dismiss`, leaving it to the owner to decide whether a
//! dismissal is allowed right now. Focus moves into the dialog when it opens
//! so Escape works without tabbing in first.

use uuid::Uuid;
use web_sys::HtmlElement;
use yew::prelude::*;

pub struct TopSheet {
    pub id: String,
    pub dialog_ref: NodeRef,
    was_open: bool,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    /// Id of the element holding the dialog's title.
    pub labelled_by: String,
    pub on_dismiss: Callback<()>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4().simple()),
            dialog_ref: NodeRef::default(),
            was_open: false,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let open = ctx.props().open;
        if just_opened(self.was_open, open) {
            if let Some(dialog) = self.dialog_ref.cast::<HtmlElement>() {
                dialog.focus().ok();
            }
        }
        self.was_open = open;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_keydown = {
            let on_dismiss = props.on_dismiss.clone();
            Callback::from(move |e: KeyboardEvent| {
                if is_dismiss_key(&e.key()) {
                    e.prevent_default();
                    on_dismiss.emit(());
                }
            })
        };

        html! {
            <div class="top-sheet show" id={self.id.clone()}>
                <div
                    ref={self.dialog_ref.clone()}
                    class="dialog"
                    tabindex="-1"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={props.labelled_by.clone()}
                    onkeydown={on_keydown}
                >
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// True on the render where the sheet goes from closed to open.
fn just_opened(was_open: bool, open: bool) -> bool {
    open && !was_open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key("Esc "));
    }

    #[test]
    fn focuses_only_when_opening() {
        assert!(just_opened(false, true));
        assert!(!just_opened(true, true));
        assert!(!just_opened(true, false));
        assert!(!just_opened(false, false));
    }
}
