//! Summary card for a single place.
//!
//! The card itself is a focusable `role="button"`: a click, Enter, or Space
//! emits `on_open`. The nested delete button emits `on_delete` and stops both
//! its click and its keydown from reaching the card, so deleting never opens
//! the place as a side effect.

use common::model::place::Place;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlaceCardProps {
    pub place: Place,
    pub on_open: Callback<Place>,
    pub on_delete: Callback<Place>,
}

pub struct PlaceCard;

impl Component for PlaceCard {
    type Message = ();
    type Properties = PlaceCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PlaceCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let place = &props.place;

        let on_click = {
            let place = place.clone();
            props.on_open.reform(move |_: MouseEvent| place.clone())
        };

        let on_keydown = {
            let place = place.clone();
            let on_open = props.on_open.clone();
            Callback::from(move |e: KeyboardEvent| {
                if is_activation_key(&e.key()) {
                    e.prevent_default();
                    on_open.emit(place.clone());
                }
            })
        };

        let on_delete_click = {
            let place = place.clone();
            let on_delete = props.on_delete.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_delete.emit(place.clone());
            })
        };

        // The button handles its own Enter/Space through `click`.
        let on_delete_keydown = Callback::from(|e: KeyboardEvent| e.stop_propagation());

        html! {
            <article
                class="card"
                role="button"
                tabindex="0"
                aria-label={open_label(place)}
                onclick={on_click}
                onkeydown={on_keydown}
            >
                <button
                    class="iconBtn"
                    type="button"
                    aria-label={delete_label(place)}
                    onclick={on_delete_click}
                    onkeydown={on_delete_keydown}
                >
                    { "🗑" }
                </button>

                <div class="cardTitle">{ place.title.clone() }</div>
                <div class="cardMeta">
                    <span class="pill">{ place.category.label() }</span>
                    <span class="muted">{ score_badge(place) }</span>
                </div>
            </article>
        }
    }
}

/// Keys that activate a focused card.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn open_label(place: &Place) -> String {
    format!("Открыть: {}", place.title)
}

pub fn delete_label(place: &Place) -> String {
    format!("Удалить: {}", place.title)
}

pub fn score_badge(place: &Place) -> String {
    format!("★ {}/5", place.popularity_score.get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fortress(category: serde_json::Value) -> Place {
        serde_json::from_value(json!({
            "id": 2,
            "title": "Петропавловская крепость",
            "type": category,
            "address": "Петропавловская крепость, 3",
            "description": "Крепость",
            "architect": null,
            "popularityScore": 4
        }))
        .unwrap()
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Spacebar"));
    }

    #[test]
    fn labels_name_the_place() {
        let place = fortress(json!({ "id": 9, "title": "monument" }));
        assert_eq!(open_label(&place), "Открыть: Петропавловская крепость");
        assert_eq!(delete_label(&place), "Удалить: Петропавловская крепость");
        assert_eq!(score_badge(&place), "★ 4/5");
    }

    #[test]
    fn legacy_string_category_shows_label() {
        let structured = fortress(json!({ "id": 9, "title": "monument" }));
        let legacy = fortress(json!("monument"));
        assert_eq!(legacy.category.label(), "Памятник");
        assert_eq!(legacy.category, structured.category);
    }
}
