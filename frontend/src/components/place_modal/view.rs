//! View rendering for the place dialog.
//!
//! Layout: heading with a close button, an optional error box, the form, and
//! a footer whose buttons come from `PlaceModal::controls`. Every input is
//! disabled while `read_only()` holds (view mode or a request in flight).

use common::model::category::PlaceCategory;
use common::model::place::PopularityScore;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::top_sheet::TopSheet;

use super::messages::Msg;
use super::state::{FieldEdit, ModalMode, ModalSession, PlaceModal};

pub fn view(modal: &PlaceModal, ctx: &Context<PlaceModal>) -> Html {
    let link = ctx.link();
    let session = ctx.props().session.as_ref();
    let target = session.and_then(ModalSession::target);

    html! {
        <TopSheet
            open={modal.is_open()}
            labelled_by={modal.title_id.clone()}
            on_dismiss={link.callback(|_| Msg::Close)}
        >
            <div class="dialogHeader">
                <h2 id={modal.title_id.clone()} class="dialogTitle">{ modal.heading(target) }</h2>
                <button
                    class="iconBtn"
                    type="button"
                    aria-label="Закрыть"
                    onclick={link.callback(|_| Msg::Close)}
                    disabled={modal.busy}
                >
                    { "✕" }
                </button>
            </div>

            {
                match &modal.error {
                    Some(error) => html! { <div class="errorBox" role="alert">{ error.clone() }</div> },
                    None => html! {},
                }
            }

            { build_form(modal, link) }
            { build_footer(modal, link) }
        </TopSheet>
    }
}

fn build_form(modal: &PlaceModal, link: &Scope<PlaceModal>) -> Html {
    let disabled = modal.read_only();
    let draft = &modal.draft;

    html! {
        <form class="form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
            <label class="field">
                <span class="label">{ "Название" }</span>
                <input
                    value={draft.title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::Field(FieldEdit::Title(e.target_unchecked_into::<HtmlInputElement>().value()))
                    })}
                    disabled={disabled}
                />
            </label>

            <label class="field">
                <span class="label">{ "Тип" }</span>
                <select
                    ref={modal.category_ref.clone()}
                    onchange={link.callback(|e: Event| {
                        Msg::Field(FieldEdit::Category(e.target_unchecked_into::<HtmlSelectElement>().value()))
                    })}
                    disabled={disabled}
                >
                    { for PlaceCategory::ALL.iter().map(|category| category_option(*category, draft.category)) }
                </select>
            </label>

            <label class="field">
                <span class="label">{ "Адрес" }</span>
                <input
                    value={draft.address.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::Field(FieldEdit::Address(e.target_unchecked_into::<HtmlInputElement>().value()))
                    })}
                    disabled={disabled}
                />
            </label>

            <label class="field">
                <span class="label">{ "Архитектор" }</span>
                <input
                    value={draft.architect.clone().unwrap_or_default()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::Field(FieldEdit::Architect(e.target_unchecked_into::<HtmlInputElement>().value()))
                    })}
                    disabled={disabled}
                />
            </label>

            <div class="field">
                <span class="label">{ "Известность" }</span>
                <div class="scoreGroup" role="radiogroup" aria-label="Известность от 1 до 5">
                    { for PopularityScore::all().map(|score| score_button(score, draft.popularity_score, disabled, link)) }
                </div>
            </div>

            <label class="field">
                <span class="label">{ "Описание" }</span>
                <textarea
                    value={draft.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::Field(FieldEdit::Description(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
                    })}
                    disabled={disabled}
                    rows="6"
                />
            </label>
        </form>
    }
}

fn category_option(category: PlaceCategory, selected: PlaceCategory) -> Html {
    html! {
        <option value={category.key()} selected={category == selected}>
            { category.label() }
        </option>
    }
}

fn score_button(
    score: PopularityScore,
    current: PopularityScore,
    disabled: bool,
    link: &Scope<PlaceModal>,
) -> Html {
    let active = score == current;
    let value = score.get();
    html! {
        <button
            type="button"
            class={classes!("scoreBtn", active.then_some("scoreBtnActive"))}
            aria-pressed={active.to_string()}
            onclick={link.callback(move |_| Msg::Field(FieldEdit::Score(value)))}
            disabled={disabled}
        >
            { value }
        </button>
    }
}

fn build_footer(modal: &PlaceModal, link: &Scope<PlaceModal>) -> Html {
    let controls = modal.controls();
    let busy = modal.busy;

    html! {
        <div class="dialogFooter">
            if controls.edit {
                <button class="btn" type="button" onclick={link.callback(|_| Msg::Edit)} disabled={busy}>
                    { "Редактировать" }
                </button>
            }
            if controls.cancel {
                <button class="btnGhost" type="button" onclick={cancel_callback(modal, link)} disabled={busy}>
                    { "Отмена" }
                </button>
            }
            if controls.delete {
                <button class="btnDanger" type="button" onclick={link.callback(|_| Msg::Delete)} disabled={busy}>
                    { "Удалить" }
                </button>
            }
            if controls.save {
                <button class="btnPrimary" type="button" onclick={link.callback(|_| Msg::Save)} disabled={busy}>
                    { modal.save_label() }
                </button>
            }
        </div>
    }
}

/// Cancel leaves edit mode; in an add session there is nothing to go back to,
/// so it closes the dialog instead.
fn cancel_callback(modal: &PlaceModal, link: &Scope<PlaceModal>) -> Callback<MouseEvent> {
    if modal.mode == ModalMode::Add {
        link.callback(|_| Msg::Close)
    } else {
        link.callback(|_| Msg::CancelEdit)
    }
}
