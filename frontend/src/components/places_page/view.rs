//! View rendering for the places page: header with refresh, error box, the
//! list area (loading / empty / grid), the add button, and the dialog.

use common::model::place::{PlaceDraft, PlaceId};
use yew::html::Scope;
use yew::prelude::*;

use crate::card_grid::CardGrid;
use crate::components::fab_add::FabAdd;
use crate::components::place_card::PlaceCard;
use crate::components::place_modal::{PlaceModal, Reply};

use super::messages::Msg;
use super::state::{ListView, PlacesPage};

pub fn view(page: &PlacesPage, ctx: &Context<PlacesPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="page">
            <header class="topbar">
                <h1 class="h1">{ "Красивые места Санкт‑Петербурга" }</h1>
                <button
                    class="btn"
                    type="button"
                    onclick={link.callback(|_| Msg::Load)}
                    disabled={page.loading}
                >
                    { "Обновить" }
                </button>
            </header>

            {
                match &page.error {
                    Some(error) => html! { <div class="errorBox" role="alert">{ error.clone() }</div> },
                    None => html! {},
                }
            }

            { build_list(page, link) }

            <FabAdd on_click={link.callback(|_| Msg::OpenAdd)} />

            <PlaceModal
                session={page.modal.session().cloned()}
                on_close={link.callback(|_| Msg::CloseModal)}
                on_create={link.callback(|(draft, reply): (PlaceDraft, Reply)| Msg::Create(draft, reply))}
                on_update={link.callback(|(id, draft, reply): (PlaceId, PlaceDraft, Reply)| {
                    Msg::Update(id, draft, reply)
                })}
                on_delete={link.callback(|(id, reply): (PlaceId, Reply)| Msg::Delete(id, reply))}
                confirm={ctx.props().confirm.clone()}
            />
        </div>
    }
}

fn build_list(page: &PlacesPage, link: &Scope<PlacesPage>) -> Html {
    match page.list_view() {
        ListView::Loading => html! { <div class="muted">{ "Загрузка..." }</div> },
        ListView::Empty => html! {
            <div class="empty">
                <div class="emptyTitle">{ "Пока нет мест" }</div>
                <div class="muted">{ "Нажми “+”, чтобы добавить первую карточку." }</div>
            </div>
        },
        ListView::Grid(places) => html! {
            <CardGrid>
                { for places.iter().map(|place| html! {
                    <PlaceCard
                        key={place.id}
                        place={place.clone()}
                        on_open={link.callback(Msg::OpenPlace)}
                        on_delete={link.callback(Msg::CardDelete)}
                    />
                }) }
            </CardGrid>
        },
    }
}
