//! Page state: the authoritative list of places and the open dialog session.
//!
//! The list is only ever replaced, never edited in place: every mutation
//! builds a new vector behind a fresh `Rc`. Mutations are applied only after
//! the server confirmed them, so a failure never has anything to roll back.

use std::rc::Rc;

use common::model::place::{Place, PlaceId};

use crate::api::ApiError;
use crate::components::confirm::delete_prompt;
use crate::components::place_modal::ModalSession;

pub const LOAD_ERROR: &str = "Ошибка загрузки";
pub const DELETE_ERROR: &str = "Ошибка удаления";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalSession),
}

impl ModalState {
    pub fn session(&self) -> Option<&ModalSession> {
        match self {
            ModalState::Closed => None,
            ModalState::Open(session) => Some(session),
        }
    }
}

/// What the main area shows.
#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Grid(&'a [Place]),
}

pub struct PlacesPage {
    pub places: Rc<Vec<Place>>,

    /// A list request is in flight. Starts `true`: the first load is issued
    /// right after the initial render.
    pub loading: bool,

    pub error: Option<String>,

    pub modal: ModalState,

    /// Guard to run the initial load only once.
    pub loaded: bool,
}

impl PlacesPage {
    pub fn new() -> Self {
        Self {
            places: Rc::new(Vec::new()),
            loading: true,
            error: None,
            modal: ModalState::Closed,
            loaded: false,
        }
    }

    pub fn begin_load(&mut self) {
        self.error = None;
        self.loading = true;
    }

    /// Replaces the list on success; on failure keeps the previous list.
    pub fn finish_load(&mut self, result: Result<Vec<Place>, ApiError>) {
        match result {
            Ok(places) => self.places = Rc::new(places),
            Err(err) => self.error = Some(err.message_or(LOAD_ERROR)),
        }
        self.loading = false;
    }

    pub fn apply_created(&mut self, place: Place) {
        let places = self.places.iter().cloned().chain(Some(place)).collect();
        self.places = Rc::new(places);
    }

    /// Swaps the entry with `id` for the server's version, keeping its position.
    pub fn apply_updated(&mut self, id: PlaceId, place: Place) {
        let places = self
            .places
            .iter()
            .map(|existing| {
                if existing.id == id {
                    place.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        self.places = Rc::new(places);
    }

    pub fn apply_removed(&mut self, id: PlaceId) {
        let places = self
            .places
            .iter()
            .filter(|existing| existing.id != id)
            .cloned()
            .collect();
        self.places = Rc::new(places);
    }

    pub fn open_add(&mut self) {
        self.modal = ModalState::Open(ModalSession::Add);
    }

    pub fn open_view(&mut self, place: Place) {
        self.modal = ModalState::Open(ModalSession::View(place));
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Asks before a card-level delete. Returns the id to remove if accepted.
    pub fn confirm_card_delete(
        &self,
        place: &Place,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Option<PlaceId> {
        confirm(&delete_prompt(&place.title)).then_some(place.id)
    }

    pub fn card_delete_failed(&mut self, err: &ApiError) {
        self.error = Some(err.message_or(DELETE_ERROR));
    }

    pub fn list_view(&self) -> ListView<'_> {
        if self.loading {
            ListView::Loading
        } else if self.places.is_empty() {
            ListView::Empty
        } else {
            ListView::Grid(&self.places)
        }
    }
}

impl Default for PlacesPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::category::PlaceCategory;
    use common::model::place::PopularityScore;

    fn place(id: PlaceId, title: &str, category: PlaceCategory) -> Place {
        Place {
            id,
            title: title.to_string(),
            category,
            address: String::new(),
            description: String::new(),
            architect: None,
            popularity_score: PopularityScore::default(),
        }
    }

    fn loaded_page() -> PlacesPage {
        let mut page = PlacesPage::new();
        page.begin_load();
        page.finish_load(Ok(vec![
            place(1, "Эрмитаж", PlaceCategory::Museum),
            place(2, "Петропавловская крепость", PlaceCategory::Monument),
        ]));
        page
    }

    fn titles(page: &PlacesPage) -> Vec<&str> {
        page.places.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn shows_loading_before_first_response() {
        let page = PlacesPage::new();
        assert_eq!(page.list_view(), ListView::Loading);
    }

    #[test]
    fn successful_load_fills_the_grid() {
        let page = loaded_page();
        assert!(!page.loading);
        assert_eq!(page.error, None);
        match page.list_view() {
            ListView::Grid(places) => assert_eq!(places.len(), 2),
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let mut page = PlacesPage::new();
        page.finish_load(Ok(Vec::new()));
        assert_eq!(page.list_view(), ListView::Empty);
    }

    #[test]
    fn failed_load_keeps_previous_list() {
        let mut page = loaded_page();
        page.begin_load();
        assert_eq!(page.list_view(), ListView::Loading);
        page.finish_load(Err(ApiError::Network("Сеть недоступна".to_string())));

        assert!(!page.loading);
        assert_eq!(page.error.as_deref(), Some("Сеть недоступна"));
        assert_eq!(titles(&page), vec!["Эрмитаж", "Петропавловская крепость"]);
    }

    #[test]
    fn failed_load_without_message_uses_fallback() {
        let mut page = PlacesPage::new();
        page.finish_load(Err(ApiError::Network(String::new())));
        assert_eq!(page.error.as_deref(), Some(LOAD_ERROR));
    }

    #[test]
    fn reload_clears_previous_error() {
        let mut page = PlacesPage::new();
        page.finish_load(Err(ApiError::Network("offline".to_string())));
        page.begin_load();
        assert_eq!(page.error, None);
    }

    #[test]
    fn created_place_is_appended() {
        let mut page = loaded_page();
        let before = Rc::clone(&page.places);
        page.apply_created(place(99, "Летний сад", PlaceCategory::Garden));

        assert_eq!(
            titles(&page),
            vec!["Эрмитаж", "Петропавловская крепость", "Летний сад"]
        );
        assert_eq!(before.len(), 2, "previous list left untouched");
    }

    #[test]
    fn updated_place_keeps_its_position() {
        let mut page = loaded_page();
        page.apply_updated(1, place(1, "Эрмитаж (обновлён)", PlaceCategory::Museum));
        assert_eq!(
            titles(&page),
            vec!["Эрмитаж (обновлён)", "Петропавловская крепость"]
        );
    }

    #[test]
    fn removed_place_disappears() {
        let mut page = loaded_page();
        page.apply_removed(1);
        assert_eq!(titles(&page), vec!["Петропавловская крепость"]);
        page.apply_removed(42);
        assert_eq!(page.places.len(), 1);
    }

    #[test]
    fn modal_sessions_follow_intents() {
        let mut page = loaded_page();
        assert_eq!(page.modal.session(), None);

        page.open_add();
        assert_eq!(page.modal.session(), Some(&ModalSession::Add));

        let hermitage = page.places[0].clone();
        page.open_view(hermitage.clone());
        assert_eq!(page.modal, ModalState::Open(ModalSession::View(hermitage)));

        page.close_modal();
        assert_eq!(page.modal, ModalState::Closed);
    }

    #[test]
    fn card_delete_asks_with_title() {
        let page = loaded_page();
        let hermitage = page.places[0].clone();

        let mut prompt = String::new();
        let accepted = page.confirm_card_delete(&hermitage, |question| {
            prompt = question.to_string();
            true
        });
        assert_eq!(accepted, Some(1));
        assert_eq!(prompt, "Удалить \"Эрмитаж\"?");
    }

    #[test]
    fn declined_card_delete_keeps_place() {
        let mut page = loaded_page();
        let hermitage = page.places[0].clone();
        assert_eq!(page.confirm_card_delete(&hermitage, |_| false), None);
        assert_eq!(page.places.len(), 2);
        page.card_delete_failed(&ApiError::Http {
            status: 500,
            message: String::new(),
        });
        assert_eq!(page.places.len(), 2);
    }

    #[test]
    fn card_delete_failure_is_visible() {
        let mut page = loaded_page();
        page.card_delete_failed(&ApiError::Http {
            status: 404,
            message: "Not Found".to_string(),
        });
        assert_eq!(page.error.as_deref(), Some("Not Found"));
    }
}
