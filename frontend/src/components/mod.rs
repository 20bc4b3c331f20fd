pub mod confirm;
pub mod fab_add;
pub mod place_card;
pub mod place_modal;
pub mod places_page;
