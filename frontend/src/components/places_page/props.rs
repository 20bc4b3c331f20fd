use yew::prelude::*;

use crate::api::PlacesApi;
use crate::components::confirm::{browser_confirm, Confirm};

/// Properties for the `PlacesPage`.
///
/// Both collaborators default to the browser implementations; tests and
/// embedding pages may pass their own.
#[derive(Properties, PartialEq)]
pub struct PlacesPageProps {
    #[prop_or_else(PlacesApi::from_env)]
    pub api: PlacesApi,

    #[prop_or_else(browser_confirm)]
    pub confirm: Confirm,
}
