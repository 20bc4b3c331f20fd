//! Recording transport shared by the client and page tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use common::model::place::{Place, PlaceDraft, PlaceId};

use super::transport::{HttpRequest, HttpResponse, Transport};
use super::{ApiError, PlacesApi};
use crate::config::ApiConfig;

/// Records every request and answers from a queue of canned responses.
#[derive(Default)]
pub struct FakeTransport {
    pub requests: RefCell<Vec<HttpRequest>>,
    pub responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: impl Into<String>) -> Rc<Self> {
        let fake = Self::default();
        fake.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.into(),
        }));
        Rc::new(fake)
    }

    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests.borrow();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .expect("no canned response left")
    }
}

pub fn api(fake: &Rc<FakeTransport>) -> PlacesApi {
    let config = ApiConfig::new("http://api.test");
    PlacesApi::new(&config, fake.clone())
}

/// The record a server would return after storing `draft` under `id`.
pub fn stored(draft: &PlaceDraft, id: PlaceId) -> Place {
    Place {
        id,
        title: draft.title.clone(),
        category: draft.category,
        address: draft.address.clone(),
        description: draft.description.clone(),
        architect: draft.architect.clone(),
        popularity_score: draft.popularity_score,
    }
}
