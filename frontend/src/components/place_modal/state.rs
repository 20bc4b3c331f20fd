//! State machine behind the place dialog.
//!
//! The owner describes *which* session is open (`ModalSession`); the modal
//! keeps its own `mode` for transitions inside that session (view → edit →
//! view). Edit is only ever entered from view, inside the dialog. A session
//! is identified by the caller's mode plus the target id.
//! Whenever that identity changes, `sync` resets everything deterministically
//! and bumps `epoch`, so replies to requests from an earlier session are
//! recognised and dropped.
//!
//! The only DOM handle kept here is `category_ref`: a `<select>` stops
//! following its options' `selected` attributes once the user picked one, so
//! `sync_category_select` pushes the draft value after every render.

use common::model::category::PlaceCategory;
use common::model::place::{Place, PlaceDraft, PlaceId, PopularityScore};
use uuid::Uuid;
use web_sys::HtmlSelectElement;
use yew::NodeRef;

use crate::api::ApiError;
use crate::components::confirm::delete_prompt;

/// Shown when a failed request carries no message of its own.
pub const GENERIC_ERROR: &str = "Ошибка";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Add,
    View,
    Edit,
}

/// An open dialog as requested by the owner. The target is part of the
/// variant, so a view session always has one and add never does.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalSession {
    Add,
    View(Place),
}

impl ModalSession {
    pub fn mode(&self) -> ModalMode {
        match self {
            ModalSession::Add => ModalMode::Add,
            ModalSession::View(_) => ModalMode::View,
        }
    }

    pub fn target(&self) -> Option<&Place> {
        match self {
            ModalSession::Add => None,
            ModalSession::View(place) => Some(place),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SessionIdentity {
    mode: ModalMode,
    target: Option<PlaceId>,
}

/// One user write into the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Title(String),
    /// Registry key chosen in the category select.
    Category(String),
    Address(String),
    Description(String),
    Architect(String),
    Score(u8),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(PlaceDraft),
    Update(PlaceId, PlaceDraft),
}

/// What to do once the owner answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Close,
    Stay,
    /// The answer belongs to a session that is already gone.
    Stale,
}

/// Footer buttons visible in the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub save: bool,
    pub cancel: bool,
    pub edit: bool,
    pub delete: bool,
}

pub struct PlaceModal {
    /// Authoritative mode of the current session.
    pub mode: ModalMode,

    /// Local copy of the editable fields; only submitted on save.
    pub draft: PlaceDraft,

    /// A save or delete is in flight. Every mutating control is disabled.
    pub busy: bool,

    /// Message of the last failed request in this session.
    pub error: Option<String>,

    /// Incremented on every session change.
    pub epoch: u64,

    /// DOM id of the dialog heading, referenced by `aria-labelledby`.
    pub title_id: String,

    pub category_ref: NodeRef,

    identity: Option<SessionIdentity>,
}

impl PlaceModal {
    pub fn new() -> Self {
        Self {
            mode: ModalMode::View,
            draft: PlaceDraft::default(),
            busy: false,
            error: None,
            epoch: 0,
            title_id: format!("dlg-title-{}", Uuid::new_v4().simple()),
            category_ref: NodeRef::default(),
            identity: None,
        }
    }

    /// Aligns with the owner's session. Returns `true` if a reset happened.
    pub fn sync(&mut self, session: Option<&ModalSession>) -> bool {
        let identity = session.map(|session| SessionIdentity {
            mode: session.mode(),
            target: session.target().map(|place| place.id),
        });
        if identity == self.identity {
            return false;
        }

        self.identity = identity;
        self.epoch += 1;
        self.busy = false;
        self.error = None;

        if let Some(session) = session {
            self.mode = session.mode();
            self.draft = match session.target() {
                Some(place) if self.mode != ModalMode::Add => place.to_draft(),
                _ => PlaceDraft::default(),
            };
        }
        true
    }

    pub fn is_open(&self) -> bool {
        self.identity.is_some()
    }

    /// Option value the category select must show.
    pub fn category_value(&self) -> &'static str {
        self.draft.category.key()
    }

    pub fn sync_category_select(&self) {
        if let Some(select) = self.category_ref.cast::<HtmlSelectElement>() {
            let value = self.category_value();
            if select.value() != value {
                select.set_value(value);
            }
        }
    }

    pub fn read_only(&self) -> bool {
        self.mode == ModalMode::View || self.busy
    }

    pub fn controls(&self) -> Controls {
        match self.mode {
            ModalMode::Add => Controls {
                save: true,
                cancel: true,
                ..Controls::default()
            },
            ModalMode::View => Controls {
                edit: true,
                delete: true,
                ..Controls::default()
            },
            ModalMode::Edit => Controls {
                save: true,
                cancel: true,
                delete: true,
                ..Controls::default()
            },
        }
    }

    pub fn save_label(&self) -> &'static str {
        if self.busy {
            "Сохранение..."
        } else {
            "Сохранить"
        }
    }

    pub fn heading(&self, target: Option<&Place>) -> String {
        match (self.mode, target) {
            (ModalMode::Add, _) => "Добавить место".to_string(),
            (_, Some(place)) => place.title.clone(),
            (_, None) => "Место".to_string(),
        }
    }

    pub fn can_close(&self) -> bool {
        !self.busy
    }

    pub fn begin_edit(&mut self) -> bool {
        if self.busy || self.mode != ModalMode::View {
            return false;
        }
        self.mode = ModalMode::Edit;
        self.error = None;
        true
    }

    /// Leaves edit mode and restores the draft from the target.
    pub fn cancel_edit(&mut self, target: Option<&Place>) -> bool {
        if self.busy || self.mode != ModalMode::Edit {
            return false;
        }
        if let Some(place) = target {
            self.draft = place.to_draft();
        }
        self.mode = ModalMode::View;
        self.error = None;
        true
    }

    pub fn edit_field(&mut self, edit: FieldEdit) -> bool {
        if self.read_only() {
            return false;
        }
        match edit {
            FieldEdit::Title(value) => self.draft.title = value,
            FieldEdit::Category(key) => match PlaceCategory::from_key(&key) {
                Some(category) => self.draft.category = category,
                None => return false,
            },
            FieldEdit::Address(value) => self.draft.address = value,
            FieldEdit::Description(value) => self.draft.description = value,
            FieldEdit::Architect(value) => {
                self.draft.architect = if value.trim().is_empty() {
                    None
                } else {
                    Some(value)
                };
            }
            FieldEdit::Score(value) => match PopularityScore::new(value) {
                Ok(score) => self.draft.popularity_score = score,
                Err(_) => return false,
            },
        }
        true
    }

    /// Starts a save. `None` if saving is not possible right now.
    pub fn begin_save(&mut self, target: Option<&Place>) -> Option<SaveRequest> {
        if self.busy {
            return None;
        }
        let request = match self.mode {
            ModalMode::Add => SaveRequest::Create(self.draft.clone()),
            ModalMode::Edit => SaveRequest::Update(target?.id, self.draft.clone()),
            ModalMode::View => return None,
        };
        self.error = None;
        self.busy = true;
        Some(request)
    }

    /// Starts a delete after the user confirms it. Returns the id to remove.
    pub fn begin_delete(
        &mut self,
        target: Option<&Place>,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Option<PlaceId> {
        if self.busy || self.mode == ModalMode::Add {
            return None;
        }
        let place = target?;
        if !confirm(&delete_prompt(&place.title)) {
            return None;
        }
        self.error = None;
        self.busy = true;
        Some(place.id)
    }

    pub fn settle(&mut self, epoch: u64, result: Result<(), ApiError>) -> Settled {
        if epoch != self.epoch || !self.busy {
            return Settled::Stale;
        }
        self.busy = false;
        match result {
            Ok(()) => Settled::Close,
            Err(err) => {
                self.error = Some(err.message_or(GENERIC_ERROR));
                Settled::Stay
            }
        }
    }
}

impl Default for PlaceModal {
    fn default() -> Self {
        Self::new()
    }
}
