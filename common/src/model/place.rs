use serde::{Deserialize, Serialize};

use crate::model::category::PlaceCategory;
use crate::model::error::ModelError;

/// Server-assigned identifier of a place.
pub type PlaceId = u32;

/// A catalogued point of interest as returned by the backend.
///
/// The category travels under the JSON name `type` and may arrive either as
/// `{"id", "title"}` or as a bare key string (see `CategoryRepr`); by the time
/// a `Place` exists it is always the canonical `PlaceCategory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub title: String,
    #[serde(rename = "type")]
    pub category: PlaceCategory,
    pub address: String,
    pub description: String,
    #[serde(default)]
    pub architect: Option<String>,
    pub popularity_score: PopularityScore,
}

impl Place {
    /// Copies every editable field, dropping the id.
    pub fn to_draft(&self) -> PlaceDraft {
        PlaceDraft {
            title: self.title.clone(),
            category: self.category,
            address: self.address.clone(),
            description: self.description.clone(),
            architect: self.architect.clone(),
            popularity_score: self.popularity_score,
        }
    }
}

/// Create and update payload: a `Place` without its id.
///
/// Updates always send the whole record; there is no field-level diffing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub category: PlaceCategory,
    pub address: String,
    pub description: String,
    #[serde(default)]
    pub architect: Option<String>,
    pub popularity_score: PopularityScore,
}

/// Popularity on a 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PopularityScore(u8);

impl PopularityScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::ScoreOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All valid scores, lowest first.
    pub fn all() -> impl Iterator<Item = PopularityScore> {
        (Self::MIN..=Self::MAX).map(PopularityScore)
    }
}

impl Default for PopularityScore {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for PopularityScore {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PopularityScore> for u8 {
    fn from(score: PopularityScore) -> Self {
        score.0
    }
}
