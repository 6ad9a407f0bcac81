use serde::{Deserialize, Serialize};

use crate::models::ListingKind;

/// Shown instead of a generated text whenever the service is unavailable.
pub const FALLBACK_DESCRIPTION: &str = "Не удалось сгенерировать описание автоматически.";

/// Draft fields handed to the description generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionRequest {
    pub title: String,
    pub kind: ListingKind,
    pub amenities: Vec<String>,
    /// Meters to the sea; 0 when unknown or not applicable.
    pub distance_to_sea: u32,
}

/// Outcome of a description request. The fallback variant records why the
/// generated path was not taken, so callers and tests can tell the two
/// apart instead of receiving a silently substituted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedDescription {
    Generated(String),
    Fallback { reason: String },
}

impl GeneratedDescription {
    pub fn fallback(reason: impl Into<String>) -> Self {
        GeneratedDescription::Fallback {
            reason: reason.into(),
        }
    }

    /// The text to put into the listing, regardless of which path ran.
    pub fn text(&self) -> &str {
        match self {
            GeneratedDescription::Generated(text) => text,
            GeneratedDescription::Fallback { .. } => FALLBACK_DESCRIPTION,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GeneratedDescription::Fallback { .. })
    }
}
