//! Exploration records: the persisted unit of a what-if scenario.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Participation rate a fresh exploration starts with.
pub const DEFAULT_PARTICIPATION: u8 = 50;

/// Name given to the exploration synthesized on first boot.
pub const FIRST_EXPLORATION_NAME: &str = "My First Exploration";

/// Genre labels offered by the story generator UI. Stories persist the
/// label as plain text, so older saves stay readable if this list grows.
pub const STORY_GENRES: [&str; 5] = [
    "Hopeful Solarpunk",
    "Sci-Fi",
    "Social Drama",
    "Alternate History",
    "Children's Tale",
];

/// Systemic interventions applied uniformly to a baseline footprint,
/// independent of individual behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StructuralChanges {
    #[serde(default)]
    pub grid: bool,
    #[serde(default)]
    pub transport: bool,
    #[serde(default)]
    pub food: bool,
}

impl StructuralChanges {
    #[must_use]
    pub const fn any_enabled(self) -> bool {
        self.grid || self.transport || self.food
    }
}

/// One generated narrative, immutable once created. Deleted only by
/// explicit user action, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedStory {
    pub id: String,
    /// Exact text that was sent to the generator.
    pub prompt: String,
    /// Generator output, Markdown-formatted.
    pub text: String,
    pub genre: String,
    pub created_at: i64,
}

impl GeneratedStory {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        text: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            prompt: prompt.into(),
            text: text.into(),
            genre: genre.into(),
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

/// A named what-if scenario: country baseline, structural toggles,
/// participation rate, and any stories generated for it.
///
/// Serialized field names match the established storage schema
/// (`countryCode`, `participationRate`, ...), so collections written by
/// earlier releases keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exploration {
    pub id: String,
    pub name: String,
    /// `None` means no baseline selected; derived values collapse to a
    /// defined zero state.
    #[serde(default)]
    pub country_code: Option<String>,
    pub structural_changes: StructuralChanges,
    /// Percentage of the population assumed to adopt the target, in [1, 100].
    pub participation_rate: u8,
    /// Epoch milliseconds. Drives newest-first ordering and default naming;
    /// never mutated after creation.
    #[serde(default)]
    pub created_at: i64,
    pub stories: Vec<GeneratedStory>,
}

impl Exploration {
    /// The exploration synthesized when no stored state exists or the last
    /// member of the collection is deleted.
    #[must_use]
    pub fn first() -> Self {
        Self::with_name(FIRST_EXPLORATION_NAME)
    }

    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            country_code: None,
            structural_changes: StructuralChanges::default(),
            participation_rate: DEFAULT_PARTICIPATION,
            created_at: Utc::now().timestamp_millis(),
            stories: Vec::new(),
        }
    }

    /// Whether the name is still one of the generated placeholders, in which
    /// case the UI may replace it when a country is first selected.
    #[must_use]
    pub fn has_default_name(&self) -> bool {
        self.name.starts_with(FIRST_EXPLORATION_NAME) || self.name.starts_with("Exploration ")
    }
}
