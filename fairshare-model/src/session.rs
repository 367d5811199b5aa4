//! The exploration lifecycle session: sole owner of the in-memory
//! collection and the active-selection pointer.
//!
//! Persistence is write-through: every mutation saves the whole collection
//! through the injected store. Storage failures are logged and swallowed;
//! the in-memory state remains the source of truth for the session.

use crate::exploration::{Exploration, GeneratedStory};
use crate::{ExplorationStore, transfer};

#[derive(Debug, Clone)]
pub struct ExplorationSession<S: ExplorationStore> {
    store: S,
    explorations: Vec<Exploration>,
    active_id: Option<String>,
}

impl<S: ExplorationStore> ExplorationSession<S> {
    /// Load the stored collection, or start fresh with a single default
    /// exploration when nothing usable is stored. The collection is never
    /// empty after this returns.
    #[must_use]
    pub fn load(store: S) -> Self {
        let explorations = match store.load() {
            Ok(explorations) => explorations,
            Err(err) => {
                log::warn!("stored explorations unreadable, starting fresh: {err}");
                Vec::new()
            }
        };

        let mut session = Self {
            store,
            explorations,
            active_id: None,
        };
        if session.explorations.is_empty() {
            let first = Exploration::first();
            session.active_id = Some(first.id.clone());
            session.explorations.push(first);
            session.persist();
        } else {
            session.active_id = session.explorations.first().map(|e| e.id.clone());
        }
        session
    }

    #[must_use]
    pub fn explorations(&self) -> &[Exploration] {
        &self.explorations
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The active exploration, falling back to the first member when the
    /// pointer is stale.
    #[must_use]
    pub fn active(&self) -> Option<&Exploration> {
        self.active_id
            .as_deref()
            .and_then(|id| self.explorations.iter().find(|e| e.id == id))
            .or_else(|| self.explorations.first())
    }

    /// Append a default exploration with a sequential display name and make
    /// it active.
    pub fn create_new(&mut self) {
        let exploration =
            Exploration::with_name(format!("Exploration {}", self.explorations.len() + 1));
        self.active_id = Some(exploration.id.clone());
        self.explorations.push(exploration);
        self.persist();
    }

    /// Remove an exploration. Deleting the active member re-selects the
    /// first remaining one; deleting the last member synthesizes a fresh
    /// default in its place so the collection never empties.
    pub fn delete(&mut self, id: &str) {
        self.explorations.retain(|e| e.id != id);
        if self.explorations.is_empty() {
            let fresh = Exploration::first();
            self.active_id = Some(fresh.id.clone());
            self.explorations.push(fresh);
        } else if self.active_id.as_deref() == Some(id) {
            self.active_id = self.explorations.first().map(|e| e.id.clone());
        }
        self.persist();
    }

    /// Switch the active pointer. The id is not validated here; `active()`
    /// falls back gracefully if it goes stale.
    pub fn set_active(&mut self, id: impl Into<String>) {
        self.active_id = Some(id.into());
    }

    /// Apply a scoped mutation to the active exploration only. No-op when
    /// the pointer does not resolve.
    pub fn update_active(&mut self, mutate: impl FnOnce(&mut Exploration)) {
        let Some(id) = self.active_id.clone() else {
            return;
        };
        if let Some(exploration) = self.explorations.iter_mut().find(|e| e.id == id) {
            mutate(exploration);
            self.persist();
        }
    }

    /// Rename any exploration by id. Empty or whitespace-only names are
    /// rejected and nothing is saved.
    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(exploration) = self.explorations.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        exploration.name = trimmed.to_string();
        self.persist();
        true
    }

    /// Append a story to an exploration, preserving insertion order.
    pub fn add_story(&mut self, id: &str, story: GeneratedStory) {
        if let Some(exploration) = self.explorations.iter_mut().find(|e| e.id == id) {
            exploration.stories.push(story);
            self.persist();
        }
    }

    /// Remove a story by id from an exploration.
    pub fn delete_story(&mut self, id: &str, story_id: &str) {
        if let Some(exploration) = self.explorations.iter_mut().find(|e| e.id == id) {
            exploration.stories.retain(|story| story.id != story_id);
            self.persist();
        }
    }

    /// Replace the whole collection with an imported one and activate its
    /// first element, or none when the import is empty.
    pub fn replace_all(&mut self, imported: Vec<Exploration>) {
        self.active_id = imported.first().map(|e| e.id.clone());
        self.explorations = imported;
        self.persist();
    }

    /// Serialize the current collection as an export document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        transfer::export_json(&self.explorations)
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.explorations) {
            log::warn!("failed to persist explorations: {err}");
        }
    }
}
