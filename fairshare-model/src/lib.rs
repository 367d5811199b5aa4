//! Fairshare Scenario Engine
//!
//! Platform-agnostic core logic for the Fairshare collective climate target
//! explorer. This crate owns the exploration data model, the static
//! reference tables, the target derivation math, and the persistence
//! contract, without UI or platform-specific dependencies.

pub mod constants;
pub mod exploration;
pub mod facts;
pub mod session;
pub mod targets;
pub mod transfer;

// Re-export commonly used types
pub use constants::OVERALL_TARGET;
pub use exploration::{
    DEFAULT_PARTICIPATION, Exploration, GeneratedStory, STORY_GENRES, StructuralChanges,
};
pub use facts::{COUNTRIES, Country, LIFESTYLE_TIERS, LifestyleTier, country_by_code,
    tier_for_target};
pub use session::ExplorationSession;
pub use targets::{DerivedTargets, derive_targets};
pub use transfer::{ExportDocument, SCHEMA_VERSION, TransferError, export_document,
    export_file_name, export_json, parse_import};

/// Trait for abstracting durable storage of the exploration collection.
/// Platform-specific implementations should provide this.
///
/// The whole collection is written on every save; there is no partial
/// update. Implementations decide what "absent" means for their medium and
/// report it as an empty collection rather than an error.
pub trait ExplorationStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the stored exploration collection.
    ///
    /// # Errors
    ///
    /// Returns an error if stored state exists but cannot be decoded. The
    /// session layer degrades any error to an empty collection.
    fn load(&self) -> Result<Vec<Exploration>, Self::Error>;

    /// Overwrite the stored collection with `explorations`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    fn save(&self, explorations: &[Exploration]) -> Result<(), Self::Error>;
}

/// In-memory store. Used by tests and anywhere persistence is not wanted,
/// such as server-side rendering.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: std::rc::Rc<std::cell::RefCell<Vec<Exploration>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the currently stored collection.
    #[must_use]
    pub fn stored(&self) -> Vec<Exploration> {
        self.records.borrow().clone()
    }
}

impl ExplorationStore for MemoryStore {
    type Error = std::convert::Infallible;

    fn load(&self) -> Result<Vec<Exploration>, Self::Error> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, explorations: &[Exploration]) -> Result<(), Self::Error> {
        *self.records.borrow_mut() = explorations.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrips_collection() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        let explorations = vec![Exploration::first()];
        store.save(&explorations).unwrap();
        assert_eq!(store.load().unwrap(), explorations);

        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn memory_store_clones_share_backing_records() {
        let store = MemoryStore::new();
        let alias = store.clone();
        store.save(&[Exploration::first()]).unwrap();
        assert_eq!(alias.load().unwrap().len(), 1);
    }
}
