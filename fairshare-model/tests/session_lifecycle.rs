use fairshare_model::{
    DEFAULT_PARTICIPATION, Exploration, ExplorationSession, ExplorationStore, GeneratedStory,
    MemoryStore,
};

#[test]
fn first_boot_synthesizes_and_persists_a_default_exploration() {
    let store = MemoryStore::new();
    let session = ExplorationSession::load(store.clone());

    assert_eq!(session.explorations().len(), 1);
    let active = session.active().unwrap();
    assert_eq!(active.name, "My First Exploration");
    assert_eq!(active.participation_rate, DEFAULT_PARTICIPATION);
    assert!(active.country_code.is_none());

    // The synthesized default is already durable.
    assert_eq!(store.stored(), session.explorations());
}

#[test]
fn reload_activates_the_first_stored_member() {
    let store = MemoryStore::new();
    let mut session = ExplorationSession::load(store.clone());
    session.create_new();
    session.create_new();
    let first_id = session.explorations()[0].id.clone();

    let reloaded = ExplorationSession::load(store);
    assert_eq!(reloaded.explorations().len(), 3);
    assert_eq!(reloaded.active_id(), Some(first_id.as_str()));
}

#[test]
fn create_new_appends_with_sequential_name_and_activates() {
    let mut session = ExplorationSession::load(MemoryStore::new());
    session.create_new();

    assert_eq!(session.explorations().len(), 2);
    let active = session.active().unwrap();
    assert_eq!(active.name, "Exploration 2");
    assert_eq!(session.active_id(), Some(active.id.as_str()));
    assert_eq!(session.explorations().last().unwrap().id, active.id);
}

#[test]
fn deleting_the_active_member_reselects_the_first_remaining() {
    let mut session = ExplorationSession::load(MemoryStore::new());
    session.create_new();
    session.create_new();
    let first_id = session.explorations()[0].id.clone();
    let active_id = session.active_id().unwrap().to_string();
    assert_ne!(first_id, active_id);

    session.delete(&active_id);

    assert_eq!(session.explorations().len(), 2);
    assert_eq!(session.active_id(), Some(first_id.as_str()));
}

#[test]
fn deleting_an_inactive_member_keeps_the_active_pointer() {
    let mut session = ExplorationSession::load(MemoryStore::new());
    session.create_new();
    let inactive_id = session.explorations()[0].id.clone();
    let active_id = session.active_id().unwrap().to_string();

    session.delete(&inactive_id);

    assert_eq!(session.active_id(), Some(active_id.as_str()));
}

#[test]
fn deleting_the_sole_member_synthesizes_a_fresh_active_default() {
    let store = MemoryStore::new();
    let mut session = ExplorationSession::load(store.clone());
    let original_id = session.active_id().unwrap().to_string();

    session.delete(&original_id);

    assert_eq!(session.explorations().len(), 1);
    let fresh = session.active().unwrap();
    assert_ne!(fresh.id, original_id);
    assert_eq!(fresh.name, "My First Exploration");
    assert_eq!(store.stored().len(), 1);
}

#[test]
fn rename_trims_and_rejects_empty_names() {
    let store = MemoryStore::new();
    let mut session = ExplorationSession::load(store.clone());
    let id = session.active_id().unwrap().to_string();

    assert!(session.rename(&id, "  Sweden @ 80%  "));
    assert_eq!(session.active().unwrap().name, "Sweden @ 80%");

    assert!(!session.rename(&id, "   "));
    assert!(!session.rename(&id, ""));
    assert_eq!(session.active().unwrap().name, "Sweden @ 80%");
    assert_eq!(store.stored()[0].name, "Sweden @ 80%");

    assert!(!session.rename("missing-id", "whatever"));
}

#[test]
fn stories_append_in_order_and_delete_by_id() {
    let mut session = ExplorationSession::load(MemoryStore::new());
    let id = session.active_id().unwrap().to_string();

    let first = GeneratedStory::new("p1", "one", "Sci-Fi");
    let second = GeneratedStory::new("p2", "two", "Social Drama");
    let first_id = first.id.clone();
    session.add_story(&id, first);
    session.add_story(&id, second);

    let stories = &session.active().unwrap().stories;
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0].text, "one");
    assert_eq!(stories[1].text, "two");

    session.delete_story(&id, &first_id);
    let stories = &session.active().unwrap().stories;
    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].text, "two");
}

#[test]
fn every_mutation_writes_through_to_the_store() {
    let store = MemoryStore::new();
    let mut session = ExplorationSession::load(store.clone());
    let id = session.active_id().unwrap().to_string();

    session.update_active(|exploration| exploration.participation_rate = 90);
    assert_eq!(store.stored()[0].participation_rate, 90);

    session.create_new();
    assert_eq!(store.stored().len(), 2);

    session.add_story(&id, GeneratedStory::new("p", "t", "Sci-Fi"));
    assert_eq!(store.stored()[0].stories.len(), 1);

    session.delete(&id);
    assert_eq!(store.stored().len(), 1);
}

#[test]
fn replace_all_swaps_the_collection_and_activates_the_first() {
    let store = MemoryStore::new();
    let mut session = ExplorationSession::load(store.clone());

    let imported = vec![
        Exploration::with_name("Imported A"),
        Exploration::with_name("Imported B"),
    ];
    let first_id = imported[0].id.clone();
    session.replace_all(imported);

    assert_eq!(session.explorations().len(), 2);
    assert_eq!(session.active_id(), Some(first_id.as_str()));
    assert_eq!(store.stored().len(), 2);

    session.replace_all(Vec::new());
    assert!(session.explorations().is_empty());
    assert_eq!(session.active_id(), None);
    assert!(session.active().is_none());
}

// Store that fails every save, to pin down the swallow-and-log policy.
#[derive(Debug, Clone, Default)]
struct ReadOnlyStore;

#[derive(Debug, thiserror::Error)]
#[error("store is read-only")]
struct ReadOnlyError;

impl ExplorationStore for ReadOnlyStore {
    type Error = ReadOnlyError;

    fn load(&self) -> Result<Vec<Exploration>, Self::Error> {
        Ok(vec![Exploration::with_name("preloaded")])
    }

    fn save(&self, _explorations: &[Exploration]) -> Result<(), Self::Error> {
        Err(ReadOnlyError)
    }
}

#[test]
fn storage_failures_are_swallowed_and_memory_stays_authoritative() {
    let mut session = ExplorationSession::load(ReadOnlyStore);
    assert_eq!(session.explorations().len(), 1);

    session.create_new();
    session.update_active(|exploration| exploration.participation_rate = 3);

    assert_eq!(session.explorations().len(), 2);
    assert_eq!(session.active().unwrap().participation_rate, 3);
}

// Store whose contents fail structural validation, exercising the
// degrade-to-empty recovery path.
#[derive(Debug, Clone, Default)]
struct CorruptStore;

impl ExplorationStore for CorruptStore {
    type Error = serde_json::Error;

    fn load(&self) -> Result<Vec<Exploration>, Self::Error> {
        serde_json::from_str(r#"[{"id": 42, "name": "wrong id type"}]"#)
    }

    fn save(&self, _explorations: &[Exploration]) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[test]
fn malformed_stored_state_degrades_to_a_fresh_default() {
    let session = ExplorationSession::load(CorruptStore);
    assert_eq!(session.explorations().len(), 1);
    assert_eq!(session.active().unwrap().name, "My First Exploration");
}
