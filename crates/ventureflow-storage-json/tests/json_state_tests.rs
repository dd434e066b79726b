use std::fs;

use tempfile::tempdir;
use ventureflow_core::{StatePersistence, WizardAction, WizardState, WizardStore};
use ventureflow_domain::{FieldValue, Package};
use ventureflow_storage_json::{JsonStatePersistence, STATE_FILE_NAME};

#[test]
fn missing_file_loads_as_none() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonStatePersistence::new(dir.path()).expect("create storage");
    assert!(storage.load().expect("load").is_none());
    assert_eq!(storage.path(), dir.path().join(STATE_FILE_NAME).as_path());
}

#[test]
fn json_storage_saves_and_loads_state() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonStatePersistence::new(dir.path()).expect("create storage");

    let mut state = WizardState::default();
    state.selected_category_id = Some("accommodation".into());
    state.selected_subcategory_id = Some("hotels".into());
    state
        .listing_form_data
        .insert("roomTypes".into(), FieldValue::list(["Double", "Suite"]));
    state.selected_package = Some(Package::Premium);

    storage.save(&state).expect("save state");
    let loaded = storage.load().expect("load state").expect("state present");
    assert_eq!(loaded, state);

    let raw = fs::read_to_string(storage.path()).expect("read file");
    assert!(raw.contains("\"selectedCategoryId\": \"accommodation\""));
    assert!(raw.contains("\"schemaVersion\": 1"));
    assert!(!storage.path().with_extension("json.tmp").exists());
}

#[test]
fn store_survives_a_restart() {
    let dir = tempdir().expect("tempdir");
    {
        let storage = JsonStatePersistence::new(dir.path()).expect("create storage");
        let mut store = WizardStore::hydrate(Box::new(storage));
        store.dispatch(WizardAction::SetCategory("activities".into()));
        store.dispatch(WizardAction::SetSubcategory("tours".into()));
    }

    let storage = JsonStatePersistence::new(dir.path()).expect("reopen storage");
    let store = WizardStore::hydrate(Box::new(storage));
    assert_eq!(store.state().selected_subcategory_id.as_deref(), Some("tours"));
}

#[test]
fn corrupt_file_is_an_error_and_store_uses_defaults() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonStatePersistence::new(dir.path()).expect("create storage");
    fs::write(storage.path(), "{ not json").expect("write garbage");

    assert!(storage.load().is_err());
    let store = WizardStore::hydrate(Box::new(storage));
    assert_eq!(store.state(), &WizardState::default());
}

#[test]
fn newer_schema_versions_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonStatePersistence::new(dir.path()).expect("create storage");
    fs::write(
        storage.path(),
        r#"{ "schemaVersion": 99, "savedAt": "2026-01-01T00:00:00Z", "state": {} }"#,
    )
    .expect("write future blob");
    assert!(storage.load().is_err());
    assert!(storage.save(&WizardState::default()).is_err());

    let path = storage.path().to_path_buf();
    let mut store = WizardStore::hydrate(Box::new(storage));
    store.dispatch(WizardAction::StartListingFlow);
    assert!(store.state().listing_flow_active);

    let raw = fs::read_to_string(&path).expect("read file");
    assert!(raw.contains("\"schemaVersion\": 99"));
    assert!(!raw.contains("listingFlowActive"));
}
