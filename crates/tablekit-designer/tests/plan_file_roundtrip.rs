//! Plan file save/load integration tests.

use tablekit_designer::{
    load_plan, save_plan, EditorSession, PlanFile, PlanSeed, Point, Side, TableShape,
};

fn sample_session() -> EditorSession {
    let mut session = EditorSession::open(&PlanSeed::default());
    session.change_shape(TableShape::Oval);
    session.toggle_slot_at(Side::Top, Point::new(0.0, -48.0));
    session.toggle_slot_at(Side::Bottom, Point::new(0.0, 48.0));
    session.set_label(Some("Terrace 2".to_string()));
    session
}

#[test]
fn save_then_load_round_trips_the_document() {
    let session = sample_session();
    let file = PlanFile::from_session(&session, "terrace");

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("terrace.tkplan");

    save_plan(&path, &file).expect("save plan");
    let loaded = load_plan(&path).expect("load plan");

    assert_eq!(loaded.metadata.name, "terrace");
    assert_eq!(loaded.metadata.id, file.metadata.id);
    assert_eq!(loaded.geometry, file.geometry);
    assert_eq!(loaded.slots, file.slots);
    assert_eq!(loaded.label.as_deref(), Some("Terrace 2"));
}

#[test]
fn loaded_documents_reopen_as_equivalent_sessions() {
    let session = sample_session();
    let file = PlanFile::from_session(&session, "terrace");

    let reopened = EditorSession::open(&file.seed());
    assert_eq!(reopened.geometry(), session.geometry());
    assert_eq!(reopened.slots(), session.slots());
    assert_eq!(reopened.label(), session.label());
    assert_eq!(reopened.capacity(), session.capacity());
}

#[test]
fn unknown_major_version_is_rejected() {
    let session = sample_session();
    let mut file = PlanFile::from_session(&session, "terrace");
    file.version = "9.0".to_string();
    let text = file.encode().expect("encode");

    let err = PlanFile::decode(&text).expect_err("decode must fail");
    assert!(matches!(
        err,
        tablekit_core::Error::UnsupportedVersion { .. }
    ));
}

#[test]
fn minor_version_bumps_still_decode() {
    let session = sample_session();
    let mut file = PlanFile::from_session(&session, "terrace");
    file.version = "1.7".to_string();
    let text = file.encode().expect("encode");
    assert!(PlanFile::decode(&text).is_ok());
}

#[test]
fn garbage_input_reports_a_document_error() {
    let err = PlanFile::decode("{not json").expect_err("decode must fail");
    assert!(matches!(err, tablekit_core::Error::Document(_)));
}

#[test]
fn loading_a_missing_file_fails_with_context() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.tkplan");
    let err = load_plan(&path).expect_err("load must fail");
    assert!(err.to_string().contains("missing.tkplan"));
}
