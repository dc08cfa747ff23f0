use evidex_core::{EvidenceStore, EventKind, FixtureError, FixtureSet, Severity};
use std::fs;
use std::io::ErrorKind;

#[test]
fn embedded_fixtures_load_and_validate() {
    let set = FixtureSet::embedded().unwrap();

    assert_eq!(set.records.len(), 8);
    assert_eq!(set.records[0].message_id, "W1234");
    assert!(set.record("W1235").unwrap().deleted);
    assert!(set.entity("P1").unwrap().is_person());
    assert_eq!(set.timeline[4].kind, EventKind::Media);
    assert_eq!(set.advisor.missing_artifacts[0].severity, Severity::High);
    assert_eq!(set.graph.edges.len(), 4);
}

#[test]
fn store_trait_exposes_fixture_data() {
    let set = FixtureSet::embedded().unwrap();
    let store: &dyn EvidenceStore = &set;

    assert_eq!(store.records().len(), set.records.len());
    assert_eq!(store.record("T2001").unwrap().sender, "Anil Kumar");
    assert!(store.record("missing").is_none());
    assert_eq!(store.advisor_report().extraction_summary.total_calls, 89);
}

#[test]
fn directory_overrides_single_fixture_and_falls_back_for_rest() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("documents.json"),
        r#"[{
            "message_id": "X1",
            "text": "override",
            "timestamp": "2024-01-01T00:00:00Z",
            "app": "Signal",
            "sender": "A",
            "participants": ["A", "B"],
            "deleted": false,
            "tags": [],
            "device": "phone"
        }]"#,
    )
    .unwrap();

    let set = FixtureSet::load_dir(dir.path()).unwrap();
    assert_eq!(set.records.len(), 1);
    assert_eq!(set.records[0].language, None);
    assert_eq!(set.entities, FixtureSet::embedded().unwrap().entities);
}

#[test]
fn duplicate_record_ids_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let record = r#"{
        "message_id": "DUP",
        "text": "t",
        "timestamp": "2024-01-01T00:00:00Z",
        "app": "WhatsApp",
        "sender": "A",
        "participants": ["A"],
        "deleted": false,
        "tags": [],
        "device": "d"
    }"#;
    fs::write(
        dir.path().join("documents.json"),
        format!("[{record},{record}]"),
    )
    .unwrap();

    let err = FixtureSet::load_dir(dir.path()).unwrap_err();
    assert!(
        matches!(err, FixtureError::DuplicateId { ref id, .. } if id == "DUP"),
        "unexpected error: {err}"
    );
}

#[test]
fn invalid_timestamp_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("documents.json"),
        r#"[{
            "message_id": "B1",
            "text": "t",
            "timestamp": "12/03/2024",
            "app": "WhatsApp",
            "sender": "A",
            "participants": ["A"],
            "deleted": false,
            "tags": [],
            "device": "d"
        }]"#,
    )
    .unwrap();

    let err = FixtureSet::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, FixtureError::InvalidTimestamp { .. }));
}

#[test]
fn dangling_graph_edge_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("graph.json"),
        r#"{
            "nodes": [{ "id": "P1", "label": "A", "type": "person" }],
            "edges": [{ "source": "P1", "target": "P9", "kind": "calls", "count": 1 }]
        }"#,
    )
    .unwrap();

    let err = FixtureSet::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, FixtureError::DanglingEdge { .. }));
}

#[test]
fn malformed_json_reports_fixture_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("advisor.json"), "{ not json").unwrap();

    let err = FixtureSet::load_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("advisor.json"));
}

#[test]
fn missing_fixture_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let typo = dir.path().join("typo");

    let err = FixtureSet::load_dir(&typo).unwrap_err();
    match err {
        FixtureError::Io { path, source } => {
            assert_eq!(path, typo);
            assert_eq!(source.kind(), ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}
