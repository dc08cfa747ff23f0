use evidex_core::{
    CaseSession, EventKind, ExportFormat, FixtureSet, IngestError, SearchError, SearchQuery,
    SelectionError, TimelineFilter,
};

#[test]
fn search_updates_session_state() {
    let set = FixtureSet::embedded().unwrap();
    let mut session = CaseSession::new(&set);

    let hits = session
        .run_search(&SearchQuery::new(" money "))
        .unwrap()
        .iter()
        .map(|record| record.message_id.clone())
        .collect::<Vec<_>>();
    assert_eq!(hits, vec!["W1234", "W1235"]);
    assert_eq!(session.last_query(), Some("money"));
    assert_eq!(session.last_results().len(), 2);
}

#[test]
fn rejected_search_keeps_previous_results() {
    let set = FixtureSet::embedded().unwrap();
    let mut session = CaseSession::new(&set);
    session.run_search(&SearchQuery::new("police")).unwrap();

    let err = session.run_search(&SearchQuery::new("  ")).unwrap_err();
    assert_eq!(err, SearchError::EmptyQuery);
    assert_eq!(session.last_query(), Some("police"));
    assert_eq!(session.last_results()[0].message_id, "W1237");

    session.clear_search();
    assert!(session.last_query().is_none());
    assert!(session.last_results().is_empty());
}

#[test]
fn report_selection_flows_through_session() {
    let set = FixtureSet::embedded().unwrap();
    let mut session = CaseSession::with_seeded_report(&set, 5);
    assert_eq!(session.selection().len(), 5);

    assert!(!session.add_to_report("W1234").unwrap());
    assert!(session.add_to_report("S3001").unwrap());
    assert_eq!(
        session.add_to_report("NOPE").unwrap_err(),
        SelectionError::UnknownRecord("NOPE".to_string())
    );

    session.remove_from_report("W1236").unwrap();
    assert!(!session.selection().contains("W1236"));
    assert_eq!(session.report_summary().total_items, 5);
    assert!(session.report_text("CASE 42").starts_with("=== CASE 42 ==="));
    assert_eq!(session.export_report(ExportFormat::Csv).item_count, 5);

    session.clear_report();
    assert!(session.selection().is_empty());
    session.discard();
}

#[test]
fn timeline_filter_is_session_scoped() {
    let set = FixtureSet::embedded().unwrap();
    let mut session = CaseSession::new(&set);
    assert_eq!(session.timeline_events().len(), 6);

    session.set_timeline_filter(TimelineFilter::Only(EventKind::Call));
    let calls = session.timeline_events();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|event| event.kind == EventKind::Call));
}

#[test]
fn completeness_check_requires_selected_file() {
    let set = FixtureSet::embedded().unwrap();
    let mut session = CaseSession::new(&set);

    assert!(matches!(
        session.run_completeness_check(),
        Err(IngestError::NoFileSelected)
    ));

    session.ingest_mut().select_file("case_0312.ufdr").unwrap();
    let outcome = session.run_completeness_check().unwrap();
    assert_eq!(outcome.file_name, "case_0312.ufdr");
    assert!(!outcome.is_complete());
}

#[test]
fn sessions_have_distinct_ids() {
    let set = FixtureSet::embedded().unwrap();
    let first = CaseSession::new(&set);
    let second = CaseSession::new(&set);
    assert_ne!(first.id(), second.id());
}
