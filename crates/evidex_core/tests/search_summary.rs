use evidex_core::{search, summarize_hits, FixtureSet};

#[test]
fn no_hits_give_empty_summary() {
    let set = FixtureSet::embedded().unwrap();

    let hits = search("xyz123", &set.records).unwrap();
    let summary = summarize_hits(&hits);
    assert!(summary.is_empty());
    assert_eq!(summary.hit_count, 0);
}

#[test]
fn single_hit_cites_itself_then_falls_back() {
    let set = FixtureSet::embedded().unwrap();

    let hits = search("jugad", &set.records).unwrap();
    assert_eq!(hits.len(), 1);

    let summary = summarize_hits(&hits);
    assert_eq!(summary.headline(), "Found 1 relevant messages");
    assert_eq!(
        summary.findings,
        vec![
            "Financial transaction discussions detected involving amounts up to ₹2 lac \
             [msg:T2002 2024-03-14 20:40:19 UTC]"
                .to_string(),
            "Multiple references to UPI transfers and payment confirmations \
             [msg:W1235 2024-03-12 22:18:30 UTC]"
                .to_string(),
            "Coordination of physical meetings at specific times and locations \
             [msg:W1236 2024-03-13 15:22:00 UTC]"
                .to_string(),
        ]
    );
}

#[test]
fn many_hits_cite_first_three_in_order() {
    let set = FixtureSet::embedded().unwrap();

    let hits = search("financial", &set.records).unwrap();
    assert_eq!(hits.len(), 4);

    let summary = summarize_hits(&hits);
    assert_eq!(summary.hit_count, 4);
    assert_eq!(summary.findings.len(), 3);
    assert!(summary.findings[0].ends_with("[msg:W1234 2024-03-12 21:45:10 UTC]"));
    assert!(summary.findings[1].ends_with("[msg:W1235 2024-03-12 22:18:30 UTC]"));
    assert!(summary.findings[2].ends_with("[msg:T2002 2024-03-14 20:40:19 UTC]"));
}
