use evidex_core::{
    filter_events, high_risk_persons, node_details, Entity, EventKind, FixtureSet, Graph,
    GraphNode, RiskBand, TimelineCounts, TimelineError, TimelineFilter, HIGH_RISK_THRESHOLD,
};

#[test]
fn timeline_filter_parses_known_values() {
    assert_eq!("ALL".parse::<TimelineFilter>().unwrap(), TimelineFilter::All);
    assert_eq!(
        " media ".parse::<TimelineFilter>().unwrap(),
        TimelineFilter::Only(EventKind::Media)
    );
    assert_eq!(
        "sms".parse::<TimelineFilter>().unwrap_err(),
        TimelineError::UnknownFilter("sms".to_string())
    );
}

#[test]
fn timeline_filter_keeps_order() {
    let set = FixtureSet::embedded().unwrap();

    let chats = filter_events(&set.timeline, TimelineFilter::Only(EventKind::Chat))
        .into_iter()
        .map(|event| event.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(chats, vec!["E1", "E2", "E4"]);
    assert_eq!(
        filter_events(&set.timeline, TimelineFilter::All).len(),
        set.timeline.len()
    );
}

#[test]
fn timeline_counts_cover_every_kind() {
    let set = FixtureSet::embedded().unwrap();

    let counts = TimelineCounts::from_events(&set.timeline);
    assert_eq!(
        counts,
        TimelineCounts {
            all: 6,
            chat: 3,
            call: 2,
            media: 1,
        }
    );
}

#[test]
fn high_risk_persons_use_strict_threshold() {
    let set = FixtureSet::embedded().unwrap();

    let ids = high_risk_persons(&set.entities, HIGH_RISK_THRESHOLD)
        .into_iter()
        .map(|entity| entity.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["P1", "P2", "P3"]);
    assert!(high_risk_persons(&set.entities, 0.92).is_empty());
}

#[test]
fn person_node_details_join_entity_and_edges() {
    let set = FixtureSet::embedded().unwrap();

    let details = node_details(&set.graph, &set.entities, "P2").unwrap();
    assert_eq!(details.node.label, "Vikram Singh");
    assert_eq!(details.entity.unwrap().role, "Financial Handler");
    assert_eq!(details.edges.len(), 2);
    assert_eq!(details.band, Some(RiskBand::High));
}

#[test]
fn account_node_has_no_entity_or_band() {
    let set = FixtureSet::embedded().unwrap();

    let details = node_details(&set.graph, &set.entities, "A1").unwrap();
    assert!(details.entity.is_none());
    assert!(details.band.is_none());
    assert_eq!(details.edges[0].kind, "transfer");
    assert!(node_details(&set.graph, &set.entities, "missing").is_none());
}

fn person(id: &str, risk_score: f64) -> Entity {
    Entity {
        id: id.to_string(),
        name: "Test Person".to_string(),
        kind: "person".to_string(),
        role: "Courier".to_string(),
        risk_score,
        reason: "fixture".to_string(),
    }
}

fn person_node(id: &str, risk_score: Option<f64>) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        label: "Test Person".to_string(),
        kind: "person".to_string(),
        role: None,
        risk_score,
    }
}

#[test]
fn node_risk_score_takes_precedence_over_entity_score() {
    let graph = Graph {
        nodes: vec![person_node("P9", Some(0.9))],
        edges: Vec::new(),
    };
    let entities = vec![person("P9", 0.5)];

    let details = node_details(&graph, &entities, "P9").unwrap();
    assert_eq!(details.entity.unwrap().risk_score, 0.5);
    assert_eq!(details.band, Some(RiskBand::High));
}

#[test]
fn entity_score_fills_missing_node_score() {
    let graph = Graph {
        nodes: vec![person_node("P9", None)],
        edges: Vec::new(),
    };
    let entities = vec![person("P9", 0.8)];

    let details = node_details(&graph, &entities, "P9").unwrap();
    assert_eq!(details.band, Some(RiskBand::Elevated));
}
