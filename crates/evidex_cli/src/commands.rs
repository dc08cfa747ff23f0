use anyhow::{Context, Result};
use evidex_core::{
    high_risk_persons, node_details, ranked_persons, summarize_hits, App, CaseSession,
    ExportFormat, FixtureSet, RiskBand, SearchQuery, TimelineCounts, TimelineFilter,
};
use log::info;

use crate::settings::Settings;

pub fn handle_search(
    fixtures: &FixtureSet,
    query: &[String],
    app: Option<&str>,
    limit: Option<usize>,
    exclude_deleted: bool,
) -> Result<()> {
    let mut search = SearchQuery::new(query.join(" "));
    search.app = app.map(App::parse);
    search.limit = limit;
    search.include_deleted = !exclude_deleted;

    let mut session = CaseSession::new(fixtures);
    let hits = session.run_search(&search)?;
    if hits.is_empty() {
        println!("No results found. Try: 'paise', 'meeting', 'UPI', 'jugad', 'police'");
        session.discard();
        return Ok(());
    }

    let summary = summarize_hits(hits);
    println!("{}", summary.headline());
    println!();
    println!("Summary:");
    for finding in &summary.findings {
        println!("  - {finding}");
    }
    for record in hits {
        let recovered = if record.deleted { " RECOVERED" } else { "" };
        println!();
        println!("[{}] {}{}", record.message_id, record.app, recovered);
        println!("  \"{}\"", record.text);
        println!(
            "  {} -> {}",
            record.sender,
            record.recipients().collect::<Vec<_>>().join(", ")
        );
        println!("  tags: {}", record.tags.join(", "));
        println!("  time: {}  device: {}", record.timestamp, record.device);
    }
    session.discard();
    Ok(())
}

pub fn handle_timeline(fixtures: &FixtureSet, filter: &str) -> Result<()> {
    let filter: TimelineFilter = filter.parse()?;
    let counts = TimelineCounts::from_events(&fixtures.timeline);
    println!(
        "all={} chat={} call={} media={}",
        counts.all, counts.chat, counts.call, counts.media
    );

    let mut session = CaseSession::new(fixtures);
    session.set_timeline_filter(filter);
    for event in session.timeline_events() {
        let recovered = if event.deleted { " (recovered)" } else { "" };
        println!(
            "{}  {:<5} {:<8} [{}] {}{}",
            event.timestamp,
            event.kind.as_str(),
            event.app,
            event.message_id,
            event.description,
            recovered
        );
    }
    session.discard();
    Ok(())
}

pub fn handle_network(fixtures: &FixtureSet, threshold: f64, node: Option<&str>) -> Result<()> {
    if let Some(node_id) = node {
        let details = node_details(&fixtures.graph, &fixtures.entities, node_id)
            .with_context(|| format!("Graph node not found: {node_id}"))?;
        println!("{} ({})", details.node.label, details.node.kind);
        if let Some(entity) = details.entity {
            println!("  role: {}", entity.role);
            println!("  reason: {}", entity.reason);
        }
        if let Some(band) = details.band {
            println!("  risk: {}", band.as_str());
        }
        for edge in details.edges {
            println!(
                "  {} -> {}  {} x{}",
                edge.source, edge.target, edge.kind, edge.count
            );
        }
        return Ok(());
    }

    let persons = high_risk_persons(&fixtures.entities, threshold);
    println!("{} high-risk individual(s) above {threshold:.2}", persons.len());
    for entity in persons {
        println!(
            "  {:<16} {:.0}% {:<9} {}",
            entity.name,
            entity.risk_score * 100.0,
            RiskBand::from_score(entity.risk_score).as_str(),
            entity.role
        );
    }
    Ok(())
}

pub fn handle_report(
    fixtures: &FixtureSet,
    settings: &Settings,
    seed: usize,
    add: &[String],
    export: Option<&str>,
) -> Result<()> {
    let mut session = CaseSession::with_seeded_report(fixtures, seed);
    for message_id in add {
        session.add_to_report(message_id)?;
    }

    print!("{}", session.report_text(&settings.report_title));

    println!();
    println!("Persons of interest:");
    for entity in ranked_persons(&fixtures.entities) {
        println!(
            "  {:<16} {:.0}%  {}",
            entity.name,
            entity.risk_score * 100.0,
            entity.reason
        );
    }

    if let Some(format) = export {
        let format = ExportFormat::parse(format)?;
        let notice = session.export_report(format);
        println!();
        println!("{}", notice.message());
    }
    session.discard();
    Ok(())
}

pub fn handle_check(fixtures: &FixtureSet, file: &str) -> Result<()> {
    let mut session = CaseSession::new(fixtures);
    session.ingest_mut().select_file(file)?;
    let handle = session
        .ingest()
        .spawn_completeness_check(fixtures.advisor.clone())?;
    let outcome = handle.wait()?;

    let status = &outcome.report.extraction_status;
    let summary = &outcome.report.extraction_summary;
    println!("Completeness check completed for {}", outcome.file_name);
    println!(
        "  {}  confidence {:.0}%  {} device(s)  {} app(s)",
        if outcome.is_complete() {
            "complete"
        } else {
            "INCOMPLETE"
        },
        status.confidence * 100.0,
        status.device_count,
        summary.apps_extracted.len()
    );
    println!(
        "  messages={} calls={} media={} contacts={}",
        summary.total_messages, summary.total_calls, summary.total_media, summary.total_contacts
    );

    println!("Missing artifacts:");
    for artifact in &outcome.report.missing_artifacts {
        println!(
            "  [{}] {}: {}",
            artifact.severity.as_str().to_uppercase(),
            artifact.kind,
            artifact.reason
        );
        println!("        -> {}", artifact.recommendation);
    }

    println!("Anomalies:");
    for anomaly in &outcome.report.anomalies {
        println!(
            "  [{}] {}: {} ({})",
            anomaly.risk_level, anomaly.kind, anomaly.description, anomaly.timestamp
        );
    }

    info!(
        "event=cli_check module=cli status=ok high_severity={}",
        outcome.high_severity_artifacts
    );
    session.discard();
    Ok(())
}
