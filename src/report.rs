use std::fmt::Write;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;

use crate::alerts::{self, AlertBoard};
use crate::models::{ActivityPoint, Zone};
use crate::stats::Statistics;

pub fn build_report(
    stats: &Statistics,
    board: &AlertBoard,
    activity: &[ActivityPoint],
    threshold_minutes: u32,
    generated_on: NaiveDate,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Tourist Safety Report");
    let _ = writeln!(
        output,
        "Generated {} (staleness threshold {} minutes)",
        generated_on, threshold_minutes
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Headline Numbers");
    let _ = writeln!(output, "- Tourists tracked: {}", stats.total_tourists);
    let _ = writeln!(output, "- Active SOS: {}", stats.active_sos);
    let _ = writeln!(output, "- Unregistered tourists: {}", stats.unregistered);
    let _ = writeln!(
        output,
        "- Average safety score: {}",
        stats.average_safety_score
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Tourists by Zone");
    if stats.zone_breakdown.is_empty() {
        let _ = writeln!(output, "No zones under monitoring.");
    } else {
        for zone in &stats.zone_breakdown {
            let _ = writeln!(
                output,
                "- {} ({}): {} tourists, {} SOS, {} unregistered",
                zone.name, zone.status, zone.tourists, zone.sos_count, zone.unregistered
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Zone Risk Mix");
    for slice in &stats.risk_distribution {
        let _ = writeln!(output, "- {}: {} zones", slice.status, slice.zones);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Active Alerts");
    if board.is_empty() {
        let _ = writeln!(output, "No tourists need attention.");
    } else {
        for tourist in board.entries() {
            let _ = writeln!(
                output,
                "- {} ({}): {}",
                tourist.name,
                tourist.id,
                alerts::describe_alert(tourist)
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Activity Timeline (24h)");
    for point in activity {
        let _ = writeln!(output, "- {}: {} tourists", point.time, point.tourists);
    }

    output
}

#[derive(Serialize)]
struct RosterRow<'a> {
    zone_id: &'a str,
    zone: &'a str,
    zone_status: String,
    tourist_id: &'a str,
    name: &'a str,
    nationality: Option<&'a str>,
    risk_level: String,
    id_issued: bool,
    sos_active: bool,
    safety_score: Option<u8>,
    last_active: Option<&'a str>,
}

/// Writes the flattened roster as CSV, one row per tourist, and returns
/// the number of rows written.
pub fn export_roster(zones: &[Zone], out: &Path) -> anyhow::Result<usize> {
    let mut writer = csv::Writer::from_path(out)
        .with_context(|| format!("failed to create {}", out.display()))?;
    let mut rows = 0usize;

    for zone in zones {
        for tourist in &zone.tourists {
            writer.serialize(RosterRow {
                zone_id: &zone.zone_id,
                zone: &zone.name,
                zone_status: zone.status.to_string(),
                tourist_id: &tourist.id,
                name: &tourist.name,
                nationality: tourist.nationality.as_deref(),
                risk_level: tourist.risk_level.to_string(),
                id_issued: tourist.id_issued,
                sos_active: tourist.sos_active,
                safety_score: tourist.safety_score,
                last_active: tourist.last_active.as_deref(),
            })?;
            rows += 1;
        }
    }

    writer.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::DEFAULT_STALE_MINUTES;
    use crate::data::{self, Dataset};
    use crate::stats;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
    }

    #[test]
    fn report_carries_headline_and_alert_sections() {
        let dataset = Dataset::seeded();
        let statistics = stats::aggregate(&dataset.zones);
        let board = AlertBoard::derive(&dataset.flattened_tourists(), DEFAULT_STALE_MINUTES);
        let report = build_report(
            &statistics,
            &board,
            &data::activity_timeline(),
            DEFAULT_STALE_MINUTES,
            sample_date(),
        );

        assert!(report.contains("# Tourist Safety Report"));
        assert!(report.contains("- Tourists tracked: 10"));
        assert!(report.contains("- Active SOS: 2"));
        assert!(report.contains("- Unregistered tourists: 2"));
        assert!(report.contains("- Average safety score: 72"));
        assert!(report.contains("- Riverfront (Risky): 3 tourists, 1 SOS, 1 unregistered"));
        assert!(report.contains("- Fatima Sheikh (T003): SOS alert active"));
        assert!(report.contains("- Ananya Gupta (T007): no digital identity issued"));
        assert!(report.contains("- 16:00: 203 tourists"));
    }

    #[test]
    fn empty_dataset_report_degrades_gracefully() {
        let statistics = stats::aggregate(&[]);
        let board = AlertBoard::derive(&[], DEFAULT_STALE_MINUTES);
        let report = build_report(&statistics, &board, &[], DEFAULT_STALE_MINUTES, sample_date());

        assert!(report.contains("No zones under monitoring."));
        assert!(report.contains("No tourists need attention."));
        assert!(report.contains("- Average safety score: 0"));
    }

    #[test]
    fn export_writes_one_row_per_tourist() {
        let dataset = Dataset::seeded();
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("roster.csv");

        let rows = export_roster(&dataset.zones, &out).unwrap();
        assert_eq!(rows, 10);

        let contents = std::fs::read_to_string(&out).unwrap();
        // header + one line per tourist
        assert_eq!(contents.lines().count(), 11);
        assert!(contents.lines().next().unwrap().contains("tourist_id"));
        assert!(contents.contains("T003,Fatima Sheikh"));
    }
}
