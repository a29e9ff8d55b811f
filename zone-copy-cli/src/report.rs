//! Human readable run summary

use zone_copy_core::types::{SyncOutcome, SyncReport, SyncRequest};

/// Summary lines for a finished run, in print order.
pub fn summary_lines(request: &SyncRequest, report: &SyncReport) -> Vec<String> {
    let count = report.change_count();
    let mut lines = Vec::new();

    if !report.skipped.is_empty() {
        let skipped: Vec<String> = report
            .skipped
            .iter()
            .map(|s| format!("{} {}", s.record_type, s.name))
            .collect();
        lines.push(format!("Left out at the apex: {}", skipped.join(", ")));
    }

    match &report.outcome {
        SyncOutcome::DryRun {
            destination_record_count,
        } => {
            lines.push(format!(
                "Dry run: {count} records would be copied to '{}' ({})",
                report.destination_zone.name, report.destination_zone.id
            ));
            lines.push(match destination_record_count {
                Some(existing) => {
                    format!("Destination profile contains {existing} records, including NS and SOA")
                }
                None => "Destination zone does not report its record count".to_string(),
            });
        }
        SyncOutcome::Applied { change } => {
            lines.push(format!(
                "{count} records in '{}' are copied from {} to {}",
                request.dest_domain, request.source_profile, request.dest_profile
            ));
            lines.push(format!("Change {} is {}", change.id, change.status));
        }
        SyncOutcome::NothingToApply => {
            lines.push(format!(
                "Nothing to copy from {} to '{}'",
                request.source_profile, request.dest_domain
            ));
        }
    }

    lines
}
