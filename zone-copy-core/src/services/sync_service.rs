//! Zone 复制编排服务

use std::sync::Arc;

use crate::error::{CoreResult, StageResultExt, SyncStage};
use crate::services::{RecordStoreService, ServiceContext, ZoneDirectoryService};
use crate::transform::transform;
use crate::types::{ChangeBatch, SyncOutcome, SyncReport, SyncRequest, TransformOutcome};

/// Copies all record sets of one zone into another.
///
/// A run goes through its stages strictly one after another: resolve the
/// source zone, list its records, transform them, resolve the destination
/// zone, then either report (dry run) or submit one change batch. The first
/// failure ends the run; nothing is retried or rolled back.
pub struct SyncService {
    directory: ZoneDirectoryService,
    store: RecordStoreService,
}

impl SyncService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            directory: ZoneDirectoryService::new(Arc::clone(&ctx)),
            store: RecordStoreService::new(ctx),
        }
    }

    pub async fn run(&self, request: &SyncRequest) -> CoreResult<SyncReport> {
        log::info!(
            "Copying {} ({}) to {} ({})",
            request.source_domain,
            request.source_profile,
            request.dest_domain,
            request.dest_profile
        );
        if request.exclusions.is_empty() {
            log::info!("No record types are excluded at the apex");
        } else {
            log::info!("Excluding apex {}", request.exclusions);
        }

        let source_zone = self
            .directory
            .resolve_zone(
                &request.source_profile,
                &request.source_domain,
                request.zone_match,
            )
            .await
            .at_stage(SyncStage::ResolveSourceZone)?;

        let records = self
            .store
            .fetch_all_records(&request.source_profile, &source_zone.id)
            .await
            .at_stage(SyncStage::ListRecords)?;
        log::info!("Fetched {} record sets from {}", records.len(), source_zone.name);

        let TransformOutcome { changes, skipped } = transform(
            &request.source_domain,
            &request.dest_domain,
            &request.exclusions,
            &records,
        );
        log::info!("Number of records to copy {}", changes.len());

        let destination_zone = self
            .directory
            .resolve_zone(&request.dest_profile, &request.dest_domain, request.zone_match)
            .await
            .at_stage(SyncStage::ResolveDestinationZone)?;

        let batch = ChangeBatch::new(request.batch_comment(), changes);
        let outcome = if request.dry_run {
            log::info!(
                "Not copying records to {} since dry run is requested",
                request.dest_profile
            );
            SyncOutcome::DryRun {
                destination_record_count: destination_zone.record_count,
            }
        } else if batch.is_empty() {
            log::warn!("No record sets left to copy, nothing submitted");
            SyncOutcome::NothingToApply
        } else {
            let change = self
                .store
                .apply_changes(&request.dest_profile, &destination_zone.id, &batch)
                .await
                .at_stage(SyncStage::ApplyChanges)?;
            SyncOutcome::Applied { change }
        };

        Ok(SyncReport {
            source_zone,
            destination_zone,
            changes: batch.changes,
            skipped,
            outcome,
        })
    }
}
