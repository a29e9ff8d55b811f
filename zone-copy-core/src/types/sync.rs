//! Sync run types

use serde::Serialize;

use zone_copy_provider::{ChangeInfo, ChangeOperation, HostedZone, RecordType};

use super::ExclusionSet;

/// How a zone lookup result is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneMatch {
    /// Take the provider's first candidate, even if its name differs from the
    /// requested domain (a mismatch is logged).
    #[default]
    FirstCandidate,
    /// Only accept a candidate whose name equals the requested domain.
    Exact,
}

/// Parameters of one sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    /// Identity handle used to read the source zone
    pub source_profile: String,
    /// Identity handle used to resolve and write the destination zone
    pub dest_profile: String,
    pub source_domain: String,
    pub dest_domain: String,
    pub exclusions: ExclusionSet,
    pub dry_run: bool,
    pub zone_match: ZoneMatch,
}

impl SyncRequest {
    /// `dest_domain` defaults to `source_domain`.
    pub fn new(
        source_profile: impl Into<String>,
        dest_profile: impl Into<String>,
        source_domain: impl Into<String>,
        dest_domain: Option<String>,
    ) -> Self {
        let source_domain = source_domain.into();
        Self {
            source_profile: source_profile.into(),
            dest_profile: dest_profile.into(),
            dest_domain: dest_domain.unwrap_or_else(|| source_domain.clone()),
            source_domain,
            exclusions: ExclusionSet::default(),
            dry_run: false,
            zone_match: ZoneMatch::default(),
        }
    }

    #[must_use]
    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn with_zone_match(mut self, zone_match: ZoneMatch) -> Self {
        self.zone_match = zone_match;
        self
    }

    /// Comment attached to the change batch.
    pub fn batch_comment(&self) -> String {
        format!("Importing ALL records from {}", self.source_profile)
    }
}

/// A source record set left out of the change batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
}

/// Result of transforming a zone's record sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOutcome {
    /// UPSERT operations in source order
    pub changes: Vec<ChangeOperation>,
    /// Apex record sets dropped by the exclusion set, in source order
    pub skipped: Vec<SkippedRecord>,
}

/// What the final stage of a run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SyncOutcome {
    /// Nothing was written.
    #[serde(rename_all = "camelCase")]
    DryRun {
        /// Record set count the destination zone reports, if any
        destination_record_count: Option<u64>,
    },
    /// The batch was accepted by the provider.
    Applied { change: ChangeInfo },
    /// The transform produced no changes, so no batch was submitted.
    NothingToApply,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub source_zone: HostedZone,
    pub destination_zone: HostedZone,
    pub changes: Vec<ChangeOperation>,
    pub skipped: Vec<SkippedRecord>,
    pub outcome: SyncOutcome,
}

impl SyncReport {
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }
}
