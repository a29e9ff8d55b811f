//! 记录改名与 apex 排除
//!
//! Turns the record sets of a source zone into UPSERT operations for the
//! destination zone.

use zone_copy_provider::domain_name::to_absolute;

use crate::types::{ChangeOperation, ExclusionSet, RecordSet, SkippedRecord, TransformOutcome};

/// Name rewriting and apex filtering for one source/destination pair.
#[derive(Debug, Clone)]
pub struct RecordTransform {
    source_apex: String,
    dest_apex: String,
    exclusions: ExclusionSet,
}

impl RecordTransform {
    /// Both domains are normalized to absolute form.
    pub fn new(source_domain: &str, dest_domain: &str, exclusions: ExclusionSet) -> Self {
        Self {
            source_apex: to_absolute(source_domain),
            dest_apex: to_absolute(dest_domain),
            exclusions,
        }
    }

    /// Only apex record sets can be excluded; deeper names of an excluded
    /// type are always copied.
    ///
    /// Names are compared case-sensitively, so an `Example.com.` record is
    /// not the `example.com.` apex and its SOA/NS are copied as well.
    pub fn is_excluded(&self, record: &RecordSet) -> bool {
        record.name == self.source_apex && self.exclusions.contains(&record.record_type)
    }

    /// Replaces a trailing `source_apex` with `dest_apex`.
    ///
    /// The match is literal and not anchored at a label boundary, so with
    /// `a.com.` as source `xa.com.` becomes `xb.com.`. Names not ending in
    /// the source apex are only normalized. Case is significant here too:
    /// `www.Example.com.` does not end in `example.com.` and keeps its name.
    pub fn rewrite_name(&self, name: &str) -> String {
        let absolute = to_absolute(name);
        match absolute.strip_suffix(self.source_apex.as_str()) {
            Some(prefix) => format!("{prefix}{}", self.dest_apex),
            None => absolute,
        }
    }

    /// Runs over `records` in order. The input is left untouched.
    pub fn apply(&self, records: &[RecordSet]) -> TransformOutcome {
        let mut outcome = TransformOutcome::default();

        for record in records {
            if self.is_excluded(record) {
                log::info!("Skipping {} {}", record.name, record.record_type);
                outcome.skipped.push(SkippedRecord {
                    name: record.name.clone(),
                    record_type: record.record_type.clone(),
                });
                continue;
            }

            let renamed = record.renamed(self.rewrite_name(&record.name));
            log::trace!("{} {} -> {}", record.name, record.record_type, renamed.name);
            outcome.changes.push(ChangeOperation::upsert(renamed));
        }

        outcome
    }
}

/// Builds the UPSERT operations that copy `records` from `source_domain` to
/// `dest_domain`, leaving out apex records whose type is in `exclusions`.
pub fn transform(
    source_domain: &str,
    dest_domain: &str,
    exclusions: &ExclusionSet,
    records: &[RecordSet],
) -> TransformOutcome {
    RecordTransform::new(source_domain, dest_domain, exclusions.clone()).apply(records)
}
