//! Record types skipped at the zone apex

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use zone_copy_provider::RecordType;

/// Types excluded when nothing else is given.
pub const DEFAULT_EXCLUDED_TYPES: [&str; 2] = ["SOA", "NS"];

/// Ordered, immutable set of record-type mnemonics.
///
/// Membership is an exact, case-sensitive string comparison: `"ns"` does not
/// exclude `NS` records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    /// Builds the set from the given entries. Empty entries are dropped;
    /// surrounding whitespace is kept as part of the entry.
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            types
                .into_iter()
                .map(Into::into)
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, record_type: &RecordType) -> bool {
        self.0.contains(record_type.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_TYPES)
    }
}

impl fmt::Display for ExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_soa_and_ns() {
        let set = ExclusionSet::default();
        assert!(set.contains(&RecordType::Soa));
        assert!(set.contains(&RecordType::Ns));
        assert!(!set.contains(&RecordType::A));
        assert_eq!(set.to_string(), "NS,SOA");
    }

    #[test]
    fn entries_are_sorted_and_deduplicated() {
        let set = ExclusionSet::new(["TXT", "MX", "TXT"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["MX", "TXT"]);
    }

    #[test]
    fn empty_entries_are_ignored() {
        assert!(ExclusionSet::new([""]).is_empty());
        assert_eq!(ExclusionSet::new(["SOA", "", ""]).to_string(), "SOA");
    }

    #[test]
    fn whitespace_is_kept() {
        let set = ExclusionSet::new([" SOA"]);
        assert!(!set.contains(&RecordType::Soa));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let set = ExclusionSet::new(["soa"]);
        assert!(!set.contains(&RecordType::Soa));
        assert!(set.contains(&RecordType::Other("soa".to_string())));
    }

    #[test]
    fn unknown_types_can_be_excluded() {
        let set = ExclusionSet::new(["LOC"]);
        assert!(set.contains(&RecordType::from("LOC")));
    }
}
