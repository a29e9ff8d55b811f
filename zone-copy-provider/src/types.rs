use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============ Provider Types ============

/// Identity handed to [`create_provider()`](crate::create_provider).
///
/// The provider crate resolves the actual secrets itself; callers only pass
/// the handle (e.g. a shared-credentials profile name) through.
///
/// ```json
/// { "provider": "route53", "credentials": { "profile": "prod", "region": "eu-west-1" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Route 53 via a named AWS shared-credentials profile. Requires feature `route53`.
    #[cfg(feature = "route53")]
    #[serde(rename = "route53")]
    Route53 {
        /// Profile name in `~/.aws/credentials` / `~/.aws/config`.
        profile: String,
        /// Signing region for the client.
        region: String,
        /// Optional endpoint override (LocalStack and similar).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        endpoint_url: Option<String>,
    },
}

impl ProviderCredentials {
    /// The opaque identity label the provider is registered under.
    pub fn identity(&self) -> &str {
        match self {
            #[cfg(feature = "route53")]
            Self::Route53 { profile, .. } => profile,
        }
    }
}

// ============ Zone Types ============

/// A hosted zone as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Provider-specific zone identifier.
    pub id: String,
    /// Zone name, always absolute (`"example.com."`).
    pub name: String,
    /// Number of record sets in the zone, if the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<u64>,
}

// ============ Record Types ============

/// DNS record type.
///
/// Types the provider may return but this crate has no variant for are kept
/// verbatim in [`RecordType::Other`] so they survive a copy unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Aaaa,
    Caa,
    Cname,
    Ds,
    Https,
    Mx,
    Naptr,
    Ns,
    Ptr,
    Soa,
    Spf,
    Srv,
    Sshfp,
    Svcb,
    Tlsa,
    Txt,
    /// Any other type, stored as given.
    Other(String),
}

impl RecordType {
    /// Uppercase mnemonic (`"A"`, `"AAAA"`, `"SOA"`, ...).
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Caa => "CAA",
            Self::Cname => "CNAME",
            Self::Ds => "DS",
            Self::Https => "HTTPS",
            Self::Mx => "MX",
            Self::Naptr => "NAPTR",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Soa => "SOA",
            Self::Spf => "SPF",
            Self::Srv => "SRV",
            Self::Sshfp => "SSHFP",
            Self::Svcb => "SVCB",
            Self::Tlsa => "TLSA",
            Self::Txt => "TXT",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for RecordType {
    fn from(value: &str) -> Self {
        match value {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CAA" => Self::Caa,
            "CNAME" => Self::Cname,
            "DS" => Self::Ds,
            "HTTPS" => Self::Https,
            "MX" => Self::Mx,
            "NAPTR" => Self::Naptr,
            "NS" => Self::Ns,
            "PTR" => Self::Ptr,
            "SOA" => Self::Soa,
            "SPF" => Self::Spf,
            "SRV" => Self::Srv,
            "SSHFP" => Self::Sshfp,
            "SVCB" => Self::Svcb,
            "TLSA" => Self::Tlsa,
            "TXT" => Self::Txt,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Alias target (provider-side pointer to another resource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasTarget {
    pub hosted_zone_id: String,
    pub dns_name: String,
    pub evaluate_target_health: bool,
}

/// Geolocation routing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdivision_code: Option<String>,
}

/// Routing metadata attached to a record set.
///
/// All fields are optional; a plain ("simple routing") record set leaves
/// every one of them empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingPolicy {
    /// Distinguishes record sets sharing a name and type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    /// Latency-routing region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// `PRIMARY` or `SECONDARY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_value_answer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_location: Option<GeoLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<String>,
}

/// A named group of DNS values sharing a name and type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    /// Absolute owner name (`"www.example.com."`).
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// TTL in seconds. Alias record sets have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(default)]
    pub routing: RoutingPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<AliasTarget>,
    /// Record values in provider order.
    #[serde(default)]
    pub values: Vec<String>,
}

impl RecordSet {
    /// A simple-routing record set with the given values.
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: Option<i64>,
        values: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            routing: RoutingPolicy::default(),
            alias_target: None,
            values,
        }
    }

    /// Returns a copy of this record set under a different owner name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

// ============ Pagination ============

/// Continuation point returned with a truncated page.
///
/// Treat it as opaque: hand it back to
/// [`list_record_page`](crate::ZoneProvider::list_record_page) unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCursor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// One page of record sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    pub records: Vec<RecordSet>,
    /// Present exactly when the provider reported the listing as truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageCursor>,
}

impl RecordPage {
    /// Whether more pages follow this one.
    pub fn is_truncated(&self) -> bool {
        self.next.is_some()
    }
}

// ============ Change Batch Types ============

/// Change action. Only UPSERT is ever emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Insert the record set, or overwrite it if it already exists.
    Upsert,
}

/// A single mutation inside a [`ChangeBatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeOperation {
    pub action: ChangeAction,
    pub record: RecordSet,
}

impl ChangeOperation {
    pub fn upsert(record: RecordSet) -> Self {
        Self {
            action: ChangeAction::Upsert,
            record,
        }
    }
}

/// An ordered set of changes applied atomically by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeBatch {
    pub comment: String,
    pub changes: Vec<ChangeOperation>,
}

impl ChangeBatch {
    pub fn new(comment: impl Into<String>, changes: Vec<ChangeOperation>) -> Self {
        Self {
            comment: comment.into(),
            changes,
        }
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Propagation status of a submitted change batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeStatus {
    /// Accepted, not yet propagated to all name servers.
    #[serde(rename = "PENDING")]
    Pending,
    /// Propagated.
    #[serde(rename = "INSYNC")]
    InSync,
    /// Status string the crate does not know.
    #[serde(untagged)]
    Other(String),
}

impl ChangeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::InSync => "INSYNC",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ChangeStatus {
    fn from(value: &str) -> Self {
        match value {
            "PENDING" => Self::Pending,
            "INSYNC" => Self::InSync,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status handle returned when a change batch is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// Provider-specific change identifier.
    pub id: String,
    pub status: ChangeStatus,
    /// When the provider accepted the batch, if known.
    #[serde(with = "crate::utils::datetime")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
