//! 类型定义模块

mod exclusion;
mod sync;

pub use exclusion::ExclusionSet;
pub use sync::{SkippedRecord, SyncOutcome, SyncReport, SyncRequest, TransformOutcome, ZoneMatch};

// Re-export provider 库的公共类型
pub use zone_copy_provider::{
    AliasTarget, ChangeAction, ChangeBatch, ChangeInfo, ChangeOperation, ChangeStatus,
    GeoLocation, HostedZone, PageCursor, ProviderCredentials, RecordPage, RecordSet,
    RecordType, RoutingPolicy,
};
