//! Unified error type definition

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use zone_copy_provider::ProviderError;

/// Step of a sync run that an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStage {
    ResolveSourceZone,
    ListRecords,
    ResolveDestinationZone,
    ApplyChanges,
}

impl SyncStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ResolveSourceZone => "resolve source zone",
            Self::ListRecords => "list records",
            Self::ResolveDestinationZone => "resolve destination zone",
            Self::ApplyChanges => "apply changes",
        }
    }
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No hosted zone matches the domain
    #[error("Hosted zone not found: {0}")]
    ZoneNotFound(String),

    /// No provider registered under the identity handle
    #[error("No provider registered for profile: {0}")]
    ProfileNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error raised while a given sync stage was running
    #[error("{stage} failed: {source}")]
    Stage {
        stage: SyncStage,
        source: Box<CoreError>,
    },

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ZoneNotFound(_) | Self::ProfileNotFound(_) | Self::ValidationError(_) => true,
            Self::Stage { source, .. } => source.is_expected(),
            Self::Provider(e) => e.is_expected(),
        }
    }

    /// The stage this error was tagged with, if any.
    pub fn stage(&self) -> Option<SyncStage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// The error with all stage tags peeled off.
    pub fn root(&self) -> &CoreError {
        match self {
            Self::Stage { source, .. } => source.root(),
            other => other,
        }
    }

    /// Tags the error with `stage`. An already tagged error keeps its first tag.
    #[must_use]
    pub fn at_stage(self, stage: SyncStage) -> Self {
        match self {
            tagged @ Self::Stage { .. } => tagged,
            other => Self::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// 将任意可转换为 [`CoreError`] 的错误标注到某个同步阶段
pub trait StageResultExt<T> {
    fn at_stage(self, stage: SyncStage) -> CoreResult<T>;
}

impl<T, E> StageResultExt<T> for std::result::Result<T, E>
where
    E: Into<CoreError>,
{
    fn at_stage(self, stage: SyncStage) -> CoreResult<T> {
        self.map_err(|e| e.into().at_stage(stage))
    }
}
