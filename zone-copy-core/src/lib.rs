//! zone-copy Core Library
//!
//! Record synchronization engine for copying a hosted zone:
//! - Zone lookup by name (`ZoneDirectoryService`)
//! - Paginated record listing and atomic change submission (`RecordStoreService`)
//! - Name rewriting and apex exclusion (`transform`)
//! - The end-to-end copy run (`SyncService`)
//!
//! Providers are reached only through the `ZoneProvider` trait and looked up by
//! identity handle in a `ProviderRegistry`, so the engine runs unchanged
//! against any backend, including test doubles.

pub mod error;
pub mod services;
pub mod traits;
pub mod transform;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, SyncStage};
pub use services::ServiceContext;
pub use traits::{InMemoryProviderRegistry, ProviderRegistry};
