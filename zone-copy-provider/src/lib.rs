//! # zone-copy-provider
//!
//! Hosted-zone provider abstraction used by the zone copier: find a zone by
//! name, page through its record sets, and submit an atomic change batch.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Amazon Route 53](https://aws.amazon.com/route53/) | `route53` | AWS shared-credentials profile |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)*: Enable all providers listed above.
//! - **`route53`**: Enable only the Route 53 provider.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zone_copy_provider::{create_provider, ProviderCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::Route53 {
//!         profile: "prod".to_string(),
//!         region: "eu-west-1".to_string(),
//!         endpoint_url: None,
//!     })
//!     .await?;
//!
//!     let Some(zone) = provider.find_zone_by_name("example.com.").await? else {
//!         return Ok(());
//!     };
//!
//!     let mut cursor = None;
//!     loop {
//!         let page = provider.list_record_page(&zone.id, cursor.as_ref()).await?;
//!         for record in &page.records {
//!             println!("{} {} {:?}", record.name, record.record_type, record.values);
//!         }
//!         match page.next {
//!             Some(next) => cursor = Some(next),
//!             None => break,
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! The error enum provides structured variants for common failure modes:
//!
//! - [`ProviderError::InvalidCredentials`]: the profile could not authenticate
//! - [`ProviderError::ZoneNotFound`]: the zone id does not exist
//! - [`ProviderError::ChangeRejected`]: the batch was refused as a whole
//! - [`ProviderError::RateLimited`]: API rate limit exceeded
//!
//! Nothing here retries on its own beyond the SDK's transport defaults.

mod error;
mod factory;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::ZoneProvider;

// Re-export types
pub use types::{
    AliasTarget, ChangeAction, ChangeBatch, ChangeInfo, ChangeOperation, ChangeStatus,
    GeoLocation, HostedZone, PageCursor, ProviderCredentials, RecordPage, RecordSet,
    RecordType, RoutingPolicy,
};

// Re-export utils modules
pub use utils::{datetime, domain_name, log_sanitizer};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "route53")]
pub use providers::Route53Provider;
