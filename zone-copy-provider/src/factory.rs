//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::ZoneProvider;
use crate::types::ProviderCredentials;

#[cfg(feature = "route53")]
use crate::providers::Route53Provider;

/// Creates a [`ZoneProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// The returned provider is wrapped in `Arc<dyn ZoneProvider>` for easy sharing
/// across async tasks.
///
/// Building a provider performs no network request; bad credentials surface on
/// the first call made through it.
///
/// # Examples
///
/// ```rust,no_run
/// use zone_copy_provider::{create_provider, ProviderCredentials};
///
/// # async fn example() -> zone_copy_provider::Result<()> {
/// let provider = create_provider(ProviderCredentials::Route53 {
///     profile: "staging".to_string(),
///     region: "eu-west-1".to_string(),
///     endpoint_url: None,
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn ZoneProvider>> {
    match credentials {
        #[cfg(feature = "route53")]
        ProviderCredentials::Route53 {
            profile,
            region,
            endpoint_url,
        } => Ok(Arc::new(
            Route53Provider::from_profile(&profile, &region, endpoint_url.as_deref()).await,
        )),
    }
}
