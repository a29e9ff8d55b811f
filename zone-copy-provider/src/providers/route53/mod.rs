//! Amazon Route 53 Provider

mod convert;
mod error;
mod provider;

use aws_config::BehaviorVersion;
use aws_sdk_route53::Client;
use aws_sdk_route53::config::Region;

/// `ListResourceRecordSets` 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_RECORDS: i32 = 300;

/// Amazon Route 53 Provider
pub struct Route53Provider {
    pub(crate) client: Client,
}

impl Route53Provider {
    /// Builds a client from a named shared-credentials profile.
    ///
    /// Credentials are resolved lazily by the SDK; a missing or broken profile
    /// surfaces on the first request as [`ProviderError::InvalidCredentials`](crate::ProviderError)
    /// or a network error.
    pub async fn from_profile(profile: &str, region: &str, endpoint_url: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .region(Region::new(region.to_string()));

        if let Some(endpoint_url) = endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let config = loader.load().await;
        log::debug!("[route53] client ready for profile '{profile}' in {region}");
        Self::from_client(Client::new(&config))
    }

    /// Wraps an already configured SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}
