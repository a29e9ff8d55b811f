//! Hosted zone 查找服务

use std::sync::Arc;

use zone_copy_provider::domain_name::to_absolute;

use crate::error::{CoreError, CoreResult};
use crate::services::{provider_error, ServiceContext};
use crate::types::{HostedZone, ZoneMatch};

/// Resolves domain names to hosted zones.
pub struct ZoneDirectoryService {
    ctx: Arc<ServiceContext>,
}

impl ZoneDirectoryService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Finds the hosted zone for `domain` through the provider registered
    /// under `profile`.
    ///
    /// The provider answers with candidates ordered by name proximity and only
    /// the first one is considered. With [`ZoneMatch::FirstCandidate`] that
    /// candidate is used even if its name differs from `domain`; with
    /// [`ZoneMatch::Exact`] a differing candidate counts as not found.
    pub async fn resolve_zone(
        &self,
        profile: &str,
        domain: &str,
        policy: ZoneMatch,
    ) -> CoreResult<HostedZone> {
        if domain.trim_end_matches('.').is_empty() {
            return Err(CoreError::ValidationError(
                "domain name must not be empty".to_string(),
            ));
        }

        let provider = self.ctx.get_provider(profile).await?;
        let wanted = to_absolute(domain);

        let zone = provider
            .find_zone_by_name(&wanted)
            .await
            .map_err(|e| provider_error(profile, e))?
            .ok_or_else(|| CoreError::ZoneNotFound(wanted.clone()))?;

        if zone.name != wanted {
            match policy {
                ZoneMatch::FirstCandidate => log::warn!(
                    "No zone named {wanted} for {profile}; using closest match {} ({})",
                    zone.name,
                    zone.id
                ),
                ZoneMatch::Exact => {
                    log::debug!("Closest zone for {wanted} is {}, rejected", zone.name);
                    return Err(CoreError::ZoneNotFound(wanted));
                }
            }
        }

        log::debug!("{profile}: {wanted} -> zone {}", zone.id);
        Ok(zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, throttled, zone, MockCall};

    #[tokio::test]
    async fn resolves_exact_name_and_normalizes_input() {
        let (ctx, source, _) = create_test_context().await;
        source
            .add_zone("example.com.", zone("Z1", "example.com.", Some(10)))
            .await;

        let directory = ZoneDirectoryService::new(ctx);
        let found = directory
            .resolve_zone("source", "example.com", ZoneMatch::FirstCandidate)
            .await
            .unwrap();

        assert_eq!(found.id, "Z1");
        assert_eq!(
            source.calls().await,
            vec![MockCall::FindZone("example.com.".to_string())]
        );
    }

    #[tokio::test]
    async fn first_candidate_accepts_closest_zone() {
        let (ctx, source, _) = create_test_context().await;
        source
            .set_fallback_zone(Some(zone("Z9", "example.net.", None)))
            .await;

        let directory = ZoneDirectoryService::new(ctx);
        let found = directory
            .resolve_zone("source", "example.com", ZoneMatch::FirstCandidate)
            .await
            .unwrap();
        assert_eq!(found.id, "Z9");
    }

    #[tokio::test]
    async fn exact_rejects_closest_zone() {
        let (ctx, source, _) = create_test_context().await;
        source
            .set_fallback_zone(Some(zone("Z9", "example.net.", None)))
            .await;

        let directory = ZoneDirectoryService::new(ctx);
        let err = directory
            .resolve_zone("source", "example.com", ZoneMatch::Exact)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ZoneNotFound(ref d) if d == "example.com."));
    }

    #[tokio::test]
    async fn no_candidate_is_zone_not_found() {
        let (ctx, _, _) = create_test_context().await;
        let directory = ZoneDirectoryService::new(ctx);

        let err = directory
            .resolve_zone("source", "missing.org", ZoneMatch::FirstCandidate)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ZoneNotFound(_)));
        assert!(err.is_expected());
    }

    #[tokio::test]
    async fn provider_error_propagates() {
        let (ctx, source, _) = create_test_context().await;
        source.set_find_error(Some(throttled())).await;

        let directory = ZoneDirectoryService::new(ctx);
        let err = directory
            .resolve_zone("source", "example.com", ZoneMatch::FirstCandidate)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Provider(_)));
    }

    #[tokio::test]
    async fn unknown_profile_makes_no_call() {
        let (ctx, source, dest) = create_test_context().await;
        let directory = ZoneDirectoryService::new(ctx);

        let err = directory
            .resolve_zone("nobody", "example.com", ZoneMatch::FirstCandidate)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ProfileNotFound(ref p) if p == "nobody"));
        assert!(source.calls().await.is_empty());
        assert!(dest.calls().await.is_empty());
    }

    #[tokio::test]
    async fn empty_domain_is_rejected() {
        let (ctx, source, _) = create_test_context().await;
        let directory = ZoneDirectoryService::new(ctx);

        let err = directory
            .resolve_zone("source", ".", ZoneMatch::FirstCandidate)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert!(source.calls().await.is_empty());
    }
}
