//! Provider registry abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use zone_copy_provider::ZoneProvider;

/// Provider Registry Trait
///
/// Manages all registered Provider instances, indexed by identity handle
/// (the profile name). The engine never looks inside a handle; it only uses it
/// as a key here and as a label in logs.
/// Provides a default memory implementation of `InMemoryProviderRegistry`.
#[async_trait]
pub trait ProviderRegistry: Send + Sync {
    /// Register a Provider instance
    ///
    /// # Arguments
    /// * `profile` - Identity handle
    /// * `provider` - Provider instance
    async fn register(&self, profile: String, provider: Arc<dyn ZoneProvider>);

    /// Get Provider instance
    ///
    /// # Arguments
    /// * `profile` - Identity handle
    async fn get(&self, profile: &str) -> Option<Arc<dyn ZoneProvider>>;
}

/// In-memory Provider registry
///
/// Default implementation.
#[derive(Clone)]
pub struct InMemoryProviderRegistry {
    providers: Arc<RwLock<HashMap<String, Arc<dyn ZoneProvider>>>>,
}

impl InMemoryProviderRegistry {
    /// Create a new memory registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderRegistry for InMemoryProviderRegistry {
    async fn register(&self, profile: String, provider: Arc<dyn ZoneProvider>) {
        self.providers.write().await.insert(profile, provider);
    }

    async fn get(&self, profile: &str) -> Option<Arc<dyn ZoneProvider>> {
        self.providers.read().await.get(profile).cloned()
    }
}
