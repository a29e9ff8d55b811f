//! Provider lookup abstraction trait definition

mod provider_registry;

pub use provider_registry::{InMemoryProviderRegistry, ProviderRegistry};
