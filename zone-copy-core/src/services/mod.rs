//! 业务逻辑服务层

mod record_store;
mod sync_service;
mod zone_directory;

pub use record_store::{record_stream, RecordStoreService};
pub use sync_service::SyncService;
pub use zone_directory::ZoneDirectoryService;

use std::sync::Arc;

use zone_copy_provider::{ProviderError, ZoneProvider};

use crate::error::{CoreError, CoreResult};
use crate::traits::ProviderRegistry;

/// 服务上下文 - 持有所有依赖
///
/// 调用方创建 provider 并按身份注册后，再创建此上下文。
pub struct ServiceContext {
    /// Provider 注册表
    pub provider_registry: Arc<dyn ProviderRegistry>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(provider_registry: Arc<dyn ProviderRegistry>) -> Self {
        Self { provider_registry }
    }

    /// 获取 Provider 实例
    pub async fn get_provider(&self, profile: &str) -> CoreResult<Arc<dyn ZoneProvider>> {
        self.provider_registry
            .get(profile)
            .await
            .ok_or_else(|| CoreError::ProfileNotFound(profile.to_string()))
    }
}

/// 处理 Provider 错误，凭证类错误额外提示是哪个身份
pub(crate) fn provider_error(profile: &str, err: ProviderError) -> CoreError {
    match &err {
        ProviderError::InvalidCredentials { .. } | ProviderError::PermissionDenied { .. } => {
            log::warn!("Profile {profile} was refused by the provider: {err}");
        }
        _ => log::debug!("Provider call for profile {profile} failed: {err}"),
    }
    CoreError::Provider(err)
}
