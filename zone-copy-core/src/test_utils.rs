//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use zone_copy_provider::{
    ChangeBatch, ChangeInfo, ChangeStatus, HostedZone, PageCursor, ProviderError, RecordPage,
    RecordSet, RecordType, Result, ZoneProvider,
};

use crate::services::ServiceContext;
use crate::traits::{InMemoryProviderRegistry, ProviderRegistry};

// ===== MockZoneProvider =====

/// Mock 收到的调用
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    FindZone(String),
    ListPage {
        zone_id: String,
        cursor: Option<PageCursor>,
    },
    Submit {
        zone_id: String,
        batch: ChangeBatch,
    },
}

/// 按脚本应答的 `ZoneProvider`，并记录每一次调用
pub struct MockZoneProvider {
    /// 请求名 -> 候选 zone
    zones: RwLock<HashMap<String, HostedZone>>,
    /// 请求名未命中时返回的候选（模拟"按名称就近"的行为）
    fallback_zone: RwLock<Option<HostedZone>>,
    /// 按顺序弹出的分页应答
    pages: RwLock<VecDeque<Result<RecordPage>>>,
    find_error: RwLock<Option<ProviderError>>,
    submit_error: RwLock<Option<ProviderError>>,
    calls: RwLock<Vec<MockCall>>,
}

impl MockZoneProvider {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(HashMap::new()),
            fallback_zone: RwLock::new(None),
            pages: RwLock::new(VecDeque::new()),
            find_error: RwLock::new(None),
            submit_error: RwLock::new(None),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// `find_zone_by_name(requested)` 返回 `zone`
    pub async fn add_zone(&self, requested: &str, zone: HostedZone) {
        self.zones.write().await.insert(requested.to_string(), zone);
    }

    pub async fn set_fallback_zone(&self, zone: Option<HostedZone>) {
        *self.fallback_zone.write().await = zone;
    }

    pub async fn push_page(&self, page: Result<RecordPage>) {
        self.pages.write().await.push_back(page);
    }

    pub async fn set_find_error(&self, err: Option<ProviderError>) {
        *self.find_error.write().await = err;
    }

    pub async fn set_submit_error(&self, err: Option<ProviderError>) {
        *self.submit_error.write().await = err;
    }

    pub async fn calls(&self) -> Vec<MockCall> {
        self.calls.read().await.clone()
    }

    pub async fn submit_count(&self) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| matches!(c, MockCall::Submit { .. }))
            .count()
    }

    pub async fn list_count(&self) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| matches!(c, MockCall::ListPage { .. }))
            .count()
    }
}

#[async_trait]
impl ZoneProvider for MockZoneProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn find_zone_by_name(&self, name: &str) -> Result<Option<HostedZone>> {
        self.calls
            .write()
            .await
            .push(MockCall::FindZone(name.to_string()));
        if let Some(err) = self.find_error.read().await.clone() {
            return Err(err);
        }
        if let Some(zone) = self.zones.read().await.get(name) {
            return Ok(Some(zone.clone()));
        }
        Ok(self.fallback_zone.read().await.clone())
    }

    async fn list_record_page(
        &self,
        zone_id: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<RecordPage> {
        self.calls.write().await.push(MockCall::ListPage {
            zone_id: zone_id.to_string(),
            cursor: cursor.cloned(),
        });
        self.pages
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(RecordPage::default()))
    }

    async fn submit_change_batch(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo> {
        self.calls.write().await.push(MockCall::Submit {
            zone_id: zone_id.to_string(),
            batch: batch.clone(),
        });
        if let Some(err) = self.submit_error.read().await.clone() {
            return Err(err);
        }
        Ok(ChangeInfo {
            id: "/change/C0000000000001".to_string(),
            status: ChangeStatus::Pending,
            submitted_at: None,
            comment: Some(batch.comment.clone()),
        })
    }
}

// ===== 数据构造 =====

pub fn zone(id: &str, name: &str, record_count: Option<u64>) -> HostedZone {
    HostedZone {
        id: id.to_string(),
        name: name.to_string(),
        record_count,
    }
}

pub fn record(name: &str, record_type: RecordType) -> RecordSet {
    RecordSet::new(name, record_type, Some(300), vec!["192.0.2.1".to_string()])
}

/// 截断页，续页游标指向 `next_name`
pub fn truncated_page(records: Vec<RecordSet>, next_name: &str) -> RecordPage {
    RecordPage {
        records,
        next: Some(PageCursor {
            name: next_name.to_string(),
            record_type: Some(RecordType::A),
            identifier: None,
        }),
    }
}

pub fn final_page(records: Vec<RecordSet>) -> RecordPage {
    RecordPage {
        records,
        next: None,
    }
}

pub fn throttled() -> ProviderError {
    ProviderError::RateLimited {
        provider: "mock".to_string(),
        retry_after: None,
        raw_message: Some("Rate exceeded".to_string()),
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`，`source` / `dest` 两个身份各对应一个 mock
pub async fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockZoneProvider>,
    Arc<MockZoneProvider>,
) {
    let registry = Arc::new(InMemoryProviderRegistry::new());
    let source = Arc::new(MockZoneProvider::new());
    let dest = Arc::new(MockZoneProvider::new());
    registry.register("source".to_string(), source.clone()).await;
    registry.register("dest".to_string(), dest.clone()).await;

    let ctx = Arc::new(ServiceContext::new(registry));
    (ctx, source, dest)
}
