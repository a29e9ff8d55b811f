//! Record set 读取与写入服务

use std::sync::Arc;

use futures::stream::{self, BoxStream, Stream, StreamExt, TryStreamExt};
use zone_copy_provider::{ProviderError, ZoneProvider};

use crate::error::CoreResult;
use crate::services::{provider_error, ServiceContext};
use crate::types::{ChangeBatch, ChangeInfo, PageCursor, RecordSet};

/// 翻页状态：`None` 表示已读完最后一页
type PageState = Option<Option<PageCursor>>;

/// Lazily pages through every record set of `zone_id`.
///
/// Each page is requested only after the previous one was consumed and the
/// provider reported it as truncated. Record sets come out in provider order.
/// A failing page ends the stream with that error.
pub fn record_stream(
    provider: Arc<dyn ZoneProvider>,
    zone_id: String,
) -> impl Stream<Item = Result<RecordSet, ProviderError>> + Send + 'static {
    let start: PageState = Some(None);

    stream::try_unfold(start, move |state| {
        let provider = Arc::clone(&provider);
        let zone_id = zone_id.clone();
        async move {
            let Some(cursor) = state else {
                return Ok(None);
            };

            let page = provider.list_record_page(&zone_id, cursor.as_ref()).await?;
            log::debug!(
                "Zone {zone_id}: fetched {} record sets{}",
                page.records.len(),
                if page.is_truncated() { ", more follow" } else { "" }
            );

            let next: PageState = page.next.map(Some);
            Ok::<_, ProviderError>(Some((page.records, next)))
        }
    })
    .map_ok(|records| stream::iter(records.into_iter().map(Ok::<_, ProviderError>)))
    .try_flatten()
}

/// Reads and writes record sets through the registered providers.
pub struct RecordStoreService {
    ctx: Arc<ServiceContext>,
}

impl RecordStoreService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Streams every record set of the zone. See [`record_stream`].
    pub async fn list_all_records(
        &self,
        profile: &str,
        zone_id: &str,
    ) -> CoreResult<BoxStream<'static, CoreResult<RecordSet>>> {
        let provider = self.ctx.get_provider(profile).await?;
        let profile = profile.to_string();
        Ok(record_stream(provider, zone_id.to_string())
            .map_err(move |e| provider_error(&profile, e))
            .boxed())
    }

    /// Collects the whole zone. On any failure nothing is returned.
    pub async fn fetch_all_records(&self, profile: &str, zone_id: &str) -> CoreResult<Vec<RecordSet>> {
        let records: Vec<RecordSet> = self
            .list_all_records(profile, zone_id)
            .await?
            .try_collect()
            .await?;
        log::debug!("Zone {zone_id}: {} record sets in total", records.len());
        Ok(records)
    }

    /// Submits `batch` to the zone in one request.
    pub async fn apply_changes(
        &self,
        profile: &str,
        zone_id: &str,
        batch: &ChangeBatch,
    ) -> CoreResult<ChangeInfo> {
        let provider = self.ctx.get_provider(profile).await?;
        provider
            .submit_change_batch(zone_id, batch)
            .await
            .map_err(|e| provider_error(profile, e))
    }
}
