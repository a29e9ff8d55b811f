//! Route 53 ZoneProvider trait 实现

use async_trait::async_trait;
use aws_sdk_route53::types::RrType;

use crate::error::Result;
use crate::traits::{ErrorContext, ProviderErrorMapper, ZoneProvider};
use crate::types::{ChangeBatch, ChangeInfo, HostedZone, PageCursor, RecordPage};
use crate::utils::log_sanitizer::{preview_values, truncate_for_log};

use super::convert::{
    change_batch_to_sdk, change_info_from_sdk, cursor_from_output, record_set_from_sdk,
    zone_from_sdk,
};
use super::{MAX_PAGE_SIZE_RECORDS, Route53Provider};

#[async_trait]
impl ZoneProvider for Route53Provider {
    fn id(&self) -> &'static str {
        "route53"
    }

    async fn find_zone_by_name(&self, name: &str) -> Result<Option<HostedZone>> {
        let output = self
            .client
            .list_hosted_zones_by_name()
            .dns_name(name)
            .max_items(1)
            .send()
            .await
            .map_err(|e| {
                self.map_sdk_error(e, ErrorContext::zone(name).with_param("DNSName"))
            })?;

        let zone = output.hosted_zones().first().map(zone_from_sdk);
        match &zone {
            Some(zone) => log::debug!(
                "[route53] '{name}' resolved to zone {} ({})",
                zone.id,
                zone.name
            ),
            None => log::debug!("[route53] no hosted zone candidate for '{name}'"),
        }
        Ok(zone)
    }

    async fn list_record_page(
        &self,
        zone_id: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<RecordPage> {
        let mut request = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(zone_id)
            .max_items(MAX_PAGE_SIZE_RECORDS);

        if let Some(cursor) = cursor {
            request = request
                .start_record_name(&cursor.name)
                .set_start_record_type(
                    cursor
                        .record_type
                        .as_ref()
                        .map(|t| RrType::from(t.as_str())),
                )
                .set_start_record_identifier(cursor.identifier.clone());
        }

        let output = request.send().await.map_err(|e| {
            self.map_sdk_error(e, ErrorContext::zone(zone_id).with_param("StartRecordName"))
        })?;

        let records: Vec<_> = output
            .resource_record_sets()
            .iter()
            .map(record_set_from_sdk)
            .collect();

        let next = if output.is_truncated() {
            // 截断但没有续页名称：无法继续翻页，不能静默返回部分结果
            Some(cursor_from_output(&output).ok_or_else(|| {
                self.parse_error("listing is truncated but NextRecordName is missing")
            })?)
        } else {
            None
        };

        log::debug!(
            "[route53] zone {zone_id}: page of {} record sets, truncated={}",
            records.len(),
            next.is_some()
        );
        for record in &records {
            log::trace!(
                "[route53]   {} {} [{}]",
                record.name,
                record.record_type,
                preview_values(&record.values)
            );
        }

        Ok(RecordPage { records, next })
    }

    async fn submit_change_batch(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo> {
        let sdk_batch = change_batch_to_sdk(batch).map_err(|e| self.serialization_error(e))?;

        log::debug!(
            "[route53] submitting {} changes to zone {zone_id} ({})",
            batch.len(),
            truncate_for_log(&batch.comment)
        );

        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(sdk_batch)
            .send()
            .await
            .map_err(|e| self.map_sdk_error(e, ErrorContext::zone(zone_id)))?;

        let info = output
            .change_info()
            .map(change_info_from_sdk)
            .ok_or_else(|| self.parse_error("response carries no ChangeInfo"))?;

        log::debug!("[route53] change {} is {}", info.id, info.status);
        Ok(info)
    }
}
