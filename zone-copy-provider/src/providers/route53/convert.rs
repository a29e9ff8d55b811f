//! Route 53 SDK 类型与通用类型之间的转换

use aws_sdk_route53::error::BuildError;
use aws_sdk_route53::operation::list_resource_record_sets::ListResourceRecordSetsOutput;
use aws_sdk_route53::types as r53;

use crate::types::{
    AliasTarget, ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus, GeoLocation, HostedZone,
    PageCursor, RecordSet, RecordType, RoutingPolicy,
};
use crate::utils::datetime::from_epoch_parts;
use crate::utils::domain_name::to_absolute;

/// Route 53 在 zone id 前加的资源前缀
const HOSTED_ZONE_PREFIX: &str = "/hostedzone/";

pub(super) fn zone_from_sdk(zone: &r53::HostedZone) -> HostedZone {
    HostedZone {
        id: zone
            .id()
            .strip_prefix(HOSTED_ZONE_PREFIX)
            .unwrap_or(zone.id())
            .to_string(),
        name: to_absolute(zone.name()),
        record_count: zone
            .resource_record_set_count()
            .and_then(|count| u64::try_from(count).ok()),
    }
}

pub(super) fn record_set_from_sdk(rrs: &r53::ResourceRecordSet) -> RecordSet {
    let routing = RoutingPolicy {
        set_identifier: rrs.set_identifier().map(str::to_string),
        weight: rrs.weight(),
        region: rrs.region().map(|r| r.as_str().to_string()),
        failover: rrs.failover().map(|f| f.as_str().to_string()),
        multi_value_answer: rrs.multi_value_answer(),
        geo_location: rrs.geo_location().map(|geo| GeoLocation {
            continent_code: geo.continent_code().map(str::to_string),
            country_code: geo.country_code().map(str::to_string),
            subdivision_code: geo.subdivision_code().map(str::to_string),
        }),
        health_check_id: rrs.health_check_id().map(str::to_string),
    };

    RecordSet {
        name: to_absolute(rrs.name()),
        record_type: RecordType::from(rrs.r#type().as_str()),
        ttl: rrs.ttl(),
        routing,
        alias_target: rrs.alias_target().map(|alias| AliasTarget {
            hosted_zone_id: alias.hosted_zone_id().to_string(),
            dns_name: alias.dns_name().to_string(),
            evaluate_target_health: alias.evaluate_target_health(),
        }),
        values: rrs
            .resource_records()
            .iter()
            .map(|rr| rr.value().to_string())
            .collect(),
    }
}

pub(super) fn record_set_to_sdk(record: &RecordSet) -> Result<r53::ResourceRecordSet, BuildError> {
    let resource_records = if record.values.is_empty() {
        None
    } else {
        Some(
            record
                .values
                .iter()
                .map(|value| r53::ResourceRecord::builder().value(value).build())
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    let alias_target = record
        .alias_target
        .as_ref()
        .map(|alias| {
            r53::AliasTarget::builder()
                .hosted_zone_id(&alias.hosted_zone_id)
                .dns_name(&alias.dns_name)
                .evaluate_target_health(alias.evaluate_target_health)
                .build()
        })
        .transpose()?;

    let routing = &record.routing;
    let geo_location = routing.geo_location.as_ref().map(|geo| {
        r53::GeoLocation::builder()
            .set_continent_code(geo.continent_code.clone())
            .set_country_code(geo.country_code.clone())
            .set_subdivision_code(geo.subdivision_code.clone())
            .build()
    });

    r53::ResourceRecordSet::builder()
        .name(&record.name)
        .r#type(r53::RrType::from(record.record_type.as_str()))
        .set_ttl(record.ttl)
        .set_set_identifier(routing.set_identifier.clone())
        .set_weight(routing.weight)
        .set_region(
            routing
                .region
                .as_deref()
                .map(r53::ResourceRecordSetRegion::from),
        )
        .set_failover(
            routing
                .failover
                .as_deref()
                .map(r53::ResourceRecordSetFailover::from),
        )
        .set_multi_value_answer(routing.multi_value_answer)
        .set_geo_location(geo_location)
        .set_health_check_id(routing.health_check_id.clone())
        .set_alias_target(alias_target)
        .set_resource_records(resource_records)
        .build()
}

fn action_to_sdk(action: ChangeAction) -> r53::ChangeAction {
    match action {
        ChangeAction::Upsert => r53::ChangeAction::Upsert,
    }
}

pub(super) fn change_batch_to_sdk(batch: &ChangeBatch) -> Result<r53::ChangeBatch, BuildError> {
    let changes = batch
        .changes
        .iter()
        .map(|op| {
            r53::Change::builder()
                .action(action_to_sdk(op.action))
                .resource_record_set(record_set_to_sdk(&op.record)?)
                .build()
        })
        .collect::<Result<Vec<_>, _>>()?;

    r53::ChangeBatch::builder()
        .comment(&batch.comment)
        .set_changes(Some(changes))
        .build()
}

pub(super) fn change_info_from_sdk(info: &r53::ChangeInfo) -> ChangeInfo {
    let submitted_at = info.submitted_at();
    ChangeInfo {
        id: info.id().to_string(),
        status: ChangeStatus::from(info.status().as_str()),
        submitted_at: from_epoch_parts(submitted_at.secs(), submitted_at.subsec_nanos()),
        comment: info.comment().map(str::to_string),
    }
}

/// 截断页的续页游标；`NextRecordName` 缺失时返回 `None`
pub(super) fn cursor_from_output(output: &ListResourceRecordSetsOutput) -> Option<PageCursor> {
    output.next_record_name().map(|name| PageCursor {
        name: name.to_string(),
        record_type: output
            .next_record_type()
            .map(|t| RecordType::from(t.as_str())),
        identifier: output.next_record_identifier().map(str::to_string),
    })
}
