//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use zone_copy_provider::{
    HostedZone, ProviderCredentials, RecordSet, RecordType, ZoneProvider, create_provider,
    domain_name::to_absolute,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 固定的测试记录名前缀；UPSERT 覆盖同名记录，多次运行不会堆积
pub const TEST_RECORD_LABEL: &str = "_zone-copy-test";

/// 生成唯一的测试记录值
pub fn generate_test_value() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("\"zone-copy-{}\"", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn ZoneProvider>,
    pub domain: String,
    pub zone: Option<HostedZone>,
}

impl TestContext {
    /// 创建 Route 53 测试上下文
    ///
    /// 需要 `ROUTE53_PROFILE` 和 `TEST_DOMAIN`；`ROUTE53_REGION` 可选
    pub async fn route53() -> Option<Self> {
        let profile = env::var("ROUTE53_PROFILE").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;
        let region = env::var("ROUTE53_REGION").unwrap_or_else(|_| "eu-west-1".to_string());

        let credentials = ProviderCredentials::Route53 {
            profile,
            region,
            endpoint_url: env::var("ROUTE53_ENDPOINT_URL").ok(),
        };
        let provider = create_provider(credentials).await.ok()?;

        Some(Self {
            provider,
            domain: to_absolute(&domain),
            zone: None,
        })
    }

    /// 查找测试域名对应的 hosted zone
    pub async fn find_zone(&mut self) -> Option<HostedZone> {
        if self.zone.is_some() {
            return self.zone.clone();
        }

        let zone = self.provider.find_zone_by_name(&self.domain).await.ok()??;
        if zone.name != self.domain {
            return None;
        }
        self.zone = Some(zone.clone());
        Some(zone)
    }

    /// 测试用 TXT 记录
    pub fn test_record(&self, value: String) -> RecordSet {
        RecordSet::new(
            format!("{TEST_RECORD_LABEL}.{}", self.domain),
            RecordType::Txt,
            Some(60),
            vec![value],
        )
    }
}
