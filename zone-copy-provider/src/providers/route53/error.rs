//! Route 53 error mapping

use aws_sdk_route53::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Provider;

/// Route 53 error code mapping
/// Reference: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        "route53"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // Authentication error
            Some(
                "InvalidClientTokenId"
                | "UnrecognizedClientException"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "ExpiredToken"
                | "ExpiredTokenException",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // Authorization error
            Some("AccessDenied" | "AccessDeniedException" | "NotAuthorizedException") => {
                ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // Zone does not exist
            Some("NoSuchHostedZone") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // The whole batch was refused (conflicting record, missing alias target, ...)
            Some("InvalidChangeBatch") => ProviderError::ChangeRejected {
                provider: self.provider_name().to_string(),
                raw_message: raw.message,
            },

            // Invalid parameter
            Some("InvalidInput" | "InvalidArgument" | "InvalidDomainName" | "InvalidPaginationToken") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: context.param.unwrap_or("general").to_string(),
                    detail: raw.message,
                }
            }

            // Throttling; PriorRequestNotComplete means an earlier change to the
            // same zone is still being applied
            Some(
                "Throttling"
                | "ThrottlingException"
                | "TooManyRequestsException"
                | "PriorRequestNotComplete",
            ) => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // Quota exceeded
            Some("LimitsExceeded" | "TooManyHostedZones") => ProviderError::QuotaExceeded {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // Other error fallback
            _ => self.unknown_error(raw),
        }
    }
}

impl Route53Provider {
    /// 将 SDK 错误映射为统一错误类型
    pub(crate) fn map_sdk_error<E, R>(&self, err: SdkError<E, R>, context: ErrorContext) -> ProviderError
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
        R: std::fmt::Debug,
    {
        let provider = self.provider_name().to_string();
        match &err {
            SdkError::TimeoutError(_) => ProviderError::Timeout {
                provider,
                detail: DisplayErrorContext(&err).to_string(),
            },
            SdkError::DispatchFailure(failure) if failure.is_timeout() => ProviderError::Timeout {
                provider,
                detail: DisplayErrorContext(&err).to_string(),
            },
            SdkError::DispatchFailure(_) => ProviderError::NetworkError {
                provider,
                detail: DisplayErrorContext(&err).to_string(),
            },
            SdkError::ResponseError(_) => self.parse_error(DisplayErrorContext(&err)),
            SdkError::ServiceError(service_err) => {
                let inner = service_err.err();
                let message = inner
                    .message()
                    .map_or_else(|| inner.to_string(), str::to_string);
                let raw = match inner.code() {
                    Some(code) => RawApiError::with_code(code, message),
                    None => RawApiError::new(message),
                };
                log::debug!("[route53] service error: {raw:?}");
                self.map_error(raw, context)
            }
            // ConstructionFailure 等：通常是本地配置问题（如 profile 无法解析凭证）
            _ => self.unknown_error(RawApiError::new(DisplayErrorContext(&err).to_string())),
        }
    }
}
