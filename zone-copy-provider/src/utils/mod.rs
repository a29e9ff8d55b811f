//! Utility modules.

/// Date/time serialization helpers shared by providers.
pub mod datetime;

/// Absolute/relative domain name helpers.
pub mod domain_name;

/// Log truncation helpers to keep record payloads out of logs.
pub mod log_sanitizer;
