//! zone-copy entry point
//!
//! Copies every record set of a hosted zone into another zone, possibly under
//! another account and domain. Progress and results are logged to stderr.

mod cli;
mod report;

use std::ffi::OsString;
use std::future::Future;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zone_copy_core::services::{ServiceContext, SyncService};
use zone_copy_core::traits::{InMemoryProviderRegistry, ProviderRegistry};
use zone_copy_core::CoreError;
use zone_copy_provider::{create_provider, ProviderCredentials, ZoneProvider};

use cli::{parse_exit_code, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    ExitCode::from(launch(std::env::args_os(), create_provider).await)
}

/// Parses `args` and runs the copy, returning the process exit code.
///
/// A malformed invocation returns before `make_provider` is ever called.
async fn launch<I, T, F, Fut>(args: I, make_provider: F) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: Fn(ProviderCredentials) -> Fut,
    Fut: Future<Output = zone_copy_provider::Result<Arc<dyn ZoneProvider>>>,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // help/version 输出到 stdout，其余错误输出到 stderr
            let _ = e.print();
            return parse_exit_code(&e);
        }
    };

    init_tracing(&cli.log_level);

    match run(&cli, make_provider).await {
        Ok(()) => 0,
        Err(e) => {
            // CoreError 的 Display 已包含下层错误，不再展开 source 链
            match e.downcast_ref::<CoreError>() {
                Some(core) if core.is_expected() => tracing::warn!("{core}"),
                Some(core) => tracing::error!("{core}"),
                None => tracing::error!("{e:#}"),
            }
            1
        }
    }
}

/// Tracing to stderr; `log` records from the libraries are bridged in.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    // 测试中可能多次调用，已安装时忽略
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .try_init();
}

async fn run<F, Fut>(cli: &Cli, make_provider: F) -> anyhow::Result<()>
where
    F: Fn(ProviderCredentials) -> Fut,
    Fut: Future<Output = zone_copy_provider::Result<Arc<dyn ZoneProvider>>>,
{
    let request = cli.sync_request();

    // Create one provider per distinct profile
    let provider_registry = Arc::new(InMemoryProviderRegistry::new());
    for profile in cli.profiles() {
        let credentials = cli.credentials(profile);
        let identity = credentials.identity().to_string();
        let provider = make_provider(credentials)
            .await
            .with_context(|| format!("Failed to set up provider for profile {identity}"))?;
        provider_registry.register(identity, provider).await;
    }
    tracing::debug!(
        "Providers ready for {} in {}",
        cli.profiles().join(", "),
        cli.region
    );

    let ctx = Arc::new(ServiceContext::new(provider_registry));
    let report = SyncService::new(ctx).run(&request).await?;

    for line in report::summary_lines(&request, &report) {
        tracing::info!("{line}");
    }
    Ok(())
}
