//! CDInjector background core: command-line entry point.
//!
//! Resolves the override files that apply to a hostname, expands their
//! include directives and prints the messages that would be delivered to the
//! tab, one JSON object per line on stdout.  Logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! cdinjector [OPTIONS] <HOSTNAME>
//!
//! Options:
//!   --scripts-dir <DIR>         Directory holding the override files [default: .]
//!   --config <FILE>             TOML configuration file
//!   --tab-id <ID>               Tab id stamped on deliveries [default: 1]
//!   --frame-id <ID>             Frame id stamped on deliveries [default: 0]
//!   --type <js|css>             Load only <HOSTNAME>.<type>, without the hierarchy walk
//!   --max-include-depth <N>     Maximum nesting of include directives
//!   --log-level <LEVEL>         Log level when RUST_LOG is not set
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                | Flag                  |
//! |-------------------------|-----------------------|
//! | `CDI_SCRIPTS_DIR`       | `--scripts-dir`       |
//! | `CDI_CONFIG`            | `--config`            |
//! | `CDI_MAX_INCLUDE_DEPTH` | `--max-include-depth` |
//!
//! Flags and environment variables take precedence over the config file.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use cdi_core::ScriptType;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cdi_background::application::{
    FileFetcher, IconUpdater, OverrideResolver, ScriptDeliverer,
};
use cdi_background::domain::Sender;
use cdi_background::infrastructure::{
    load_config, AppConfig, DirectoryFetcher, JsonLinesDeliverer, LoggingIconUpdater,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Resolve local override scripts and styles for a hostname.
#[derive(Debug, Parser)]
#[command(
    name = "cdinjector",
    about = "Resolves and expands local override scripts for a hostname",
    version
)]
struct Cli {
    /// Hostname the tab navigated to, e.g. `www.google.com`.
    hostname: String,

    /// Directory holding the override files.
    ///
    /// Overrides the `scripts_dir` of the config file.
    #[arg(long, env = "CDI_SCRIPTS_DIR")]
    scripts_dir: Option<PathBuf>,

    /// TOML configuration file.  A missing file means defaults.
    #[arg(long, env = "CDI_CONFIG")]
    config: Option<PathBuf>,

    /// Tab id stamped on every delivery.
    #[arg(long, default_value_t = 1)]
    tab_id: i32,

    /// Frame id stamped on every delivery.
    #[arg(long, default_value_t = 0)]
    frame_id: i32,

    /// Load only `<HOSTNAME>.<type>` instead of walking the hierarchy.
    #[arg(long = "type", value_name = "js|css")]
    script_type: Option<ScriptType>,

    /// Maximum nesting of include directives.
    #[arg(long, env = "CDI_MAX_INCLUDE_DEPTH")]
    max_include_depth: Option<usize>,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Merges the parsed flags over the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn to_app_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => AppConfig::default(),
        };

        if let Some(dir) = &self.scripts_dir {
            config.injector.scripts_dir = dir.clone();
        }
        if let Some(depth) = self.max_include_depth {
            config.injector.max_include_depth = depth;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        Ok(config)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.to_app_config()?;

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins; otherwise the configured level.  Logs go to stderr so
    // stdout carries only deliveries.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "resolving overrides for '{}' from {}",
        cli.hostname,
        config.injector.scripts_dir.display()
    );

    // ── Wiring ────────────────────────────────────────────────────────────────
    let fetcher: Arc<dyn FileFetcher> =
        Arc::new(DirectoryFetcher::new(config.injector.scripts_dir.clone()));
    let deliverer: Arc<dyn ScriptDeliverer> = Arc::new(JsonLinesDeliverer::new(std::io::stdout()));
    let icon: Arc<dyn IconUpdater> = Arc::new(LoggingIconUpdater::new());
    let resolver = OverrideResolver::new(config.resolver_config(), fetcher, deliverer, icon);

    let sender = Sender::new(cli.tab_id, cli.frame_id);
    match cli.script_type {
        Some(script_type) => {
            resolver
                .load_script(&cli.hostname, script_type, sender)
                .await;
        }
        None => {
            let outcome = resolver.on_navigate(&cli.hostname, sender).await;
            info!(
                request_id = %outcome.request_id,
                "loaded {:?}",
                outcome.loaded
            );
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
