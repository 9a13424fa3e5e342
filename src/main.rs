use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use seuss_treasury::config::{Config, Overrides};
use seuss_treasury::logging::init_tracing;
use seuss_treasury::shutdown::{spawn_signal_watcher, ShutdownHandle};

#[derive(Parser, Debug)]
#[command(name = "seuss")]
#[command(author, version, about = "Browse the Seuss Treasury from your terminal", long_about = None)]
struct Cli {
    /// Location to open, e.g. "/", "/quotes" or "/book/5"
    #[arg(default_value = "/")]
    location: String,

    /// Config file (default: <config_dir>/seuss-treasury/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the log file location
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?.with_overrides(Overrides {
        base_url: cli.base_url,
        log_file: cli.log_file,
    })?;

    let log_path = init_tracing(&config.logging).context("Failed to initialise logging")?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        location = %cli.location,
        "seuss starting"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let shutdown = ShutdownHandle::new();
    {
        let _guard = runtime.enter();
        spawn_signal_watcher(shutdown.clone());
    }

    let result = seuss_treasury::ui::run(&config, cli.location, runtime.handle(), shutdown);
    runtime.shutdown_timeout(std::time::Duration::from_millis(200));
    result
}
