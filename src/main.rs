//! Podcast aggregator - CLI entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use podcast_aggregator::{
    cli::Args,
    config::{load_subscriptions, validate_config, Config},
    dedup::DedupLog,
    download::{run_pass, Fetcher},
    error::{exit_codes, Result},
    net::{build_client, HttpFeedSource, HttpTransfer},
    output::{
        print_banner, print_config_summary, print_error, print_global_stats, print_info,
        print_subscription_stats, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        // Failed items are reported in the statistics, not in the exit code.
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            if e.is_setup_error() {
                ExitCode::from(exit_codes::CONFIG_ERROR as u8)
            } else {
                ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8)
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration, then let the command line override it
    let mut config = match args.config.clone() {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    args.merge_into_config(&mut config);

    // Set up logging
    let log_level = if config.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    validate_config(&config)?;

    let base_dir = config.base_dir()?;
    let subscriptions = load_subscriptions(&config.subscriptions_path()?)?;

    let selected: Vec<String> = subscriptions
        .iter()
        .filter(|s| s.is_selected(&config.names))
        .map(|s| s.name.clone())
        .collect();
    if selected.is_empty() {
        print_warning("No subscriptions selected");
    }

    print_config_summary(
        &selected,
        &config.mode.to_string(),
        &config.mime_types,
        &base_dir.display().to_string(),
    );

    let client = build_client(&config.user_agent)?;
    let fetcher = Fetcher::new(
        DedupLog::new(config.log_path()?),
        HttpTransfer::new(client.clone(), std::io::stderr().is_terminal()),
    );
    let feeds = HttpFeedSource::new(client);

    let today = Local::now().date_naive();
    print_info(&format!(
        "Checking {} feed(s) for {}",
        selected.len(),
        today.format("%Y-%m-%d")
    ));
    let global = run_pass(&config, &subscriptions, &feeds, &fetcher, today).await?;

    for state in &global.subscriptions {
        print_subscription_stats(state);
    }
    print_global_stats(&global);

    Ok(())
}
