//! Immich Purge Orphans - delete orphaned media assets from an Immich server.
//!
//! Reads the server's file report, keeps the orphans that are media assets,
//! asks for confirmation and force-deletes them one by one.
//!
//!   immich-purge-orphans                                    # prompt for everything
//!   immich-purge-orphans --immichaddress http://nas:2283 \
//!       --admin_apikey <KEY> --user_apikey <KEY> --no_prompt --json

mod application;
mod cli;
mod domain;
mod infrastructure;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{format_summary, resolve_credentials, PurgeOptions, PurgeOutcome, PurgeService};
use cli::Cli;
use infrastructure::{load_config, HttpImmichClient, TerminalPrompter};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

/// Main application logic.
fn run(cli: &Cli) -> domain::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let mut prompter = TerminalPrompter::stdio(cli.json);

    let credentials = resolve_credentials(&cli.credential_args(), &config, &mut prompter)?;
    let api = HttpImmichClient::new(&credentials.base_url, config.timeout())?;

    let options = PurgeOptions {
        unattended: cli.no_prompt,
        show_progress: !cli.json,
    };
    let service = PurgeService::new(api, credentials, options);

    // Human-readable lines go to stderr when stdout carries JSON.
    let say = |line: &str| {
        if cli.json {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    };

    say("");
    match service.run(&mut prompter)? {
        PurgeOutcome::NoOrphans => say("No orphaned media assets found; exiting."),
        PurgeOutcome::Declined => say("Exiting without making any changes."),
        PurgeOutcome::Completed(report) => {
            say(&format!(
                "{} Orphaned media assets deleted successfully!",
                "✓".green().bold()
            ));
            say(&format_summary(&report));

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).map_err(domain::AppError::json)?
                );
            }
        }
    }

    Ok(())
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}
