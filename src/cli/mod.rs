//! CLI interface using clap.
//!
//! Flag names use underscores (`--admin_apikey`) to stay compatible with
//! existing scripts and cron jobs.

use std::path::PathBuf;

use clap::Parser;

use crate::application::CredentialArgs;

/// Fetch the Immich file report and delete orphaned media assets.
///
/// Any key or address not given here, in the environment or in the config
/// file is asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "immich-purge-orphans")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Immich admin API key for fetching reports.
    #[arg(long = "admin_apikey", env = "IMMICH_ADMIN_API_KEY", hide_env_values = true)]
    pub admin_apikey: Option<String>,

    /// User-specific Immich API key for deletion.
    #[arg(long = "user_apikey", env = "IMMICH_USER_API_KEY", hide_env_values = true)]
    pub user_apikey: Option<String>,

    /// Full address for Immich, including protocol and port.
    #[arg(long = "immichaddress", env = "IMMICH_ADDRESS")]
    pub immichaddress: Option<String>,

    /// Delete orphaned media assets without confirmation.
    #[arg(long = "no_prompt")]
    pub no_prompt: bool,

    /// Print the deletion report as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Config file (default: ~/.immich-purge-orphans/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Credentials given on the command line or through the environment.
    #[must_use]
    pub fn credential_args(&self) -> CredentialArgs {
        CredentialArgs {
            admin_api_key: self.admin_apikey.clone(),
            user_api_key: self.user_apikey.clone(),
            address: self.immichaddress.clone(),
        }
    }
}
