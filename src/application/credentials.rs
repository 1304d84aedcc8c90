//! Resolution of API keys and the server address.
//!
//! Each value comes from the command line (or its environment variable)
//! first, then the config file, then an interactive prompt.

use crate::domain::{AppConfig, AppError, Credentials, Result};

use super::ports::Prompter;

const ADMIN_KEY_PROMPT: &str = "Enter the Immich admin API key: ";
const USER_KEY_PROMPT: &str = "Enter the Immich user API key for deletion: ";
const ADDRESS_PROMPT: &str =
    "Enter the full web address for Immich, including protocol and port: ";

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CredentialArgs {
    pub admin_api_key: Option<String>,
    pub user_api_key: Option<String>,
    pub address: Option<String>,
}

/// Collect credentials, prompting for anything still missing.
///
/// # Errors
/// Returns `CredentialMissing` if either key is blank after prompting and
/// `InvalidAddress` if the address is not an http(s) URL.
pub fn resolve_credentials(
    args: &CredentialArgs,
    config: &AppConfig,
    prompter: &mut dyn Prompter,
) -> Result<Credentials> {
    let admin_api_key = pick(
        args.admin_api_key.as_deref(),
        config.keys.admin_api_key.as_deref(),
        ADMIN_KEY_PROMPT,
        prompter,
    )?;
    let user_api_key = pick(
        args.user_api_key.as_deref(),
        config.keys.user_api_key.as_deref(),
        USER_KEY_PROMPT,
        prompter,
    )?;
    let address = pick(
        args.address.as_deref(),
        config.server.address.as_deref(),
        ADDRESS_PROMPT,
        prompter,
    )?;

    if admin_api_key.is_empty() || user_api_key.is_empty() {
        return Err(AppError::CredentialMissing);
    }

    let base_url = normalize_base_url(&address)?;
    tracing::debug!(%base_url, "Resolved server address");

    Ok(Credentials {
        admin_api_key,
        user_api_key,
        base_url,
    })
}

fn pick(
    flag: Option<&str>,
    configured: Option<&str>,
    question: &str,
    prompter: &mut dyn Prompter,
) -> Result<String> {
    let given = [flag, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty());

    match given {
        Some(value) => Ok(value.to_string()),
        None => Ok(prompter.ask(question)?.trim().to_string()),
    }
}

/// Reduce an address to `scheme://host[:port]`.
///
/// Any path, query or fragment is dropped.
///
/// # Errors
/// Returns `InvalidAddress` for empty, unparseable or non-http(s) input.
pub fn normalize_base_url(address: &str) -> Result<String> {
    let invalid = |reason: &str| AppError::InvalidAddress {
        address: address.to_string(),
        reason: reason.to_string(),
    };

    let address = address.trim();
    if address.is_empty() {
        return Err(invalid("address is empty"));
    }

    let url = reqwest::Url::parse(address).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            "expected an http:// or https:// address including the protocol",
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid("address has no host"));
    }

    Ok(url.origin().ascii_serialization())
}
