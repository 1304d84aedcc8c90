//! Application layer - use cases and orchestration.
//!
//! This layer contains the purge workflow and the console text around it.
//! I/O is reached only through the traits in `ports`.

pub mod confirm;
pub mod credentials;
pub mod filter;
pub mod formatter;
pub mod ports;
pub mod purge_service;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use credentials::{resolve_credentials, CredentialArgs};
pub use formatter::format_summary;
pub use purge_service::{PurgeOptions, PurgeOutcome, PurgeService};
