//! Capabilities the purge workflow needs from the outside world.
//!
//! The HTTP transport and the terminal are injected through these traits
//! so the workflow can run against fakes in tests.

use crate::domain::{DeleteError, OrphanEntity, Result};

/// Access to the Immich server endpoints used by the purge.
pub trait ImmichApi {
    /// Fetch every orphan listed in the server's file report.
    ///
    /// # Errors
    /// Returns `AppError::Fetch` on transport failure, non-success status or
    /// an undecodable body.
    fn fetch_report(&self, admin_api_key: &str) -> Result<Vec<OrphanEntity>>;

    /// Force-delete a single asset.
    ///
    /// # Errors
    /// Returns `DeleteError::ApiKeyMismatch` on 400 and `DeleteError::Failed`
    /// for anything else that is not a success.
    fn delete_asset(&self, user_api_key: &str, entity_id: &str)
        -> std::result::Result<(), DeleteError>;
}

/// Interactive console: shows text and asks questions.
pub trait Prompter {
    /// Print a block of text.
    fn show(&mut self, text: &str);

    /// Print `question` and return the user's raw answer.
    ///
    /// # Errors
    /// Returns error if input cannot be read.
    fn ask(&mut self, question: &str) -> Result<String>;
}
