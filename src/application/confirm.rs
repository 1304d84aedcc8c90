//! Confirmation step before destructive deletion.

use crate::domain::{OrphanEntity, Result};

use super::formatter::{confirmation_question, format_orphan_table};
use super::ports::Prompter;

/// Ask the user whether `entities` should be deleted.
///
/// In unattended mode nothing is shown and the answer is always yes.
///
/// # Errors
/// Returns error if the answer cannot be read.
pub fn confirm_deletion(
    entities: &[OrphanEntity],
    prompter: &mut dyn Prompter,
    unattended: bool,
) -> Result<bool> {
    if unattended {
        tracing::info!(count = entities.len(), "Skipping confirmation (unattended)");
        return Ok(true);
    }

    prompter.show(&format_orphan_table(entities));
    prompter.show("");

    let answer = prompter.ask(&confirmation_question(entities.len()))?;
    prompter.show("");

    Ok(is_affirmative(&answer))
}

/// `y` or `yes`, any case.
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
