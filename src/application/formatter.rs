//! Console text for the purge workflow.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{DeletionReport, OrphanEntity};

/// Formats the `(Path Value, Entity ID)` listing shown before confirmation.
#[must_use]
pub fn format_orphan_table(entities: &[OrphanEntity]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Path Value", "Entity ID"]);

    for entity in entities {
        table.add_row(vec![&entity.path_value, &entity.entity_id]);
    }

    table.to_string()
}

/// The yes/no question, pluralized for `count`.
#[must_use]
pub fn confirmation_question(count: usize) -> String {
    let (verb, noun, pronoun) = if count == 1 {
        ("is", "asset", "it")
    } else {
        ("are", "assets", "them")
    };
    format!(
        "There {verb} {count} orphaned media {noun}. \
         Would you like to delete {pronoun} from Immich? (yes/no): "
    )
}

/// One-line tally printed after the deletion loop.
#[must_use]
pub fn format_summary(report: &DeletionReport) -> String {
    let failed = report.failures.len();
    let mut out = format!(
        "  Deleted: {}  Failed: {}",
        report.deleted.to_string().green(),
        if failed == 0 {
            failed.to_string().normal()
        } else {
            failed.to_string().red()
        }
    );

    let mismatches = report.mismatch_count();
    if mismatches > 0 {
        out.push_str(&format!(
            "\n  {} {} failure(s) looked like an API key mismatch; \
             re-run with the owning user's API key.",
            "hint:".yellow().bold(),
            mismatches
        ));
    }

    out
}
