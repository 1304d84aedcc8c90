//! Spinner and progress bar helpers.
//!
//! Every helper takes a `show` flag and returns `None` when progress output
//! is disabled, so callers never branch on it themselves.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a single blocking request is in flight.
pub fn make_spinner(show: bool, msg: &str) -> Option<ProgressBar> {
    if !show {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

pub fn succeed_spinner(pb: Option<ProgressBar>, msg: &str) {
    if let Some(pb) = pb {
        pb.set_style(plain_style());
        pb.finish_with_message(format!("{} {msg}", "✔".green()));
    }
}

pub fn fail_spinner(pb: Option<ProgressBar>, msg: &str) {
    if let Some(pb) = pb {
        pb.set_style(plain_style());
        pb.finish_with_message(format!("{} {msg}", "✖".red()));
    }
}

/// Bar counting processed items out of `total`.
pub fn make_progress(show: bool, total: u64, msg: &str) -> Option<ProgressBar> {
    if !show {
        return None;
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template(
            "{msg}: {percent:>3}% [{bar:40.red/blue}] {pos}/{len} [{elapsed_precise}]",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━░"),
    );
    pb.set_message(msg.to_string());
    Some(pb)
}

pub fn finish_progress(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish();
    }
}

/// Print a line without corrupting an active bar.
///
/// A hidden bar (no terminal) swallows `println`, so fall back to stderr.
pub fn println(pb: Option<&ProgressBar>, line: &str) {
    match pb {
        Some(pb) if !pb.is_hidden() => pb.println(line),
        _ => eprintln!("{line}"),
    }
}

fn plain_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg}").unwrap_or_else(|_| ProgressStyle::default_spinner())
}
