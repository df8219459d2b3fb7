//! Progress bar utilities for the fetch loop

use crate::fetch::FetchOutcome;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Create a progress bar over `total` identifiers
///
/// Draws to stderr; pass `visible = false` to get a bar that renders
/// nothing (non-interactive runs, CSV on stdout).
pub fn create_batch_progress(total: u64, visible: bool) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(
        Some(total),
        if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        },
    );
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message("Processing the EINs...");
    pb
}

/// Advance the bar for one finished record
pub fn record_outcome(pb: &ProgressBar, ein: &str, outcome: &FetchOutcome) {
    if outcome.is_success() {
        pb.set_message(format!("Fetched {}", ein));
    } else {
        pb.set_message(format!("Failed {}", ein));
    }
    pb.inc(1);
}
