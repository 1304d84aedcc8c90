//! The fetch → filter → confirm → delete workflow.

use colored::Colorize;

use crate::domain::{
    Credentials, DeleteFailure, DeletionReport, OrphanEntity, Result, ASSET_ENTITY_TYPE,
};
use crate::infrastructure::progress;

use super::confirm::confirm_deletion;
use super::filter::filter_by_type;
use super::ports::{ImmichApi, Prompter};

/// Run-level switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurgeOptions {
    /// Delete without asking.
    pub unattended: bool,
    /// Draw the spinner and progress bar.
    pub show_progress: bool,
}

/// How a run ended.
#[derive(Debug)]
pub enum PurgeOutcome {
    /// The report contained no assets.
    NoOrphans,
    /// The user said no; nothing was deleted.
    Declined,
    /// The deletion loop ran to the end.
    Completed(DeletionReport),
}

/// Drives one purge against an `ImmichApi`.
pub struct PurgeService<A> {
    api: A,
    credentials: Credentials,
    options: PurgeOptions,
}

impl<A: ImmichApi> PurgeService<A> {
    #[must_use]
    pub const fn new(api: A, credentials: Credentials, options: PurgeOptions) -> Self {
        Self {
            api,
            credentials,
            options,
        }
    }

    /// Run the whole workflow.
    ///
    /// # Errors
    /// Returns error if the report cannot be fetched or the confirmation
    /// cannot be read. Per-asset deletion failures are recorded in the
    /// report instead.
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<PurgeOutcome> {
        let orphans = self.fetch_orphans()?;

        let assets = filter_by_type(&orphans, ASSET_ENTITY_TYPE);
        tracing::info!(
            orphans = orphans.len(),
            assets = assets.len(),
            "Filtered orphan report"
        );

        if assets.is_empty() {
            return Ok(PurgeOutcome::NoOrphans);
        }

        if !confirm_deletion(&assets, prompter, self.options.unattended)? {
            tracing::info!("Deletion declined");
            return Ok(PurgeOutcome::Declined);
        }

        Ok(PurgeOutcome::Completed(self.delete_all(&assets)))
    }

    fn fetch_orphans(&self) -> Result<Vec<OrphanEntity>> {
        let spinner = progress::make_spinner(
            self.options.show_progress,
            "Retrieving list of orphaned media assets...",
        );

        match self.api.fetch_report(&self.credentials.admin_api_key) {
            Ok(orphans) => {
                progress::succeed_spinner(spinner, "Success!");
                Ok(orphans)
            }
            Err(e) => {
                progress::fail_spinner(spinner, "Failed");
                Err(e)
            }
        }
    }

    /// Delete each asset in order. A failure never stops the loop.
    fn delete_all(&self, assets: &[OrphanEntity]) -> DeletionReport {
        let mut report = DeletionReport::start(assets.len());
        let pb = progress::make_progress(
            self.options.show_progress,
            assets.len() as u64,
            "Deleting orphaned media assets",
        );

        for asset in assets {
            match self
                .api
                .delete_asset(&self.credentials.user_api_key, &asset.entity_id)
            {
                Ok(()) => report.deleted += 1,
                Err(err) => {
                    tracing::debug!(entity_id = err.entity_id(), kind = ?err.kind(), "Delete failed");
                    progress::println(pb.as_ref(), &err.to_string().yellow().to_string());
                    report.failures.push(DeleteFailure {
                        entity_id: asset.entity_id.clone(),
                        path_value: asset.path_value.clone(),
                        kind: err.kind(),
                        message: err.to_string(),
                    });
                }
            }

            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }

        progress::finish_progress(pb);
        tracing::info!(
            processed = report.processed(),
            deleted = report.deleted,
            failed = report.failures.len(),
            "Deletion loop finished"
        );

        report.finish()
    }
}
