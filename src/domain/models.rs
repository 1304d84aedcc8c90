//! Domain models for the Immich orphan report and deletion run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity type that is eligible for deletion.
pub const ASSET_ENTITY_TYPE: &str = "asset";

/// A single record from the server's orphan report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrphanEntity {
    /// Storage path (or other identifying value) of the orphan.
    pub path_value: String,
    /// Server-side identifier used for deletion.
    pub entity_id: String,
    /// Classification, e.g. `asset` or `person`.
    pub entity_type: String,
}

impl OrphanEntity {
    /// Read one raw report record.
    ///
    /// Missing, `null` or non-string `pathValue`/`entityType` become `""`.
    /// Returns `None` when there is no string `entityId`.
    #[must_use]
    pub fn from_record(record: &serde_json::Value) -> Option<Self> {
        let field = |name: &str| record.get(name).and_then(serde_json::Value::as_str);

        Some(Self {
            path_value: field("pathValue").unwrap_or_default().to_string(),
            entity_id: field("entityId")?.to_string(),
            entity_type: field("entityType").unwrap_or_default().to_string(),
        })
    }
}

/// Body of `GET /api/reports`. Only the orphan list is read.
///
/// Records stay untyped until `into_entities` so one malformed record
/// cannot fail the whole report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrphanReport {
    #[serde(default)]
    pub orphans: Option<Vec<serde_json::Value>>,
}

impl OrphanReport {
    /// Typed records in report order, plus the number of `asset` records
    /// dropped for lacking an id. Unreadable records of other types are
    /// dropped silently.
    #[must_use]
    pub fn into_entities(self) -> (Vec<OrphanEntity>, usize) {
        let mut entities = Vec::new();
        let mut skipped_assets = 0;

        for record in self.orphans.unwrap_or_default() {
            match OrphanEntity::from_record(&record) {
                Some(entity) => entities.push(entity),
                None if record.get("entityType").and_then(serde_json::Value::as_str)
                    == Some(ASSET_ENTITY_TYPE) =>
                {
                    skipped_assets += 1;
                }
                None => {}
            }
        }

        (entities, skipped_assets)
    }
}

/// Keys and address for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Key used to read the report.
    pub admin_api_key: String,
    /// Key used to delete assets; must belong to the asset owner.
    pub user_api_key: String,
    /// Normalized `scheme://host[:port]`, no trailing slash.
    pub base_url: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("admin_api_key", &"<redacted>")
            .field("user_api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Why a single deletion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Server answered 400.
    ApiKeyMismatch,
    /// Anything else.
    Failed,
}

/// A deletion that did not go through.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteFailure {
    pub entity_id: String,
    pub path_value: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Outcome of the deletion loop.
#[derive(Debug, Clone, Serialize)]
pub struct DeletionReport {
    /// Assets the loop attempted.
    pub total: usize,
    /// Assets the server confirmed deleted.
    pub deleted: usize,
    /// Per-asset failures, in processing order.
    pub failures: Vec<DeleteFailure>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl DeletionReport {
    /// Start an empty report for `total` assets.
    #[must_use]
    pub fn start(total: usize) -> Self {
        let now = Utc::now();
        Self {
            total,
            deleted: 0,
            failures: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    /// Number of assets processed so far.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.deleted + self.failures.len()
    }

    /// Mark the run as finished.
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    /// Failures caused by an ownership mismatch.
    #[must_use]
    pub fn mismatch_count(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| f.kind == FailureKind::ApiKeyMismatch)
            .count()
    }
}
