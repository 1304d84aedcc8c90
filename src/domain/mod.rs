//! Domain layer - core types and errors.
//!
//! Pure data models without any I/O.

pub mod error;
pub mod models;
pub mod settings;

pub use error::{AppError, DeleteError, Result};
pub use models::{
    Credentials, DeleteFailure, DeletionReport, FailureKind, OrphanEntity, OrphanReport,
    ASSET_ENTITY_TYPE,
};
pub use settings::AppConfig;
