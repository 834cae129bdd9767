//! Infrastructure layer for sortition-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod randomness;
pub mod stores;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileCouncilConfig, FileJournalConfig,
    FileOutputConfig, FileSortitionConfig, FileValidatorEntry,
};
pub use logging::JsonlDecisionJournal;
pub use randomness::OsRandomness;
pub use stores::{InMemoryApplicationStore, InMemoryEventStore};
