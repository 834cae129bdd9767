//! In-memory proposal stores
//!
//! Development and test implementations of the application store ports.
//! Production deployments plug in adapters for the real ledgers.

mod memory_application_store;
mod memory_event_store;

pub use memory_application_store::InMemoryApplicationStore;
pub use memory_event_store::InMemoryEventStore;
