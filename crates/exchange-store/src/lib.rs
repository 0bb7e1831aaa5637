//! # Exchange Store
//!
//! Persistence collaborator for the Gift-Circle workspace.
//!
//! Owns event, participant, and assignment records once the engine returns:
//! it assigns identifiers at enrollment time, enforces the intake rules the
//! organizer form promises (non-empty names, syntactically valid emails,
//! per-event case-insensitive email uniqueness), and stores one assignment
//! link per giver.
//!
//! ## Architecture
//!
//! - **Domain**: `StoreError` taxonomy
//! - **Ports**: inbound `EventStoreApi`
//! - **Adapters**: `InMemoryEventStore`

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::memory::InMemoryEventStore;
pub use domain::errors::StoreError;
pub use ports::inbound::EventStoreApi;
