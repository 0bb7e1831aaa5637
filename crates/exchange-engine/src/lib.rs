//! # Exchange Engine
//!
//! Randomized secret gift-exchange pairing over a fixed participant list.
//!
//! Given N >= 3 participants the engine produces a giver -> receiver mapping
//! that is a permutation of the participants with no fixed points, built as
//! a single N-cycle: shuffle the list with an unbiased Fisher-Yates pass,
//! then pair each position with its circular successor. Every produced set
//! runs through a validation pass before it is returned, so callers never
//! see a partial or unverified result.
//!
//! ## Architecture
//!
//! - **Domain**: error taxonomy and the invariant checks
//! - **Algorithms**: Fisher-Yates shuffle, ring pairing
//! - **Ports**: inbound `AssignmentEngineApi`
//! - **Application**: `AssignmentEngine` service with injectable randomness
//!
//! The engine is synchronous, pure, and non-blocking: no I/O, no mutation of
//! caller-owned data, no shared state across invocations beyond its own RNG.

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::AssignmentEngine;
pub use config::EngineConfig;
pub use domain::errors::{AssignmentError, ParticipantField, Role};
pub use domain::invariants;
pub use ports::inbound::AssignmentEngineApi;
