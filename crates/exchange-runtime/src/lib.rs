//! # Exchange Runtime
//!
//! Wires the Gift-Circle subsystems into one event-creation workflow:
//! register the event, enroll the participants, draw the assignments,
//! persist the links, and notify everyone. State lives in context objects
//! scoped to a single run; there are no process-wide singletons.

pub mod container;
pub mod workflow;

pub use container::{ExchangeContainer, RuntimeConfig};
pub use workflow::{EventSubmission, EventWorkflow, WorkflowError, WorkflowReport};
