//! Domain layer: error taxonomy and assignment-set invariants.

pub mod errors;
pub mod invariants;
