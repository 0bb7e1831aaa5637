//! Configuration for the assignment engine.

use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Smallest participant list the engine accepts. Below three people a
    /// secret exchange degenerates (two people would trivially know their
    /// giver), so the floor is 3.
    pub min_participants: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_participants: 3,
        }
    }
}
