//! Assignment engine service.
//!
//! Orchestrates the generation pipeline:
//! 1. Check the input (count, required fields)
//! 2. Copy the list and shuffle the copy (Fisher-Yates)
//! 3. Pair each position with its circular successor
//! 4. Run the validation pass
//! 5. Return the certified set

use exchange_types::{AssignmentSet, Participant};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

use crate::algorithms::{build_gift_ring, fisher_yates};
use crate::config::EngineConfig;
use crate::domain::errors::{AssignmentError, ParticipantField};
use crate::domain::invariants;
use crate::ports::inbound::AssignmentEngineApi;

/// Assignment engine with an injectable random source.
///
/// Production callers use [`AssignmentEngine::new`], which seeds from OS
/// entropy. Tests use [`AssignmentEngine::seeded`] for reproducible output,
/// or supply any other [`RngCore`] via [`AssignmentEngine::with_rng`]. The
/// RNG sits behind a mutex so one engine can serve concurrent invocations;
/// each call draws from the shared stream but touches no other state.
pub struct AssignmentEngine<R: RngCore + Send = StdRng> {
    config: EngineConfig,
    rng: Mutex<R>,
}

impl AssignmentEngine<StdRng> {
    /// Engine seeded from OS entropy, default configuration.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic engine for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for AssignmentEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + Send> AssignmentEngine<R> {
    /// Engine over a caller-provided random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: EngineConfig::default(),
            rng: Mutex::new(rng),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Input checks, run before any randomness is drawn.
    fn check_participants(&self, participants: &[Participant]) -> Result<(), AssignmentError> {
        if participants.len() < self.config.min_participants {
            return Err(AssignmentError::InsufficientParticipants {
                count: participants.len(),
                min: self.config.min_participants,
            });
        }

        for p in participants {
            let missing = if p.id.is_nil() {
                Some(ParticipantField::Identifier)
            } else if p.name.trim().is_empty() {
                Some(ParticipantField::Name)
            } else if p.email.trim().is_empty() {
                Some(ParticipantField::Email)
            } else {
                None
            };
            if let Some(field) = missing {
                return Err(AssignmentError::MalformedParticipant { id: p.id, field });
            }
        }

        Ok(())
    }
}

impl<R: RngCore + Send> AssignmentEngineApi for AssignmentEngine<R> {
    fn generate_assignments(
        &self,
        participants: &[Participant],
    ) -> Result<AssignmentSet, AssignmentError> {
        self.check_participants(participants)?;

        debug!(
            participant_count = participants.len(),
            "Generating gift assignments"
        );

        // Work on a copy; the caller's ordering must survive untouched.
        let mut order: Vec<&Participant> = participants.iter().collect();
        {
            let mut rng = self.rng.lock();
            fisher_yates(&mut order, &mut *rng);
        }

        let set = build_gift_ring(&order);

        // Certify before anyone trusts the set. A failure here is a defect
        // in the construction above, not a recoverable condition.
        invariants::validate(&set, participants)?;

        info!(
            assignment_count = set.len(),
            "Assignment set generated and validated"
        );

        Ok(set)
    }
}
