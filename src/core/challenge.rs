// src/core/challenge.rs
use crate::core::types::{ItemId, Outcome, PlayerId};

/// One round: a target item hidden among four options, plus the per-slot
/// outcomes accumulated so far. Built by the generator, scored through
/// `Catalog::pick_option`.
#[derive(Debug, Clone)]
pub struct Challenge {
    pub player: PlayerId,
    pub target: ItemId,
    /// Exactly four distinct items, one of which is the target.
    pub options: [ItemId; 4],
    /// Slot holding the target.
    pub correct: usize,
    pub outcomes: [Outcome; 4],
}

impl Challenge {
    pub fn new(player: PlayerId, options: [ItemId; 4], correct: usize) -> Self {
        Self {
            player,
            target: options[correct],
            options,
            correct,
            outcomes: [Outcome::Unanswered; 4],
        }
    }

    /// True once a slot has been marked correct. With name-keyed scoring that
    /// slot can be a twin of the target rather than `correct` itself.
    pub fn is_won(&self) -> bool {
        self.outcomes.contains(&Outcome::Correct)
    }

    pub fn outcome(&self, slot: usize) -> Option<Outcome> {
        self.outcomes.get(slot).copied()
    }
}
