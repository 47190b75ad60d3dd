// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A unique identifier for an item within one catalog.
/// Items live in the catalog's `Vec` store; this is the index into it.
pub type ItemId = usize;

/// Opaque participant identifier supplied by the transport layer
/// (e.g. a messaging-platform user id).
pub type PlayerId = u64;

/// Starting difficulty weight for every item a player has never been tested on.
pub const DEFAULT_WEIGHT: f64 = 8.0;

/// Per-slot result of a round. A slot is marked at most once and never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Unanswered,
    Correct,
    Incorrect,
}
