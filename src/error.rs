// src/error.rs
use thiserror::Error;

/// Everything the engine can report to its caller. Nothing here is retried
/// internally; the transport layer decides what to do.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Challenges need a target plus three distinct distractors, so a catalog
    /// below four items can never generate one.
    #[error("catalog holds {0} items but a challenge needs at least 4")]
    CatalogTooSmall(usize),

    /// Option index outside the four slots. No state is mutated.
    #[error("option index {0} is out of range (valid slots are 0..4)")]
    InvalidSlot(usize),

    /// The collaborator-supplied catalog loader failed.
    #[error("catalog load failed: {0}")]
    Load(#[from] std::io::Error),

    /// The process configuration file exists but does not parse.
    #[error("config file is not valid JSON: {0}")]
    Config(#[from] serde_json::Error),
}
