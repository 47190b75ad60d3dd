// src/core/item.rs
use crate::core::types::ItemId;
use std::collections::HashMap;
use std::path::PathBuf;

/// One identifiable picture: its display name plus the global tallies of how
/// players have guessed against it.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    /// The stable external key: the source filename, e.g. "abraham-lincoln.jpeg".
    pub file: String,
    /// Human-readable name, derived from the filename.
    pub name: String,
    /// Where the picture lives; handed to the transport for rendering.
    pub source: PathBuf,
    /// Correct guesses made against this item as the target.
    pub rights: u64,
    /// Wrong guesses made against this item as the target.
    pub wrongs: u64,
    /// How often each other item was picked when this one was the target.
    pub confusions: HashMap<ItemId, u64>,
}

impl Item {
    pub fn new(id: ItemId, file: String, source: PathBuf) -> Self {
        let name = display_name(&file);
        Self {
            id,
            file,
            name,
            source,
            rights: 0,
            wrongs: 0,
            confusions: HashMap::new(),
        }
    }

    /// Scores a guess made against this item as the target.
    ///
    /// Correctness is display-name equality, not identity: two items sharing
    /// a derived name are interchangeable here. A wrong guess bumps the
    /// confusion tally for the guessed item, which later biases distractor
    /// selection toward it.
    pub fn guess(&mut self, guessed_id: ItemId, guessed_name: &str) -> bool {
        if guessed_name == self.name {
            self.rights += 1;
            true
        } else {
            self.wrongs += 1;
            *self.confusions.entry(guessed_id).or_insert(0) += 1;
            false
        }
    }

    /// Confusion count for one candidate, zero if never confused.
    pub fn confusion(&self, other: ItemId) -> u64 {
        self.confusions.get(&other).copied().unwrap_or(0)
    }
}

/// Derives the display name from a filename: drop the extension, split on
/// hyphens, capitalize each token, join with spaces.
/// "abraham-lincoln.jpeg" -> "Abraham Lincoln".
pub fn display_name(file: &str) -> String {
    let stem = file.split('.').next().unwrap_or(file);
    stem.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
