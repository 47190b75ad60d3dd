// src/core/player.rs
use crate::core::types::{ItemId, PlayerId, DEFAULT_WEIGHT};
use std::collections::HashMap;

/// One participant's adaptive state: running score plus a per-item difficulty
/// weight driving how often each item comes up as the target.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub correct: u64,
    pub wrong: u64,
    /// One entry per catalog item, always positive. Halved on a correct pick,
    /// doubled on a wrong one; no floor or ceiling is applied.
    pub weights: HashMap<ItemId, f64>,
}

impl Player {
    /// Builds a fresh player with default weights over `item_count` items.
    pub fn new(id: PlayerId, item_count: usize) -> Self {
        Self {
            id,
            correct: 0,
            wrong: 0,
            weights: (0..item_count).map(|item| (item, DEFAULT_WEIGHT)).collect(),
        }
    }

    pub fn weight(&self, item: ItemId) -> f64 {
        self.weights.get(&item).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn halve_weight(&mut self, item: ItemId) {
        let w = self.weights.entry(item).or_insert(DEFAULT_WEIGHT);
        *w /= 2.0;
    }

    pub fn double_weight(&mut self, item: ItemId) {
        let w = self.weights.entry(item).or_insert(DEFAULT_WEIGHT);
        *w *= 2.0;
    }

    /// Signed running score; goes negative when wrong answers dominate.
    pub fn score(&self) -> i64 {
        self.correct as i64 - self.wrong as i64
    }
}
