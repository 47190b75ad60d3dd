// src/core/generator.rs
use crate::core::challenge::Challenge;
use crate::core::item::Item;
use crate::core::player::Player;
use crate::core::types::ItemId;
use crate::error::EngineError;
use rand::Rng;

/// A challenge needs one target plus three distinct distractors.
pub const OPTION_COUNT: usize = 4;

/// Stateless challenge builder: weighted target draw, confusion-biased
/// distractor draws, random correct slot.
pub struct ChallengeGenerator;

impl ChallengeGenerator {
    /// Builds the next round for `player` over the catalog's item store.
    ///
    /// Target selection draws over all items weighted by the player's
    /// per-item difficulty weights. Distractor selection runs three sequential
    /// weighted draws without replacement: the target and already-picked
    /// distractors get weight 0, every other candidate `1 + confusions`, so
    /// historically-confused names come up more often.
    pub fn generate(
        items: &[Item],
        player: &Player,
        rng: &mut impl Rng,
    ) -> Result<Challenge, EngineError> {
        if items.len() < OPTION_COUNT {
            return Err(EngineError::CatalogTooSmall(items.len()));
        }

        let target_weights: Vec<f64> = items.iter().map(|item| player.weight(item.id)).collect();
        // All weights are positive, so the draw cannot come up empty here.
        let target = weighted_index(&target_weights, rng)
            .ok_or(EngineError::CatalogTooSmall(items.len()))?;

        let mut distractors: Vec<ItemId> = Vec::with_capacity(OPTION_COUNT - 1);
        for _ in 0..OPTION_COUNT - 1 {
            let weights: Vec<f64> = items
                .iter()
                .map(|candidate| {
                    if candidate.id == target || distractors.contains(&candidate.id) {
                        0.0
                    } else {
                        1.0 + items[target].confusion(candidate.id) as f64
                    }
                })
                .collect();
            // With >= 4 items at least one candidate keeps nonzero weight.
            let picked = weighted_index(&weights, rng)
                .ok_or(EngineError::CatalogTooSmall(items.len()))?;
            distractors.push(picked);
        }

        log::debug!(
            "challenge for player {}: target '{}' (w {}) vs {:?}",
            player.id,
            items[target].name,
            player.weight(target),
            distractors
                .iter()
                .map(|&d| (items[d].name.as_str(), 1 + items[target].confusion(d)))
                .collect::<Vec<_>>()
        );

        let correct = rng.gen_range(0..OPTION_COUNT);
        let mut options = [0; OPTION_COUNT];
        let mut next_distractor = distractors.into_iter();
        for (slot, option) in options.iter_mut().enumerate() {
            *option = if slot == correct {
                target
            } else {
                next_distractor.next().unwrap()
            };
        }

        Ok(Challenge::new(player.id, options, correct))
    }
}

/// Draws an index with probability proportional to its weight, via cumulative
/// sums and a binary search. Returns None when every weight is zero.
pub fn weighted_index(weights: &[f64], rng: &mut impl Rng) -> Option<usize> {
    let mut cumulative = Vec::with_capacity(weights.len());
    let mut total = 0.0;
    for &w in weights {
        total += w;
        cumulative.push(total);
    }
    if total <= 0.0 {
        return None;
    }
    let roll = rng.gen_range(0.0..total);
    // First entry strictly above the roll; zero-weight entries share their
    // predecessor's cumulative value and can never be selected.
    let index = cumulative.partition_point(|&c| c <= roll);
    Some(index.min(weights.len() - 1))
}
