// src/core/catalog.rs
use crate::core::challenge::Challenge;
use crate::core::generator::{ChallengeGenerator, OPTION_COUNT};
use crate::core::item::Item;
use crate::core::player::Player;
use crate::core::types::{Outcome, PlayerId};
use crate::error::EngineError;
use rand::Rng;
use std::collections::HashMap;
use std::path::PathBuf;

/// One raw catalog entry as enumerated by the collaborator's loader:
/// a stable filename key plus a source reference used later for rendering.
#[derive(Debug, Clone)]
pub struct ItemSource {
    pub file: String,
    pub source: PathBuf,
}

/// What a pick hands back to the transport: the slot outcome, the player's
/// updated score, and the next round when this one was just won.
#[derive(Debug)]
pub struct Pick {
    pub outcome: Outcome,
    pub score: i64,
    pub next: Option<Challenge>,
}

/// The fixed item set for one game instance plus its per-player state.
/// Membership never changes after load; item counters and player weights do.
pub struct Catalog {
    identifier: String,
    items: Vec<Item>,
    players: HashMap<PlayerId, Player>,
}

impl Catalog {
    /// Builds the item store from loader output. An empty catalog is allowed
    /// (it just can never generate a challenge), but gets flagged loudly.
    pub fn new(identifier: impl Into<String>, sources: Vec<ItemSource>) -> Self {
        let identifier = identifier.into();
        let items: Vec<Item> = sources
            .into_iter()
            .enumerate()
            .map(|(id, src)| Item::new(id, src.file, src.source))
            .collect();
        if items.is_empty() {
            log::warn!("catalog '{}': zero items loaded", identifier);
        } else {
            log::info!("catalog '{}': found {} items", identifier, items.len());
        }
        Self {
            identifier,
            items,
            players: HashMap::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: usize) -> Option<&Item> {
        self.items.get(id)
    }

    /// At most one `Player` per id for the process lifetime; built lazily
    /// with default weights over exactly this catalog's items.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        get_or_create_player(&mut self.players, self.items.len(), id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Starts a round for `player`, creating the player on first reference.
    pub fn start_round(
        &mut self,
        player: PlayerId,
        rng: &mut impl Rng,
    ) -> Result<Challenge, EngineError> {
        let player = get_or_create_player(&mut self.players, self.items.len(), player);
        ChallengeGenerator::generate(&self.items, player, rng)
    }

    /// Display names of the four options in slot order, for rendering.
    pub fn option_names(&self, challenge: &Challenge) -> [&str; OPTION_COUNT] {
        challenge.options.map(|id| self.items[id].name.as_str())
    }

    /// Scores one pick against an open challenge.
    ///
    /// The caller keeps the contract of never re-picking an already-marked
    /// slot (the transport filters those clicks before they reach the core);
    /// only the index range is validated here. A correct pick closes the
    /// round and returns the freshly generated next one in `Pick::next`.
    pub fn pick_option(
        &mut self,
        challenge: &mut Challenge,
        index: usize,
        rng: &mut impl Rng,
    ) -> Result<Pick, EngineError> {
        if index >= OPTION_COUNT {
            return Err(EngineError::InvalidSlot(index));
        }
        let guessed = challenge.options[index];
        let guessed_name = self.items[guessed].name.clone();
        let target = challenge.target;
        let hit = self.items[target].guess(guessed, &guessed_name);

        let player = get_or_create_player(&mut self.players, self.items.len(), challenge.player);
        if hit {
            challenge.outcomes[index] = Outcome::Correct;
            player.correct += 1;
            player.halve_weight(target);
            let next = ChallengeGenerator::generate(&self.items, player, rng)?;
            Ok(Pick {
                outcome: Outcome::Correct,
                score: player.score(),
                next: Some(next),
            })
        } else {
            challenge.outcomes[index] = Outcome::Incorrect;
            player.wrong += 1;
            player.double_weight(target);
            Ok(Pick {
                outcome: Outcome::Incorrect,
                score: player.score(),
                next: None,
            })
        }
    }
}

fn get_or_create_player(
    players: &mut HashMap<PlayerId, Player>,
    item_count: usize,
    id: PlayerId,
) -> &mut Player {
    players.entry(id).or_insert_with(|| {
        log::debug!("new player {}", id);
        Player::new(id, item_count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DEFAULT_WEIGHT;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn catalog(files: &[&str]) -> Catalog {
        let sources = files
            .iter()
            .map(|file| ItemSource {
                file: file.to_string(),
                source: PathBuf::from(format!("imgs/{file}")),
            })
            .collect();
        Catalog::new("imgs", sources)
    }

    #[test]
    fn players_are_created_once_per_id() {
        let mut cat = catalog(&["a.jpeg", "b.jpeg", "c.jpeg", "d.jpeg"]);
        cat.player_mut(7).correct = 3;
        assert_eq!(cat.player_mut(7).correct, 3);
        assert_eq!(cat.player_mut(8).correct, 0);
    }

    #[test]
    fn correct_pick_updates_everything_and_opens_the_next_round() {
        let mut cat = catalog(&["a.jpeg", "b.jpeg", "c.jpeg", "d.jpeg"]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut challenge = cat.start_round(1, &mut rng).unwrap();
        let target = challenge.target;

        let correct_slot = challenge.correct;
        let pick = cat
            .pick_option(&mut challenge, correct_slot, &mut rng)
            .unwrap();
        assert_eq!(pick.outcome, Outcome::Correct);
        assert_eq!(pick.score, 1);
        assert!(pick.next.is_some());
        assert!(challenge.is_won());

        let player = cat.player(1).unwrap();
        assert_eq!(player.correct, 1);
        assert_eq!(player.weight(target), DEFAULT_WEIGHT / 2.0);
        assert_eq!(cat.item(target).unwrap().rights, 1);
    }

    #[test]
    fn wrong_pick_doubles_the_weight_and_keeps_the_round_open() {
        let mut cat = catalog(&["a.jpeg", "b.jpeg", "c.jpeg", "d.jpeg"]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut challenge = cat.start_round(1, &mut rng).unwrap();
        let target = challenge.target;
        let wrong_slot = (challenge.correct + 1) % 4;
        let guessed = challenge.options[wrong_slot];

        let pick = cat.pick_option(&mut challenge, wrong_slot, &mut rng).unwrap();
        assert_eq!(pick.outcome, Outcome::Incorrect);
        assert_eq!(pick.score, -1);
        assert!(pick.next.is_none());
        assert!(!challenge.is_won());
        assert_eq!(challenge.outcome(wrong_slot), Some(Outcome::Incorrect));

        let player = cat.player(1).unwrap();
        assert_eq!(player.wrong, 1);
        assert_eq!(player.weight(target), DEFAULT_WEIGHT * 2.0);
        let item = cat.item(target).unwrap();
        assert_eq!(item.wrongs, 1);
        assert_eq!(item.confusion(guessed), 1);
    }

    #[test]
    fn out_of_range_slot_is_rejected_without_mutation() {
        let mut cat = catalog(&["a.jpeg", "b.jpeg", "c.jpeg", "d.jpeg"]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut challenge = cat.start_round(1, &mut rng).unwrap();

        let err = cat.pick_option(&mut challenge, 4, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSlot(4)));
        assert_eq!(cat.player(1).unwrap().score(), 0);
        assert!(challenge.outcomes.iter().all(|&o| o == Outcome::Unanswered));
    }

    #[test]
    fn small_catalog_cannot_start_a_round() {
        let mut cat = catalog(&["a.jpeg", "b.jpeg"]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let err = cat.start_round(1, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::CatalogTooSmall(2)));
        // The player was still created lazily, with untouched counters.
        assert_eq!(cat.player(1).unwrap().score(), 0);
    }

    #[test]
    fn empty_catalog_constructs_but_never_generates() {
        let mut cat = catalog(&[]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert!(matches!(
            cat.start_round(1, &mut rng),
            Err(EngineError::CatalogTooSmall(0))
        ));
    }

    #[test]
    fn option_names_come_back_in_slot_order() {
        let mut cat = catalog(&["ada-lovelace.jpeg", "b.jpeg", "c.jpeg", "d.jpeg"]);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let challenge = cat.start_round(1, &mut rng).unwrap();
        let names = cat.option_names(&challenge);
        assert_eq!(names[challenge.correct], cat.item(challenge.target).unwrap().name);
    }
}
