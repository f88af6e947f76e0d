//! Reward set generation.
//!
//! Each pick rolls a rarity tier from the floor-adjusted weights, then picks
//! a card of that tier uniformly. Tiers without remaining candidates are left
//! out of the roll, so generation always terminates.

use crate::config::{GameConfig, RarityWeights};
use crate::env::{CardDefinition, CardId, GameEnv, Rarity, RngOracle, RngStream};
use crate::state::{GameState, RngState};

/// Cards that may be offered: anything that is neither basic nor part of the
/// starting deck.
pub(crate) fn is_reward_candidate(card: &CardDefinition, config: &GameConfig) -> bool {
    card.rarity != Rarity::Basic && !config.is_starting_card(&card.id)
}

/// Rolls every reward set for the floor the session just reached.
pub(crate) fn generate_reward_sets(state: &mut GameState, env: &GameEnv<'_>) -> Vec<Vec<CardId>> {
    let config = env.config();
    let pool: Vec<&CardDefinition> = env
        .catalog()
        .cards()
        .iter()
        .filter(|card| is_reward_candidate(card, config))
        .collect();

    if pool.is_empty() {
        tracing::warn!(target: "game_core::rewards", "no non-basic cards available for rewards");
        return Vec::new();
    }

    let weights = config
        .rarity_weights
        .for_floor(state.floor, config.rarity_shift_per_floor);

    (0..config.reward_sets)
        .map(|_| roll_set(&pool, weights, config.reward_choices, &mut state.rng, env.rng()))
        .filter(|set| !set.is_empty())
        .collect()
}

fn roll_set(
    pool: &[&CardDefinition],
    weights: RarityWeights,
    choices: usize,
    rng: &mut RngState,
    oracle: &dyn RngOracle,
) -> Vec<CardId> {
    let mut set: Vec<CardId> = Vec::with_capacity(choices);

    while set.len() < choices {
        let remaining = |rarity: Rarity| {
            pool.iter()
                .filter(|card| card.rarity == rarity && !set.contains(&card.id))
                .copied()
                .collect::<Vec<_>>()
        };

        let tiers: Vec<(Rarity, u32)> = Rarity::REWARD_TIERS
            .iter()
            .filter(|&&rarity| !remaining(rarity).is_empty())
            .map(|&rarity| (rarity, weights.weight(rarity)))
            .collect();
        let Some(rarity) = roll_rarity(&tiers, rng, oracle) else {
            break;
        };

        let candidates = remaining(rarity);
        let pick = rng.below(oracle, RngStream::RewardCard, candidates.len());
        match candidates.get(pick) {
            Some(card) => set.push(card.id.clone()),
            None => break,
        }
    }

    set
}

/// Weighted pick among `tiers`, proportional to weight. When every
/// remaining tier has zero weight the pick is uniform instead.
fn roll_rarity(tiers: &[(Rarity, u32)], rng: &mut RngState, oracle: &dyn RngOracle) -> Option<Rarity> {
    if tiers.is_empty() {
        return None;
    }

    let total: u32 = tiers.iter().map(|&(_, weight)| weight).sum();
    if total == 0 {
        let index = rng.below(oracle, RngStream::RewardRarity, tiers.len());
        return tiers.get(index).map(|&(rarity, _)| rarity);
    }

    let mut roll = rng.next_u32(oracle, RngStream::RewardRarity) % total;
    for &(rarity, weight) in tiers {
        if roll < weight {
            return Some(rarity);
        }
        roll -= weight;
    }
    tiers.last().map(|&(rarity, _)| rarity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Catalog, EnemyDefinition, PcgRng};

    fn card(id: &str, rarity: Rarity) -> CardDefinition {
        CardDefinition::new(id, id, 1).with_rarity(rarity)
    }

    fn catalog(cards: Vec<CardDefinition>) -> Catalog {
        Catalog::new(cards, vec![], vec![EnemyDefinition::new("slime", "Slime", 15)])
    }

    #[test]
    fn excludes_basic_and_starting_cards() {
        let catalog = catalog(vec![
            card("strike", Rarity::Common),
            card("defend", Rarity::Common),
            card("wound", Rarity::Basic),
            card("bash", Rarity::Common),
        ]);
        let config = GameConfig::default();
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = GameState::new("p1", 4, &env).expect("enemies defined");

        let sets = generate_reward_sets(&mut state, &env);

        assert_eq!(sets.len(), config.reward_sets);
        for set in sets {
            assert_eq!(set, vec![CardId::from("bash")]);
        }
    }

    #[test]
    fn sets_have_no_duplicates() {
        let catalog = catalog(vec![
            card("a", Rarity::Common),
            card("b", Rarity::Common),
            card("c", Rarity::Uncommon),
            card("d", Rarity::Rare),
            card("e", Rarity::Rare),
        ]);
        let config = GameConfig::default();
        let env = GameEnv::new(&catalog, &config, &PcgRng);

        for seed in 0..50 {
            let mut state = GameState::new("p1", seed, &env).expect("enemies defined");
            state.floor = 1 + (seed as u32 % 10);
            for set in generate_reward_sets(&mut state, &env) {
                assert_eq!(set.len(), config.reward_choices);
                let mut unique = set.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), set.len());
            }
        }
    }

    #[test]
    fn small_pool_yields_short_sets() {
        let catalog = catalog(vec![card("a", Rarity::Rare), card("b", Rarity::Uncommon)]);
        let config = GameConfig::default();
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = GameState::new("p1", 2, &env).expect("enemies defined");

        let sets = generate_reward_sets(&mut state, &env);
        assert!(sets.iter().all(|set| set.len() == 2));
    }

    #[test]
    fn empty_pool_yields_no_sets() {
        let catalog = catalog(vec![card("strike", Rarity::Common)]);
        let config = GameConfig::default();
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = GameState::new("p1", 2, &env).expect("enemies defined");

        assert!(generate_reward_sets(&mut state, &env).is_empty());
    }

    #[test]
    fn zero_weight_tiers_are_still_reachable_when_alone() {
        let mut rng = RngState::new(1);
        let tiers = [(Rarity::Rare, 0)];
        assert_eq!(roll_rarity(&tiers, &mut rng, &PcgRng), Some(Rarity::Rare));
        assert_eq!(roll_rarity(&[], &mut rng, &PcgRng), None);
    }

    #[test]
    fn weighted_roll_respects_zero_weights() {
        let mut rng = RngState::new(1);
        let tiers = [(Rarity::Common, 0), (Rarity::Uncommon, 5)];
        for _ in 0..100 {
            assert_eq!(roll_rarity(&tiers, &mut rng, &PcgRng), Some(Rarity::Uncommon));
        }
    }
}
