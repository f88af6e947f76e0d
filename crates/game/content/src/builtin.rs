//! Default content pack compiled into the crate.
//!
//! The files under `data/` double as the reference layout for custom data
//! directories loaded through [`crate::ContentFactory`].

use game_core::{Catalog, GameConfig};

use crate::loaders::{BuffLoader, CardLoader, ConfigLoader, ContentPack, EnemyLoader, LoadResult};

pub const CARDS_RON: &str = include_str!("../data/cards.ron");
pub const BUFFS_RON: &str = include_str!("../data/buffs.ron");
pub const ENEMIES_RON: &str = include_str!("../data/enemies.ron");
pub const CONFIG_TOML: &str = include_str!("../data/config.toml");

/// Parses the built-in content pack.
pub fn pack() -> LoadResult<ContentPack> {
    Ok(ContentPack {
        config: ConfigLoader::parse(CONFIG_TOML)?,
        cards: CardLoader::parse(CARDS_RON)?,
        buffs: BuffLoader::parse(BUFFS_RON)?,
        enemies: EnemyLoader::parse(ENEMIES_RON)?,
    })
}

/// Built-in config and catalog, validated.
pub fn catalog() -> LoadResult<(GameConfig, Catalog)> {
    pack()?.into_catalog()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CardEffect, CatalogOracle, Rarity};

    #[test]
    fn builtin_pack_is_clean() {
        let pack = pack().expect("built-in pack parses");
        assert_eq!(pack.validate().expect("built-in pack validates"), 0);
    }

    #[test]
    fn builtin_starter_cards_match_reference_values() {
        let (config, catalog) = catalog().expect("built-in catalog");

        let strike = catalog.card(&"strike".into()).expect("strike");
        assert_eq!(strike.cost, 1);
        assert_eq!(strike.effects, vec![CardEffect::Damage { value: 6 }]);
        assert_eq!(strike.rarity, Rarity::Basic);

        let defend = catalog.card(&"defend".into()).expect("defend");
        assert_eq!(defend.effects, vec![CardEffect::Block { value: 5 }]);

        let slime = catalog.enemy_for_floor(1).expect("floor 1 enemy");
        assert_eq!(slime.id.as_str(), "slime");
        assert_eq!(slime.max_hp, 15);

        assert_eq!(config.player_max_hp, 75);
        assert_eq!(config.starting_deck.len(), 8);
    }

    #[test]
    fn builtin_has_reward_cards_in_every_tier() {
        let (_, catalog) = catalog().expect("built-in catalog");
        for tier in Rarity::REWARD_TIERS {
            assert!(
                catalog.cards().iter().any(|card| card.rarity == tier),
                "no {tier} cards"
            );
        }
    }
}
