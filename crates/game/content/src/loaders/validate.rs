//! Cross-file content checks.
//!
//! Structural problems (duplicate ids, an empty enemy roster) fail the load.
//! Dangling references only warn: the engine treats a missing definition as a
//! logged no-op, so a pack with a typo still plays.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use game_core::{BuffDefinition, CardDefinition, CardEffect, EnemyDefinition, GameConfig};

use crate::loaders::LoadResult;

/// Validates a content pack before it is turned into a catalog.
///
/// Returns the number of dangling references that were logged.
pub fn validate_content(
    config: &GameConfig,
    cards: &[CardDefinition],
    buffs: &[BuffDefinition],
    enemies: &[EnemyDefinition],
) -> LoadResult<usize> {
    let card_ids = unique_ids("card", cards.iter().map(|card| &card.id))?;
    let buff_ids = unique_ids("buff", buffs.iter().map(|buff| &buff.id))?;
    unique_ids("enemy", enemies.iter().map(|enemy| &enemy.id))?;

    if enemies.is_empty() {
        anyhow::bail!("content pack defines no enemies");
    }

    let mut dangling = 0;

    for card in &config.starting_deck {
        if !card_ids.contains(card) {
            dangling += 1;
            tracing::warn!(target: "game_content::validate", card = %card, "starting deck references an unknown card");
        }
    }

    for card in cards {
        for effect in &card.effects {
            match effect {
                CardEffect::ApplyBuff { buff, .. } if !buff_ids.contains(buff) => {
                    dangling += 1;
                    tracing::warn!(
                        target: "game_content::validate",
                        card = %card.id,
                        buff = %buff,
                        "card applies an unknown buff"
                    );
                }
                CardEffect::Unknown { kind } => {
                    dangling += 1;
                    tracing::warn!(
                        target: "game_content::validate",
                        card = %card.id,
                        kind = %kind,
                        "card carries an unknown effect"
                    );
                }
                _ => {}
            }
        }
    }

    for enemy in enemies {
        for card in enemy.deck.iter().filter(|card| !card_ids.contains(*card)) {
            dangling += 1;
            tracing::warn!(
                target: "game_content::validate",
                enemy = %enemy.id,
                card = %card,
                "enemy deck references an unknown card"
            );
        }
        if enemy.deck.is_empty() {
            tracing::warn!(target: "game_content::validate", enemy = %enemy.id, "enemy has no actions");
        }
    }

    Ok(dangling)
}

fn unique_ids<'a, T>(kind: &str, ids: impl Iterator<Item = &'a T>) -> LoadResult<HashSet<&'a T>>
where
    T: Eq + Hash + Display + 'a,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("duplicate {} id '{}'", kind, id);
        }
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::BuffModifier;

    fn cards() -> Vec<CardDefinition> {
        vec![
            CardDefinition::new("strike", "Strike", 1).with_effect(CardEffect::Damage { value: 6 }),
            CardDefinition::new("defend", "Defend", 1).with_effect(CardEffect::Block { value: 5 }),
        ]
    }

    fn enemies() -> Vec<EnemyDefinition> {
        vec![EnemyDefinition::new("slime", "Slime", 15).with_deck(["strike".into()])]
    }

    #[test]
    fn clean_pack_passes() {
        let buffs = vec![BuffDefinition::new("vulnerable", "Vulnerable", BuffModifier::Vulnerable)];
        let dangling = validate_content(&GameConfig::default(), &cards(), &buffs, &enemies())
            .expect("valid pack");
        assert_eq!(dangling, 0);
    }

    #[test]
    fn duplicate_ids_fail() {
        let mut cards = cards();
        cards.push(CardDefinition::new("STRIKE", "Strike again", 0));

        let err = validate_content(&GameConfig::default(), &cards, &[], &enemies()).unwrap_err();
        assert_eq!(err.to_string(), "duplicate card id 'strike'");
    }

    #[test]
    fn empty_roster_fails() {
        let err = validate_content(&GameConfig::default(), &cards(), &[], &[]).unwrap_err();
        assert!(err.to_string().contains("no enemies"));
    }

    #[test]
    fn dangling_references_are_counted() {
        let mut cards = cards();
        cards.push(
            CardDefinition::new("expose", "Expose", 1).with_effect(CardEffect::ApplyBuff {
                buff: "weakness".into(),
                stacks: 1,
            }),
        );
        let enemies = vec![EnemyDefinition::new("slime", "Slime", 15).with_deck(["lick".into()])];
        let mut config = GameConfig::default();
        config.starting_deck.push("missing".into());

        let dangling = validate_content(&config, &cards, &[], &enemies).expect("warnings only");
        assert_eq!(dangling, 3);
    }
}
