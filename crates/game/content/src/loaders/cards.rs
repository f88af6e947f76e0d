//! Card catalog loader.

use std::path::Path;

use game_core::{CardDefinition, CardEffect, CardId, Rarity};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Card catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCatalog {
    pub cards: Vec<CardSpec>,
}

/// One card as authored in data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSpec {
    pub id: String,
    pub name: String,
    pub cost: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub effects: Vec<EffectSpec>,
}

/// Loosely typed effect entry.
///
/// Authors name the effect with `kind` and fill in whichever fields it needs.
/// Entries that do not form a known effect are kept as
/// [`CardEffect::Unknown`] so the engine can skip them at resolution time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectSpec {
    pub kind: String,
    #[serde(default)]
    pub value: Option<i32>,
    #[serde(default)]
    pub buff: Option<String>,
    #[serde(default)]
    pub stacks: Option<i32>,
}

impl EffectSpec {
    pub fn into_effect(self, card: &CardId) -> CardEffect {
        let effect = match (self.kind.as_str(), self.value, self.buff) {
            ("damage", Some(value), _) => Some(CardEffect::Damage { value }),
            ("block", Some(value), _) => Some(CardEffect::Block { value }),
            ("applyBuff", _, Some(buff)) => Some(CardEffect::ApplyBuff {
                buff: buff.into(),
                stacks: self.stacks.unwrap_or(CardEffect::default_stacks()),
            }),
            ("drawCard" | "draw", Some(value), _) => u32::try_from(value)
                .ok()
                .map(|value| CardEffect::DrawCard { value }),
            ("gainEnergy", Some(value), _) => Some(CardEffect::GainEnergy { value }),
            _ => None,
        };

        effect.unwrap_or_else(|| {
            tracing::warn!(
                target: "game_content::loaders",
                card = %card,
                kind = %self.kind,
                "effect is unknown or incomplete; it will be skipped"
            );
            CardEffect::Unknown { kind: self.kind }
        })
    }
}

impl CardSpec {
    pub fn into_definition(self) -> CardDefinition {
        let id = CardId::new(&self.id);
        let effects = self
            .effects
            .into_iter()
            .map(|effect| effect.into_effect(&id))
            .collect();

        CardDefinition {
            id,
            name: self.name,
            cost: self.cost,
            description: self.description,
            rarity: self.rarity,
            effects,
        }
    }
}

/// Loader for card catalog from RON files.
pub struct CardLoader;

impl CardLoader {
    /// Load card catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<CardDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse card catalog RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<CardDefinition>> {
        let catalog: CardCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card catalog RON: {}", e))?;

        Ok(catalog
            .cards
            .into_iter()
            .map(CardSpec::into_definition)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        #![enable(implicit_some)]
        (
            cards: [
                (
                    id: "Strike",
                    name: "Strike",
                    cost: 1,
                    description: "Deal 6 damage.",
                    rarity: basic,
                    effects: [(kind: "damage", value: 6)],
                ),
                (
                    id: "thunderclap",
                    name: "Thunderclap",
                    cost: 1,
                    rarity: uncommon,
                    effects: [
                        (kind: "damage", value: 4),
                        (kind: "applyBuff", buff: "vulnerable"),
                        (kind: "teleport", value: 2),
                    ],
                ),
            ],
        )
    "#;

    #[test]
    fn parses_cards_and_normalizes_ids() {
        let cards = CardLoader::parse(SAMPLE).expect("valid catalog");

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, CardId::from("strike"));
        assert_eq!(cards[0].rarity, Rarity::Basic);
        assert_eq!(cards[0].effects, vec![CardEffect::Damage { value: 6 }]);
        assert_eq!(cards[1].description, "");
    }

    #[test]
    fn unknown_effects_are_preserved_as_unknown() {
        let cards = CardLoader::parse(SAMPLE).expect("valid catalog");

        assert_eq!(
            cards[1].effects,
            vec![
                CardEffect::Damage { value: 4 },
                CardEffect::ApplyBuff {
                    buff: "vulnerable".into(),
                    stacks: 1,
                },
                CardEffect::Unknown {
                    kind: "teleport".into(),
                },
            ]
        );
    }

    #[test]
    fn incomplete_effect_becomes_unknown() {
        let effect = EffectSpec {
            kind: "damage".into(),
            ..EffectSpec::default()
        }
        .into_effect(&"broken".into());
        assert_eq!(effect.kind(), "damage");
        assert!(matches!(effect, CardEffect::Unknown { .. }));

        let negative_draw = EffectSpec {
            kind: "drawCard".into(),
            value: Some(-1),
            ..EffectSpec::default()
        }
        .into_effect(&"broken".into());
        assert!(matches!(negative_draw, CardEffect::Unknown { .. }));
    }

    #[test]
    fn malformed_ron_is_an_error() {
        let err = CardLoader::parse("(cards: [(id: 1)])").unwrap_err();
        assert!(err.to_string().contains("card catalog"));
    }
}
