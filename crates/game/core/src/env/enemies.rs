use super::{CardId, EnemyId};

/// Static description of an enemy type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EnemyDefinition {
    pub id: EnemyId,
    pub name: String,
    pub max_hp: i32,
    pub max_energy: i32,
    /// Positional action list. The enemy AI plays entry 0 every turn.
    pub deck: Vec<CardId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl EnemyDefinition {
    pub fn new(id: impl Into<EnemyId>, name: impl Into<String>, max_hp: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_hp,
            max_energy: 1,
            deck: Vec::new(),
            description: String::new(),
        }
    }

    pub fn with_deck(mut self, deck: impl IntoIterator<Item = CardId>) -> Self {
        self.deck = deck.into_iter().collect();
        self
    }
}
