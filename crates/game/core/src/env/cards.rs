use super::{BuffId, CardId};

/// Rarity tier of a card. Drives reward rolls only.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum Rarity {
    /// Starter cards; never offered as rewards.
    Basic,
    #[default]
    Common,
    Uncommon,
    Rare,
}

impl Rarity {
    /// Tiers eligible for reward rolls, in roll order.
    pub const REWARD_TIERS: [Rarity; 3] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare];
}

/// A single instruction on a card, resolved in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum CardEffect {
    /// Damage to the target, reduced by block first.
    Damage { value: i32 },
    /// Block for the caster.
    Block { value: i32 },
    /// Stacks of a buff on the target.
    ApplyBuff {
        buff: BuffId,
        #[cfg_attr(feature = "serde", serde(default = "CardEffect::default_stacks"))]
        stacks: i32,
    },
    /// Draws for the player. Ignored for enemy casters.
    DrawCard { value: u32 },
    /// Energy for the player, clamped to max. Ignored for enemy casters.
    GainEnergy { value: i32 },
    /// Effect kind the engine does not understand. Skipped at resolution.
    Unknown { kind: String },
}

impl CardEffect {
    pub const fn default_stacks() -> i32 {
        1
    }

    pub fn is_damage(&self) -> bool {
        matches!(self, Self::Damage { .. })
    }

    /// Short name of the effect kind, as used by content files.
    pub fn kind(&self) -> &str {
        match self {
            Self::Damage { .. } => "damage",
            Self::Block { .. } => "block",
            Self::ApplyBuff { .. } => "applyBuff",
            Self::DrawCard { .. } => "drawCard",
            Self::GainEnergy { .. } => "gainEnergy",
            Self::Unknown { kind } => kind,
        }
    }
}

/// Static description of a card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    /// Energy paid to play the card.
    pub cost: i32,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: Rarity,
    pub effects: Vec<CardEffect>,
}

impl CardDefinition {
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, cost: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            description: String::new(),
            rarity: Rarity::default(),
            effects: Vec::new(),
        }
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// A card containing any damage effect is aimed at the opponent; every
    /// other card targets its caster.
    pub fn targets_opponent(&self) -> bool {
        self.effects.iter().any(CardEffect::is_damage)
    }
}
