use super::BuffId;

/// Engine hook a buff drives. Buffs with [`BuffModifier::None`] are tracked
/// and ticked but have no effect on resolution yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum BuffModifier {
    /// Each stack adds one damage to the owner's attacks.
    Strength,
    /// Damage taken by the owner is multiplied by 1.5.
    Vulnerable,
    #[default]
    None,
}

/// Static description of a buff or debuff.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BuffDefinition {
    pub id: BuffId,
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifier: BuffModifier,
    /// Permanent buffs never expire through end-of-turn ticks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub permanent: bool,
}

impl BuffDefinition {
    pub fn new(id: impl Into<BuffId>, name: impl Into<String>, modifier: BuffModifier) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            modifier,
            permanent: false,
        }
    }

    pub fn permanent(mut self) -> Self {
        self.permanent = true;
        self
    }
}
