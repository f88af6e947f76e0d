//! Live buffs attached to a combatant.

use crate::env::{BuffDefinition, BuffId, BuffModifier};

/// Remaining lifetime of a live buff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuffDuration {
    Turns(u32),
    Permanent,
}

impl BuffDuration {
    /// Combines an existing duration with a reapplied one: the longer wins
    /// and permanence dominates.
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Permanent, _) | (_, Self::Permanent) => Self::Permanent,
            (Self::Turns(a), Self::Turns(b)) => Self::Turns(a.max(b)),
        }
    }

    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent)
    }
}

/// A buff instance. Name, description and modifier are copied from the
/// definition when the buff is first applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    pub id: BuffId,
    pub name: String,
    pub description: String,
    pub modifier: BuffModifier,
    pub stacks: i32,
    pub duration: BuffDuration,
}

impl Buff {
    fn is_spent(&self) -> bool {
        self.stacks <= 0 || self.duration == BuffDuration::Turns(0)
    }
}

/// Ordered set of live buffs with at most one entry per buff id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BuffLedger(Vec<Buff>);

impl BuffLedger {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Merges stacks of `definition` into the ledger.
    ///
    /// Reapplying adds stacks and keeps the longer duration. The buff is
    /// removed as soon as its stacks reach zero or below. Returns the buff as
    /// it stands afterwards, or `None` when it was removed.
    pub fn apply(
        &mut self,
        definition: &BuffDefinition,
        stacks: i32,
        duration: BuffDuration,
    ) -> Option<&Buff> {
        let index = match self.0.iter().position(|buff| buff.id == definition.id) {
            Some(index) => {
                let existing = &mut self.0[index];
                existing.stacks += stacks;
                existing.duration = existing.duration.merge(duration);
                index
            }
            None => {
                self.0.push(Buff {
                    id: definition.id.clone(),
                    name: definition.name.clone(),
                    description: definition.description.clone(),
                    modifier: definition.modifier,
                    stacks,
                    duration,
                });
                self.0.len() - 1
            }
        };

        if self.0[index].is_spent() {
            self.0.remove(index);
            return None;
        }
        self.0.get(index)
    }

    /// Decrements every non-permanent duration and drops spent buffs.
    /// Returns the ids of the buffs that were removed.
    pub fn tick(&mut self) -> Vec<BuffId> {
        for buff in &mut self.0 {
            if let BuffDuration::Turns(turns) = &mut buff.duration {
                *turns = turns.saturating_sub(1);
            }
        }

        let mut expired = Vec::new();
        self.0.retain(|buff| {
            if buff.is_spent() {
                expired.push(buff.id.clone());
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn get(&self, id: &BuffId) -> Option<&Buff> {
        self.0.iter().find(|buff| &buff.id == id)
    }

    /// Total stacks of every strength-type buff.
    pub fn strength(&self) -> i32 {
        self.0
            .iter()
            .filter(|buff| buff.modifier == BuffModifier::Strength)
            .map(|buff| buff.stacks)
            .sum()
    }

    /// Whether a vulnerable-type buff with positive stacks is present.
    pub fn is_vulnerable(&self) -> bool {
        self.0
            .iter()
            .any(|buff| buff.modifier == BuffModifier::Vulnerable && buff.stacks > 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Buff> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
