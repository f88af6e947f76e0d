use crate::env::{BuffId, CardId, EnemyId};
use crate::state::{BuffDuration, Phase, Side};

/// Something that happened while resolving an action, in order.
///
/// Events describe the transition for presentation layers (animation pacing,
/// combat logs). They never drive state: replaying an action reproduces them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum CombatEvent {
    GameStarted { floor: u32, enemy: EnemyId },
    BattleStarted { floor: u32, enemy: EnemyId },
    CardPlayed { side: Side, card: CardId, cost: i32 },
    DamageDealt {
        source: Side,
        target: Side,
        amount: i32,
        blocked: i32,
        hp_lost: i32,
    },
    BlockGained { side: Side, amount: i32 },
    BuffApplied {
        side: Side,
        buff: BuffId,
        stacks: i32,
        duration: BuffDuration,
    },
    BuffRemoved { side: Side, buff: BuffId },
    EnergyGained { amount: i32 },
    MomentumGained { amount: i32 },
    CardDrawn { card: CardId },
    /// A staged card pushed out of the slot by another draw.
    CardDisplaced { card: CardId },
    DeckShuffled { cards: usize },
    DeckExhausted,
    TurnEnded { side: Side },
    TurnStarted { side: Side },
    PhaseChanged { from: Phase, to: Phase },
    RewardChosen { card: Option<CardId> },
}
