//! Combat resolution system.
//!
//! Effects are applied one at a time, in the order a card declares them, to
//! the combatants selected by [`crate::state::Side`]. Every applied effect is
//! reported as a [`CombatEvent`].
//!
//! # Core Functions
//!
//! - `resolve_card`: applies every effect of a card
//! - `attack_damage`: strength and vulnerable modifiers for one hit

pub mod effects;
mod events;

pub use effects::{attack_damage, resolve_card};
pub use events::CombatEvent;
