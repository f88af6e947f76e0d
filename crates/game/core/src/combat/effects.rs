//! Card effect resolution.

use crate::config::GameConfig;
use crate::env::{CardDefinition, CardEffect, GameEnv, IntegrityError};
use crate::state::{BuffDuration, GameState, Side};

use super::CombatEvent;

/// Final damage of an attack from `caster` against `target`.
///
/// Strength applies only when the attack is not self-inflicted; vulnerable
/// multiplies the sum by 1.5, rounding down. Never negative.
pub fn attack_damage(state: &GameState, caster: Side, target: Side, base: i32) -> i32 {
    let mut amount = base;
    if caster != target {
        amount += state.combatant(caster).buffs.strength();
    }
    if state.combatant(target).buffs.is_vulnerable() {
        amount = amount * GameConfig::VULNERABLE_NUMERATOR / GameConfig::VULNERABLE_DENOMINATOR;
    }
    amount.max(0)
}

/// Applies every effect of `card` in declaration order.
///
/// Missing buff definitions and unknown effect kinds are logged and skipped;
/// they never abort the remaining effects.
pub fn resolve_card(
    state: &mut GameState,
    env: &GameEnv<'_>,
    card: &CardDefinition,
    caster: Side,
    target: Side,
    events: &mut Vec<CombatEvent>,
) {
    for effect in &card.effects {
        match effect {
            CardEffect::Damage { value } => {
                let amount = attack_damage(state, caster, target, *value);
                let report = state.combatant_mut(target).take_damage(amount);
                events.push(CombatEvent::DamageDealt {
                    source: caster,
                    target,
                    amount,
                    blocked: report.blocked,
                    hp_lost: report.hp_lost,
                });
            }
            CardEffect::Block { value } => {
                let amount = (*value).max(0);
                state.combatant_mut(caster).gain_block(amount);
                events.push(CombatEvent::BlockGained {
                    side: caster,
                    amount,
                });
            }
            CardEffect::ApplyBuff { buff, stacks } => {
                let definition = match env.buff(buff) {
                    Ok(definition) => definition,
                    Err(error) => {
                        tracing::warn!(
                            target: "game_core::combat",
                            card = %card.id,
                            %error,
                            "skipping buff effect"
                        );
                        continue;
                    }
                };
                let duration = if definition.permanent {
                    BuffDuration::Permanent
                } else {
                    BuffDuration::Turns(GameConfig::DEFAULT_BUFF_DURATION)
                };
                let applied = state
                    .combatant_mut(target)
                    .buffs
                    .apply(definition, *stacks, duration)
                    .map(|buff| (buff.stacks, buff.duration));
                match applied {
                    Some((stacks, duration)) => events.push(CombatEvent::BuffApplied {
                        side: target,
                        buff: definition.id.clone(),
                        stacks,
                        duration,
                    }),
                    None => events.push(CombatEvent::BuffRemoved {
                        side: target,
                        buff: definition.id.clone(),
                    }),
                }
            }
            CardEffect::DrawCard { value } => {
                if caster != Side::Player {
                    tracing::debug!(target: "game_core::combat", card = %card.id, "draw ignored for enemy caster");
                    continue;
                }
                for _ in 0..*value {
                    state.player.draw(&mut state.rng, env, events);
                }
            }
            CardEffect::GainEnergy { value } => {
                if caster != Side::Player {
                    tracing::debug!(target: "game_core::combat", card = %card.id, "energy ignored for enemy caster");
                    continue;
                }
                let player = &mut state.player;
                let before = player.energy;
                player.energy = (player.energy + *value).min(player.max_energy);
                events.push(CombatEvent::EnergyGained {
                    amount: player.energy - before,
                });
            }
            CardEffect::Unknown { kind } => {
                let error = IntegrityError::UnknownEffect {
                    card: card.id.clone(),
                    kind: kind.clone(),
                };
                tracing::warn!(target: "game_core::combat", %error, "skipping effect");
            }
        }
    }
}
