//! Draw pile, discard pile and the staged card slot.

use crate::combat::CombatEvent;
use crate::env::{CardId, GameEnv, IntegrityError};

use super::{PlayerState, RngState};

/// What a single draw did to the staged slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn(CardId),
    /// Both piles were empty; the slot stays empty.
    Exhausted,
    /// The top card had no catalog definition and was dropped.
    Missing(CardId),
}

impl PlayerState {
    /// Stages the next card.
    ///
    /// An empty draw pile is refilled from the shuffled discard pile first,
    /// granting the shuffle momentum bonus. A card already in the slot is
    /// moved to the discard pile before the new one is staged.
    pub fn draw(
        &mut self,
        rng: &mut RngState,
        env: &GameEnv<'_>,
        events: &mut Vec<CombatEvent>,
    ) -> DrawOutcome {
        if let Some(previous) = self.next_card.take() {
            events.push(CombatEvent::CardDisplaced {
                card: previous.clone(),
            });
            self.discard_pile.push(previous);
        }

        if self.draw_pile.is_empty() && !self.discard_pile.is_empty() {
            self.draw_pile.append(&mut self.discard_pile);
            rng.shuffle(env.rng(), &mut self.draw_pile);

            let bonus = env.config().momentum_per_shuffle;
            self.combatant.momentum += bonus;
            events.push(CombatEvent::DeckShuffled {
                cards: self.draw_pile.len(),
            });
            events.push(CombatEvent::MomentumGained { amount: bonus });
            tracing::debug!(
                target: "game_core::deck",
                cards = self.draw_pile.len(),
                momentum = self.combatant.momentum,
                "discard pile shuffled into draw pile"
            );
        }

        let Some(card) = self.draw_pile.pop() else {
            tracing::debug!(target: "game_core::deck", "no cards left to draw");
            events.push(CombatEvent::DeckExhausted);
            return DrawOutcome::Exhausted;
        };

        if let Err(error) = env.card(&card) {
            tracing::warn!(target: "game_core::deck", %error, "dropping undrawable card");
            return DrawOutcome::Missing(card);
        }

        events.push(CombatEvent::CardDrawn { card: card.clone() });
        self.next_card = Some(card.clone());
        DrawOutcome::Drawn(card)
    }

    /// Deals a new fight: the draw pile becomes a shuffled copy of the whole
    /// collection and the discard pile and slot are cleared.
    pub fn reset_deck(&mut self, rng: &mut RngState, env: &GameEnv<'_>) {
        self.draw_pile = self.all_cards.clone();
        self.discard_pile.clear();
        self.next_card = None;
        rng.shuffle(env.rng(), &mut self.draw_pile);
    }

    /// Catalog check for the staged card, used before paying its cost.
    pub fn staged_card<'a>(
        &self,
        env: &GameEnv<'a>,
    ) -> Option<Result<&'a crate::env::CardDefinition, IntegrityError>> {
        self.next_card.as_ref().map(|id| env.card(id))
    }
}
