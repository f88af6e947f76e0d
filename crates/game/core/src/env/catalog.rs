//! Static card, buff and enemy definitions.

use std::collections::HashMap;

use super::{BuffDefinition, BuffId, CardDefinition, CardId, EnemyDefinition, EnemyId};

/// Read-only lookup of everything a session can reference by id.
///
/// Implementations are loaded once and shared by every session.
pub trait CatalogOracle: Send + Sync {
    fn card(&self, id: &CardId) -> Option<&CardDefinition>;

    fn buff(&self, id: &BuffId) -> Option<&BuffDefinition>;

    fn enemy(&self, id: &EnemyId) -> Option<&EnemyDefinition>;

    /// All cards in declaration order.
    fn cards(&self) -> &[CardDefinition];

    /// All buffs in declaration order.
    fn buffs(&self) -> &[BuffDefinition];

    /// All enemies in declaration order. Floor selection cycles over this list.
    fn enemies(&self) -> &[EnemyDefinition];

    /// Enemy fought on `floor` (1-based), cycling through the enemy list.
    fn enemy_for_floor(&self, floor: u32) -> Option<&EnemyDefinition> {
        let enemies = self.enemies();
        if enemies.is_empty() {
            return None;
        }
        let index = (floor.max(1) - 1) as usize % enemies.len();
        enemies.get(index)
    }
}

/// Map-backed [`CatalogOracle`] preserving declaration order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<CardDefinition>,
    buffs: Vec<BuffDefinition>,
    enemies: Vec<EnemyDefinition>,
    card_index: HashMap<CardId, usize>,
    buff_index: HashMap<BuffId, usize>,
    enemy_index: HashMap<EnemyId, usize>,
}

impl Catalog {
    /// Builds a catalog. Later duplicates replace earlier ones in lookups;
    /// content loaders reject duplicates before reaching this point.
    pub fn new(
        cards: Vec<CardDefinition>,
        buffs: Vec<BuffDefinition>,
        enemies: Vec<EnemyDefinition>,
    ) -> Self {
        let card_index = cards
            .iter()
            .enumerate()
            .map(|(index, card)| (card.id.clone(), index))
            .collect();
        let buff_index = buffs
            .iter()
            .enumerate()
            .map(|(index, buff)| (buff.id.clone(), index))
            .collect();
        let enemy_index = enemies
            .iter()
            .enumerate()
            .map(|(index, enemy)| (enemy.id.clone(), index))
            .collect();

        Self {
            cards,
            buffs,
            enemies,
            card_index,
            buff_index,
            enemy_index,
        }
    }
}

impl CatalogOracle for Catalog {
    fn card(&self, id: &CardId) -> Option<&CardDefinition> {
        self.card_index.get(id).and_then(|&i| self.cards.get(i))
    }

    fn buff(&self, id: &BuffId) -> Option<&BuffDefinition> {
        self.buff_index.get(id).and_then(|&i| self.buffs.get(i))
    }

    fn enemy(&self, id: &EnemyId) -> Option<&EnemyDefinition> {
        self.enemy_index.get(id).and_then(|&i| self.enemies.get(i))
    }

    fn cards(&self) -> &[CardDefinition] {
        &self.cards
    }

    fn buffs(&self) -> &[BuffDefinition] {
        &self.buffs
    }

    fn enemies(&self) -> &[EnemyDefinition] {
        &self.enemies
    }
}
