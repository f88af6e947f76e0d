//! Messages a session pushes to its subscribers.

use serde::{Deserialize, Serialize};

use game_core::CombatEvent;

use super::snapshot::{CatalogSnapshot, StateSnapshot};

/// Outbound session message.
///
/// Serialized as `{"type": "...", "payload": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum SessionEvent {
    /// Sent once per connection.
    Init {
        game_state: Box<StateSnapshot>,
        catalog: Box<CatalogSnapshot>,
    },
    /// Sent after every accepted action, once the enemy turn (if any) has
    /// resolved.
    StateUpdate {
        game_state: Box<StateSnapshot>,
        events: Vec<CombatEvent>,
    },
}

impl SessionEvent {
    pub fn game_state(&self) -> &StateSnapshot {
        match self {
            Self::Init { game_state, .. } | Self::StateUpdate { game_state, .. } => game_state,
        }
    }
}

/// Outcome of one action request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionReply {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
