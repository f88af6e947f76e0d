//! Inbound action requests.
//!
//! Requests arrive as `{"type": "...", "payload": {...}}`. Decoding happens
//! before anything reaches a session, so malformed input never touches game
//! state.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use game_core::{ActionKind, PlayerAction};

/// Rejections produced while decoding a request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request: {0}")]
    Malformed(String),

    #[error("Invalid action type: {0}")]
    UnknownAction(String),

    #[error("Missing or invalid cardIndex number for action 'selectReward'.")]
    InvalidCardIndex,
}

/// Wire form of a player action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl ActionRequest {
    pub fn new(kind: ActionKind, payload: Value) -> Self {
        Self {
            kind: kind.to_string(),
            payload,
        }
    }

    /// Parses a JSON request line.
    pub fn from_json(line: &str) -> Result<Self, RequestError> {
        serde_json::from_str(line).map_err(|e| RequestError::Malformed(e.to_string()))
    }

    /// Converts the request into an engine action.
    ///
    /// `new_game_seed` is only consulted for `newGame`, which starts a fresh
    /// roll stream.
    pub fn into_action(
        self,
        new_game_seed: impl FnOnce() -> u64,
    ) -> Result<PlayerAction, RequestError> {
        let kind: ActionKind = self
            .kind
            .parse()
            .map_err(|_| RequestError::UnknownAction(self.kind.clone()))?;

        Ok(match kind {
            ActionKind::StartBattle => PlayerAction::start_battle(),
            ActionKind::AutoPlayCard => PlayerAction::auto_play_card(),
            ActionKind::SelectReward => PlayerAction::select_reward(card_index(&self.payload)?),
            ActionKind::NewGame => PlayerAction::new_game(new_game_seed()),
        })
    }
}

/// `cardIndex` as an integer, or a string holding one.
fn card_index(payload: &Value) -> Result<i32, RequestError> {
    let raw = payload
        .get("cardIndex")
        .ok_or(RequestError::InvalidCardIndex)?;
    let index = match raw {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    index
        .and_then(|index| i32::try_from(index).ok())
        .ok_or(RequestError::InvalidCardIndex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(line: &str) -> Result<PlayerAction, RequestError> {
        ActionRequest::from_json(line)?.into_action(|| 7)
    }

    #[test]
    fn decodes_every_action_type() {
        assert_eq!(
            decode(r#"{"type":"startBattle"}"#).unwrap(),
            PlayerAction::start_battle()
        );
        assert_eq!(
            decode(r#"{"type":"autoPlayCard","payload":{}}"#).unwrap(),
            PlayerAction::auto_play_card()
        );
        assert_eq!(
            decode(r#"{"type":"selectReward","payload":{"cardIndex":2}}"#).unwrap(),
            PlayerAction::select_reward(2)
        );
        assert_eq!(
            decode(r#"{"type":"newGame"}"#).unwrap(),
            PlayerAction::new_game(7)
        );
    }

    #[test]
    fn card_index_accepts_numeric_strings() {
        assert_eq!(
            decode(r#"{"type":"selectReward","payload":{"cardIndex":"-1"}}"#).unwrap(),
            PlayerAction::select_reward(-1)
        );
    }

    #[test]
    fn card_index_rejects_garbage() {
        for payload in [
            json!({}),
            json!({"cardIndex": "two"}),
            json!({"cardIndex": 1.5}),
            json!({"cardIndex": null}),
        ] {
            let request = ActionRequest::new(ActionKind::SelectReward, payload);
            assert!(matches!(
                request.into_action(|| 0),
                Err(RequestError::InvalidCardIndex)
            ));
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = decode(r#"{"type":"endTurn"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid action type: endTurn");
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(decode("{type:"), Err(RequestError::Malformed(_))));
        assert!(matches!(
            decode(r#"{"payload":{}}"#),
            Err(RequestError::Malformed(_))
        ));
    }

    #[test]
    fn seed_is_only_drawn_for_new_game() {
        let request = ActionRequest::new(ActionKind::StartBattle, Value::Null);
        let action = request
            .into_action(|| panic!("seed requested for startBattle"))
            .unwrap();
        assert_eq!(action, PlayerAction::start_battle());
    }
}
