//! JSON line protocol spoken over stdin/stdout.
//!
//! Every inbound line is an action request optionally addressed to a player:
//! `{"type": "autoPlayCard", "payload": {}, "playerId": "alice"}`. The extra
//! `connect` type subscribes the player and replays the `init` message.
//!
//! Every outbound line carries the player id next to a tagged message:
//! `{"playerId": "alice", "type": "stateUpdate", "payload": {...}}`.

use serde::Deserialize;
use serde_json::{Value, json};

use runtime::{ActionReply, ActionRequest, RequestError, SessionEvent};

const CONNECT: &str = "connect";

/// One decoded stdin line.
#[derive(Clone, Debug, PartialEq)]
pub struct Inbound {
    pub player_id: Option<String>,
    pub command: InboundCommand,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InboundCommand {
    Connect,
    Action(ActionRequest),
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "playerId", default)]
    player_id: Option<String>,
    #[serde(flatten)]
    request: ActionRequest,
}

impl Inbound {
    pub fn parse(line: &str) -> Result<Self, RequestError> {
        let envelope: Envelope =
            serde_json::from_str(line).map_err(|e| RequestError::Malformed(e.to_string()))?;

        let player_id = envelope.player_id.filter(|id| !id.trim().is_empty());
        let command = if envelope.request.kind == CONNECT {
            InboundCommand::Connect
        } else {
            InboundCommand::Action(envelope.request)
        };
        Ok(Self { player_id, command })
    }
}

/// Message written to stdout.
#[derive(Clone, Debug)]
pub enum Outbound {
    Event(SessionEvent),
    Reply(ActionReply),
    Error(String),
}

impl Outbound {
    /// Encodes the message as a single JSON line (without the newline).
    pub fn encode(&self, player_id: &str) -> serde_json::Result<String> {
        let mut value = match self {
            Self::Event(event) => serde_json::to_value(event)?,
            Self::Reply(reply) => json!({ "type": "reply", "payload": reply }),
            Self::Error(message) => json!({ "type": "error", "payload": { "message": message } }),
        };
        if let Value::Object(fields) = &mut value {
            fields.insert("playerId".into(), Value::String(player_id.to_owned()));
        }
        serde_json::to_string(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ActionKind;

    #[test]
    fn parses_addressed_action() {
        let inbound = Inbound::parse(
            r#"{"type":"selectReward","payload":{"cardIndex":1},"playerId":"alice"}"#,
        )
        .unwrap();

        assert_eq!(inbound.player_id.as_deref(), Some("alice"));
        assert_eq!(
            inbound.command,
            InboundCommand::Action(ActionRequest::new(
                ActionKind::SelectReward,
                json!({"cardIndex": 1})
            ))
        );
    }

    #[test]
    fn player_id_is_optional() {
        let inbound = Inbound::parse(r#"{"type":"startBattle"}"#).unwrap();
        assert_eq!(inbound.player_id, None);

        let inbound = Inbound::parse(r#"{"type":"startBattle","playerId":"  "}"#).unwrap();
        assert_eq!(inbound.player_id, None);
    }

    #[test]
    fn connect_is_a_protocol_command() {
        let inbound = Inbound::parse(r#"{"type":"connect","playerId":"bob"}"#).unwrap();
        assert_eq!(inbound.command, InboundCommand::Connect);
    }

    #[test]
    fn unknown_types_pass_through_for_the_runtime_to_reject() {
        let inbound = Inbound::parse(r#"{"type":"endTurn"}"#).unwrap();
        assert!(matches!(inbound.command, InboundCommand::Action(ref r) if r.kind == "endTurn"));
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            Inbound::parse("not json"),
            Err(RequestError::Malformed(_))
        ));
        assert!(matches!(
            Inbound::parse(r#"{"playerId":"alice"}"#),
            Err(RequestError::Malformed(_))
        ));
    }

    #[test]
    fn reply_line_carries_player_id() {
        let line = Outbound::Reply(ActionReply::rejected("Invalid card index."))
            .encode("alice")
            .unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["playerId"], "alice");
        assert_eq!(value["type"], "reply");
        assert_eq!(value["payload"]["success"], false);
        assert_eq!(value["payload"]["message"], "Invalid card index.");
    }

    #[test]
    fn accepted_reply_omits_message() {
        let line = Outbound::Reply(ActionReply::accepted()).encode("p").unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["payload"], json!({"success": true}));
    }

    #[test]
    fn error_line_has_message_payload() {
        let line = Outbound::Error("Invalid action type: endTurn".into())
            .encode("p")
            .unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["type"], "error");
        assert_eq!(value["payload"]["message"], "Invalid action type: endTurn");
        assert!(!line.contains('\n'));
    }
}
