//! Messages the host pushes into a window context.
//!
//! Wire format is one JSON object per message, tagged by `kind`:
//!
//! ```json
//! {"kind":"initialize","payload":{"id":"main","bounds":{"left":0,"top":0,"width":800,"height":600}}}
//! {"kind":"update","payload":{"bounds":{"left":0,"top":0,"width":800,"height":600},"maximized":true}}
//! {"kind":"closed"}
//! ```

use appwin_common::ProtocolError;
use serde::{Deserialize, Serialize};

use crate::snapshot::{WindowParams, WindowState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum HostMessage {
    Initialize(WindowParams),
    Update(WindowState),
    Closed,
}

impl HostMessage {
    pub const KINDS: [&'static str; 3] = ["initialize", "update", "closed"];

    /// Parse one message. Unknown kinds and shape errors are reported
    /// separately so callers can tell a newer host from a broken one.
    pub fn from_json(raw: &str) -> Result<Self, ProtocolError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| ProtocolError::Malformed(e.to_string()))?;

        let kind = value
            .get("kind")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| ProtocolError::Malformed("missing \"kind\" field".into()))?;

        if !Self::KINDS.iter().any(|k| *k == kind) {
            return Err(ProtocolError::UnknownKind(kind.to_string()));
        }

        serde_json::from_value(value).map_err(|e| ProtocolError::Malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(|e| ProtocolError::Malformed(e.to_string()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            HostMessage::Initialize(_) => "initialize",
            HostMessage::Update(_) => "update",
            HostMessage::Closed => "closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appwin_common::{Bounds, WindowId};

    #[test]
    fn parse_initialize() {
        let raw = r#"{"kind":"initialize","payload":{"id":"main",
            "bounds":{"left":0,"top":0,"width":800,"height":600},"fullscreen":true}}"#;
        let msg = HostMessage::from_json(raw).unwrap();
        let HostMessage::Initialize(params) = msg else {
            panic!("expected an initialize message");
        };
        assert_eq!(params.id, Some(WindowId::new("main")));
        assert_eq!(params.bounds, Bounds::new(0, 0, 800, 600));
        assert!(params.fullscreen);
        assert!(!params.maximized);
    }

    #[test]
    fn parse_update() {
        let raw = r#"{"kind":"update","payload":{
            "bounds":{"left":4,"top":5,"width":6,"height":7},"minimized":true}}"#;
        assert_eq!(
            HostMessage::from_json(raw).unwrap(),
            HostMessage::Update(WindowState::new(Bounds::new(4, 5, 6, 7)).minimized(true))
        );
    }

    #[test]
    fn parse_closed_without_payload() {
        let msg = HostMessage::from_json(r#"{"kind":"closed"}"#).unwrap();
        assert_eq!(msg, HostMessage::Closed);
        assert_eq!(msg.kind(), "closed");
    }

    #[test]
    fn unknown_kind_is_distinguished() {
        let err = HostMessage::from_json(r#"{"kind":"focus"}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownKind(ref k) if k == "focus"));
    }

    #[test]
    fn missing_kind_is_malformed() {
        let err = HostMessage::from_json(r#"{"payload":{}}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed(_)));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = HostMessage::from_json("{not json").unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed(_)));
    }

    #[test]
    fn update_missing_bounds_is_malformed() {
        let err = HostMessage::from_json(r#"{"kind":"update","payload":{"maximized":true}}"#)
            .unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed(_)));
    }

    #[test]
    fn to_json_keeps_the_message_kind() {
        let msg = HostMessage::Update(WindowState::new(Bounds::new(1, 1, 2, 2)).fullscreen(true));
        let json = msg.to_json().unwrap();
        assert!(json.contains("\"kind\":\"update\""));
        assert!(!json.contains("closed"));
        assert_eq!(HostMessage::from_json(&json).unwrap(), msg);
    }

    #[test]
    fn closed_serializes_without_payload() {
        assert_eq!(HostMessage::Closed.to_json().unwrap(), r#"{"kind":"closed"}"#);
    }
}
