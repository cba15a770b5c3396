//! Live session message types.
//!
//! Both directions are JSON objects with a `type` field.

use serde::{Deserialize, Serialize};

/// Client -> Server: user interactions on the home screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Current content of the search box, sent on every keystroke
    Search { text: String },
    /// A pagination control was clicked
    Page { page: u32 },
    /// A movie or recommendation card was clicked
    #[serde(rename_all = "camelCase")]
    Select { movie_id: u64 },
    /// Drop the current selection
    Clear,
}

/// Server -> Client: replacement markup for one of the live containers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    /// New content for the movie results container
    Movies { html: String },
    /// New content for the recommendations container
    Recommendations { html: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_parsing() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type": "search", "text": "alien"}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Search {
                text: "alien".to_string()
            }
        );

        let msg: ClientMessage = serde_json::from_str(r#"{"type": "select", "movieId": 1214}"#).unwrap();
        assert_eq!(msg, ClientMessage::Select { movie_id: 1214 });

        let msg: ClientMessage = serde_json::from_str(r#"{"type": "page", "page": 3}"#).unwrap();
        assert_eq!(msg, ClientMessage::Page { page: 3 });

        let msg: ClientMessage = serde_json::from_str(r#"{"type": "clear"}"#).unwrap();
        assert_eq!(msg, ClientMessage::Clear);

        assert!(serde_json::from_str::<ClientMessage>(r#"{"type": "rate", "value": 5}"#).is_err());
    }

    #[test]
    fn test_server_message_format() {
        let json = serde_json::to_value(ServerMessage::Movies {
            html: "<p>x</p>".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "movies");
        assert_eq!(json["html"], "<p>x</p>");
    }
}
