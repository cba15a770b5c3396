//! WebSocket transport for live browse sessions.
//!
//! One socket carries one [`BrowseSession`]. Incoming text frames are parsed
//! into [`ClientMessage`]s; everything the session emits is written back as
//! JSON text frames.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{
    stream::{SplitSink, SplitStream},
    SinkExt, StreamExt,
};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::live::{BrowseSession, ClientMessage, ServerMessage, SessionStart};

use super::{handlers::HomeParams, AppState};

/// Queue depth between the socket and the session task
const CHANNEL_CAPACITY: usize = 32;

/// Upgrade handler for `GET /ws/browse`. The query string mirrors the home
/// page the tab was rendered with.
pub async fn browse_socket(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(params): Query<HomeParams>,
) -> Response {
    let start = SessionStart {
        page: params.page.unwrap_or(1),
        search: params.search.unwrap_or_default(),
        selected: params.selected,
    };
    ws.on_upgrade(move |socket| handle_socket(socket, state, start))
}

async fn handle_socket(socket: WebSocket, state: AppState, start: SessionStart) {
    debug!(page = start.page, search = %start.search, "Live session connected");

    let (ws_sink, ws_stream) = socket.split();
    let (inbox_tx, inbox_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (outbox_tx, outbox_rx) = mpsc::channel(CHANNEL_CAPACITY);

    let session = BrowseSession::new(state.backend.clone(), state.session_settings(), start);
    let session_handle = tokio::spawn(session.run(inbox_rx, outbox_tx));
    let outgoing_handle = tokio::spawn(forward_outgoing(ws_sink, outbox_rx));

    process_incoming(ws_stream, inbox_tx).await;

    // Dropping the inbox sender ends the session loop
    if let Err(e) = session_handle.await {
        error!(error = %e, "Live session task failed");
    }
    outgoing_handle.abort();
    debug!("Live session disconnected");
}

/// Forward session output to the WebSocket
async fn forward_outgoing(
    mut ws_sink: SplitSink<WebSocket, Message>,
    mut outbox_rx: mpsc::Receiver<ServerMessage>,
) {
    while let Some(msg) = outbox_rx.recv().await {
        match serde_json::to_string(&msg) {
            Ok(json) => {
                if ws_sink.send(Message::Text(json)).await.is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to serialize live session message: {}", e);
            }
        }
    }
}

/// Feed client frames to the session until the socket closes
async fn process_incoming(
    mut ws_stream: SplitStream<WebSocket>,
    inbox_tx: mpsc::Sender<ClientMessage>,
) {
    while let Some(result) = ws_stream.next().await {
        match result {
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(msg) => {
                    if inbox_tx.send(msg).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    debug!("Ignoring malformed live session message: {}", e);
                }
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                debug!("WebSocket error: {}", e);
                break;
            }
        }
    }
}
