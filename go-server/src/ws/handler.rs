use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use go_engine::GameState;
use serde::Serialize;

use crate::AppState;

/// WebSocket upgrade handler: GET /api/subscribe
pub async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut ws_sink, mut ws_stream) = socket.split();

    let (initial, mut subscription) = state.room.subscribe();
    let subscriber_id = subscription.id();

    // Forward snapshots from the subscription to the WebSocket. The
    // subscription lives inside this task, so aborting the task deregisters it.
    let mut send_task = tokio::spawn(async move {
        if send_state(&mut ws_sink, &initial).await.is_err() {
            return;
        }
        while let Some(event) = subscription.recv().await {
            if send_state(&mut ws_sink, &event).await.is_err() {
                break;
            }
        }
    });

    // Listeners have nothing to say; drain until the client goes away.
    let recv_task = async {
        while let Some(Ok(msg)) = ws_stream.next().await {
            match msg {
                Message::Close(_) => break,
                Message::Text(text) => {
                    let text_str: &str = &text;
                    tracing::warn!("Subscriber {subscriber_id} sent unexpected frame: {text_str}");
                }
                _ => {}
            }
        }
    };

    tokio::select! {
        _ = &mut send_task => {}
        _ = recv_task => {}
    }

    send_task.abort();

    tracing::debug!("Subscriber {subscriber_id} disconnected");
}

async fn send_state(
    sink: &mut SplitSink<WebSocket, Message>,
    state: &GameState,
) -> Result<(), axum::Error> {
    let frame = encode_frame(state).inspect_err(|e| {
        tracing::error!("Failed to serialize state #{}: {e}", state.seq);
    })?;
    sink.send(frame).await
}

fn encode_frame<T: Serialize>(value: &T) -> Result<Message, axum::Error> {
    let text = serde_json::to_string(value).map_err(axum::Error::new)?;
    Ok(Message::Text(text.into()))
}
