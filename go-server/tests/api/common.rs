#![allow(dead_code)]

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use go_server::AppState;
use go_server::config::ServerConfig;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite;

/// A running server on an ephemeral port.
pub struct TestServer {
    pub addr: String,
    pub state: AppState,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(ServerConfig::default()).await
    }

    pub async fn start_with(config: ServerConfig) -> Self {
        let (router, state) = go_server::build_router(&config);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        TestServer {
            addr,
            state,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    /// POST /api/join and return the raw response.
    pub async fn join(&self, identity: &str) -> reqwest::Response {
        self.post("/api/join", json!({"identity": identity})).await
    }

    /// Join and return the assigned color letter, failing the test on refusal.
    pub async fn join_color(&self, identity: &str) -> String {
        let resp = self.join(identity).await;
        assert!(
            resp.status().is_success(),
            "join failed: {}",
            resp.status()
        );
        let body: Value = resp.json().await.unwrap();
        body["color"].as_str().expect("color missing").to_string()
    }

    pub async fn play(&self, x: i64, y: i64, color: &str) -> Value {
        let resp = self
            .post("/api/move", json!({"x": x, "y": y, "color": color}))
            .await;
        assert!(resp.status().is_success(), "move failed: {}", resp.status());
        resp.json().await.unwrap()
    }

    /// Play a move that must be accepted.
    pub async fn play_ok(&self, x: i64, y: i64, color: &str) {
        let reply = self.play(x, y, color).await;
        assert_eq!(reply["accepted"], true, "move ({x},{y}) by {color}: {reply}");
    }

    pub async fn pass(&self, color: &str) -> Value {
        let resp = self.post("/api/pass", json!({"color": color})).await;
        assert!(resp.status().is_success(), "pass failed: {}", resp.status());
        resp.json().await.unwrap()
    }

    pub async fn state(&self) -> Value {
        self.client
            .get(self.url("/api/state"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    /// Open the event stream and consume its initial `sync` frame.
    pub async fn subscribe(&self) -> (WsClient, Value) {
        let url = format!("ws://{}/api/subscribe", self.addr);
        let (stream, _response) = tokio_tungstenite::connect_async(url)
            .await
            .expect("WebSocket connect failed");
        let (sink, stream) = stream.split();
        let mut client = WsClient { sink, stream };
        let initial = client.recv().await;
        assert_eq!(initial["kind"], "sync");
        (client, initial)
    }

    /// Wait until the hub holds exactly `n` subscribers.
    pub async fn wait_for_subscribers(&self, n: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while self.state.room.subscriber_count() != n {
            assert!(
                tokio::time::Instant::now() < deadline,
                "expected {n} subscribers, have {}",
                self.state.room.subscriber_count()
            );
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// A WebSocket client wrapping a split tokio-tungstenite connection.
pub struct WsClient {
    sink: futures_util::stream::SplitSink<WsStream, tungstenite::Message>,
    stream: futures_util::stream::SplitStream<WsStream>,
}

impl WsClient {
    /// Receive the next text message as JSON (5s timeout).
    pub async fn recv(&mut self) -> Value {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    pub async fn recv_timeout(&mut self, timeout: Duration) -> Value {
        let msg = tokio::time::timeout(timeout, self.stream.next())
            .await
            .expect("WS recv timed out")
            .expect("WS stream ended")
            .expect("WS recv error");

        match msg {
            tungstenite::Message::Text(text) => {
                serde_json::from_str(&text).expect("WS message not valid JSON")
            }
            other => panic!("Expected text WS message, got: {other:?}"),
        }
    }

    /// Assert nothing arrives within a short window.
    pub async fn expect_silence(&mut self) {
        let next = tokio::time::timeout(Duration::from_millis(200), self.stream.next()).await;
        assert!(next.is_err(), "unexpected message: {next:?}");
    }

    pub async fn close(&mut self) {
        let _ = self.sink.send(tungstenite::Message::Close(None)).await;
    }
}
