use std::sync::Arc;

use axum::Router;
use axum::routing::get;

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod services;
pub mod ws;

use config::ServerConfig;
use services::game_room::GameRoom;

#[derive(Clone)]
pub struct AppState {
    pub room: Arc<GameRoom>,
}

pub fn build_router(config: &ServerConfig) -> (Router, AppState) {
    let state = AppState {
        room: Arc::new(GameRoom::new(config.board_size)),
    };

    let app = Router::new()
        .nest("/api", routes::api::router())
        .route("/up", get(routes::health::health_check))
        .with_state(state.clone());

    (app, state)
}
