use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use go_engine::{GameState, Stone};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::{ApiError, AppError};
use crate::extract::ApiJson;
use crate::ws;

// -- Response types --

#[derive(Serialize)]
struct JoinResponse {
    color: Stone,
}

#[derive(Serialize)]
struct MoveResponse {
    accepted: bool,
    reason: String,
}

#[derive(Serialize)]
struct PassResponse {
    accepted: bool,
}

// -- Request types --

#[derive(Deserialize)]
struct JoinRequest {
    identity: String,
}

#[derive(Deserialize)]
struct MoveRequest {
    x: i64,
    y: i64,
    color: Stone,
}

#[derive(Deserialize)]
struct PassRequest {
    color: Stone,
}

// -- Router --

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/join", post(join))
        .route("/move", post(play_move))
        .route("/pass", post(pass_turn))
        .route("/state", get(current_state))
        .route("/subscribe", get(ws::handler::ws_upgrade))
}

// -- Handlers --

async fn join(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<JoinRequest>,
) -> Result<Json<JoinResponse>, ApiError> {
    let identity = req.identity.trim();
    if identity.is_empty() {
        return Err(AppError::BadRequest("identity must not be empty".to_string()).into());
    }

    let color = state.room.join(identity).ok_or(AppError::SeatUnavailable)?;
    Ok(Json(JoinResponse { color }))
}

/// Rejections are normal replies: `accepted: false` plus the reason.
async fn play_move(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<MoveRequest>,
) -> Json<MoveResponse> {
    let reply = match state.room.play_move(req.x, req.y, req.color) {
        Ok(_) => MoveResponse {
            accepted: true,
            reason: "ok".to_string(),
        },
        Err(e) => MoveResponse {
            accepted: false,
            reason: e.to_string(),
        },
    };
    Json(reply)
}

async fn pass_turn(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PassRequest>,
) -> Json<PassResponse> {
    let accepted = state.room.pass_turn(req.color).is_ok();
    Json(PassResponse { accepted })
}

async fn current_state(State(state): State<AppState>) -> Json<GameState> {
    Json(state.room.snapshot())
}
