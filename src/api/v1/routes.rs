/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /agent (どちらも読み取りのみ)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{agent::agent_status, health::health};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/agent", get(agent_status))
}
