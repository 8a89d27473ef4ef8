/*
 * Responsibility
 * - GET / (ブログページ)
 * - リクエストの agent-* を受け取り、page::render に渡すだけ (ロジックは置かない)
 */
use axum::{Router, extract::State, response::Html, routing::get};
use chrono::{Datelike, Utc};

use crate::api::v1::extractors::AgentCtxExtractor;
use crate::middleware::security_headers;
use crate::state::AppState;

use super::page;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route_layer(security_headers::page_policy())
}

async fn index(
    State(state): State<AppState>,
    AgentCtxExtractor(ctx): AgentCtxExtractor,
) -> Html<String> {
    let year = Utc::now().year();
    let page = page::render(&state.site, &state.catalog, &ctx.headers, year);

    tracing::debug!(
        mount_id = %page.mount_id,
        authorized = page.is_authorized,
        "blog page rendered"
    );

    Html(page.html)
}
