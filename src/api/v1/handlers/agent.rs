/*
 * Responsibility
 * - GET /api/v1/agent
 * - リクエストの agent-* に対して AgentSession を 1 回 mount し、その結果を JSON で返す
 * - 署名検証はしない (presence のみ)
 */
use axum::Json;

use crate::agent::AgentSession;
use crate::api::v1::{dto::agent::AgentStatusResponse, extractors::AgentCtxExtractor};

pub async fn agent_status(
    AgentCtxExtractor(ctx): AgentCtxExtractor,
) -> Json<AgentStatusResponse> {
    let session = AgentSession::new();
    session.mount(&ctx.headers);

    Json(AgentStatusResponse::from_session(&session))
}
