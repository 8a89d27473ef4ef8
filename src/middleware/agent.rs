/*
 * Responsibility
 * - リクエストの agent-* ヘッダを 1 回だけ読み取り、AgentCtx として extensions に載せる
 * - 欠けているヘッダをログに出す (拒否はしない。ページはゲスト表示になるだけ)
 */
use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::agent::{self, AgentField};
use crate::api::v1::extractors::AgentCtx;

pub fn apply(router: Router) -> Router {
    router.layer(middleware::from_fn(capture_agent_headers))
}

async fn capture_agent_headers(mut req: Request<Body>, next: Next) -> Response {
    // per-field ログはページ mount 側で出るので、ここでは素の読み取りだけ
    let headers = agent::capture_headers(req.headers());
    let missing = headers.missing();

    if missing.is_empty() {
        tracing::debug!(
            agent_id = headers.agent_id.as_deref().unwrap_or_default(),
            "agent headers complete"
        );
    } else {
        let names: Vec<&str> = missing.into_iter().map(AgentField::meta_name).collect();
        tracing::debug!(missing = ?names, "agent headers incomplete");
    }

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AgentCtx::new(headers));

    next.run(req).await
}
