use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::agent;

use super::AgentCtx;

/// Handler で AgentCtx を受け取るための extractor
/// middleware が AgentCtx を request.extensions() に insert 済みならそれを使う
/// 見つからない場合 (middleware 未設定) はヘッダから直接読む。失敗はしない
pub struct AgentCtxExtractor(pub AgentCtx);

impl<S> FromRequestParts<S> for AgentCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let ctx = match parts.extensions.get::<AgentCtx>() {
            Some(ctx) => ctx.clone(),
            None => AgentCtx::new(agent::capture_headers(&parts.headers)),
        };
        Ok(AgentCtxExtractor(ctx))
    }
}
