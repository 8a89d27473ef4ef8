/*
 * Responsibility
 * - Handler から見える「リクエストの agent-* ヘッダ」の型
 * - middleware が読み取って request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - ここでは存在チェックもしない。authorized の判定はページ mount 時の AgentSession が行う
 */
use crate::agent::AgentHeaders;

#[derive(Debug, Clone, Default)]
pub struct AgentCtx {
    pub headers: AgentHeaders,
}

impl AgentCtx {
    pub fn new(headers: AgentHeaders) -> Self {
        Self { headers }
    }
}
