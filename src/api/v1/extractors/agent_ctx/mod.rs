/*!
 * Agent context extractor
 *
 * Responsibility:
 * - リクエストで受け取った agent-* ヘッダ (AgentCtx) を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - AgentCtx
 * - AgentCtxExtractor
 */

mod core;
mod types;

pub use self::core::AgentCtxExtractor;
pub use self::types::AgentCtx;
