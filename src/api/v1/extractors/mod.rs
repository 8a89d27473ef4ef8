/*
 * Responsibility
 * - handler 向け extractor の公開 (re-export)
 */
mod agent_ctx;

pub use agent_ctx::{AgentCtx, AgentCtxExtractor};
