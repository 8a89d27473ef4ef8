/*!
 * Agent headers
 *
 * Responsibility:
 * - agent-cert / agent-signature / agent-timestamp / agent-id の読み取り
 * - 4 つ全てが揃っているかの判定 (authorized)
 *
 * Public API:
 * - AgentHeaders, AgentField
 * - MetaSource
 * - capture_headers, read_headers, is_authorized, AgentSession
 */

mod core;
mod source;
mod types;

pub use self::core::{AgentSession, capture_headers, is_authorized, read_headers};
pub use self::source::MetaSource;
pub use self::types::{AgentField, AgentHeaders};
