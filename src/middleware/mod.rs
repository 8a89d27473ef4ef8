/*
 * Responsibility
 * - middleware の公開インターフェース
 * - 各 apply() は Router を受け取り layer を掛けた Router を返す
 */
pub mod agent;
pub mod cors;
pub mod http;
pub mod security_headers;
