/*
 * Responsibility
 * - 「読み取り専用のメタデータ」を抽象化する trait (MetaSource)
 * - document (ページの <meta>) と HTTP リクエストヘッダ の両方から同じ形で読めるようにする
 */
use axum::http::HeaderMap;

use super::types::{AgentField, AgentHeaders};

/// name を指定して値を 1 つ読むだけの read-only な入力
///
/// 同名が複数ある場合は最初の 1 件を返す
pub trait MetaSource {
    fn meta_content(&self, name: &str) -> Option<String>;
}

impl MetaSource for HeaderMap {
    fn meta_content(&self, name: &str) -> Option<String> {
        // to_str() は visible ASCII しか通さないので UTF-8 として読む
        // 不正なバイト列だけ absent 扱い
        self.get(name)
            .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
            .map(str::to_owned)
    }
}

// 一度取り込んだ値をもう一度 source として使う (JSON view など)
impl MetaSource for AgentHeaders {
    fn meta_content(&self, name: &str) -> Option<String> {
        AgentField::ALL
            .into_iter()
            .find(|f| f.meta_name() == name)
            .and_then(|f| self.get(f))
            .map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn header_map_returns_first_value() {
        let mut headers = HeaderMap::new();
        headers.append("agent-id", HeaderValue::from_static("first"));
        headers.append("agent-id", HeaderValue::from_static("second"));

        assert_eq!(headers.meta_content("agent-id").as_deref(), Some("first"));
        assert_eq!(headers.meta_content("agent-cert"), None);
    }

    #[test]
    fn header_map_treats_opaque_bytes_as_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "agent-signature",
            HeaderValue::from_bytes(b"\xffsig").unwrap(),
        );

        assert_eq!(headers.meta_content("agent-signature"), None);
    }

    #[test]
    fn header_map_reads_non_ascii_utf8() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "agent-id",
            HeaderValue::from_bytes("agént-7".as_bytes()).unwrap(),
        );

        assert_eq!(headers.meta_content("agent-id").as_deref(), Some("agént-7"));
    }

    #[test]
    fn utf8_agent_id_still_authorizes() {
        let mut headers = HeaderMap::new();
        headers.insert("agent-cert", HeaderValue::from_static("c1"));
        headers.insert("agent-signature", HeaderValue::from_static("s1"));
        headers.insert("agent-timestamp", HeaderValue::from_static("t1"));
        headers.insert(
            "agent-id",
            HeaderValue::from_bytes("agént-7".as_bytes()).unwrap(),
        );

        let read = crate::agent::read_headers(&headers);

        assert_eq!(read.agent_id.as_deref(), Some("agént-7"));
        assert!(crate::agent::is_authorized(&read));
    }

    #[test]
    fn agent_headers_answer_by_meta_name() {
        let headers = AgentHeaders {
            agent_timestamp: Some("1700000000".into()),
            ..Default::default()
        };

        assert_eq!(
            headers.meta_content("agent-timestamp").as_deref(),
            Some("1700000000")
        );
        assert_eq!(headers.meta_content("agent-id"), None);
        assert_eq!(headers.meta_content("agentTimestamp"), None);
    }
}
