/*
 * Responsibility
 * - ページをホストする document (title + <head> の meta タグ)
 * - リクエストで受け取った agent-* を <meta name content> として書き込む
 * - MetaSource 実装: agent session はここから読む
 */
use std::fmt::Write;

use crate::agent::{AgentField, AgentHeaders, MetaSource};

use super::html::escape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    // <meta name="x"> だけで content 属性が無いケースがあるので Option
    pub content: Option<String>,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Some(content.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub lang: &'static str,
    pub meta: Vec<MetaTag>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: "en",
            meta: vec![MetaTag::new(
                "viewport",
                "initial-scale=1, width=device-width",
            )],
        }
    }

    /// 値を持つフィールドだけ meta タグにする (None はタグ自体を出さない)
    pub fn with_agent_headers(mut self, headers: &AgentHeaders) -> Self {
        for field in AgentField::ALL {
            if let Some(value) = headers.get(field) {
                self.meta.push(MetaTag::new(field.meta_name(), value));
            }
        }
        self
    }

    /// `<head>` 要素を描画する。`styles` はそのまま <style> に入る
    pub fn render_head(&self, styles: &str) -> String {
        let mut head = String::from("<head>\n<meta charset=\"utf-8\">\n");
        for tag in &self.meta {
            match &tag.content {
                Some(content) => {
                    let _ = writeln!(
                        head,
                        "<meta name=\"{}\" content=\"{}\">",
                        escape(&tag.name),
                        escape(content)
                    );
                }
                None => {
                    let _ = writeln!(head, "<meta name=\"{}\">", escape(&tag.name));
                }
            }
        }
        let _ = writeln!(head, "<title>{}</title>", escape(&self.title));
        if !styles.is_empty() {
            let _ = writeln!(head, "<style>\n{styles}</style>");
        }
        head.push_str("</head>\n");
        head
    }
}

impl MetaSource for Document {
    // document.querySelector('meta[name="..."]')?.getAttribute('content') 相当
    fn meta_content(&self, name: &str) -> Option<String> {
        self.meta
            .iter()
            .find(|tag| tag.name == name)
            .and_then(|tag| tag.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_present_fields_become_meta_tags() {
        let headers = AgentHeaders {
            agent_cert: Some("c1".into()),
            agent_signature: Some(String::new()),
            ..Default::default()
        };
        let doc = Document::new("Blog").with_agent_headers(&headers);

        assert_eq!(doc.meta_content("agent-cert").as_deref(), Some("c1"));
        assert_eq!(doc.meta_content("agent-signature").as_deref(), Some(""));
        assert_eq!(doc.meta_content("agent-timestamp"), None);
        assert_eq!(doc.meta_content("agent-id"), None);
    }

    #[test]
    fn first_matching_tag_wins_and_missing_content_is_absent() {
        let mut doc = Document::new("Blog");
        doc.meta.push(MetaTag {
            name: "agent-id".into(),
            content: None,
        });
        doc.meta.push(MetaTag::new("agent-id", "later"));
        doc.meta.push(MetaTag::new("agent-cert", "a"));
        doc.meta.push(MetaTag::new("agent-cert", "b"));

        assert_eq!(doc.meta_content("agent-id"), None);
        assert_eq!(doc.meta_content("agent-cert").as_deref(), Some("a"));
    }

    #[test]
    fn head_escapes_values() {
        let headers = AgentHeaders {
            agent_id: Some("\"><script>".into()),
            ..Default::default()
        };
        let head = Document::new("A & B")
            .with_agent_headers(&headers)
            .render_head("");

        assert!(head.contains("<meta name=\"agent-id\" content=\"&quot;&gt;&lt;script&gt;\">"));
        assert!(head.contains("<title>A &amp; B</title>"));
        assert!(!head.contains("<style>"));
    }
}
