/*
 * Responsibility
 * - ページ全体の組み立て
 *   1. リクエストの agent-* を document の <meta> に書き込む
 *   2. AgentSession を作り、document に対して 1 回だけ mount する
 *   3. headers / is_authorized を props としてコンポーネントに渡す
 */
use uuid::Uuid;

use crate::agent::{AgentHeaders, AgentSession};

use super::components;
use super::content::Catalog;
use super::document::Document;
use super::html::escape;
use super::theme::Theme;

/// サイト全体で共通の設定 (起動時に決まる)
#[derive(Debug, Clone)]
pub struct Site {
    pub title: String,
    // None = custom theme 無効 (ブラウザ既定のスタイル)
    pub theme: Option<Theme>,
}

#[derive(Debug)]
pub struct RenderedPage {
    pub html: String,
    pub is_authorized: bool,
    pub mount_id: Uuid,
}

pub fn render(
    site: &Site,
    catalog: &Catalog,
    request_headers: &AgentHeaders,
    year: i32,
) -> RenderedPage {
    let document = Document::new(site.title.clone()).with_agent_headers(request_headers);

    let session = AgentSession::new();
    session.mount(&document);

    let headers = session.headers();
    let is_authorized = session.is_authorized();
    let agent_id = headers.and_then(|h| h.agent_id.as_deref());

    let styles = site.theme.map(|t| t.stylesheet()).unwrap_or_default();

    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n",
        escape(document.lang)
    );
    html.push_str(&document.render_head(&styles));
    html.push_str("<body>\n");
    html.push_str(&components::app_bar(&site.title, is_authorized, agent_id));
    html.push_str("<main>\n");
    html.push_str(&components::main_content(is_authorized, headers, catalog));
    html.push_str(&components::latest(is_authorized, catalog));
    html.push_str("</main>\n");
    html.push_str(&components::footer(&site.title, year));
    html.push_str("</body>\n</html>\n");

    RenderedPage {
        html,
        is_authorized,
        mount_id: session.mount_id(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site {
            title: "Agent Blog".into(),
            theme: Some(Theme::default()),
        }
    }

    fn headers(
        cert: Option<&str>,
        sig: Option<&str>,
        ts: Option<&str>,
        id: Option<&str>,
    ) -> AgentHeaders {
        AgentHeaders {
            agent_cert: cert.map(Into::into),
            agent_signature: sig.map(Into::into),
            agent_timestamp: ts.map(Into::into),
            agent_id: id.map(Into::into),
        }
    }

    #[test]
    fn authorized_page_carries_meta_and_badge() {
        let page = render(
            &site(),
            &Catalog::default(),
            &headers(Some("c1"), Some("s1"), Some("t1"), Some("id1")),
            2025,
        );

        assert!(page.is_authorized);
        assert!(page.html.contains("<meta name=\"agent-signature\" content=\"s1\">"));
        assert!(page.html.contains("Agent verified: id1"));
        assert!(page.html.contains("--brand-500"));
    }

    #[test]
    fn missing_field_renders_guest_page() {
        let page = render(
            &site(),
            &Catalog::default(),
            &headers(Some("c1"), None, Some("t1"), Some("id1")),
            2025,
        );

        assert!(!page.is_authorized);
        assert!(!page.html.contains("name=\"agent-signature\""));
        assert!(page.html.contains("Missing agent headers: agent-signature."));
        assert!(page.html.contains("class=\"badge\">Guest"));
    }

    #[test]
    fn disabled_theme_omits_styles() {
        let site = Site {
            theme: None,
            ..site()
        };
        let page = render(&site, &Catalog::default(), &AgentHeaders::default(), 2025);

        assert!(!page.html.contains("<style>"));
        assert!(page.html.contains("© 2025 Agent Blog"));
    }
}
