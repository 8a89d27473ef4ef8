/*
 * Responsibility
 * - 表示専用のコンポーネント (app bar / main content / latest / footer)
 * - 入力は props (is_authorized, headers など) のみ。状態を持たず、上に何も返さない
 * - 文字列は全て escape してから埋め込む
 */
use std::fmt::Write;

use crate::agent::{AgentField, AgentHeaders};

use super::content::{Catalog, Post};
use super::html::escape;

pub fn app_bar(site_title: &str, is_authorized: bool, agent_id: Option<&str>) -> String {
    let badge = match (is_authorized, agent_id) {
        (true, Some(id)) => format!(
            "<span class=\"badge verified\">Agent verified: {}</span>",
            escape(id)
        ),
        _ => "<span class=\"badge\">Guest</span>".to_string(),
    };

    format!(
        "<header class=\"app-bar\">\n<a href=\"/\"><strong>{}</strong></a>\n{badge}\n</header>\n",
        escape(site_title)
    )
}

pub fn main_content(
    is_authorized: bool,
    headers: Option<&AgentHeaders>,
    catalog: &Catalog,
) -> String {
    let mut html = String::from("<section class=\"main-content\">\n<h1>Blog</h1>\n");

    if is_authorized {
        if let Some(headers) = headers {
            html.push_str(&agent_panel(headers));
        }
    } else {
        html.push_str(&guest_notice(headers));
    }

    for post in catalog.featured() {
        html.push_str(&post_card(post, is_authorized));
    }

    html.push_str("</section>\n");
    html
}

pub fn latest(is_authorized: bool, catalog: &Catalog) -> String {
    let posts = catalog.latest();
    let shown = if is_authorized {
        posts.len()
    } else {
        posts.len().min(Catalog::GUEST_LATEST)
    };

    let mut html = String::from("<section class=\"latest\">\n<h2>Latest</h2>\n<ul>\n");
    for post in &posts[..shown] {
        let _ = writeln!(
            html,
            "<li><a href=\"#{}\">{}</a> <small>{} · {}</small></li>",
            escape(&post.slug),
            escape(&post.title),
            escape(&post.author),
            post.published.format("%B %-d, %Y")
        );
    }
    html.push_str("</ul>\n");
    if shown < posts.len() {
        let _ = writeln!(
            html,
            "<p class=\"notice\">{} more posts are available to verified agents.</p>",
            posts.len() - shown
        );
    }
    html.push_str("</section>\n");
    html
}

pub fn footer(site_title: &str, year: i32) -> String {
    format!(
        "<footer>\n<p>© {year} {}</p>\n</footer>\n",
        escape(site_title)
    )
}

fn post_card(post: &Post, full: bool) -> String {
    let text = if full { &post.body } else { &post.summary };
    format!(
        "<article class=\"card\" id=\"{}\">\n<small>{}</small>\n<h3>{}</h3>\n<p>{}</p>\n<small>{} · {}</small>\n</article>\n",
        escape(&post.slug),
        escape(&post.tag),
        escape(&post.title),
        escape(text),
        escape(&post.author),
        post.published.format("%B %-d, %Y")
    )
}

fn agent_panel(headers: &AgentHeaders) -> String {
    let mut html = String::from("<div class=\"card agent-panel\">\n<h2>Agent headers</h2>\n<dl>\n");
    for field in AgentField::ALL {
        let _ = writeln!(
            html,
            "<dt>{}</dt><dd><code>{}</code></dd>",
            field.key(),
            escape(headers.get(field).unwrap_or_default())
        );
    }
    html.push_str("</dl>\n</div>\n");
    html
}

fn guest_notice(headers: Option<&AgentHeaders>) -> String {
    let missing: Vec<&str> = match headers {
        Some(headers) => headers.missing().into_iter().map(AgentField::meta_name).collect(),
        None => AgentField::ALL.into_iter().map(AgentField::meta_name).collect(),
    };

    format!(
        "<p class=\"notice\">Showing summaries only. Missing agent headers: {}.</p>\n",
        missing.join(", ")
    )
}
