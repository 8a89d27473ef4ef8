/*
 * Responsibility
 * - ブログ記事 (Post) と一覧 (Catalog)
 * - 記事は起動時に 1 度だけ用意する (組み込み or BLOG_POSTS_PATH の JSON)
 * - 書き込み系は持たない (CMS ではない)
 */
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read posts file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse posts file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("posts file {path} contains no posts")]
    Empty { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub author: String,
    pub tag: String,
    pub published: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    posts: Vec<Post>,
}

impl Catalog {
    const FEATURED: usize = 2;
    // 未認可の agent に見せる latest の件数
    pub const GUEST_LATEST: usize = 3;

    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_json(&raw).map_err(|err| match err {
            ContentError::Parse { source, .. } => ContentError::Parse {
                path: display.clone(),
                source,
            },
            ContentError::Empty { .. } => ContentError::Empty { path: display },
            other => other,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let posts: Vec<Post> = serde_json::from_str(raw).map_err(|source| ContentError::Parse {
            path: "<inline>".into(),
            source,
        })?;
        if posts.is_empty() {
            return Err(ContentError::Empty {
                path: "<inline>".into(),
            });
        }
        Ok(Self::new(posts))
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// 先頭から数件 (掲載順)
    pub fn featured(&self) -> &[Post] {
        &self.posts[..self.posts.len().min(Self::FEATURED)]
    }

    /// 新しい順。同日なら掲載順を保つ
    pub fn latest(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.published.cmp(&a.published));
        posts
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(builtin_posts())
    }
}

fn post(
    slug: &str,
    title: &str,
    summary: &str,
    body: &str,
    author: &str,
    tag: &str,
    (y, m, d): (i32, u32, u32),
) -> Post {
    Post {
        slug: slug.into(),
        title: title.into(),
        summary: summary.into(),
        body: body.into(),
        author: author.into(),
        tag: tag.into(),
        // 組み込みデータの日付は固定値なので fallback は使われない
        published: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

fn builtin_posts() -> Vec<Post> {
    vec![
        post(
            "signed-requests",
            "Signed requests for autonomous agents",
            "How a proxy can stamp every outgoing request with an identity.",
            "Each request leaving the agent passes through a proxy that adds four headers: \
             a certificate, a signature over the timestamp and agent id, the timestamp itself \
             and the agent id. Sites can then decide what to show.",
            "Remy Adams",
            "Engineering",
            (2024, 11, 4),
        ),
        post(
            "meta-channel",
            "Metadata tags as an out-of-band channel",
            "Passing small values from the server into the page head.",
            "The page head is a convenient place for values the server already knows. \
             Components read them once when the page mounts and never again.",
            "Erica Johns",
            "Product",
            (2024, 10, 21),
        ),
        post(
            "presence-is-not-proof",
            "Presence is not proof",
            "Why checking that a header exists says nothing about who sent it.",
            "A header that is present may still be forged. Verification belongs to the \
             receiving service, which holds the trust anchors.",
            "Kate Morrison",
            "Security",
            (2024, 12, 2),
        ),
        post(
            "design-tokens",
            "Design tokens for a small blog",
            "A ten-step colour range is enough for most pages.",
            "Brand and gray ranges from 50 to 900 cover backgrounds, borders and text. \
             Dark mode swaps the ends of the range.",
            "Cindy Baker",
            "Design",
            (2024, 9, 15),
        ),
        post(
            "agent-traffic",
            "Reading agent traffic in the access log",
            "Request ids and structured fields make agent visits easy to follow.",
            "Every request carries an x-request-id. The agent id lands in the same log line \
             as the authorization result, so a single grep shows the whole visit.",
            "Travis Howard",
            "Engineering",
            (2024, 12, 9),
        ),
    ]
}
