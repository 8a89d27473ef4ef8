/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV, CORS 許可, ブログ設定など)
 * - 設定値のバリデーション (不正なら起動失敗)
 * - テスト用に lookup 関数から組み立てられるようにする (from_lookup)
 */
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::blog::theme::ColorScheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub blog_title: String,
    // None = 組み込みの記事を使う
    pub blog_posts_path: Option<PathBuf>,
    pub blog_disable_custom_theme: bool,
    pub blog_color_scheme: ColorScheme,

    pub request_timeout_seconds: u64,
    pub request_body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let blog_title = lookup("BLOG_TITLE").unwrap_or_else(|| "Agent Blog".to_string());
        if blog_title.trim().is_empty() {
            return Err(ConfigError::Invalid("BLOG_TITLE"));
        }

        let blog_posts_path = lookup("BLOG_POSTS_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let blog_disable_custom_theme = match lookup("BLOG_DISABLE_CUSTOM_THEME") {
            Some(raw) => {
                parse_bool(&raw).ok_or(ConfigError::Invalid("BLOG_DISABLE_CUSTOM_THEME"))?
            }
            None => false,
        };

        let blog_color_scheme = match lookup("BLOG_COLOR_SCHEME")
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("light") => ColorScheme::Light,
            Some("dark") => ColorScheme::Dark,
            Some(_) => return Err(ConfigError::Invalid("BLOG_COLOR_SCHEME")),
        };

        // 0 秒の timeout は全リクエストを 408 にするので不正扱い
        let request_timeout_seconds: u64 = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => 30,
        };

        let request_body_limit_bytes: usize = match lookup("REQUEST_BODY_LIMIT_BYTES") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES"))?,
            None => 1024 * 1024,
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            blog_title,
            blog_posts_path,
            blog_disable_custom_theme,
            blog_color_scheme,
            request_timeout_seconds,
            request_body_limit_bytes,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.blog_title, "Agent Blog");
        assert_eq!(config.blog_posts_path, None);
        assert!(!config.blog_disable_custom_theme);
        assert_eq!(config.blog_color_scheme, ColorScheme::Light);
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.request_body_limit_bytes, 1024 * 1024);
    }

    #[test]
    fn reads_values() {
        let config = config(&[
            ("PORT", "8080"),
            ("APP_ENV", "Prod"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("BLOG_TITLE", "Field Notes"),
            ("BLOG_POSTS_PATH", "/srv/posts.json"),
            ("BLOG_DISABLE_CUSTOM_THEME", "yes"),
            ("BLOG_COLOR_SCHEME", "dark"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
            ("REQUEST_BODY_LIMIT_BYTES", " 4096 "),
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert!(config.app_env.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.blog_title, "Field Notes");
        assert_eq!(config.blog_posts_path, Some(PathBuf::from("/srv/posts.json")));
        assert!(config.blog_disable_custom_theme);
        assert_eq!(config.blog_color_scheme, ColorScheme::Dark);
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(config.request_body_limit_bytes, 4096);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            config(&[("PORT", "http")]).unwrap_err(),
            ConfigError::Invalid("PORT")
        );
        assert_eq!(
            config(&[("BLOG_TITLE", "  ")]).unwrap_err(),
            ConfigError::Invalid("BLOG_TITLE")
        );
        assert_eq!(
            config(&[("BLOG_DISABLE_CUSTOM_THEME", "maybe")]).unwrap_err(),
            ConfigError::Invalid("BLOG_DISABLE_CUSTOM_THEME")
        );
        assert_eq!(
            config(&[("BLOG_COLOR_SCHEME", "sepia")]).unwrap_err(),
            ConfigError::Invalid("BLOG_COLOR_SCHEME")
        );
    }

    #[test]
    fn rejects_invalid_request_limits() {
        for raw in ["abc", "0", "-5", ""] {
            assert_eq!(
                config(&[("REQUEST_TIMEOUT_SECONDS", raw)]).unwrap_err(),
                ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"),
                "timeout {raw:?}"
            );
        }
        for raw in ["1MB", "-1", ""] {
            assert_eq!(
                config(&[("REQUEST_BODY_LIMIT_BYTES", raw)]).unwrap_err(),
                ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES"),
                "body limit {raw:?}"
            );
        }
    }
}
