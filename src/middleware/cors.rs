//! CORS policy for browser clients.
//!
//! Policy:
//! - Development: permissive (Allow-Origin: *), WITHOUT credentials.
//! - Production: allowlist origins from Config (comma-separated env var), WITHOUT credentials.
//! - Only GET/HEAD/OPTIONS: nothing here accepts writes.

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::agent::AgentField;
use crate::config::Config;

use super::http::REQUEST_ID_HEADER;

/// Apply CORS policy to the given Router.
///
/// IMPORTANT:
/// - Do not combine wildcard origin (`Any`) with `allow_credentials(true)`.
pub fn apply(router: Router, config: &Config) -> Router {
    let cors = if config.app_env.is_production() {
        // An empty allowlist allows no origin at all.
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _req| {
            allowed.iter().any(|v| v == origin)
        });

        CorsLayer::new().allow_origin(allow_origin)
    } else {
        CorsLayer::new().allow_origin(Any)
    }
    .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
    .allow_headers(allowed_headers())
    .max_age(std::time::Duration::from_secs(60 * 10));

    router.layer(cors)
}

fn allowed_headers() -> Vec<HeaderName> {
    let mut headers = vec![
        header::ACCEPT,
        header::CONTENT_TYPE,
        HeaderName::from_static(REQUEST_ID_HEADER),
    ];
    headers.extend(
        AgentField::ALL
            .into_iter()
            .map(|f| HeaderName::from_static(f.meta_name())),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_headers_are_allowed() {
        let names: Vec<String> = allowed_headers().iter().map(|h| h.to_string()).collect();
        for field in AgentField::ALL {
            assert!(names.iter().any(|n| n == field.meta_name()));
        }
    }
}
