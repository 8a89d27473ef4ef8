/*
 * Responsibility
 * - ブラウザ向けのセキュリティ系レスポンスヘッダ
 * - CSP はレスポンスの種類ごとに分ける
 *   - JSON / エラー: 何も読み込ませない (DEFAULT_CSP)
 *   - ブログページ: テーマの inline style だけ許可、script は不可 (PAGE_CSP)
 * - ページ側は page_policy() を route_layer で付ける。apply は未設定のときだけ埋める
 */
use axum::Router;
use axum::http::header::{self, HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

pub const DEFAULT_CSP: &str = "default-src 'none'; frame-ancestors 'none'";

pub const PAGE_CSP: &str =
    "default-src 'none'; style-src 'unsafe-inline'; img-src 'self'; frame-ancestors 'none'";

// 全レスポンス共通 (name, value)
const COMMON: [(&str, &str); 4] = [
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "no-referrer"),
    ("permissions-policy", "camera=(), microphone=(), geolocation=()"),
];

/// HTML ページを返すルート用の CSP
pub fn page_policy() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(PAGE_CSP),
    )
}

pub fn apply(router: Router) -> Router {
    let router = router.layer(SetResponseHeaderLayer::if_not_present(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(DEFAULT_CSP),
    ));

    COMMON.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ))
    })
}
