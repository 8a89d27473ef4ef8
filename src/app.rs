/*
 * Responsibility
 * - tracing 初期化 → Config 読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (http / CORS / security headers / agent headers)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::{Router, http::Uri};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::blog::{
    self,
    content::Catalog,
    page::Site,
    theme::{ColorScheme, Theme},
};
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use crate::{api, middleware};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,agent_blog=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process. Production: default hook, keep serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting blog in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config)?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_state(config: &Config) -> Result<AppState, AppError> {
    let catalog = match &config.blog_posts_path {
        Some(path) => {
            let catalog = Catalog::load(path)?;
            tracing::info!(
                path = %path.display(),
                posts = catalog.posts().len(),
                "loaded posts"
            );
            catalog
        }
        None => Catalog::default(),
    };

    let theme = (!config.blog_disable_custom_theme).then(|| match config.blog_color_scheme {
        ColorScheme::Light => Theme::default(),
        ColorScheme::Dark => Theme::dark(),
    });

    let site = Site {
        title: config.blog_title.clone(),
        theme,
    };

    Ok(AppState::new(site, catalog))
}

fn build_router(state: AppState, config: &Config) -> Router {
    async fn not_found(uri: Uri) -> AppError {
        AppError::not_found(uri.path())
    }

    let router = Router::new()
        .merge(blog::routes())
        .nest("/api/v1", api::v1::routes())
        .fallback(not_found)
        .with_state(state);

    let router = middleware::agent::apply(router);
    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, config)
}
