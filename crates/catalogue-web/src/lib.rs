use anyhow::{Context, Result};
use axum::{Router, middleware, routing::get};

use catalogue_core::Catalogue;

mod dto;
mod error;
mod handlers;
mod security;


#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) catalogue: Catalogue,
}

impl WebState {
    fn new(catalogue: Catalogue) -> Self {
        Self { catalogue }
    }
}

/// Start the catalogue API server and block until Ctrl-C.
///
/// # Errors
/// Returns an error when the runtime cannot be created, the socket cannot be
/// bound, or the server exits with a runtime failure.
pub fn serve_web(catalogue: Catalogue, host: &str, port: u16) -> Result<()> {
    let state = WebState::new(catalogue);
    let bind_addr = format!("{host}:{port}");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build web runtime")?;

    runtime.block_on(async move {
        #[cfg(unix)]
        spawn_cache_reset_on_hangup(state.catalogue.clone());

        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind web server at {bind_addr}"))?;
        tracing::info!(
            "catalogue api listening on http://{}",
            listener.local_addr()?
        );

        axum::serve(listener, app_router(state))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutdown requested");
            })
            .await
            .context("web server failed")
    })
}

// SIGHUP drops the metadata cache so regenerated data is picked up without a restart.
#[cfg(unix)]
fn spawn_cache_reset_on_hangup(catalogue: Catalogue) {
    use tokio::signal::unix::{SignalKind, signal};

    tokio::spawn(async move {
        let mut hangups = match signal(SignalKind::hangup()) {
            Ok(hangups) => hangups,
            Err(err) => {
                tracing::warn!(error = %err, "cannot listen for SIGHUP; cache reset disabled");
                return;
            }
        };
        while hangups.recv().await.is_some() {
            catalogue.clear_cache();
        }
    });
}

pub(crate) fn app_router(state: WebState) -> Router {
    Router::new()
        .route("/api/catalogue", get(handlers::catalogue_index))
        .route("/api/catalogue/categories", get(handlers::list_categories))
        .route(
            "/api/catalogue/categories/{category}",
            get(handlers::category_thinkers),
        )
        .route("/api/catalogue/thinkers", get(handlers::list_thinkers))
        .route(
            "/api/catalogue/thinkers/compare",
            get(handlers::compare_thinkers),
        )
        .route(
            "/api/catalogue/thinkers/{category}/{name}",
            get(handlers::thinker),
        )
        .route(
            "/api/catalogue/thinkers/{category}/{name}/subjects/{subject}",
            get(handlers::subject_works),
        )
        .route("/api/catalogue/search", get(handlers::search))
        .route("/api/catalogue/random/thinker", get(handlers::random_thinker))
        .route("/api/catalogue/stats", get(handlers::statistics))
        .layer(middleware::from_fn(security::security_headers_middleware))
        .layer(middleware::from_fn(security::request_logging_middleware))
        .with_state(state)
}
