//! HTTP route handlers for the preview server.
//!
//! The index page and details pages are rendered per request from the
//! current publication data, so edits to the data file show up on reload
//! without a rebuild. Everything else is served from the site root.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, error};

use crate::pages::{find_page, load_template, render_sitemap, sitemap_urls, today};
use crate::render::{render_page, ERROR_MESSAGE};
use crate::templates::{default_index_page, render_detail_page};
use crate::AppState;

// ============================================================================
// Router
// ============================================================================

pub fn router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(state.config.root.clone());
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/publications/{file}", get(publication_page))
        .route("/sitemap.xml", get(sitemap))
        .fallback_service(static_files)
        .with_state(state)
}

// ============================================================================
// Index Handler
// ============================================================================

/// The page to render the list into: `index.template.html`, then
/// `index.html`, then the built-in page.
async fn index_source(state: &AppState) -> String {
    let candidates: [PathBuf; 2] = [
        state.config.index_template_path(),
        state.config.index_path(),
    ];
    for path in candidates {
        if let Ok(page) = tokio::fs::read_to_string(&path).await {
            debug!(path = %path.display(), "index source");
            return page;
        }
    }
    default_index_page()
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = index_source(&state).await;
    Html(render_page(&page, &state.config.source, &state.client).await)
}

// ============================================================================
// Details Page Handler
// ============================================================================

pub async fn publication_page(
    State(state): State<Arc<AppState>>,
    Path(file): Path<String>,
    request: Request,
) -> Response {
    let Some(id) = file.strip_suffix(".html") else {
        return publication_asset(&state, &file, request).await;
    };

    let papers = match state.config.source.fetch(&state.client).await {
        Ok(papers) => papers,
        Err(e) => {
            error!(error = %e, "Error loading publications");
            return (StatusCode::SERVICE_UNAVAILABLE, Html(ERROR_MESSAGE)).into_response();
        }
    };

    let Some(paper) = find_page(&papers, id) else {
        return (StatusCode::NOT_FOUND, "Publication not found").into_response();
    };

    let template = match load_template(&state.config.template_path()) {
        Ok(template) => template,
        Err(e) => {
            error!(error = %e, "Error loading template");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Template unavailable").into_response();
        }
    };

    Html(render_detail_page(paper, &template, &state.config.base_url)).into_response()
}

/// Non-page files directly under `publications/` (PDFs) come from disk.
async fn publication_asset(state: &AppState, file: &str, request: Request) -> Response {
    if file.contains("..") || file.contains('/') || file.contains('\\') {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }
    let path = state.config.output_dir().join(file);
    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

// ============================================================================
// Sitemap Handler
// ============================================================================

pub async fn sitemap(State(state): State<Arc<AppState>>) -> Response {
    match state.config.source.fetch(&state.client).await {
        Ok(papers) => {
            let xml = render_sitemap(&sitemap_urls(&state.config.base_url, &papers), today());
            ([(CONTENT_TYPE, "application/xml")], xml).into_response()
        }
        Err(e) => {
            error!(error = %e, "Error loading publications");
            (StatusCode::SERVICE_UNAVAILABLE, "Publication data unavailable").into_response()
        }
    }
}
