//! Preview server
//!
//! Serves the generated public directory, answers "load more" requests for
//! the index page, and generates post pages on demand for slugs the build
//! did not know about (fallback generation).

use anyhow::Result;
use axum::{
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::{ApiError, ContentClient};
use crate::generator::Generator;
use crate::Stellar;

/// Server state
struct ServerState {
    stellar: Stellar,
    client: ContentClient,
    generator: Generator,
}

/// Start the preview server
pub async fn start(stellar: &Stellar, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        stellar: stellar.clone(),
        client: ContentClient::new(&stellar.config.api),
        generator: Generator::new(stellar)?,
    });

    let app = Router::new()
        .route("/api/feed", get(feed_handler))
        .fallback(fallback_handler)
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Debug, Deserialize)]
struct FeedQuery {
    cursor: String,
}

/// One "load more" step: fetch the cursor page, project it, hand back the
/// rows plus the endpoint URL of the following page.
///
/// A failed fetch or decode becomes a 502 with a JSON error body so the
/// index page script can offer a retry instead of silently stalling.
async fn feed_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<FeedQuery>,
) -> Response {
    match state.client.fetch_cursor(&query.cursor).await {
        Ok(page) => {
            let (items, next) = page.into_page();
            let body = state.generator.feed_page(&items, next.as_deref());
            Json(body).into_response()
        }
        Err(err) => {
            tracing::warn!("Feed page fetch failed: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

/// Serve static files; a missing `/post/{slug}/` page is generated on
/// demand before serving, and a slug the service does not know yields 404.
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let path = request.uri().path().to_string();

    if let Some(slug) = post_slug(&path) {
        let page_path = state
            .stellar
            .public_dir
            .join("post")
            .join(slug)
            .join("index.html");

        if !page_path.exists() {
            return generate_on_demand(&state, slug).await;
        }
    }

    let mut service = ServeDir::new(&state.stellar.public_dir).append_index_html_on_directories(true);
    match service.try_call(request).await {
        Ok(response) => response.into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

/// Fallback generation for a slug that was not pre-built
async fn generate_on_demand(state: &ServerState, slug: &str) -> Response {
    tracing::info!("On-demand generation for post {:?}", slug);

    match state.client.get_by_uid(slug).await {
        Ok(post) => {
            let written = state
                .generator
                .generate_post_page(&post)
                .map_err(|e| e.to_string());

            match written {
                Ok(page_path) => match tokio::fs::read_to_string(&page_path).await {
                    Ok(html) => Html(html).into_response(),
                    Err(e) => {
                        tracing::error!("Failed to read generated page: {}", e);
                        (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
                    }
                },
                Err(e) => {
                    tracing::error!("On-demand generation failed: {}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
                }
            }
        }
        Err(ApiError::NotFound(_)) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        Err(err) => {
            tracing::warn!("On-demand fetch failed: {}", err);
            (StatusCode::BAD_GATEWAY, "Content service unavailable").into_response()
        }
    }
}

/// Extract the slug from a `/post/{slug}` or `/post/{slug}/` request path
fn post_slug(path: &str) -> Option<&str> {
    let rest = path.strip_prefix("/post/")?;
    let slug = rest
        .strip_suffix("/index.html")
        .or_else(|| rest.strip_suffix('/'))
        .unwrap_or(rest);

    if slug.is_empty() || slug.contains('/') {
        None
    } else {
        Some(slug)
    }
}
