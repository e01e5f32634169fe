use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{festival, health, show, sitemap, upload};
use crate::state::AppState;
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/sitemap.xml", get(sitemap::sitemap))

        // Festivals
        .route("/api/v1/festivals", post(festival::create_festival).get(festival::list_festivals))
        .route("/api/v1/festivals/upcoming", get(festival::list_upcoming_festivals))
        .route("/api/v1/festivals/past", get(festival::list_past_festivals))
        .route("/api/v1/festivals/mine", get(festival::list_my_festivals))
        .route("/api/v1/festivals/{id}", get(festival::get_festival).put(festival::update_festival).delete(festival::delete_festival))

        // Shows
        .route("/api/v1/shows", post(show::create_show).get(show::list_shows))
        .route("/api/v1/shows/upcoming", get(show::list_upcoming_shows))
        .route("/api/v1/shows/past", get(show::list_past_shows))
        .route("/api/v1/shows/mine", get(show::list_my_shows))
        .route("/api/v1/shows/{id}", get(show::get_show).put(show::update_show).delete(show::delete_show))

        // Poster ingestion
        .route("/api/v1/uploads", post(upload::upload_poster))

        // Posters may legitimately approach the 3 MB ceiling; leave
        // headroom for the multipart framing.
        .layer(DefaultBodyLimit::max(4 * 1024 * 1024))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
