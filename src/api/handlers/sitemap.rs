use axum::{extract::State, http::header, response::IntoResponse};
use crate::error::AppError;
use crate::state::AppState;
use chrono::{SecondsFormat, Utc};
use std::fmt::Write;
use std::sync::Arc;

const STATIC_ROUTES: &[(&str, &str)] = &[("/", "1.0"), ("/list", "0.8")];

pub async fn sitemap(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let base = state.config.public_base_url.trim_end_matches('/').to_string();
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n"
    );

    for (route, priority) in STATIC_ROUTES {
        let _ = writeln!(
            xml,
            "  <url><loc>{}{}</loc><lastmod>{}</lastmod><changefreq>monthly</changefreq><priority>{}</priority></url>",
            base, route, now, priority
        );
    }

    for festival in state.festival_repo.list().await? {
        let _ = writeln!(
            xml,
            "  <url><loc>{}/festivals/{}</loc><lastmod>{}</lastmod><changefreq>monthly</changefreq><priority>0.9</priority></url>",
            base,
            festival.id,
            festival.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
    }

    xml.push_str("</urlset>\n");

    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}
