//! Request language negotiation.
//!
//! Picks the interface language from the Accept-Language header and stores
//! it as a [`ResolvedLanguage`] request extension.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// The negotiated language code for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLanguage(pub String);

/// Pick the best known language from an Accept-Language header value.
///
/// Entries are ranked by quality (`q=`), ties keep header order. A regional
/// tag such as `fr-CA` falls back to its primary subtag `fr`. Entries with
/// `q=0` are refused.
pub fn preferred_language(header: &str, known_languages: &[String]) -> Option<String> {
    let mut ranked: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim().to_lowercase();
            if tag.is_empty() {
                return None;
            }
            let quality = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0)
                .clamp(0.0, 1.0);
            Some((tag, quality))
        })
        .filter(|(_, quality)| *quality > 0.0)
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked.into_iter().find_map(|(tag, _)| {
        let primary = tag.split('-').next().unwrap_or(&tag);
        known_languages
            .iter()
            .find(|k| **k == tag || k.as_str() == primary)
            .cloned()
    })
}

/// Middleware to negotiate the active language for each request.
pub async fn negotiate_language(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let language = request
        .headers()
        .get("accept-language")
        .and_then(|v| v.to_str().ok())
        .and_then(|header| preferred_language(header, state.known_languages()))
        .unwrap_or_else(|| state.default_language().to_string());

    request.extensions_mut().insert(ResolvedLanguage(language));
    next.run(request).await
}
