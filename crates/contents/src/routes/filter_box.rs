//! Filter box for the admin contents list.
//!
//! GET /admin/contents/filter-box

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::ResolvedLanguage;
use crate::models::{ContentOptions, UserContext};
use crate::state::AppState;
use crate::theme::FILTER_BOX_TEMPLATE;

/// Path of the contents list the filter box submits to.
const CONTENTS_LIST_PATH: &str = "/admin/contents";

/// Render the filter box.
///
/// Answers 204 with an empty body when there is nothing to show, which is
/// the case for requests without an authenticated principal.
async fn filter_box(
    State(state): State<AppState>,
    principal: Option<Extension<UserContext>>,
    language: Option<Extension<ResolvedLanguage>>,
    query: Result<Query<ContentOptions>, QueryRejection>,
) -> AppResult<Response> {
    let Query(options) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let principal = principal.map(|Extension(p)| p);
    let language = language
        .map(|Extension(ResolvedLanguage(lang))| lang)
        .unwrap_or_else(|| state.default_language().to_string());

    let filter_box = state.filter_box();
    let Some(view_model) = filter_box
        .build(Some(&options), principal.as_ref(), &language)
        .await?
    else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let mut context = tera::Context::new();
    context.insert("filter", &view_model);
    context.insert("action", CONTENTS_LIST_PATH);
    context.insert(
        "labels",
        &json!({
            "content_type": filter_box.t("Content type", &language),
            "status": filter_box.t("Status", &language),
            "order": filter_box.t("Sort by", &language),
            "submit": filter_box.t("Filter", &language),
        }),
    );
    context.insert("language", &language);

    let html = state.theme().render(FILTER_BOX_TEMPLATE, &context)?;

    tracing::debug!(
        content_types = view_model.content_types.len(),
        language = %language,
        "rendered filter box"
    );
    Ok(Html(html).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/contents/filter-box", get(filter_box))
}
