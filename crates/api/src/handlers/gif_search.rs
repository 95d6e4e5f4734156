//! Handlers for GIF search.
//!
//! Searches are forwarded to the external GIF API. Any failure there (no
//! key configured, transport error, bad status, unreadable body) degrades to
//! an empty result list with an error note; it is never surfaced as a failed
//! request.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Message shown when the search could not be completed.
pub const SEARCH_UNAVAILABLE: &str = "GIF search is currently unavailable";

#[derive(Debug, Deserialize)]
pub struct GifSearchForm {
    #[serde(default)]
    pub search_query: String,
    /// Forwarded verbatim as the API's `limit`.
    #[serde(default)]
    pub quantity: String,
}

/// GIF search view. `gifs` is `null` on the bare form.
#[derive(Debug, Serialize)]
pub struct GifSearchView {
    pub gifs: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl GifSearchView {
    fn degraded() -> Self {
        Self {
            gifs: Some(Vec::new()),
            error: Some(SEARCH_UNAVAILABLE),
        }
    }
}

/// GET /gif_search
pub async fn form() -> Json<GifSearchView> {
    Json(GifSearchView {
        gifs: None,
        error: None,
    })
}

/// POST /gif_search
pub async fn search(
    State(state): State<AppState>,
    form: Result<Form<GifSearchForm>, FormRejection>,
) -> AppResult<Json<GifSearchView>> {
    let Form(input) = form?;

    let Some(api) = state.gifs.as_ref() else {
        tracing::warn!(
            query = %input.search_query,
            "GIF search requested but no API key is configured"
        );
        return Ok(Json(GifSearchView::degraded()));
    };

    let view = match api.search(&input.search_query, &input.quantity).await {
        Ok(response) => {
            tracing::debug!(
                query = %input.search_query,
                count = response.results.as_ref().map_or(0, Vec::len),
                "GIF search completed"
            );
            GifSearchView {
                gifs: response.results,
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!(
                query = %input.search_query,
                endpoint = api.base_url(),
                error = %e,
                "GIF search failed, returning degraded result"
            );
            GifSearchView::degraded()
        }
    };

    Ok(Json(view))
}
