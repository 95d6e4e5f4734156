//! Handlers for the compliment generator.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};
use showcase_core::compliments::{self, COMPLIMENTS};

use crate::error::AppResult;

/// Compliment form view.
#[derive(Debug, Serialize)]
pub struct ComplimentsForm {
    pub form: &'static str,
    /// Largest `num_compliments` the catalog can satisfy.
    pub max_compliments: usize,
}

/// Query parameters for `/compliments_results`.
///
/// `num_compliments` is kept as a string so malformed values surface as a
/// validation error rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ComplimentsQuery {
    pub users_name: Option<String>,
    pub wants_compliments: Option<String>,
    pub num_compliments: Option<String>,
}

/// Compliment results view.
#[derive(Debug, Serialize)]
pub struct ComplimentsResults {
    pub users_name: Option<String>,
    pub wants_compliments: Option<String>,
    pub num_compliments: usize,
    pub random_compliments: Vec<&'static str>,
}

/// GET /compliments
pub async fn form() -> Json<ComplimentsForm> {
    Json(ComplimentsForm {
        form: "compliments",
        max_compliments: COMPLIMENTS.len(),
    })
}

/// GET /compliments_results
///
/// Samples `num_compliments` distinct compliments. Rejects counts that are
/// missing, non-numeric, or larger than the catalog.
pub async fn results(
    query: Result<Query<ComplimentsQuery>, QueryRejection>,
) -> AppResult<Json<ComplimentsResults>> {
    let Query(params) = query?;
    let count = compliments::parse_count(params.num_compliments.as_deref())?;
    let random_compliments = compliments::sample(&mut rand::rng(), count)?;

    Ok(Json(ComplimentsResults {
        users_name: params.users_name,
        wants_compliments: params.wants_compliments,
        num_compliments: count,
        random_compliments,
    }))
}
