pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{animal_facts, compliments, gif_search, home, image_filter};
use crate::state::AppState;

/// Build the feature route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                          homepage (GET)
/// /compliments               compliment form (GET)
/// /compliments_results       sampled compliments (GET)
/// /animal_facts              animal choices + fact (GET)
/// /image_filter              filter form (GET), apply filter (POST, multipart)
/// /gif_search                search form (GET), search (POST, form-encoded)
/// ```
///
/// Filtered images are served separately under `/static/images` (see
/// [`build_app_router`](crate::router::build_app_router)).
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::homepage))
        .route("/compliments", get(compliments::form))
        .route("/compliments_results", get(compliments::results))
        .route("/animal_facts", get(animal_facts::animal_facts))
        .route(
            "/image_filter",
            get(image_filter::form).post(image_filter::apply),
        )
        .route(
            "/gif_search",
            get(gif_search::form).post(gif_search::search),
        )
}
