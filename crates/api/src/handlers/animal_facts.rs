use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};
use showcase_core::animal_facts;

#[derive(Debug, Deserialize)]
pub struct AnimalQuery {
    pub animal: Option<String>,
}

/// Animal fact view: the choices plus the fact for the chosen animal, if any.
#[derive(Debug, Serialize)]
pub struct AnimalFactsView {
    pub animals: Vec<&'static str>,
    pub animal_fact: Option<&'static str>,
}

/// GET /animal_facts
pub async fn animal_facts(Query(params): Query<AnimalQuery>) -> Json<AnimalFactsView> {
    Json(AnimalFactsView {
        animals: animal_facts::animal_names(),
        animal_fact: animal_facts::fact_for(params.animal.as_deref()),
    })
}
