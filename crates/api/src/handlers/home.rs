use axum::Json;
use serde::Serialize;

/// A link on the homepage.
#[derive(Debug, Serialize)]
pub struct Link {
    pub name: &'static str,
    pub path: &'static str,
}

/// Homepage view: handy links to every feature.
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub title: &'static str,
    pub links: Vec<Link>,
}

const LINKS: &[(&str, &str)] = &[
    ("Compliments", "/compliments"),
    ("Animal Facts", "/animal_facts"),
    ("Image Filter", "/image_filter"),
    ("GIF Search", "/gif_search"),
];

/// GET /
pub async fn homepage() -> Json<HomePage> {
    Json(HomePage {
        title: "Showcase",
        links: LINKS
            .iter()
            .map(|&(name, path)| Link { name, path })
            .collect(),
    })
}
