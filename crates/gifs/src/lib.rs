//! Client for the external GIF search API.
//!
//! The API is a single `GET` endpoint taking `q`, `key` and `limit` query
//! parameters and returning a JSON object with a `results` array. Results are
//! passed through untouched; this crate imposes no shape on them.

pub mod api;

pub use api::{GifSearchError, SearchResponse, TenorApi};
