//! Request handlers for the showcase features.
//!
//! Each submodule provides async handler functions for one feature and
//! returns the JSON view model that feature's page renders. Domain work is
//! delegated to `showcase_core` (and `showcase_gifs` for GIF search); errors
//! are mapped via [`AppError`](crate::error::AppError).

pub mod animal_facts;
pub mod compliments;
pub mod gif_search;
pub mod home;
pub mod image_filter;
