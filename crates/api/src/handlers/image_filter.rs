//! Handlers for the image filter feature.
//!
//! A submission carries a `filter_type` text field and a `users_image` file.
//! The upload is stored as `{filter_type}-{filename}`, thumbnailed to at
//! most 500 px per side, convolved with the chosen kernel and written back in
//! place. Repeating the same filter on the same filename overwrites the
//! earlier artifact.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use showcase_core::error::CoreError;
use showcase_core::{filters, naming};

use crate::error::AppResult;
use crate::state::AppState;

/// Image filter view.
#[derive(Debug, Serialize)]
pub struct ImageFilterView {
    pub list_of_filter_types: Vec<&'static str>,
    /// URL of the filtered image; absent on the bare form.
    #[serde(rename = "image_URL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Raw pieces of a filter submission.
#[derive(Debug, Default)]
struct Submission {
    filter_type: Option<String>,
    image: Option<(String, Vec<u8>)>,
}

/// GET /image_filter
pub async fn form() -> Json<ImageFilterView> {
    Json(ImageFilterView {
        list_of_filter_types: filters::filter_names(),
        image_url: None,
    })
}

/// POST /image_filter
pub async fn apply(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ImageFilterView>> {
    let submission = read_submission(multipart?).await?;

    let filter_type = submission
        .filter_type
        .ok_or_else(|| CoreError::Validation("filter_type is required".into()))?;
    let filter = filters::find_filter(&filter_type)?;

    let (raw_filename, bytes) = submission
        .image
        .ok_or_else(|| CoreError::Validation("users_image is required".into()))?;
    let filename = naming::sanitize_filename(&raw_filename)?;

    let artifact = naming::artifact_filename(filter.name, &filename)?;
    tracing::info!(
        filter = filter.name,
        artifact = %artifact,
        bytes = bytes.len(),
        "Applying image filter"
    );

    state
        .artifacts
        .store_filtered(&artifact, bytes, filter)
        .await?;

    Ok(Json(ImageFilterView {
        list_of_filter_types: filters::filter_names(),
        image_url: Some(naming::artifact_url(&artifact)),
    }))
}

async fn read_submission(mut multipart: Multipart) -> AppResult<Submission> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "filter_type" => {
                let text = field.text().await?;
                let text = text.trim();
                if !text.is_empty() {
                    submission.filter_type = Some(text.to_string());
                }
            }
            "users_image" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await?;
                // Browsers send an empty, unnamed part when no file was chosen.
                if !(filename.is_empty() && data.is_empty()) {
                    submission.image = Some((filename, data.to_vec()));
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(submission)
}
