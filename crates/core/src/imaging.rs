//! Decode, thumbnail, filter and re-encode uploaded images.
//!
//! The pipeline is deliberately split so callers can decode (and reject bad
//! uploads) before any bytes reach disk, then render the filtered output in a
//! second step.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};

use crate::error::CoreError;
use crate::filters::Filter;

/// Neither side of a processed image exceeds this many pixels.
pub const MAX_DIMENSION: u32 = 500;

/// A decoded upload together with the container format it arrived in.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

/// Scale `(width, height)` down to fit inside a `max` x `max` box, keeping
/// the aspect ratio. Images that already fit are returned unchanged; nothing
/// is ever scaled up.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }

    let (w, h, m) = (u64::from(width), u64::from(height), u64::from(max));
    if width >= height {
        let scaled = ((h * m + w / 2) / w).max(1);
        (max, scaled as u32)
    } else {
        let scaled = ((w * m + h / 2) / h).max(1);
        (scaled as u32, max)
    }
}

/// Decode raw upload bytes, sniffing the format from the content.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, CoreError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CoreError::Decode(e.to_string()))?;

    let format = reader
        .format()
        .ok_or_else(|| CoreError::Decode("unrecognised image format".into()))?;

    let image = reader
        .decode()
        .map_err(|e| CoreError::Decode(e.to_string()))?;

    Ok(DecodedImage { image, format })
}

/// Downscale `image` so it fits within [`MAX_DIMENSION`].
pub fn thumbnail(image: &DynamicImage) -> DynamicImage {
    let (width, height) = fit_within(image.width(), image.height(), MAX_DIMENSION);
    if (width, height) == (image.width(), image.height()) {
        return image.clone();
    }
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Thumbnail then convolve `image` with `filter`.
pub fn apply_filter(image: &DynamicImage, filter: &Filter) -> DynamicImage {
    let resized = thumbnail(image).to_rgba8();
    DynamicImage::ImageRgba8(filter.kernel.apply(&resized))
}

/// Encode `image` in `format`. Formats without an alpha channel get an RGB
/// copy.
pub fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, CoreError> {
    let image = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
        _ => image.clone(),
    };

    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format)
        .map_err(|e| CoreError::Internal(format!("failed to encode {format:?}: {e}")))?;
    Ok(buf.into_inner())
}

/// Filter a decoded upload and encode it back into its original format.
pub fn render(decoded: &DecodedImage, filter: &Filter) -> Result<Vec<u8>, CoreError> {
    let filtered = apply_filter(&decoded.image, filter);
    encode(&filtered, decoded.format)
}
