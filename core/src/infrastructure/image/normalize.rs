use image::codecs::jpeg::JpegEncoder;

use crate::domain::workflow::{errors::WorkflowError, value_objects::FridgeImage};

const JPEG_QUALITY: u8 = 90;

/// Decodes an uploaded photo (PNG, JPEG, WebP or GIF) and re-encodes it as
/// JPEG for the vision model.
pub fn normalize_upload(data: &[u8]) -> Result<FridgeImage, WorkflowError> {
    if data.is_empty() {
        return Err(WorkflowError::InputMissing("fridge image"));
    }

    let decoded = image::load_from_memory(data).map_err(|e| {
        tracing::warn!("Failed to decode uploaded image: {}", e);
        WorkflowError::InvalidImage(e.to_string())
    })?;

    let rgb = decoded.to_rgb8();
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| {
            tracing::error!("Failed to encode image as JPEG: {}", e);
            WorkflowError::InvalidImage(e.to_string())
        })?;

    Ok(FridgeImage::jpeg(jpeg))
}
