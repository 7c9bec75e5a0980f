//! Thumbnail re-encoding for the image cell.
//!
//! Row images are stored inline as data URIs. Uploads wider than the
//! grid's width limit are downscaled to that width and
//! re-encoded as JPEG; smaller uploads are embedded as-is in their
//! original encoding.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use super::error::ModelResult;

/// Maximum stored thumbnail width in pixels.
pub const MAX_IMAGE_WIDTH: u32 = 480;

/// JPEG quality used when re-encoding downscaled thumbnails.
pub const JPEG_QUALITY: u8 = 80;

/// Convert an uploaded image into the stored data-URI form.
///
/// Images at most [`MAX_IMAGE_WIDTH`] wide pass through byte-for-byte
/// with their original MIME type. Wider images are scaled down to the
/// limit width (preserving aspect ratio, rounding the height down) and
/// re-encoded as JPEG.
pub fn image_to_data_uri(bytes: &[u8]) -> ModelResult<String> {
    let format = image::guess_format(bytes)?;
    let decoded = image::load_from_memory(bytes)?;

    if decoded.width() <= MAX_IMAGE_WIDTH {
        return Ok(format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            BASE64.encode(bytes)
        ));
    }

    let scale = MAX_IMAGE_WIDTH as f64 / decoded.width() as f64;
    let height = ((decoded.height() as f64 * scale).floor() as u32).max(1);
    let resized = decoded.resize_exact(MAX_IMAGE_WIDTH, height, FilterType::Lanczos3);

    let mut encoded = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY);
    encoder.encode_image(&resized.to_rgb8())?;

    tracing::debug!(
        target: "horizon_datagrid::model",
        original_width = decoded.width(),
        height,
        "downscaled row thumbnail"
    );
    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(&encoded)))
}
