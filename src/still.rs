use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, RgbaImage};
use tracing::{info, warn};

use crate::config::StickerConfig;
use crate::error::{AppError, Result};
use crate::ladder::first_passing;

/// Decodes an image file, detecting the format from its content.
pub fn load(path: &Path) -> Result<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}

/// Scales and center-crops to a `dimension` square, covering it fully.
pub fn fit_square(image: &DynamicImage, dimension: u32) -> RgbaImage {
    DynamicImage::ImageRgba8(image.to_rgba8())
        .resize_to_fill(dimension, dimension, FilterType::Lanczos3)
        .into_rgba8()
}

/// Lossy WEBP at `quality` (0-100) and libwebp effort `method` (0-6).
pub fn encode_webp(image: &RgbaImage, quality: u8, method: u8) -> Result<Vec<u8>> {
    let mut config = webp::WebPConfig::new()
        .map_err(|()| AppError::Encode("libwebp rejected the default config".to_string()))?;
    config.quality = f32::from(quality);
    config.method = i32::from(method);

    let encoder = webp::Encoder::from_rgba(image.as_raw(), image.width(), image.height());
    let encoded = encoder
        .encode_advanced(&config)
        .map_err(|err| AppError::Encode(format!("{err:?}")))?;

    Ok(encoded.to_vec())
}

pub fn convert(path: &Path, config: &StickerConfig) -> Result<Vec<u8>> {
    let image = load(path)?;
    info!(
        width = image.width(),
        height = image.height(),
        "decoded still image"
    );

    let fitted = fit_square(&image, config.dimension);
    encode_fitted(&fitted, config)
}

/// Walks the quality ladder over an already fitted image; falls back to the
/// smaller dimension at `fallback_quality` without re-checking the size.
pub fn encode_fitted(fitted: &RgbaImage, config: &StickerConfig) -> Result<Vec<u8>> {
    let chosen = first_passing(
        config.qualities.iter().copied(),
        |quality| encode_webp(fitted, *quality, config.method),
        |encoded| encoded.len() as u64 <= config.size_limit,
    )?;

    if let Some((quality, encoded)) = chosen {
        info!(quality, bytes = encoded.len(), "still sticker fits");
        return Ok(encoded);
    }

    warn!(
        dimension = config.fallback_dimension,
        quality = config.fallback_quality,
        "no quality fits the size limit, downsampling"
    );
    let small = imageops::resize(
        fitted,
        config.fallback_dimension,
        config.fallback_dimension,
        FilterType::Lanczos3,
    );
    encode_webp(&small, config.fallback_quality, config.method)
}
