//! Image decoding
//!
//! Decodes PNG and JPEG bytes into RGBA8, sniffing the format from the data
//! rather than trusting the reference's extension. Camera photos often carry
//! an EXIF orientation tag; it is applied so the image is displayed upright.

use super::{ImageReference, Resource};
use crate::error::{GopherError, Result};
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::io::Cursor;
use tracing::debug;

/// Decode `bytes` fetched for `reference` into a displayable resource
pub fn decode_image(reference: &ImageReference, bytes: &[u8]) -> Result<Resource> {
    let mut decoder = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| GopherError::load_failure(reference.as_str(), e))?
        .into_decoder()
        .map_err(|e| GopherError::load_failure(reference.as_str(), e))?;

    let orientation = decoder
        .orientation()
        .map_err(|e| GopherError::load_failure(reference.as_str(), e))?;

    let mut img = DynamicImage::from_decoder(decoder)
        .map_err(|e| GopherError::load_failure(reference.as_str(), e))?;
    img.apply_orientation(orientation);

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!(
        "Decoded {} as {}x{} ({:?})",
        reference, width, height, orientation
    );

    Ok(Resource {
        reference: reference.clone(),
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
