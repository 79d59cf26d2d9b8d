//! Image resource loading
//!
//! The image cycler does not fetch anything itself. It is handed a
//! [`ResourceLoader`] that turns an [`ImageReference`] into a decoded
//! [`Resource`] or a [`GopherError::ResourceLoadFailure`].
//!
//! [`UrlLoader`] is the production implementation:
//! - `http://` and `https://` references are fetched with a blocking HTTP client
//! - `file://` references and plain paths are read from disk
//! - the bytes are decoded with format sniffing and EXIF orientation applied
//!
//! [`GopherError::ResourceLoadFailure`]: crate::error::GopherError::ResourceLoadFailure

pub mod decode;
pub mod url_loader;

use crate::error::Result;
use std::fmt;

pub use decode::decode_image;
pub use url_loader::UrlLoader;

/// Opaque identifier of an external image (URL or file path)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference(String);

impl ImageReference {
    /// Create a reference from a URL or path
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The reference as given
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageReference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageReference {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A decoded image ready for display
#[derive(Clone, PartialEq, Eq)]
pub struct Resource {
    /// Where the image came from
    pub reference: ImageReference,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row-major RGBA8 pixel data, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

// Pixel data is large and useless in logs
impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("reference", &self.reference)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Turns an image reference into a displayable resource
///
/// Implementations block until the resource is available or the load has
/// failed. They must not retry or cache; the caller decides what a failure
/// means.
pub trait ResourceLoader {
    /// Load and decode the image named by `reference`
    fn load(&self, reference: &ImageReference) -> Result<Resource>;
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for &L {
    fn load(&self, reference: &ImageReference) -> Result<Resource> {
        (**self).load(reference)
    }
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for Box<L> {
    fn load(&self, reference: &ImageReference) -> Result<Resource> {
        (**self).load(reference)
    }
}
