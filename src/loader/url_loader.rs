//! Loader for URL and file references

use super::{ImageReference, Resource, ResourceLoader, decode_image};
use crate::config::NetworkSettings;
use crate::error::{GopherError, Result, StringError};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Where the bytes of a reference come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    /// Fetch over HTTP(S)
    Remote(String),
    /// Read from the local file system
    File(PathBuf),
}

impl Source {
    /// Classify `reference` by its scheme
    ///
    /// `file://` URLs are percent-decoded and converted to a native path,
    /// so `file:///C:/g.png` is `C:\g.png` on Windows. Returns `None` for
    /// schemes that cannot be loaded and for malformed file URLs.
    pub(crate) fn classify(reference: &str) -> Option<Self> {
        let lower = reference.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Some(Self::Remote(reference.to_string()));
        }
        if lower.starts_with("file://") {
            return Url::parse(reference)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .map(Self::File);
        }
        match reference.find("://") {
            Some(_) => None,
            None => Some(Self::File(PathBuf::from(reference))),
        }
    }
}

/// Loads images from `http(s)://` URLs, `file://` URLs and plain paths
pub struct UrlLoader {
    client: reqwest::blocking::Client,
}

impl UrlLoader {
    /// Create a loader using the given HTTP settings
    pub fn new(settings: &NetworkSettings) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            // Preserve error chain by wrapping the source error
            .map_err(|e| GopherError::ConfigError(Box::new(e)))?;

        Ok(Self { client })
    }

    fn fetch_remote(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching image from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| GopherError::load_failure(url, e))?;

        if !response.status().is_success() {
            return Err(GopherError::load_failure(
                url,
                StringError::new(format!("server returned status {}", response.status())),
            ));
        }

        let bytes = response
            .bytes()
            .map_err(|e| GopherError::load_failure(url, e))?;
        Ok(bytes.to_vec())
    }
}

impl ResourceLoader for UrlLoader {
    fn load(&self, reference: &ImageReference) -> Result<Resource> {
        let bytes = match Source::classify(reference.as_str()) {
            Some(Source::Remote(url)) => self.fetch_remote(&url)?,
            Some(Source::File(path)) => {
                debug!("Reading image from: {}", path.display());
                std::fs::read(&path)
                    .map_err(|e| GopherError::load_failure(reference.as_str(), e))?
            }
            None => {
                return Err(GopherError::load_failure(
                    reference.as_str(),
                    StringError::new("unsupported scheme or malformed file URL"),
                ));
            }
        };

        let resource = decode_image(reference, &bytes)?;
        info!(
            "Loaded {} ({}x{}, {} bytes)",
            reference,
            resource.width,
            resource.height,
            bytes.len()
        );
        Ok(resource)
    }
}
