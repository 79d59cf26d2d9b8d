//! Image cycler
//!
//! Holds a fixed, non-empty list of image references and a cursor naming
//! the image currently on screen. Advancing moves the cursor one step
//! forward, wrapping at the end, and loads the image through the injected
//! [`ResourceLoader`].
//!
//! # Failed loads
//!
//! A failed load leaves the cursor where it was. The next advance
//! therefore attempts the same reference again; a reference that keeps
//! failing pins the cursor in place until it loads.
//!
//! ```text
//! [A, B], B unreachable
//!
//! cursor: none --advance--> 0 (A shown)
//!         0    --advance--> 0 (B failed, A stays)
//!         0    --advance--> 0 (B failed again)
//! ```

use crate::error::{GopherError, Result};
use crate::loader::{ImageReference, Resource, ResourceLoader};
use std::fmt;
use tracing::{debug, warn};

/// Position of the displayed image in the reference list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor(Option<usize>);

impl Cursor {
    /// Nothing loaded yet
    pub const NONE: Self = Self(None);

    /// Cursor pointing at `index`
    pub const fn at(index: usize) -> Self {
        Self(Some(index))
    }

    /// Index of the displayed image, if any
    pub const fn index(self) -> Option<usize> {
        self.0
    }

    /// Whether no image has been loaded yet
    pub const fn is_none(self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, "{index}"),
            None => f.write_str("-1"),
        }
    }
}

/// Result of one advance
#[derive(Debug)]
pub struct AdvanceOutcome {
    /// The freshly loaded image, `None` when the load failed
    pub resource: Option<Resource>,
    /// Cursor after the advance; unchanged when the load failed
    pub cursor: Cursor,
}

/// Index following `cursor` in a list of `len` references
///
/// The sentinel advances to 0 and the last index wraps to 0. Returns
/// `None` for an empty list.
pub fn next_index(cursor: Cursor, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match cursor.index() {
        Some(index) => Some((index + 1) % len),
        None => Some(0),
    }
}

/// Cursor over a fixed list of image references
pub struct ImageCycler<L> {
    references: Vec<ImageReference>,
    cursor: Cursor,
    loader: L,
}

impl<L: ResourceLoader> ImageCycler<L> {
    /// Create a cycler over `references`, loading through `loader`
    ///
    /// The cursor starts at [`Cursor::NONE`].
    pub fn new<I, R>(references: I, loader: L) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<ImageReference>,
    {
        let references: Vec<ImageReference> = references.into_iter().map(Into::into).collect();
        if references.is_empty() {
            return Err(GopherError::EmptyImageList);
        }

        Ok(Self {
            references,
            cursor: Cursor::NONE,
            loader,
        })
    }

    /// Current cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The references being cycled, in order
    pub fn references(&self) -> &[ImageReference] {
        &self.references
    }

    /// Number of references
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Always `false`; construction rejects an empty list
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Reference currently on screen, if any
    pub fn current(&self) -> Option<&ImageReference> {
        self.cursor.index().map(|i| &self.references[i])
    }

    /// Compute the outcome of advancing from `from` without touching the cursor
    ///
    /// On success the outcome carries the resource and the new index; on
    /// failure it carries no resource and `from` unchanged.
    pub fn advance_from(&self, from: Cursor) -> AdvanceOutcome {
        let Some(next) = next_index(from, self.references.len()) else {
            return AdvanceOutcome {
                resource: None,
                cursor: from,
            };
        };
        let reference = &self.references[next];

        match self.loader.load(reference) {
            Ok(resource) => {
                debug!("Advanced image cursor {} -> {}", from, next);
                AdvanceOutcome {
                    resource: Some(resource),
                    cursor: Cursor::at(next),
                }
            }
            Err(e) => {
                warn!(
                    "Failed to load image {}, keeping cursor at {}: {}",
                    next, from, e
                );
                AdvanceOutcome {
                    resource: None,
                    cursor: from,
                }
            }
        }
    }

    /// Advance to the next image, updating the cursor on success
    pub fn advance(&mut self) -> AdvanceOutcome {
        let outcome = self.advance_from(self.cursor);
        self.cursor = outcome.cursor;
        outcome
    }
}
