//! Image placeholder resolution for the manual source.
//!
//! The source document requests screenshots with an HTML-comment marker,
//! `<!-- IMG:filename -->`. Before the Markdown is converted, every marker is
//! replaced in place: if the referenced file exists next to the document, the
//! marker becomes an `<img>` element carrying the file bytes as a base64 data
//! URI; if it does not, the marker degrades to a readable
//! `<!-- Image not found: filename -->` comment and the run continues.
//!
//! Markers are substituted left to right, each occurrence independently. The
//! document is small and converted once, so repeated references re-read and
//! re-encode the file instead of going through a cache.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};

static IMG_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!-- IMG:(\S+?) -->").unwrap());

/// Image formats the inline embedding distinguishes between.
///
/// The manual's screenshots are PNG or JPEG captures. The format is chosen
/// from the file extension alone, with JPEG as the catch-all; the bytes are
/// never sniffed or transcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// PNG image format
    Png,
    /// JPEG image format (also the fallback for unrecognized extensions)
    Jpeg,
}

impl ImageFormat {
    /// Pick the format from a filename's extension.
    ///
    /// # Example
    ///
    /// ```
    /// use manual2pdf::images::ImageFormat;
    /// assert_eq!(ImageFormat::from_path("shot.png"), ImageFormat::Png);
    /// assert_eq!(ImageFormat::from_path("shot.jpg"), ImageFormat::Jpeg);
    /// assert_eq!(ImageFormat::from_path("shot.gif"), ImageFormat::Jpeg);
    /// ```
    pub fn from_path(path: &str) -> ImageFormat {
        let ext = path.rsplit('.').next().unwrap_or(path);
        if ext.eq_ignore_ascii_case("png") {
            ImageFormat::Png
        } else {
            ImageFormat::Jpeg
        }
    }

    /// Get the MIME type for this image format.
    ///
    /// # Example
    ///
    /// ```
    /// use manual2pdf::images::ImageFormat;
    /// assert_eq!(ImageFormat::Png.mime_type(), "image/png");
    /// assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Replaces image markers in the document text with inline data URIs.
///
/// Referenced files are resolved relative to the directory holding the
/// source document.
pub struct PlaceholderResolver {
    /// Directory the marker filenames are resolved against
    base_dir: PathBuf,
}

impl PlaceholderResolver {
    /// Create a resolver rooted at the given directory.
    pub fn new(base_dir: &Path) -> Self {
        PlaceholderResolver {
            base_dir: base_dir.to_path_buf(),
        }
    }

    /// Create a resolver for images referenced by the document at `document_path`.
    ///
    /// The base directory is the document's parent directory, so markers name
    /// files that sit alongside the manual.
    pub fn for_document(document_path: &Path) -> Self {
        let base_dir = document_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();
        PlaceholderResolver { base_dir }
    }

    /// Substitute every `<!-- IMG:filename -->` marker in `markdown`.
    ///
    /// Existing files become `<img src="data:...;base64,..." class="screenshot" />`
    /// elements; missing files become `<!-- Image not found: filename -->`
    /// comments. The substitution never fails the run.
    pub fn resolve(&self, markdown: &str) -> String {
        IMG_MARKER
            .replace_all(markdown, |caps: &Captures| {
                let filename = &caps[1];
                match self.inline_image(filename) {
                    Some(element) => element,
                    None => {
                        warn!("Image not found, leaving placeholder comment: {}", filename);
                        format!("<!-- Image not found: {} -->", filename)
                    }
                }
            })
            .into_owned()
    }

    /// Read and encode one referenced image, or `None` if it cannot be read.
    fn inline_image(&self, filename: &str) -> Option<String> {
        let path = self.base_dir.join(filename);
        if !path.exists() {
            return None;
        }
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to read image {}: {}", path.display(), e);
                return None;
            }
        };
        debug!("Inlining {} ({} bytes)", path.display(), bytes.len());
        let mime = ImageFormat::from_path(filename).mime_type();
        Some(format!(
            "<img src=\"data:{};base64,{}\" class=\"screenshot\" />",
            mime,
            STANDARD.encode(&bytes)
        ))
    }
}
