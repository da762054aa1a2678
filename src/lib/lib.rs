//! The manual2pdf library turns a Markdown user manual into a styled,
//! paginated PDF document.
//!
//! The conversion is a single linear pass. The document text is scanned for
//! `<!-- IMG:filename -->` markers, which are replaced with `<img>` elements
//! carrying the screenshot bytes as inline base64 data (a missing file
//! degrades to a readable comment instead of failing the run). The resulting
//! Markdown is converted to an HTML fragment, the fragment is wrapped in a
//! fixed CSS-styled document shell, and the finished document is printed to
//! PDF through a local headless Chrome.
//!
//! Basic usage is one call with the document text and an output path:
//! ```no_run
//! use std::error::Error;
//! use std::fs;
//! use std::path::Path;
//!
//! fn example() -> Result<(), Box<dyn Error>> {
//!     let markdown = fs::read_to_string("manual.md")?;
//!     manual2pdf::render_into_file(&markdown, Path::new("."), "manual.pdf")?;
//!     Ok(())
//! }
//! ```
//!
//! The intermediate HTML is deterministic and available separately, which is
//! what the tests (and the binary's `--html-only` mode) lean on:
//! ```
//! use std::path::Path;
//!
//! let html = manual2pdf::compose_html("# 使用手冊\n\nWelcome.", Path::new("."));
//! assert!(html.contains("<h1>使用手冊</h1>"));
//! ```
//!
//! ## Document Flow
//! ```text
//! +-----------+    +--------------+    +------------+    +-----------+
//! | Markdown  |    | IMG markers  |    | HTML       |    | Styled    |
//! | manual.md | -> | inlined as   | -> | fragment   | -> | document  |
//! |           |    | data URIs    |    | (tables,   |    | shell     |
//! |           |    | or comments  |    | code)      |    | + CSS     |
//! +-----------+    +--------------+    +------------+    +-----------+
//!                                                              |
//!                                                              v
//!                                                        +-----------+
//!                                                        | A4 PDF w/ |
//!                                                        | page nums |
//!                                                        +-----------+
//! ```

pub mod images;
pub mod markdown;
pub mod pdf;
pub mod template;

use std::error::Error;
use std::fmt;
use std::path::Path;

/// Represents errors that can occur while converting the manual to PDF.
/// Covers input/output failures and PDF generation issues; a missing
/// referenced image is not an error (it degrades to a placeholder comment).
#[derive(Debug)]
pub enum ManualError {
    /// Indicates an I/O error on the source document or output location
    IoError {
        message: String,
        path: String,
        suggestion: String,
    },
    /// Indicates an error during PDF rendering or writing
    PdfError {
        message: String,
        path: Option<String>,
        suggestion: Option<String>,
    },
}

impl Error for ManualError {}
impl fmt::Display for ManualError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ManualError::IoError {
                message,
                path,
                suggestion,
            } => {
                write!(f, "❌ File Error: {}", message)?;
                write!(f, "\n📁 Path: {}", path)?;
                write!(f, "\n💡 Suggestion: {}", suggestion)?;
                Ok(())
            }
            ManualError::PdfError {
                message,
                path,
                suggestion,
            } => {
                write!(f, "❌ PDF Generation Error: {}", message)?;
                if let Some(p) = path {
                    write!(f, "\n📁 Path: {}", p)?;
                }
                if let Some(hint) = suggestion {
                    write!(f, "\n💡 Suggestion: {}", hint)?;
                }
                Ok(())
            }
        }
    }
}

impl ManualError {
    /// Creates a simple PDF error with just a message
    pub fn pdf_error(message: impl Into<String>) -> Self {
        ManualError::PdfError {
            message: message.into(),
            path: None,
            suggestion: Some(
                "Check that a Chrome/Chromium browser is installed and the output location is writable"
                    .to_string(),
            ),
        }
    }

    /// Pick a suggestion from the shape of a renderer error message.
    fn pdf_suggestion(message: &str) -> String {
        let lower = message.to_lowercase();
        if lower.contains("auto detect") || lower.contains("chrome") {
            "Install Google Chrome or Chromium, or point the CHROME environment variable at the browser binary"
                .to_string()
        } else if lower.contains("permission") || lower.contains("denied") {
            "Check that you have write permissions for this location".to_string()
        } else if lower.contains("no such file") {
            "Make sure the output directory exists".to_string()
        } else {
            "Try a different output path or check available disk space".to_string()
        }
    }
}

/// Produce the complete HTML document for the manual.
///
/// Runs the placeholder, conversion, and templating stages: image markers
/// are substituted (reading referenced files relative to `base_dir`), the
/// Markdown becomes an HTML fragment, and the fragment is wrapped in the
/// fixed document shell. This stage never fails — unresolved image
/// references are left as visible comments — and is deterministic for
/// unchanged inputs.
pub fn compose_html(markdown: &str, base_dir: &Path) -> String {
    let resolver = images::PlaceholderResolver::new(base_dir);
    let resolved = resolver.resolve(markdown);
    let fragment = markdown::to_html_fragment(&resolved);
    template::compose(&fragment)
}

/// Convert the manual to PDF and save it to the specified path.
///
/// Image markers are resolved against `base_dir` (the directory holding the
/// source document). Rendering failures — no usable browser, render errors,
/// write errors — surface as [`ManualError`] with the library-provided
/// message; there is no retry or partial output.
///
/// # Example
/// ```no_run
/// use std::error::Error;
/// use std::path::Path;
///
/// fn example() -> Result<(), Box<dyn Error>> {
///     manual2pdf::render_into_file("# Manual", Path::new("."), "manual.pdf")?;
///     Ok(())
/// }
/// ```
pub fn render_into_file(markdown: &str, base_dir: &Path, path: &str) -> Result<(), ManualError> {
    // Validate output path exists
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(ManualError::IoError {
                message: "Output directory does not exist".to_string(),
                path: parent.display().to_string(),
                suggestion: format!("Create the directory first: mkdir -p {}", parent.display()),
            });
        }
    }

    let html = compose_html(markdown, base_dir);

    if let Some(err) = pdf::render(&html, path) {
        let suggestion = ManualError::pdf_suggestion(&err);
        return Err(ManualError::PdfError {
            message: err,
            path: Some(path.to_string()),
            suggestion: Some(suggestion),
        });
    }

    Ok(())
}

/// Convert the manual to PDF and return the document bytes.
///
/// Same pipeline as [`render_into_file`], without touching the filesystem
/// for the result.
pub fn render_into_bytes(markdown: &str, base_dir: &Path) -> Result<Vec<u8>, ManualError> {
    let html = compose_html(markdown, base_dir);

    pdf::render_to_bytes(&html).map_err(|err| {
        let suggestion = ManualError::pdf_suggestion(&err);
        ManualError::PdfError {
            message: err,
            path: None,
            suggestion: Some(suggestion),
        }
    })
}
