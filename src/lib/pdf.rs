//! PDF rendering via headless Chrome.
//!
//! The composed HTML document is written to a temporary file and printed
//! through a local Chrome/Chromium instance driven by the `headless_chrome`
//! crate. Layout and pagination are entirely the browser's job; this module
//! only fixes the print geometry: A4 paper, 2 cm top/bottom and 2.2 cm
//! left/right margins, and a centered page-number footer.
//!
//! Chrome does not honor `@page` margin boxes, so the page counter that a
//! CSS-first renderer would express in the stylesheet lives here in the
//! footer template instead.

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use log::{debug, info};
use std::io::Write;

/// A4 paper width in inches.
pub const PAPER_WIDTH_IN: f64 = 8.27;
/// A4 paper height in inches.
pub const PAPER_HEIGHT_IN: f64 = 11.69;
/// Top and bottom page margin in inches (2 cm).
pub const MARGIN_TOP_BOTTOM_IN: f64 = 0.79;
/// Left and right page margin in inches (2.2 cm).
pub const MARGIN_LEFT_RIGHT_IN: f64 = 0.87;

/// Footer shown at the bottom center of every page. Chrome substitutes the
/// current page number into the `pageNumber` span.
const FOOTER_TEMPLATE: &str = "<div style=\"width:100%;text-align:center;\
font-size:9pt;color:#999;\"><span class=\"pageNumber\"></span></div>";

/// Header counterpart of the footer template. Empty, but it must be present:
/// Chrome falls back to its default date/title header otherwise.
const HEADER_TEMPLATE: &str = "<div></div>";

/// Fixed print options for the manual. No runtime configuration.
fn print_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        landscape: Some(false),
        display_header_footer: Some(true),
        header_template: Some(HEADER_TEMPLATE.to_string()),
        footer_template: Some(FOOTER_TEMPLATE.to_string()),
        print_background: Some(true),
        paper_width: Some(PAPER_WIDTH_IN),
        paper_height: Some(PAPER_HEIGHT_IN),
        margin_top: Some(MARGIN_TOP_BOTTOM_IN),
        margin_bottom: Some(MARGIN_TOP_BOTTOM_IN),
        margin_left: Some(MARGIN_LEFT_RIGHT_IN),
        margin_right: Some(MARGIN_LEFT_RIGHT_IN),
        ..Default::default()
    }
}

/// Whether a Chrome/Chromium executable can be discovered on this system.
///
/// Rendering will fail without one; tests use this to skip instead.
pub fn chrome_available() -> bool {
    headless_chrome::browser::default_executable().is_ok()
}

/// Render a complete HTML document to PDF bytes.
///
/// Stages the document in a temporary file, navigates a fresh headless tab
/// to it, and prints. Every failure is reported as the library-provided
/// message; there are no retries.
pub fn render_to_bytes(html: &str) -> Result<Vec<u8>, String> {
    let mut staged = tempfile::Builder::new()
        .prefix("manual2pdf-")
        .suffix(".html")
        .tempfile()
        .map_err(|e| format!("Failed to stage HTML for rendering: {}", e))?;
    staged
        .write_all(html.as_bytes())
        .map_err(|e| format!("Failed to stage HTML for rendering: {}", e))?;
    staged
        .flush()
        .map_err(|e| format!("Failed to stage HTML for rendering: {}", e))?;

    let url = format!("file://{}", staged.path().display());
    debug!("Staged HTML document at {}", url);

    let launch = LaunchOptions::default_builder()
        .headless(true)
        // the Chrome sandbox cannot start when running as root in a container
        .sandbox(false)
        .build()
        .map_err(|e| format!("Failed to configure browser launch: {}", e))?;
    let browser = Browser::new(launch).map_err(|e| format!("Failed to launch browser: {}", e))?;
    let tab = browser
        .new_tab()
        .map_err(|e| format!("Failed to open browser tab: {}", e))?;

    tab.navigate_to(&url)
        .and_then(|t| t.wait_until_navigated())
        .map_err(|e| format!("Failed to load document: {}", e))?;

    let bytes = tab
        .print_to_pdf(Some(print_options()))
        .map_err(|e| format!("Failed to print PDF: {}", e))?;
    info!("Rendered {} PDF bytes", bytes.len());
    Ok(bytes)
}

/// Render a complete HTML document and write the PDF to `path`.
///
/// Returns `None` on success, or the error message on failure.
pub fn render(html: &str, path: &str) -> Option<String> {
    match render_to_bytes(html) {
        Ok(bytes) => std::fs::write(path, bytes)
            .err()
            .map(|e| format!("Failed to write PDF to {}: {}", path, e)),
        Err(e) => Some(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_options_fix_a4_geometry() {
        let options = print_options();
        assert_eq!(options.paper_width, Some(8.27));
        assert_eq!(options.paper_height, Some(11.69));
        assert_eq!(options.margin_top, options.margin_bottom);
        assert_eq!(options.margin_left, options.margin_right);
        assert_eq!(options.landscape, Some(false));
    }

    #[test]
    fn test_footer_carries_page_number() {
        let options = print_options();
        assert_eq!(options.display_header_footer, Some(true));
        let footer = options.footer_template.unwrap();
        assert!(footer.contains("pageNumber"));
        // The default Chrome header (date + title) must be suppressed.
        assert_eq!(options.header_template.unwrap(), "<div></div>");
    }

    #[test]
    fn test_chrome_discovery_does_not_panic() {
        // Environment-dependent answer, but discovery itself must be safe.
        let _ = chrome_available();
    }
}
