//! The fixed HTML document shell.
//!
//! The HTML fragment produced by the Markdown conversion is wrapped in a
//! head/meta/style/body shell with the stylesheet embedded literally. There
//! are no runtime parameters: fonts, colors, and per-element spacing are
//! compile-time constants of the template, and the page geometry (size,
//! margins, footer) belongs to the print options in [`crate::pdf`].

/// Language tag carried on the `<html>` element. The manual this tool was
/// built for is written in Traditional Chinese.
pub const DOC_LANG: &str = "zh-TW";

/// The embedded stylesheet literal.
const STYLESHEET: &str = include_str!("../../assets/manual.css");

/// The stylesheet text compiled into the binary.
pub fn stylesheet() -> &'static str {
    STYLESHEET
}

/// Wrap an HTML fragment in the full document shell.
///
/// The fragment is included verbatim inside `<body>`; no escaping or
/// rewriting happens here.
pub fn compose(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <style>\n{style}</style>\n\
         </head>\n\
         <body>\n{body}</body>\n\
         </html>\n",
        lang = DOC_LANG,
        style = STYLESHEET,
        body = fragment,
    )
}
