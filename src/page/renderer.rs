//! The markup renderer seam.
//!
//! The composer only sees [`MarkupRenderer`], so the markdown engine can be
//! replaced (or mocked in tests) without touching page composition.
//!
//! ```ignore
//! struct PlainText;
//!
//! impl MarkupRenderer for PlainText {
//!     fn name(&self) -> &'static str { "plain" }
//!     fn render(&self, markup: &str) -> Result<SafeHtml, RenderError> {
//!         Ok(SafeHtml::from_trusted(format!("<pre>{}</pre>", html_escape(markup))))
//!     }
//! }
//! ```

use super::html::SafeHtml;

/// Error reported by a markup renderer.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("invalid markdown extension: {0}")]
    InvalidExtension(String),

    /// Failure reported by the rendering engine itself.
    #[allow(dead_code)]
    #[error("render error: {0}")]
    Engine(String),
}

/// Converts markup text into sanitized HTML.
///
/// Implementations must be deterministic and free of side effects: the same
/// input always yields the same output.
pub trait MarkupRenderer: Send + Sync {
    /// The name of this renderer (e.g., "markdown").
    fn name(&self) -> &'static str;

    fn render(&self, markup: &str) -> Result<SafeHtml, RenderError>;
}
