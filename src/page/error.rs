//! Page composition error types.

use super::document::DocumentReadError;
use super::renderer::RenderError;
use super::template::TemplateError;

/// Errors that can occur while composing the page.
///
/// Each stage's error is carried unchanged; there is no fallback content.
#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    DocumentRead(#[from] DocumentReadError),

    #[error("markup rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("page template failed: {0}")]
    Template(#[from] TemplateError),
}
