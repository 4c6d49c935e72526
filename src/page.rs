//! The document-to-page pipeline.
//!
//! A page is produced in three sequential steps:
//! 1. Load the document text from disk (`document`)
//! 2. Render the markup to sanitized HTML (`renderer`, `markdown`)
//! 3. Embed the fragment in the page shell (`template`)
//!
//! `composer` drives the steps; nothing is cached between runs.

mod composer;
mod document;
mod error;
mod highlight;
mod html;
mod markdown;
mod renderer;
mod sanitize;
mod template;

pub use composer::PageComposer;
pub use document::ReadErrorKind;
pub use error::PageError;
pub use highlight::SyntaxHighlighter;
