//! Page composition: load, render, then wrap in the page template.

use super::document::DocumentSource;
use super::error::PageError;
use super::markdown::MarkdownRenderer;
use super::renderer::MarkupRenderer;
use super::template::PageTemplate;
use crate::config::{Config, PageConfig};

/// Builds the page from the configured document.
///
/// Immutable after construction. Every [`compose`](Self::compose) reads and
/// renders the document from scratch, so concurrent requests never share
/// intermediate state.
pub struct PageComposer {
    source: DocumentSource,
    renderer: Box<dyn MarkupRenderer>,
    template: PageTemplate,
    layout: PageConfig,
}

impl PageComposer {
    pub fn new(
        source: DocumentSource,
        renderer: Box<dyn MarkupRenderer>,
        template: PageTemplate,
        layout: PageConfig,
    ) -> Self {
        Self {
            source,
            renderer,
            template,
            layout,
        }
    }

    /// Create the production composer: markdown renderer plus the configured
    /// (or bundled) page template.
    pub fn from_config(config: &Config) -> Result<Self, PageError> {
        let renderer = MarkdownRenderer::new(&config.markdown)?;
        let template = match &config.page.template {
            Some(path) => PageTemplate::from_file(path)?,
            None => PageTemplate::builtin()?,
        };

        Ok(Self::new(
            DocumentSource::new(&config.document.path),
            Box::new(renderer),
            template,
            config.page.clone(),
        ))
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    /// Compose the full page.
    ///
    /// Fails if any stage fails; nothing is produced in that case.
    pub fn compose(&self) -> Result<String, PageError> {
        let text = self.source.load()?;

        let fragment = self.renderer.render(&text)?;
        tracing::debug!(
            renderer = self.renderer.name(),
            input_bytes = text.len(),
            output_bytes = fragment.as_str().len(),
            "rendered document"
        );

        let page = self.template.render(&self.layout, &fragment)?;
        tracing::debug!(bytes = page.len(), "composed page");
        Ok(page)
    }
}
