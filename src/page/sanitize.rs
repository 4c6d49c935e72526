//! HTML sanitization for rendered markdown.

use ammonia::Builder as AmmoniaBuilder;

use super::html::SafeHtml;

/// Strips active content from rendered HTML.
///
/// Raw HTML is legal inside markdown, so everything the markdown engine
/// emits goes through here before it can become [`SafeHtml`].
pub struct Sanitizer {
    builder: AmmoniaBuilder<'static>,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self {
            builder: build_sanitizer(),
        }
    }

    pub fn clean(&self, html: &str) -> SafeHtml {
        SafeHtml::sanitized(self.builder.clean(html).to_string())
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_sanitizer() -> AmmoniaBuilder<'static> {
    let mut builder = AmmoniaBuilder::default();

    // Task list checkboxes
    builder.add_tags(&["input"]);
    builder.add_tag_attributes("input", &["type", "checked", "disabled"]);

    // Heading anchors and highlighter markup
    builder.add_generic_attributes(&["id", "class", "aria-label"]);
    builder.add_generic_attribute_prefixes(&["data-"]);

    builder
}
