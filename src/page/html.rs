//! Typed boundary between untrusted text and markup that is safe to embed.

use std::fmt;

use serde::{Serialize, Serializer};

/// An HTML fragment that has already been sanitized.
///
/// The page template inserts this value raw, so outside of tests the only
/// way to build one is the sanitizer (see [`super::sanitize::Sanitizer`]).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wrap fixed markup without sanitizing it.
    #[cfg(test)]
    pub(crate) fn from_trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Construct from the output of the sanitizer.
    pub(super) fn sanitized(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SafeHtml {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Escape HTML special characters.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<div>&</div>"), "&lt;div&gt;&amp;&lt;/div&gt;");
        assert_eq!(html_escape("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_from_trusted_is_verbatim() {
        let html = SafeHtml::from_trusted("<p>Tom &amp; Jerry</p>");
        assert_eq!(html.as_str(), "<p>Tom &amp; Jerry</p>");
        assert_eq!(html.to_string(), "<p>Tom &amp; Jerry</p>");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let html = SafeHtml::from_trusted("<em>x</em>");
        assert_eq!(serde_json::to_string(&html).unwrap(), "\"<em>x</em>\"");
    }
}
