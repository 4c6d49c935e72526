use autumnus::{HtmlLinkedBuilder, formatter::Formatter, languages::Language, themes};

use super::html::html_escape;

/// Highlights fenced code blocks with CSS classes (tree-sitter, via autumnus).
///
/// The matching stylesheet comes from [`SyntaxHighlighter::generate_css`].
pub struct SyntaxHighlighter {
    theme_name: String,
}

impl SyntaxHighlighter {
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme_name: theme_name.to_string(),
        }
    }

    /// Highlight code and return HTML with CSS classes.
    ///
    /// Unrecognized languages and formatter failures produce a plain
    /// `<pre><code>` block.
    pub fn highlight(&self, code: &str, language: &str) -> String {
        self.try_highlight(code, language)
            .unwrap_or_else(|| Self::plain_code_block(code, language))
    }

    fn try_highlight(&self, code: &str, language: &str) -> Option<String> {
        let lang = Language::guess(language, code);
        let unrecognized = matches!(lang, Language::PlainText)
            && !matches!(language, "" | "plaintext" | "text");
        if unrecognized {
            return None;
        }

        let formatter = HtmlLinkedBuilder::new()
            .source(code)
            .lang(lang)
            .build()
            .ok()?;
        let mut output: Vec<u8> = Vec::new();
        formatter.format(&mut output).ok()?;
        String::from_utf8(output).ok()
    }

    /// Stylesheet for the configured theme, or `None` if the theme is unknown.
    pub fn generate_css(&self) -> Option<String> {
        let theme = themes::get(&self.theme_name).ok()?;
        Some(theme.css(false))
    }

    fn plain_code_block(code: &str, language: &str) -> String {
        let escaped = html_escape(code);
        if language.is_empty() {
            format!("<pre><code>{}</code></pre>", escaped)
        } else {
            format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                html_escape(language),
                escaped
            )
        }
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new("github_dark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_rust() {
        let highlighter = SyntaxHighlighter::default();
        let result = highlighter.highlight("fn main() {}", "rust");
        assert!(result.contains("<pre"));
        assert!(result.contains("</pre>"));
    }

    #[test]
    fn test_highlight_unknown_language() {
        let highlighter = SyntaxHighlighter::default();
        let result = highlighter.highlight("a < b", "unknown_lang_xyz");
        assert_eq!(
            result,
            "<pre><code class=\"language-unknown_lang_xyz\">a &lt; b</code></pre>"
        );
    }

    #[test]
    fn test_generate_css() {
        let css = SyntaxHighlighter::new("dracula").generate_css();
        assert!(css.is_some_and(|css| !css.is_empty()));
    }

    #[test]
    fn test_generate_css_unknown_theme() {
        assert!(SyntaxHighlighter::new("no-such-theme").generate_css().is_none());
    }
}
