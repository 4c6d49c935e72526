use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use super::html::SafeHtml;
use crate::config::PageConfig;

const PAGE_TEMPLATE_NAME: &str = "page.html";
const BUILTIN_PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

#[derive(thiserror::Error, Debug)]
pub enum TemplateError {
    #[error("template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("failed to read template {0}: {1}")]
    Read(PathBuf, std::io::Error),
}

/// The page shell, wrapping Tera.
///
/// Strings from the layout are autoescaped; the content fragment is
/// inserted as-is.
pub struct PageTemplate {
    tera: Tera,
}

impl PageTemplate {
    /// The template bundled with the binary.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_source(BUILTIN_PAGE_TEMPLATE)
    }

    /// Load a replacement page template from disk.
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| TemplateError::Read(path.to_path_buf(), e))?;
        Self::from_source(&source)
    }

    fn from_source(source: &str) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    pub fn render(&self, page: &PageConfig, content: &SafeHtml) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("page", page);
        context.insert("content", content);

        Ok(self.tera.render(PAGE_TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_builtin(content: &str) -> String {
        PageTemplate::builtin()
            .unwrap()
            .render(&PageConfig::default(), &SafeHtml::from_trusted(content))
            .unwrap()
    }

    #[test]
    fn test_header_is_rendered() {
        let html = render_builtin("<p>body</p>");

        assert_eq!(html.matches("Mastering Next.js Interview").count(), 1);
        assert!(html.contains("100 Essential Interview Questions and Answers"));
        assert!(html.contains("src=\"/logo.svg\""));
        assert!(html.contains("width=\"128\""));
    }

    #[test]
    fn test_class_names_are_verbatim() {
        let html = render_builtin("");

        assert!(html.contains("class=\"px-4 py-8 mx-auto bg-[#0d1117] text-white\""));
        assert!(html.contains("class=\"w-10/12 xl:max-w-4xl my-12 mx-auto\""));
        assert!(html.contains("data-color-mode=\"auto\""));
        assert!(html.contains("data-light-theme=\"light\""));
        assert!(html.contains("data-dark-theme=\"dark\""));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/styles.css\">"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/highlight.css\">"));
    }

    #[test]
    fn test_content_is_not_escaped_again() {
        let html = render_builtin("<p>Tom &amp; Jerry</p>");

        assert!(html.contains("class=\"markdown-body\"><p>Tom &amp; Jerry</p></div>"));
        assert!(!html.contains("&amp;amp;"));
        assert!(!html.contains("&lt;p&gt;"));
    }

    #[test]
    fn test_empty_content_keeps_region() {
        let html = render_builtin("");
        assert!(html.contains("class=\"markdown-body\"></div>"));
    }

    #[test]
    fn test_layout_strings_are_escaped() {
        let page = PageConfig {
            title: "<b>Bold</b> & Co".to_string(),
            ..PageConfig::default()
        };

        let html = PageTemplate::builtin()
            .unwrap()
            .render(&page, &SafeHtml::default())
            .unwrap();

        assert!(html.contains("&lt;b&gt;Bold&lt;"));
        assert!(!html.contains("<b>Bold</b>"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<h1>{{ page.title }}</h1>{{ content | safe }}").unwrap();

        let html = PageTemplate::from_file(&path)
            .unwrap()
            .render(&PageConfig::default(), &SafeHtml::from_trusted("<p>x</p>"))
            .unwrap();

        assert_eq!(html, "<h1>Mastering Next.js Interview</h1><p>x</p>");
    }

    #[test]
    fn test_from_missing_file() {
        let result = PageTemplate::from_file(Path::new("/definitely/not/here.html"));
        assert!(matches!(result, Err(TemplateError::Read(_, _))));
    }
}
