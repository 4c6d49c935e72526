//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// =============================================================================
// Top-level config
// =============================================================================

/// The full folio configuration. Every section is optional in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Document configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Path to the document to render. Relative paths are resolved against
    /// the working directory each time the page is composed.
    #[serde(default = "default_document_path")]
    pub path: PathBuf,
}

fn default_document_path() -> PathBuf {
    PathBuf::from("README.md")
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: default_document_path(),
        }
    }
}

// =============================================================================
// Page configuration
// =============================================================================

/// Everything the page shell needs besides the rendered document.
///
/// This is serialized as-is into the template context as `page`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default)]
    pub logo: LogoConfig,
    /// Stylesheet hrefs linked from the page head, in order.
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Value of `data-color-mode` on the content region ("auto", "light", "dark")
    #[serde(default = "default_color_mode")]
    pub color_mode: String,
    #[serde(default = "default_light_theme")]
    pub light_theme: String,
    #[serde(default = "default_dark_theme")]
    pub dark_theme: String,
    /// Replacement page template (uses the bundled one if omitted)
    #[serde(default, skip_serializing)]
    pub template: Option<PathBuf>,
}

fn default_title() -> String {
    "Mastering Next.js Interview".to_string()
}

fn default_subtitle() -> String {
    "100 Essential Interview Questions and Answers".to_string()
}

fn default_stylesheets() -> Vec<String> {
    vec!["/styles.css".to_string(), "/highlight.css".to_string()]
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_color_mode() -> String {
    "auto".to_string()
}

fn default_light_theme() -> String {
    "light".to_string()
}

fn default_dark_theme() -> String {
    "dark".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            logo: LogoConfig::default(),
            stylesheets: default_stylesheets(),
            lang: default_lang(),
            color_mode: default_color_mode(),
            light_theme: default_light_theme(),
            dark_theme: default_dark_theme(),
            template: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoConfig {
    #[serde(default = "default_logo_src")]
    pub src: String,
    #[serde(default = "default_logo_size")]
    pub width: u32,
    #[serde(default = "default_logo_size")]
    pub height: u32,
    #[serde(default = "default_logo_alt")]
    pub alt: String,
}

fn default_logo_src() -> String {
    "/logo.svg".to_string()
}

fn default_logo_size() -> u32 {
    128
}

fn default_logo_alt() -> String {
    "the Fresh logo: a sliced lemon dripping with juice".to_string()
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            src: default_logo_src(),
            width: default_logo_size(),
            height: default_logo_size(),
            alt: default_logo_alt(),
        }
    }
}

// =============================================================================
// Markdown configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Extensions to enable for markdown processing
    #[serde(default = "default_markdown_extensions")]
    pub extensions: Vec<String>,
    /// Theme used for the `/highlight.css` stylesheet
    #[serde(default = "default_highlight_theme")]
    pub highlight_theme: String,
}

fn default_markdown_extensions() -> Vec<String> {
    vec![
        "definition_lists".to_string(),
        "footnotes".to_string(),
        "gfm".to_string(),
        "heading_attributes".to_string(),
        "strikethrough".to_string(),
        "tables".to_string(),
        "tasklists".to_string(),
    ]
}

fn default_highlight_theme() -> String {
    "github_dark".to_string()
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: default_markdown_extensions(),
            highlight_theme: default_highlight_theme(),
        }
    }
}

// =============================================================================
// Server configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Directory served for every path other than the page itself
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
        }
    }
}

// =============================================================================
// Logging configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
