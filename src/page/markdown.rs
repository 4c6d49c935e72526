//! Markdown rendering with heading anchors and syntax highlighting.

use std::collections::HashSet;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use super::highlight::SyntaxHighlighter;
use super::html::{SafeHtml, html_escape};
use super::renderer::{MarkupRenderer, RenderError};
use super::sanitize::Sanitizer;
use crate::config::MarkdownConfig;

/// Markdown renderer built on pulldown-cmark.
///
/// The parser output is post-processed (heading ids, highlighted code) and
/// then sanitized, so raw HTML in the document cannot inject scripts.
pub struct MarkdownRenderer {
    options: Options,
    highlighter: SyntaxHighlighter,
    sanitizer: Sanitizer,
}

impl MarkdownRenderer {
    /// Create a renderer with the extensions named in the config.
    pub fn new(config: &MarkdownConfig) -> Result<Self, RenderError> {
        Ok(Self {
            options: parse_extensions(&config.extensions)?,
            highlighter: SyntaxHighlighter::new(&config.highlight_theme),
            sanitizer: Sanitizer::new(),
        })
    }

    /// Render to HTML without sanitizing.
    fn render_unsanitized(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);

        let mut events: Vec<Event> = Vec::new();
        let mut heading: Option<HeadingState> = None;
        let mut code: Option<CodeState> = None;
        // Explicit `{#id}` ids win over generated slugs wherever they appear
        let mut used_ids: HashSet<String> = Parser::new_ext(markdown, self.options)
            .filter_map(|event| match event {
                Event::Start(Tag::Heading { id: Some(id), .. }) => Some(id.to_string()),
                _ => None,
            })
            .collect();

        for event in parser {
            match event {
                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }) => {
                    heading = Some(HeadingState {
                        level,
                        id: id.map(|id| id.to_string()),
                        classes: classes.iter().map(|c| c.to_string()).collect(),
                        attrs: attrs
                            .iter()
                            .map(|(k, v)| (k.to_string(), v.as_ref().map(|v| v.to_string())))
                            .collect(),
                        inner: Vec::new(),
                    });
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(state) = heading.take() {
                        events.push(Event::Html(state.into_html(&mut used_ids).into()));
                    }
                }
                Event::Start(Tag::CodeBlock(kind)) => {
                    let language = match kind {
                        CodeBlockKind::Fenced(info) => fence_language(&info).to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    code = Some(CodeState {
                        language,
                        content: String::new(),
                    });
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(state) = code.take() {
                        let highlighted = self.highlighter.highlight(&state.content, &state.language);
                        events.push(Event::Html(highlighted.into()));
                    }
                }
                Event::Text(text) if code.is_some() => {
                    if let Some(state) = code.as_mut() {
                        state.content.push_str(&text);
                    }
                }
                event => match heading.as_mut() {
                    Some(state) => state.inner.push(event),
                    None => events.push(event),
                },
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}

impl MarkupRenderer for MarkdownRenderer {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn render(&self, markup: &str) -> Result<SafeHtml, RenderError> {
        let html = self.render_unsanitized(markup);
        Ok(self.sanitizer.clean(&html))
    }
}

fn parse_extensions(extensions: &[String]) -> Result<Options, RenderError> {
    let mut options = Options::empty();
    for extension in extensions {
        match extension.as_str() {
            "definition_lists" => options.insert(Options::ENABLE_DEFINITION_LIST),
            "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
            "gfm" => options.insert(Options::ENABLE_GFM),
            "heading_attributes" => options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
            "smart_punctuation" => options.insert(Options::ENABLE_SMART_PUNCTUATION),
            "strikethrough" => options.insert(Options::ENABLE_STRIKETHROUGH),
            "tables" => options.insert(Options::ENABLE_TABLES),
            "tasklists" => options.insert(Options::ENABLE_TASKLISTS),
            other => return Err(RenderError::InvalidExtension(other.to_string())),
        }
    }
    Ok(options)
}

/// First word of a fence info string: "rust,ignore" -> "rust".
fn fence_language<'a>(info: &'a CowStr<'_>) -> &'a str {
    info.split([',', ' ', '{']).next().unwrap_or_default()
}

struct CodeState {
    language: String,
    content: String,
}

/// A heading whose events are held back until its id is known.
struct HeadingState<'a> {
    level: HeadingLevel,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
    inner: Vec<Event<'a>>,
}

impl HeadingState<'_> {
    fn into_html(self, used_ids: &mut HashSet<String>) -> String {
        let text: String = self
            .inner
            .iter()
            .filter_map(|event| match event {
                Event::Text(t) | Event::Code(t) => Some(t.as_ref()),
                _ => None,
            })
            .collect();

        let id = match self.id {
            Some(id) => id,
            None => unique_id(&slugify(&text), used_ids),
        };

        let class_attr = if self.classes.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", html_escape(&self.classes.join(" ")))
        };

        let extra_attrs = self
            .attrs
            .iter()
            .map(|(k, v)| match v {
                Some(val) => format!(" {}=\"{}\"", html_escape(k), html_escape(val)),
                None => format!(" {}", html_escape(k)),
            })
            .collect::<String>();

        let mut inner_html = String::new();
        html::push_html(&mut inner_html, self.inner.into_iter());

        let level = self.level as usize;
        let id = html_escape(&id);
        format!(
            "<h{level} id=\"{id}\"{class_attr}{extra_attrs}>{inner_html} <a class=\"header-anchor\" href=\"#{id}\" aria-label=\"Link to this heading\">#</a></h{level}>\n"
        )
    }
}

fn unique_id(base: &str, used_ids: &mut HashSet<String>) -> String {
    let base = if base.is_empty() { "section" } else { base };
    let mut id = base.to_string();
    let mut suffix = 1;
    while used_ids.contains(&id) {
        id = format!("{}-{}", base, suffix);
        suffix += 1;
    }
    used_ids.insert(id.clone());
    id
}

/// Convert heading text to a slug suitable for use as an HTML id.
fn slugify(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(char::is_whitespace, "-")
        .replace(|c: char| !c.is_alphanumeric() && c != '-' && c != '_', "")
}
