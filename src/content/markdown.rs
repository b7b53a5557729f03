//! Markdown rendering with syntax highlighting

use anyhow::{anyhow, Result};
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::MarkdownConfig;

/// A heading found in a markdown body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub depth: u8,
    pub slug: String,
    pub text: String,
}

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme: Theme,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a renderer with the default theme and no line numbers
    pub fn new() -> Result<Self> {
        Self::from_config(&MarkdownConfig::default())
    }

    /// Create a renderer from the `markdown` section of the site config
    pub fn from_config(config: &MarkdownConfig) -> Result<Self> {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = theme_set
            .themes
            .remove(&config.highlight_theme)
            .ok_or_else(|| anyhow!("Unknown highlight theme: {}", config.highlight_theme))?;

        Ok(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            line_numbers: config.line_numbers,
        })
    }

    fn options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let mut events: Vec<Event> = Vec::new();
        // Some(lang) while inside a code block; lang may be empty
        let mut code_block: Option<String> = None;
        let mut code = String::new();

        for event in Parser::new_ext(markdown, Self::options()) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code_block = Some(match kind {
                        CodeBlockKind::Fenced(lang) => lang.to_string(),
                        CodeBlockKind::Indented => String::new(),
                    });
                    code.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_block.take().unwrap_or_default();
                    let lang = (!lang.is_empty()).then_some(lang.as_str());
                    events.push(Event::Html(CowStr::from(self.highlight_code(&code, lang))));
                }
                Event::Text(text) if code_block.is_some() => code.push_str(&text),
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Collect every heading in document order
    pub fn headings(markdown: &str) -> Vec<Heading> {
        let mut headings = Vec::new();
        let mut current: Option<(u8, String)> = None;

        for event in Parser::new_ext(markdown, Self::options()) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    current = Some((heading_depth(level), String::new()));
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, buf)) = current.as_mut() {
                        buf.push_str(&text);
                    }
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((depth, text)) = current.take() {
                        let text = text.trim().to_string();
                        headings.push(Heading {
                            depth,
                            slug: slug::slugify(&text),
                            text,
                        });
                    }
                }
                _ => {}
            }
        }

        headings
    }

    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        match highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme) {
            Ok(highlighted) if self.line_numbers => with_line_numbers(&highlighted, lang),
            Ok(highlighted) => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang, highlighted
            ),
            Err(e) => {
                tracing::debug!("Highlighting failed for {}: {}", lang, e);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang,
                    html_escape(code)
                )
            }
        }
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn with_line_numbers(code: &str, lang: &str) -> String {
    let lines: Vec<&str> = code.lines().collect();
    let gutter = (1..=lines.len())
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code"><pre>{}</pre></td></tr></table></figure>"#,
        lang,
        gutter,
        lines.join("\n")
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
