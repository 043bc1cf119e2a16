//! Markdown rendering

use anyhow::Result;
use pulldown_cmark::{html, Options, Parser};

/// Markdown renderer for post bodies
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut output = String::new();
        html::push_html(&mut output, parser);
        Ok(output)
    }

    /// Render markdown, falling back to preformatted raw text on failure.
    /// Rendering problems never propagate past this point.
    pub fn render_or_fallback(&self, markdown: &str) -> String {
        match self.render(markdown) {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("markdown rendering failed: {}", e);
                format!("<pre>{}</pre>", markdown)
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Heading\n\nSome *text*.").unwrap();
        assert!(html.contains("<h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn test_render_gfm_table() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |").unwrap();
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_render_or_fallback_passes_through() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_or_fallback("plain body");
        assert!(html.contains("plain body"));
    }
}
