//! Markdown decoration.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::grammar::SwiftGrammar;
use crate::output::HtmlOutputFormat;
use crate::support::escape_html_entities;
use crate::syntax::SyntaxHighlighter;

const SKIP_HIGHLIGHTING_PREFIX: &str = "no-highlight";

/// A fence info line: a single word (language tag or the `no-highlight`
/// marker) alone on the first line of a code block.
static FENCE_INFO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[A-Za-z0-9_+-]+\n").expect("fence info pattern is valid"));

/// Decorates a Markdown document with highlighted code blocks.
///
/// Every fenced code block (delimited by rows of three backticks) is
/// replaced by highlighted HTML wrapped in `<pre class="glint"><code>`
/// elements; the rest of the document passes through untouched. A fence
/// info word on the opening row is stripped; the word `no-highlight` also
/// skips highlighting for that block, which is then HTML-escaped verbatim.
///
/// This API assumes that the passed Markdown is valid.
pub struct MarkdownDecorator {
    highlighter: SyntaxHighlighter<HtmlOutputFormat>,
}

impl Default for MarkdownDecorator {
    fn default() -> Self {
        MarkdownDecorator::new()
    }
}

impl MarkdownDecorator {
    /// Create a decorator highlighting code blocks with the Swift grammar.
    pub fn new() -> Self {
        MarkdownDecorator {
            highlighter: SyntaxHighlighter::with_grammar(
                HtmlOutputFormat::new(),
                SwiftGrammar::new(),
            ),
        }
    }

    /// Decorate all code blocks within the given Markdown string.
    pub fn decorate(&self, markdown: &str) -> String {
        let components: Vec<&str> = markdown.split("```").collect();
        let mut output = String::new();

        for (index, component) in components.iter().enumerate() {
            // Backtick fences alternate: even components are prose, odd
            // components are code blocks.
            if index % 2 == 0 {
                output.push_str(component);
                continue;
            }

            let block = component.trim();
            let (info, code) = split_fence_info(block);

            let rendered = if info == Some(SKIP_HIGHLIGHTING_PREFIX) {
                escape_html_entities(code)
            } else {
                self.highlighter.highlight(code)
            };

            output.push_str("<pre class=\"glint\"><code>\n");
            output.push_str(&rendered);
            output.push_str("\n</code></pre>");
        }

        output
    }
}

/// Split a trimmed code block into its fence info word (if any) and the
/// remaining code.
fn split_fence_info(block: &str) -> (Option<&str>, &str) {
    if let Some(found) = FENCE_INFO.find(block) {
        let info = block[found.range()].trim_end();
        return (Some(info), &block[found.end()..]);
    }

    // A block consisting of nothing but the marker still skips highlighting.
    if block == SKIP_HIGHLIGHTING_PREFIX {
        return (Some(block), "");
    }

    (None, block)
}
