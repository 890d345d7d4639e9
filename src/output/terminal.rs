//! Terminal output format.

use crate::output::{OutputBuilder, OutputFormat};
use crate::theming::{Color, Theme};
use crate::tokenizing::TokenType;

/// Output format generating a string with xterm-256 escape codes, for
/// printing highlighted code directly to a terminal. Tokens and plain text
/// are colored according to the given theme; whitespace passes through
/// unstyled.
pub struct TerminalOutputFormat {
    pub theme: Theme,
}

impl TerminalOutputFormat {
    pub fn new(theme: Theme) -> Self {
        TerminalOutputFormat { theme }
    }
}

impl OutputFormat for TerminalOutputFormat {
    type Builder = TerminalBuilder;

    fn make_builder(&self) -> TerminalBuilder {
        TerminalBuilder {
            theme: self.theme.clone(),
            text: String::new(),
        }
    }
}

/// Builder accumulating escape-coded terminal text.
pub struct TerminalBuilder {
    theme: Theme,
    text: String,
}

impl OutputBuilder for TerminalBuilder {
    type Output = String;

    fn add_token(&mut self, token: &str, token_type: &TokenType) {
        let color = self.theme.color_for(token_type);
        self.text.push_str(&colorized(token, color));
    }

    fn add_plain_text(&mut self, text: &str) {
        self.text.push_str(&colorized(text, self.theme.plain_text_color));
    }

    fn add_whitespace(&mut self, whitespace: &str) {
        self.text.push_str(whitespace);
    }

    fn build(self) -> String {
        self.text
    }
}

/// Wrap `text` in xterm 256-color foreground escape codes.
///
/// The format is described in the "88/256 Colors" section of
/// <https://misc.flogisoft.com/bash/tip_colors_and_formatting>.
fn colorized(text: &str, color: Color) -> String {
    format!("\u{001B}[38;5;{}m{}\u{001B}[39m", color.xterm_index(), text)
}
