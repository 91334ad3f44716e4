//! TOML highlighting for configuration output.

use std::io::{self, IsTerminal};

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

use super::style::RESET;

/// Highlights TOML for terminals and leaves it untouched otherwise.
pub struct TomlHighlighter {
    /// Syntax definitions, including TOML.
    syntax_set: SyntaxSet,
    /// Color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Whether stdout is a terminal.
    enabled: bool,
}

impl TomlHighlighter {
    /// Creates a highlighter that is active only when stdout is a terminal.
    pub fn for_stdout() -> Self {
        Self::new(io::stdout().is_terminal())
    }

    /// Creates a highlighter with highlighting explicitly on or off.
    pub fn new(enabled: bool) -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            enabled,
        }
    }

    /// Returns `content` with terminal color escapes when enabled.
    pub fn highlight(&self, content: &str) -> String {
        if !self.enabled {
            return content.to_string();
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_extension("toml")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let theme = self.theme_set.get(EmbeddedThemeName::Dracula);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(RESET);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_is_passthrough() {
        let hl = TomlHighlighter::new(false);
        let toml = "[feed]\nper_page = 20\n";
        assert_eq!(hl.highlight(toml), toml);
    }

    #[test]
    fn enabled_adds_escapes() {
        let hl = TomlHighlighter::new(true);
        let out = hl.highlight("[feed]\nper_page = 20\n");
        assert!(out.contains("\x1b["));
        assert!(out.contains("per_page"));
        assert!(out.ends_with(RESET));
    }
}
