//! Configuration templates for `feedrank init`.
//!
//! The template is stored as a valid TOML file holding the default values and
//! returned as a commented-out example configuration.

/// Configuration template (valid TOML, default values).
const TEMPLATE: &str = include_str!("../templates/config.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
///
/// Global configs never set `root`, so the body matches the local template
/// apart from the header line.
pub fn global_template() -> String {
    let mut out = String::from("# Global defaults, lowest precedence.\n");
    out.push_str(&comment_template(TEMPLATE));
    out
}

/// Converts a valid TOML template into a commented-out example config.
///
/// Lines that are already comments are preserved as-is. Non-comment, non-empty
/// lines get a "# " prefix. Empty lines are preserved.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Config,
        merge::{ParsedConfig, merge_configs},
        parse::parse_config,
    };

    #[test]
    fn template_parses_as_valid_toml() {
        let result = parse_config(TEMPLATE);
        assert!(result.is_ok(), "template failed to parse: {result:?}");
    }

    #[test]
    fn template_matches_defaults() {
        let parsed = ParsedConfig {
            path: "template.toml".into(),
            config: parse_config(TEMPLATE).unwrap(),
        };
        let merged = merge_configs(&[parsed]);
        let defaults = Config::default();

        assert_eq!(merged.ranking, defaults.ranking);
        assert_eq!(merged.cluster, defaults.cluster);
        assert_eq!(merged.feed, defaults.feed);
    }

    #[test]
    fn commented_templates_parse_as_empty() {
        for text in [local_template(), global_template()] {
            let config = parse_config(&text).unwrap();
            assert!(config.ranking.is_none());
            assert!(config.feed.is_none());
        }
    }

    #[test]
    fn comment_template_preserves_existing_comments() {
        let input = "# This is a comment\nkey = \"value\"\n";
        let result = comment_template(input);
        assert_eq!(result, "# This is a comment\n# key = \"value\"\n");
    }

    #[test]
    fn comment_template_handles_section_headers() {
        let input = "[section]\n\nkey = \"value\"\n";
        let result = comment_template(input);
        assert_eq!(result, "# [section]\n\n# key = \"value\"\n");
    }
}
