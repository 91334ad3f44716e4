//! Rendering and JSON serialization for CLI output.

mod highlight;
mod style;

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use feedrank_engine::{Document, ScoredCandidate};
pub use highlight::TomlHighlighter;
use serde::Serialize;
pub use style::{dim, header, subheader, warning};

/// Maximum characters of a body shown in tables.
const SNIPPET_CHARS: usize = 60;

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Collapses whitespace and truncates a body for single-line display.
pub fn snippet(body: &str, max_chars: usize) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// A numbered table of documents.
pub fn documents_table(documents: &[&Document], first_position: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "ID", "Author", "Created", "Body"]);
    for (offset, doc) in documents.iter().enumerate() {
        table.add_row(vec![
            Cell::new(first_position + offset).set_alignment(CellAlignment::Right),
            Cell::new(&doc.id),
            Cell::new(&doc.author),
            Cell::new(doc.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(snippet(&doc.body, SNIPPET_CHARS)),
        ]);
    }
    table
}

/// Signal breakdown of one candidate, keyed by document ID.
#[derive(Serialize)]
pub struct ExplainRow<'a> {
    /// Document ID.
    pub id: &'a str,
    /// Interest similarity.
    pub interest: f32,
    /// Content similarity.
    pub content: f32,
    /// Freshness factor.
    pub freshness: f32,
    /// Weighted blend.
    pub combined: f32,
}

impl<'a> ExplainRow<'a> {
    /// Attaches document IDs to scored candidates.
    pub fn from_scores(scored: &[ScoredCandidate], candidates: &'a [Document]) -> Vec<Self> {
        scored
            .iter()
            .map(|s| Self {
                id: &candidates[s.index].id,
                interest: s.interest,
                content: s.content,
                freshness: s.freshness,
                combined: s.combined,
            })
            .collect()
    }
}

/// A table of per-candidate signals, in input order.
pub fn explain_table(rows: &[ExplainRow<'_>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["ID", "Interest", "Content", "Freshness", "Combined"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(format!("{:.3}", row.interest)),
            Cell::new(format!("{:.3}", row.content)),
            Cell::new(format!("{:.3}", row.freshness)),
            Cell::new(format!("{:.3}", row.combined)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn doc(id: &str, body: &str) -> Document {
        Document::new(
            id,
            body,
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap(),
            "alice",
        )
    }

    #[test]
    fn snippet_flattens_whitespace() {
        assert_eq!(snippet("a  b\n\nc", 20), "a b c");
    }

    #[test]
    fn snippet_truncates_on_char_boundary() {
        let s = snippet("ééééééééé", 5);
        assert_eq!(s.chars().count(), 5);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn documents_table_lists_rows() {
        let a = doc("p1", "hello world");
        let b = doc("p2", "second post");
        let rendered = documents_table(&[&a, &b], 21).to_string();
        assert!(rendered.contains("p1"));
        assert!(rendered.contains("22"));
        assert!(rendered.contains("2024-06-01 12:30"));
    }

    #[test]
    fn explain_rows_carry_ids() {
        let docs = vec![doc("p1", "x")];
        let scored = vec![ScoredCandidate {
            index: 0,
            interest: 0.5,
            content: 0.0,
            freshness: 1.0,
            combined: 0.5,
        }];
        let rows = ExplainRow::from_scores(&scored, &docs);
        assert_eq!(rows[0].id, "p1");
        assert!(explain_table(&rows).to_string().contains("0.500"));
    }
}
