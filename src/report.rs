//! Markdown report rendering
//!
//! The analysis and tagging modules produce ordered rows; this is the sink
//! side that turns them into GitHub pipe tables.

use crate::analysis::FrequencyTable;
use crate::tags::TagReport;

/// Render a padded Markdown pipe table
pub fn markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push('|');
    for (header, &width) in headers.iter().zip(&widths) {
        out.push_str(&format!(" {:<width$} |", header, width = width));
    }
    out.push('\n');

    out.push('|');
    for &width in &widths {
        out.push_str(&format!("{}|", "-".repeat(width + 2)));
    }
    out.push('\n');

    for row in rows {
        out.push('|');
        for (i, &width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&format!(" {:<width$} |", cell, width = width));
        }
        out.push('\n');
    }

    out
}

/// Shorten a narrative for a single table cell
fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

impl TagReport {
    /// Category/Keyword/Count table with a first-example excerpt per row
    pub fn to_markdown(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.category.clone(),
                    row.label.clone(),
                    row.count.to_string(),
                    row.examples
                        .first()
                        .map(|e| excerpt(e, 80))
                        .unwrap_or_default(),
                ]
            })
            .collect();
        markdown_table(&["Category", "Keyword", "Count", "Example"], &rows)
    }
}

impl FrequencyTable {
    pub fn to_markdown(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .entries
            .iter()
            .map(|entry| vec![entry.term.clone(), entry.count.to_string()])
            .collect();
        markdown_table(&[self.title.as_str(), "Count"], &rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FrequencyEntry;

    #[test]
    fn test_markdown_table_shape() {
        let table = markdown_table(
            &["Word", "Count"],
            &[
                vec!["officer".to_string(), "12".to_string()],
                vec!["gun".to_string(), "7".to_string()],
            ],
        );

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("| Word"));
        assert!(lines[1].starts_with("|---"));
        assert!(lines[2].contains("| officer |"));
        assert!(lines[3].contains("| gun"));
    }

    #[test]
    fn test_frequency_table_to_markdown() {
        let table = FrequencyTable {
            title: "Bigram".to_string(),
            entries: vec![FrequencyEntry {
                term: "pepper spray".to_string(),
                count: 3,
            }],
        };

        let rendered = table.to_markdown();
        assert!(rendered.contains("| Bigram"));
        assert!(rendered.contains("| pepper spray | 3"));
    }

    #[test]
    fn test_excerpt_truncates_long_text() {
        let long = "x".repeat(200);
        let short = excerpt(&long, 80);
        assert!(short.chars().count() <= 81);
        assert!(short.ends_with('…'));
    }
}
