//! Detailed table reporter for terminal output with aligned columns.

use super::{ComplianceReport, ReportError, ReportFormat, ReportGenerator, ansi_color};
use crate::compliance::{Maturity, Section};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HEADERS: [&str; 5] = ["ELEMENT ID", "SECTION ID", "CRITERIA", "RESULT", "SCORE"];
/// Widest a free-text column may grow before its cells are truncated.
const MAX_COLUMN_WIDTH: usize = 60;

/// Per-element table followed by a category breakdown
pub struct DetailedReporter {
    /// Use colored output
    colored: bool,
}

impl DetailedReporter {
    /// Create a new detailed reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn maturity_color(maturity: Maturity) -> &'static str {
        match maturity {
            Maturity::None => "red",
            Maturity::Minimum => "yellow",
            Maturity::Recommended | Maturity::Aspirational => "green",
        }
    }
}

impl Default for DetailedReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for DetailedReporter {
    fn generate(&self, report: &ComplianceReport) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(
            &format!("{} ({})", report.report_name, report.subtitle),
            "bold",
        ));
        lines.push(format!(
            "{}  {}  {}  {}",
            self.color("File:", "cyan"),
            report.file_name,
            self.color("Framework:", "cyan"),
            report.framework
        ));
        lines.push(format!(
            "{}  {:.1}/{:.0}  required {:.1}  optional {:.1}",
            self.color("Score:", "cyan"),
            report.score.total,
            report.score.max_score,
            report.score.required,
            report.score.optional
        ));
        lines.push(String::new());

        let rows = table_rows(&report.sections);
        let widths = column_widths(&rows);
        let rule_width = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);

        let header: Vec<String> = HEADERS
            .iter()
            .zip(&widths)
            .map(|(h, w)| self.color(&pad(h, *w), "bold"))
            .collect();
        lines.push(header.join(" │ "));
        lines.push("─".repeat(rule_width));

        for (row, maturity) in &rows {
            let mut cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| pad(&truncate(cell, *w), *w))
                .collect();
            if let Some(score) = cells.last_mut() {
                *score = self.color(score, Self::maturity_color(*maturity));
            }
            lines.push(cells.join(" │ "));
        }
        lines.push("─".repeat(rule_width));
        lines.push(self.color("* optional section", "dim"));

        lines.push(String::new());
        lines.push(self.color("Category breakdown:", "bold"));
        for category in &report.score.categories {
            let marker = if category.required { "" } else { "*" };
            lines.push(format!(
                "  {}{} {}: {:.2} / {:.2}",
                category.section_id, marker, category.title, category.score, category.weight
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Detailed
    }
}

type Row = ([String; 5], Maturity);

/// Rows sorted by element id, then section id.
fn table_rows(sections: &[Section]) -> Vec<Row> {
    let mut sorted: Vec<&Section> = sections.iter().collect();
    sorted.sort_by(|a, b| {
        a.element_id
            .cmp(&b.element_id)
            .then_with(|| a.section_id.cmp(&b.section_id))
    });
    sorted
        .into_iter()
        .map(|s| {
            let section_id = if s.required {
                s.section_id.clone()
            } else {
                format!("{}*", s.section_id)
            };
            (
                [
                    single_line(&s.element_id),
                    section_id,
                    single_line(&s.section_data_field),
                    single_line(&s.element_result),
                    format!("{:.1}", s.score),
                ],
                s.maturity,
            )
        })
        .collect()
}

fn column_widths(rows: &[Row]) -> [usize; 5] {
    let mut widths = HEADERS.map(|h| h.width());
    for (row, _) in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width().min(MAX_COLUMN_WIDTH));
        }
    }
    widths
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pad to a display width
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Truncate to a display width, marking the cut with an ellipsis
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
