use crate::config::OutputFormat;
use crate::domain::scoreboard::SummaryLine;

use super::errors::CommandResult;

pub const EMPTY_SUMMARY: &str = "The scoreboard is currently empty.";

const HEADERS: [&str; 4] = ["Home Team", "Home Score", "Away Team", "Away Score"];

/// Renders a summary in the requested format
///
/// An empty summary renders as a notice in table mode and as `[]` in JSON
/// mode.
pub fn render_summary(lines: &[SummaryLine], format: OutputFormat) -> CommandResult<String> {
    match format {
        OutputFormat::Table if lines.is_empty() => Ok(EMPTY_SUMMARY.to_string()),
        OutputFormat::Table => Ok(render_table(lines)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(lines)?),
    }
}

/// Renders summary lines as a boxed text table
pub fn render_table(lines: &[SummaryLine]) -> String {
    let rows: Vec<[String; 4]> = lines
        .iter()
        .map(|line| {
            [
                line.home_team.clone(),
                line.home_score.to_string(),
                line.away_team.clone(),
                line.away_score.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{border}+");

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format_row(&HEADERS.map(String::from), &widths));
    out.push_str(&border);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out.push_str(&border);
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!(" {cell:<width$} "))
        .collect();
    format!("|{}|\n", cells.join("|"))
}

/// Renders the `help` listing
pub fn render_help(commands: &[&str]) -> String {
    let mut out = String::from("Available commands:");
    for command in commands {
        out.push_str("\n  * ");
        out.push_str(command);
    }
    out
}
