//! Row parser for the markdown team-analysis table.

use crate::model::TeamAnalysis;

fn split_cell(cell: &str) -> Vec<String> {
    cell.split("<br>").map(|part| part.trim().to_string()).collect()
}

/// One TeamAnalysis per data row, in row order. Data rows open with the
/// bold team code (`| **`); separator and header rows are skipped, as is
/// any row with fewer than six populated columns.
pub fn parse_analysis_table(input: &str) -> Vec<TeamAnalysis> {
    let mut rows = Vec::new();
    for line in input.lines() {
        let line = line.trim();
        if !line.starts_with("| **") || line.contains("---") || line.contains("Strong Points") {
            continue;
        }

        let cols: Vec<&str> = line
            .split('|')
            .map(str::trim)
            .filter(|col| !col.is_empty())
            .collect();
        if cols.len() < 6 {
            continue;
        }

        rows.push(TeamAnalysis {
            code: cols[0].replace("**", ""),
            strong_points: split_cell(cols[1]),
            weak_points: split_cell(cols[2]),
            title_probability: cols[3].to_string(),
            spof: cols[4].to_string(),
            best_xi: cols[5].to_string(),
        });
    }
    rows
}
