use crate::pacuare::QueryResult;
use serde_json::Value;

const COLUMN_GAP: &str = "  ";

/// Render a result set as a right-aligned text table with a header line.
///
/// Every row is rendered; there is no truncation.
pub fn render_table(result: &QueryResult) -> String {
    let width = result
        .rows
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(result.columns.len());

    let header: Vec<String> = (0..width)
        .map(|i| result.columns.get(i).cloned().unwrap_or_default())
        .collect();
    let rows: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|row| {
            (0..width)
                .map(|i| row.get(i).map(render_cell).unwrap_or_default())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|cells| render_line(cells, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
