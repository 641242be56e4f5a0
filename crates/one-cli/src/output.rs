use serde::Serialize;

/// Every command honors the global `--json` flag through this.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Columnar listing for the session history: each column as wide as its
/// widest cell, a dashed rule under the header.
pub fn print_columns(headers: &[&str], rows: &[Vec<String>]) {
    print!("{}", format_columns(headers, rows));
}

fn format_columns(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &widths, headers.iter().map(|h| h.to_string()));
    push_row(&mut out, &widths, widths.iter().map(|w| "-".repeat(*w)));
    for row in rows {
        push_row(&mut out, &widths, row.iter().cloned());
    }
    out
}

fn push_row(out: &mut String, widths: &[usize], cells: impl Iterator<Item = String>) {
    let line: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(w, cell)| format!("{cell:<width$}", width = w))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
