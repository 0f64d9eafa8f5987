//! Spreadsheet extraction via calamine (OOXML and legacy binary formats).

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::{Result, SiftError};

/// Extract every sheet as text.
///
/// Per sheet: a `Sheet: <name>` header line, then each row's cell values
/// tab-joined, one row per line. Cell rendering: strings verbatim, numbers
/// as their decimal text form, booleans as `true`/`false`, formula cells
/// as their formula text, everything else as an empty string.
pub fn extract(path: &Path) -> Result<String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| SiftError::Extraction(format!("cannot open spreadsheet: {e}")))?;

    let mut out = String::new();
    for sheet_name in workbook.sheet_names().to_vec() {
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| SiftError::Extraction(format!("cannot read sheet '{sheet_name}': {e}")))?;
        // The value range only carries cached results; formula text lives
        // in a parallel range (empty for formats without formulas).
        let formulas = workbook
            .worksheet_formula(&sheet_name)
            .unwrap_or_else(|_| Range::new((0, 0), (0, 0)));

        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        out.push_str(&format!("Sheet: {sheet_name}\n"));
        for (r, row) in range.rows().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(c, cell)| {
                    let abs = (start_row + r as u32, start_col + c as u32);
                    render_cell(cell, formula_at(&formulas, abs))
                })
                .collect();
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }
    }

    Ok(out)
}

/// Formula text at an absolute cell position, if that cell has one.
fn formula_at(formulas: &Range<String>, abs: (u32, u32)) -> Option<&str> {
    formulas
        .get_value(abs)
        .map(String::as_str)
        .filter(|f| !f.is_empty())
}

/// Textual rendering of one cell.
///
/// A formula cell renders as its formula text, not its cached result.
fn render_cell(cell: &Data, formula: Option<&str>) -> String {
    if let Some(f) = formula {
        return f.to_string();
    }
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn test_render_cell() {
        assert_eq!(render_cell(&Data::String("hi".into()), None), "hi");
        assert_eq!(render_cell(&Data::Float(1.5), None), "1.5");
        assert_eq!(render_cell(&Data::Int(42), None), "42");
        assert_eq!(render_cell(&Data::Bool(true), None), "true");
        assert_eq!(render_cell(&Data::Empty, None), "");
    }

    #[test]
    fn test_formula_cell_renders_as_formula_text() {
        // The cached result loses to the formula text.
        assert_eq!(render_cell(&Data::Float(2.0), Some("A2*2")), "A2*2");
        assert_eq!(render_cell(&Data::String("cached".into()), Some("CONCAT(A1,B1)")), "CONCAT(A1,B1)");
    }

    #[test]
    fn test_workbook_rows_headers_and_formulas() {
        // table.xlsx: sheet "Data", row 1 = a|b, row 2 = 1 | formula A2*2
        // (cached value 2). Rows are newline-separated, cells tab-joined,
        // and the formula cell shows its formula text.
        let text = extract(&fixture("table.xlsx")).unwrap();
        assert_eq!(text, "Sheet: Data\na\tb\n1\tA2*2\n");
    }

    #[test]
    fn test_non_spreadsheet_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.xlsx");
        std::fs::write(&path, b"definitely not a workbook").unwrap();
        assert!(extract(&path).is_err());
    }
}
