use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use super::ImportError;

/// How an uploaded file is read, decided from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// `.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`; the concrete format is
    /// sniffed from the bytes.
    Workbook,
    Csv,
}

impl SheetFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self, ImportError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SheetFormat::Workbook),
            "csv" => Ok(SheetFormat::Csv),
            _ => Err(ImportError::UnsupportedFile(file_name.to_string())),
        }
    }
}

/// Reads the first sheet of `bytes` as rows of cell text.
pub fn read_first_sheet(file_name: &str, bytes: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    match SheetFormat::from_file_name(file_name)? {
        SheetFormat::Workbook => read_workbook(bytes),
        SheetFormat::Csv => read_csv(bytes),
    }
}

fn read_workbook(bytes: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoSheet)??;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

fn read_csv(bytes: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Renders a cell the way it reads in the spreadsheet: whole numbers without
/// a fraction, dates as `YYYY-MM-DD`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => number_text(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) if dt.format("%H:%M:%S").to_string() == "00:00:00" => {
                dt.format("%Y-%m-%d").to_string()
            }
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => cell.to_string(),
        },
    }
}

fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            SheetFormat::from_file_name("scores.XLSX").unwrap(),
            SheetFormat::Workbook
        );
        assert_eq!(
            SheetFormat::from_file_name("march.results.xls").unwrap(),
            SheetFormat::Workbook
        );
        assert_eq!(SheetFormat::from_file_name("a.csv").unwrap(), SheetFormat::Csv);
        assert!(matches!(
            SheetFormat::from_file_name("notes.txt"),
            Err(ImportError::UnsupportedFile(_))
        ));
        assert!(SheetFormat::from_file_name("no_extension").is_err());
    }

    #[test]
    fn csv_rows_are_read_verbatim() {
        let rows = read_first_sheet("a.csv", b"\xEF\xBB\xBFName,Note\nAda,\"a, b\"\nBob\n").unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["Name".to_string(), "Note".to_string()],
                vec!["Ada".to_string(), "a, b".to_string()],
                vec!["Bob".to_string()],
            ]
        );
    }

    #[test]
    fn garbage_workbook_is_an_error() {
        assert!(matches!(
            read_first_sheet("a.xlsx", b"definitely not a zip"),
            Err(ImportError::Workbook(_))
        ));
    }

    #[test]
    fn cells_render_as_spreadsheet_text() {
        assert_eq!(cell_text(&Data::Float(3.0)), "3");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Int(-4)), "-4");
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("Passed".into())), "Passed");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
    }

    #[test]
    fn xlsx_first_sheet_is_read() {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "Weeks").unwrap();
        sheet.write_string(1, 0, "Ada").unwrap();
        sheet.write_number(1, 1, 6.0).unwrap();
        let other = workbook.add_worksheet();
        other.write_string(0, 0, "ignored").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let rows = read_first_sheet("book.xlsx", &bytes).unwrap();
        assert_eq!(rows[0], ["Name", "Weeks"]);
        assert_eq!(rows[1], ["Ada", "6"]);
    }
}
