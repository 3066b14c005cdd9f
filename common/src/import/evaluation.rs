use std::collections::HashMap;

use crate::model::Evaluation;

use super::{read_first_sheet, ImportError};

const CANDIDATE_NAME: &str = "Candidate Name";
const COURSE_NAME: &str = "Course Name";
const COURSE_TYPE: &str = "Course Type";
const LOCATION: &str = "Location";
const DURATION: &str = "Duration";
const DATE: &str = "Date";
const STATUS: &str = "Status";
const REMARK: &str = "Remark";

/// Parses an uploaded spreadsheet into evaluations, one per data row.
pub fn parse_evaluations(file_name: &str, bytes: &[u8]) -> Result<Vec<Evaluation>, ImportError> {
    evaluations_from_rows(read_first_sheet(file_name, bytes)?)
}

/// Maps sheet rows onto evaluations.
///
/// The first non-blank row is the header. Columns are matched by their
/// (trimmed) header text; when a title repeats, the leftmost column is used.
/// Unknown columns are ignored and missing ones read as empty. `marks` is
/// never imported and is always 0. Blank rows are skipped, and a file with a
/// header but no data rows is rejected with [`ImportError::NoRows`] rather
/// than submitted as an empty batch.
pub fn evaluations_from_rows(rows: Vec<Vec<String>>) -> Result<Vec<Evaluation>, ImportError> {
    let mut rows = rows.into_iter().filter(|row| !is_blank(row));
    let header = rows.next().ok_or(ImportError::NoHeader)?;
    let mut columns: HashMap<String, usize> = HashMap::new();
    for (index, title) in header.iter().enumerate() {
        columns.entry(title.trim().to_string()).or_insert(index);
    }

    let evaluations: Vec<Evaluation> = rows
        .map(|row| {
            let cell = |title: &str| column_text(&columns, &row, title);
            Evaluation {
                candidate_name: cell(CANDIDATE_NAME),
                course_name: cell(COURSE_NAME),
                course_type: cell(COURSE_TYPE),
                location: cell(LOCATION),
                duration: cell(DURATION),
                date: cell(DATE),
                status: cell(STATUS),
                remark: cell(REMARK),
                marks: 0.0,
            }
        })
        .collect();

    if evaluations.is_empty() {
        return Err(ImportError::NoRows);
    }
    Ok(evaluations)
}

fn column_text(columns: &HashMap<String, usize>, row: &[String], title: &str) -> String {
    columns
        .get(title)
        .and_then(|&index| row.get(index))
        .cloned()
        .unwrap_or_default()
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
Candidate Name,Course Name,Course Type,Location,Duration,Date,Status,Marks
Ada Lovelace,Rust 101,Basic,HQ,2 weeks,2024-03-01,Passed,91
Alan Turing,Async Rust,Advanced,Annex,3 weeks,2024-03-08,Failed,40
,,,,,,,
Grace Hopper,Rust 101,Basic,HQ,2 weeks,2024-03-15,Passed,88
";

    #[test]
    fn each_data_row_becomes_an_evaluation() {
        let evaluations = parse_evaluations("march.csv", SHEET.as_bytes()).unwrap();
        assert_eq!(evaluations.len(), 3);

        let ada = &evaluations[0];
        assert_eq!(ada.candidate_name, "Ada Lovelace");
        assert_eq!(ada.course_name, "Rust 101");
        assert_eq!(ada.course_type, "Basic");
        assert_eq!(ada.location, "HQ");
        assert_eq!(ada.duration, "2 weeks");
        assert_eq!(ada.date, "2024-03-01");
        assert_eq!(ada.status, "Passed");
        assert_eq!(ada.remark, "", "no Remark column");
        assert_eq!(evaluations[2].candidate_name, "Grace Hopper");
    }

    #[test]
    fn marks_column_is_never_imported() {
        let evaluations = parse_evaluations("march.csv", SHEET.as_bytes()).unwrap();
        assert!(evaluations.iter().all(|e| e.marks == 0.0));
    }

    #[test]
    fn columns_match_by_header_not_position() {
        let rows = vec![
            vec!["Remark".into(), " Candidate Name ".into(), "Extra".into()],
            vec!["late".into(), "Ada".into(), "x".into()],
        ];
        let evaluations = evaluations_from_rows(rows).unwrap();
        assert_eq!(evaluations[0].candidate_name, "Ada");
        assert_eq!(evaluations[0].remark, "late");
        assert_eq!(evaluations[0].course_name, "");
    }

    #[test]
    fn repeated_header_uses_the_leftmost_column() {
        let rows = vec![
            vec!["Candidate Name".into(), "Status".into(), "Status".into()],
            vec!["Ada".into(), "Passed".into(), "Reviewed".into()],
        ];
        let evaluations = evaluations_from_rows(rows).unwrap();
        assert_eq!(evaluations[0].status, "Passed");
    }

    #[test]
    fn short_rows_read_missing_cells_as_empty() {
        let rows = vec![
            vec!["Candidate Name".into(), "Status".into()],
            vec!["Ada".into()],
        ];
        let evaluations = evaluations_from_rows(rows).unwrap();
        assert_eq!(evaluations[0].status, "");
    }

    #[test]
    fn header_only_sheet_has_nothing_to_submit() {
        assert!(matches!(
            parse_evaluations("a.csv", b"Candidate Name,Course Name\n"),
            Err(ImportError::NoRows)
        ));
    }

    #[test]
    fn empty_sheet_has_no_header() {
        assert!(matches!(
            evaluations_from_rows(vec![vec![String::new()]]),
            Err(ImportError::NoHeader)
        ));
    }

    #[test]
    fn workbook_rows_import_the_same_way() {
        let headers = ["Candidate Name", "Course Name", "Course Type", "Location", "Duration", "Date", "Status"];
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, title) in headers.iter().enumerate() {
            sheet.write_string(0, col as u16, *title).unwrap();
        }
        for row in 1..=4u32 {
            sheet.write_string(row, 0, &format!("Candidate {row}")).unwrap();
            sheet.write_string(row, 1, "Rust 101").unwrap();
            sheet.write_number(row, 4, 2.0).unwrap();
        }
        let bytes = workbook.save_to_buffer().unwrap();

        let evaluations = parse_evaluations("batch.xlsx", &bytes).unwrap();
        assert_eq!(evaluations.len(), 4);
        assert_eq!(evaluations[3].candidate_name, "Candidate 4");
        assert_eq!(evaluations[0].duration, "2");
        assert!(evaluations.iter().all(|e| e.marks == 0.0));
    }
}
