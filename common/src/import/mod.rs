//! Bulk evaluation import.
//!
//! An uploaded spreadsheet is read into rows of text ([`sheet`]) and the rows
//! are mapped onto [`Evaluation`](crate::model::Evaluation) records by their
//! column headers ([`evaluation`]). The result is submitted as one batch by
//! the caller.

pub mod evaluation;
pub mod sheet;

use thiserror::Error;

pub use evaluation::{evaluations_from_rows, parse_evaluations};
pub use sheet::{read_first_sheet, SheetFormat};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("could not read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("could not read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook has no sheets")]
    NoSheet,

    #[error("sheet has no header row")]
    NoHeader,

    #[error("sheet has no data rows")]
    NoRows,
}
