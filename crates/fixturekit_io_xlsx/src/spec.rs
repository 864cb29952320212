//! Shared XLSX specification models, options and errors.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

use crate::conf::{N_WIDTH_PADDING_CHARS, N_WIDTH_SCALE};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Horizontal placement of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumAlignH {
    Left,
    Center,
    Right,
}

/// Vertical placement of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumAlignV {
    Top,
    Center,
    Bottom,
}

/// Cell format specification, translated to a `rust_xlsxwriter::Format` at write time.
///
/// Colors are `0xRRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    pub bold: Option<bool>,
    pub align: Option<EnumAlignH>,
    pub valign: Option<EnumAlignV>,
    /// Excel number format code, e.g. `yyyy-mm-dd`.
    pub num_format: Option<String>,
    pub bg_color: Option<u32>,
    pub font_color: Option<u32>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellValueSpecification

/// One cell value as authored. Written through without coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Absent value; no cell is created.
    None,
    /// Text value. `""` is empty text, which is distinct from [`EnumCellValue::None`].
    String(String),
    /// Integer value.
    Integer(i64),
    /// Floating-point value.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
    /// Calendar date without a time component.
    Date(NaiveDate),
    /// Date with a time component.
    DateTime(NaiveDateTime),
}

impl EnumCellValue {
    /// Whether the value is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, EnumCellValue::None)
    }
}

/// Display pattern kind attached to a written cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumCellDisplay {
    /// No special display pattern.
    #[default]
    General,
    /// Date-only pattern.
    Date,
    /// Date-and-time pattern.
    DateTime,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetPlanSpecification

/// Planned body cell: value plus its display kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecPlannedCell {
    /// Value written to the sheet.
    pub value: EnumCellValue,
    /// Display pattern applied to the cell.
    pub display: EnumCellDisplay,
}

/// In-memory sheet produced before serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSheetPlan {
    /// Sanitized sheet name.
    pub sheet_name: String,
    /// Header texts (row 1).
    pub headers: Vec<String>,
    /// Body grid, one inner vector per record.
    pub rows: Vec<Vec<SpecPlannedCell>>,
    /// Final display width per column.
    pub widths_by_col: Vec<f64>,
    /// Number of text cells promoted to dates.
    pub n_cells_promoted: usize,
    /// Non-fatal warnings raised during planning.
    pub warnings: Vec<String>,
}

impl SpecSheetPlan {
    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Planned cell at zero-based body position.
    pub fn cell(&self, row_idx: usize, col_idx: usize) -> Option<&SpecPlannedCell> {
        self.rows.get(row_idx).and_then(|row| row.get(col_idx))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Column width inference policy.
///
/// Width is `(max_len + width_padding) * width_scale`, then raised to
/// `width_min` when set.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecColumnWidthPolicy {
    /// Optional lower bound on the final width.
    pub width_min: Option<f64>,
    /// Characters added to the longest rendered value.
    pub width_padding: usize,
    /// Multiplier applied after padding.
    pub width_scale: f64,
}

impl Default for SpecColumnWidthPolicy {
    fn default() -> Self {
        Self {
            width_min: None,
            width_padding: N_WIDTH_PADDING_CHARS,
            width_scale: N_WIDTH_SCALE,
        }
    }
}

impl SpecColumnWidthPolicy {
    /// Default policy with a lower bound.
    pub fn clamped(width_min: f64) -> Self {
        Self {
            width_min: Some(width_min),
            ..Self::default()
        }
    }
}

/// How text that looks like a date is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumDateTextRule {
    /// Keep text as text (default).
    #[default]
    Keep,
    /// Promote exact ISO-shaped text in configured columns to date cells.
    Promote,
}

/// Date-text promotion settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecDateTextPromotion {
    /// Promotion rule.
    pub rule: EnumDateTextRule,
    /// Zero-based columns where `YYYY-MM-DD` text becomes a date.
    pub cols_date: Vec<usize>,
    /// Zero-based columns where `YYYY-MM-DD HH:MM:SS` text becomes a datetime.
    pub cols_datetime: Vec<usize>,
}

/// Writer-wide options. Immutable once handed to the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecXlsxWriteOptions {
    /// Requested sheet name; sanitized before use.
    pub sheet_name: String,
    /// Header cell format.
    pub fmt_header: SpecCellFormat,
    /// Format for date-only cells.
    pub fmt_date: SpecCellFormat,
    /// Format for date-with-time cells.
    pub fmt_datetime: SpecCellFormat,
    /// Column width policy.
    pub policy_width: SpecColumnWidthPolicy,
    /// Date-text promotion settings.
    pub date_text_promotion: SpecDateTextPromotion,
}

impl Default for SpecXlsxWriteOptions {
    fn default() -> Self {
        crate::conf::derive_default_xlsx_write_options()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-write call report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecXlsxReport {
    /// Sheet name actually used.
    pub sheet_name: String,
    /// Header rows written.
    pub n_rows_header: usize,
    /// Data rows written.
    pub n_rows_data: usize,
    /// Columns written.
    pub n_cols: usize,
    /// Absent body values (no cell created).
    pub n_cells_blank: usize,
    /// Text cells promoted to dates.
    pub n_cells_promoted: usize,
    /// Final display width per column.
    pub widths_by_col: Vec<f64>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} sheet={:?} rows={} cols={} blank={} promoted={} warnings={}",
            self.sheet_name,
            self.n_rows_data,
            self.n_cols,
            self.n_cells_blank,
            self.n_cells_promoted,
            self.warnings.len()
        )
    }
}

impl fmt::Display for SpecXlsxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[XLSX]"))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Result alias for writer-kernel calls.
pub type Result<T> = std::result::Result<T, FixtureXlsxError>;

/// Writer-kernel failures.
#[derive(Debug, Error)]
pub enum FixtureXlsxError {
    /// Failure reported by the workbook library (including save errors).
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),
    /// Record width differs from header width.
    #[error("record {idx_record} has {n_values} values; expected {n_expected}")]
    RecordArity {
        /// Zero-based record index.
        idx_record: usize,
        /// Values found in the record.
        n_values: usize,
        /// Header width.
        n_expected: usize,
    },
    /// Header list is empty.
    #[error("header must contain at least one column")]
    EmptyHeader,
    /// Row index exceeds the Excel grid.
    #[error("row index overflow: {0}")]
    RowIndexOverflow(usize),
    /// Column index exceeds the Excel grid.
    #[error("column index overflow: {0}")]
    ColIndexOverflow(usize),
    /// Date outside the range Excel can represent.
    #[error("date out of Excel range: {0}")]
    DateOutOfRange(String),
    /// Write attempted after the workbook was saved.
    #[error("cannot write after close()")]
    WriterClosed,
    /// Promotion pattern failed to compile.
    #[error("invalid date-text pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// Offending pattern.
        pattern: String,
        /// Compiler error text.
        message: String,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_policy_keeps_default_padding_and_scale() {
        let policy = SpecColumnWidthPolicy::clamped(12.0);
        assert_eq!(policy.width_min, Some(12.0));
        assert_eq!(policy.width_padding, 2);
        assert_eq!(policy.width_scale, 1.2);
        assert_eq!(SpecColumnWidthPolicy::default().width_min, None);
    }

    #[test]
    fn test_report_format_and_display() {
        let mut report = SpecXlsxReport {
            sheet_name: "직원 정보".to_string(),
            n_rows_header: 1,
            n_rows_data: 30,
            n_cols: 8,
            n_cells_blank: 41,
            n_cells_promoted: 0,
            widths_by_col: vec![],
            warnings: vec![],
        };
        report.warn("w");

        let txt = report.format("[XLSX]");
        assert_eq!(
            txt,
            "[XLSX] sheet=\"직원 정보\" rows=30 cols=8 blank=41 promoted=0 warnings=1"
        );
        assert_eq!(report.to_string(), txt);
    }

    #[test]
    fn test_empty_text_is_not_absent() {
        assert!(EnumCellValue::None.is_absent());
        assert!(!EnumCellValue::String(String::new()).is_absent());
        assert!(!EnumCellValue::Integer(0).is_absent());
    }
}
