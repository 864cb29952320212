//! Stateless helper utilities used by the XLSX writer kernel.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::conf::{
    C_PATTERN_DATE_TEXT, C_PATTERN_DATETIME_TEXT, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::{EnumCellDisplay, EnumCellValue, FixtureXlsxError, Result, SpecColumnWidthPolicy};

////////////////////////////////////////////////////////////////////////////////
// #region CellRendering

/// Render a value the way it is measured for width inference.
///
/// Returns `None` for an absent value so callers skip it explicitly.
pub fn render_cell_text(value: &EnumCellValue) -> Option<String> {
    match value {
        EnumCellValue::None => None,
        EnumCellValue::String(s) => Some(s.clone()),
        EnumCellValue::Integer(n) => Some(n.to_string()),
        EnumCellValue::Number(n) => Some(n.to_string()),
        EnumCellValue::Boolean(b) => Some(if *b { "True" } else { "False" }.to_string()),
        EnumCellValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
        EnumCellValue::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
    }
}

/// Character length of a rendered value (Unicode scalar values).
pub fn estimate_text_len(s: &str) -> usize {
    s.chars().count()
}

/// Display pattern implied by the value type alone.
///
/// Text never receives a date pattern, even when it looks like a date.
pub fn derive_cell_display(value: &EnumCellValue) -> EnumCellDisplay {
    match value {
        EnumCellValue::Date(_) => EnumCellDisplay::Date,
        EnumCellValue::DateTime(_) => EnumCellDisplay::DateTime,
        _ => EnumCellDisplay::General,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ColumnWidth

/// Width for a column whose longest rendered value has `max_len` characters.
pub fn calculate_column_width(max_len: usize, policy: &SpecColumnWidthPolicy) -> f64 {
    let n_width = (max_len + policy.width_padding) as f64 * policy.width_scale;
    match policy.width_min {
        Some(n_min) => f64::max(n_width, n_min),
        None => n_width,
    }
}

/// Derive per-column widths from header texts plus every body value.
///
/// Absent values are skipped; a column with nothing measurable keeps the
/// zero-length baseline.
pub fn derive_column_widths<R>(
    headers: &[String],
    rows: &[R],
    policy: &SpecColumnWidthPolicy,
) -> Vec<f64>
where
    R: AsRef<[EnumCellValue]>,
{
    let mut l_max_len_by_col: Vec<usize> = headers.iter().map(|h| estimate_text_len(h)).collect();

    for row in rows {
        for (n_idx_col, value) in row.as_ref().iter().enumerate() {
            let Some(n_max_len) = l_max_len_by_col.get_mut(n_idx_col) else {
                continue;
            };
            let Some(c_text) = render_cell_text(value) else {
                continue;
            };
            *n_max_len = usize::max(*n_max_len, estimate_text_len(&c_text));
        }
    }

    l_max_len_by_col
        .into_iter()
        .map(|n_max_len| calculate_column_width(n_max_len, policy))
        .collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DateTextPromotion

/// Outcome of checking one text value for promotion.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumPromotionOutcome {
    /// Not a candidate; keep the value.
    Unchanged,
    /// Exact ISO shape that parsed into a real date/datetime.
    Promoted(EnumCellValue),
    /// ISO shape but not a valid calendar value; kept as text.
    Rejected(String),
}

/// Compiled matchers for the promotion shapes.
#[derive(Debug, Clone)]
pub struct SpecDateTextMatchers {
    re_date: Regex,
    re_datetime: Regex,
}

impl SpecDateTextMatchers {
    /// Compile the `YYYY-MM-DD` and `YYYY-MM-DD HH:MM:SS` matchers.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_date: compile_pattern(C_PATTERN_DATE_TEXT)?,
            re_datetime: compile_pattern(C_PATTERN_DATETIME_TEXT)?,
        })
    }

    /// Try to promote `value` for a column flagged as date and/or datetime.
    pub fn promote(
        &self,
        value: &EnumCellValue,
        if_is_date_col: bool,
        if_is_datetime_col: bool,
    ) -> EnumPromotionOutcome {
        let EnumCellValue::String(s) = value else {
            return EnumPromotionOutcome::Unchanged;
        };

        if if_is_date_col && self.re_date.is_match(s) {
            return match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                Ok(d) => EnumPromotionOutcome::Promoted(EnumCellValue::Date(d)),
                Err(err) => EnumPromotionOutcome::Rejected(format!("{s:?}: {err}")),
            };
        }
        if if_is_datetime_col && self.re_datetime.is_match(s) {
            return match NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                Ok(dt) => EnumPromotionOutcome::Promoted(EnumCellValue::DateTime(dt)),
                Err(err) => EnumPromotionOutcome::Rejected(format!("{s:?}: {err}")),
            };
        }
        EnumPromotionOutcome::Unchanged
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|err| FixtureXlsxError::InvalidPattern {
        pattern: pattern.to_string(),
        message: err.to_string(),
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Convert a zero-based row index into the writer's row type.
pub fn cast_row_num(value: usize) -> Result<u32> {
    if value >= N_NROWS_EXCEL_MAX {
        return Err(FixtureXlsxError::RowIndexOverflow(value));
    }
    u32::try_from(value).map_err(|_| FixtureXlsxError::RowIndexOverflow(value))
}

/// Convert a zero-based column index into the writer's column type.
pub fn cast_col_num(value: usize) -> Result<u16> {
    if value >= N_NCOLS_EXCEL_MAX {
        return Err(FixtureXlsxError::ColIndexOverflow(value));
    }
    u16::try_from(value).map_err(|_| FixtureXlsxError::ColIndexOverflow(value))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
