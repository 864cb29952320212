//! Fixture definition models and errors.

use std::path::PathBuf;

use chrono::NaiveDate;
use fixturekit_io_xlsx::{
    EnumCellValue, FixtureXlsxError, SpecColumnWidthPolicy, SpecDateTextPromotion,
    SpecXlsxWriteOptions, derive_default_xlsx_write_options,
};
use thiserror::Error;

/// Fields per employee record.
pub const N_FIELDS: usize = 8;

/// One literal employee record, positionally aligned to the headers.
pub type TypeRecord = [EnumCellLiteral; N_FIELDS];

////////////////////////////////////////////////////////////////////////////////
// #region CellLiteral

/// Compile-time cell literal.
///
/// Kept separate from [`EnumCellValue`] so datasets can live in `static`
/// arrays; calendar literals are validated on conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnumCellLiteral {
    /// No value.
    Absent,
    /// Text, including empty and deliberately malformed text.
    Text(&'static str),
    /// Integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Calendar date `(year, month, day)`.
    Date(i32, u32, u32),
    /// Date with time `(year, month, day, hour, minute, second)`.
    DateTime(i32, u32, u32, u32, u32, u32),
}

impl EnumCellLiteral {
    /// Convert into the writer's value type.
    pub fn to_cell_value(&self) -> Result<EnumCellValue, String> {
        Ok(match *self {
            EnumCellLiteral::Absent => EnumCellValue::None,
            EnumCellLiteral::Text(s) => EnumCellValue::String(s.to_string()),
            EnumCellLiteral::Int(n) => EnumCellValue::Integer(n),
            EnumCellLiteral::Float(n) => EnumCellValue::Number(n),
            EnumCellLiteral::Bool(b) => EnumCellValue::Boolean(b),
            EnumCellLiteral::Date(y, m, d) => EnumCellValue::Date(derive_date(y, m, d)?),
            EnumCellLiteral::DateTime(y, m, d, hh, mi, ss) => {
                let dt = derive_date(y, m, d)?
                    .and_hms_opt(hh, mi, ss)
                    .ok_or_else(|| format!("invalid time {hh:02}:{mi:02}:{ss:02}"))?;
                EnumCellValue::DateTime(dt)
            }
        })
    }
}

fn derive_date(y: i32, m: u32, d: u32) -> Result<NaiveDate, String> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| format!("invalid date {y:04}-{m:02}-{d:02}"))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FixtureDefinition

/// Titled group of numbered edge-case descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecCaseGroup {
    /// Group title, printed on its own line when present.
    pub title: Option<&'static str>,
    /// Case descriptions; numbering continues across groups.
    pub cases: &'static [&'static str],
}

/// One fixture variant: literal dataset, output path and presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecFixture {
    /// Short identifier used in logs.
    pub name: &'static str,
    /// Worksheet name.
    pub sheet_name: &'static str,
    /// Header row.
    pub headers: &'static [&'static str; N_FIELDS],
    /// Literal records.
    pub records: &'static [TypeRecord],
    /// Output path, relative to the generation root.
    pub path_file_out: &'static str,
    /// Column width policy for this variant.
    pub policy_width: SpecColumnWidthPolicy,
    /// Date-text handling for this variant.
    pub date_text_promotion: SpecDateTextPromotion,
    /// Completion message printed before the output path.
    pub msg_done: &'static str,
    /// Heading printed above the case list.
    pub msg_cases_title: Option<&'static str>,
    /// Catalogue of embedded edge cases.
    pub case_groups: &'static [SpecCaseGroup],
}

impl SpecFixture {
    /// Convert literal records into writer values.
    pub fn derive_records(&self) -> Result<Vec<Vec<EnumCellValue>>, EnumFixtureError> {
        let mut l_records = Vec::with_capacity(self.records.len());
        for (idx_record, record) in self.records.iter().enumerate() {
            let mut l_values = Vec::with_capacity(N_FIELDS);
            for (idx_col, literal) in record.iter().enumerate() {
                let value = literal
                    .to_cell_value()
                    .map_err(|detail| EnumFixtureError::InvalidLiteral {
                        idx_record,
                        idx_col,
                        detail,
                    })?;
                l_values.push(value);
            }
            l_records.push(l_values);
        }
        Ok(l_records)
    }

    /// Writer options for this variant.
    pub fn derive_write_options(&self) -> SpecXlsxWriteOptions {
        SpecXlsxWriteOptions {
            sheet_name: self.sheet_name.to_string(),
            policy_width: self.policy_width.clone(),
            date_text_promotion: self.date_text_promotion.clone(),
            ..derive_default_xlsx_write_options()
        }
    }

    /// Total number of catalogued edge cases.
    pub fn n_cases(&self) -> usize {
        self.case_groups.iter().map(|group| group.cases.len()).sum()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Fixture generation failures.
#[derive(Debug, Error)]
pub enum EnumFixtureError {
    /// Writer kernel failure (planning, serialization, save).
    #[error(transparent)]
    Xlsx(#[from] FixtureXlsxError),
    /// Literal that is not a valid calendar value.
    #[error("invalid literal at record {idx_record}, column {idx_col}: {detail}")]
    InvalidLiteral {
        /// Zero-based record index.
        idx_record: usize,
        /// Zero-based column index.
        idx_col: usize,
        /// What was wrong.
        detail: String,
    },
    /// Output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        /// Directory that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_conversion_per_kind() {
        assert_eq!(
            EnumCellLiteral::Absent.to_cell_value(),
            Ok(EnumCellValue::None)
        );
        assert_eq!(
            EnumCellLiteral::Text("").to_cell_value(),
            Ok(EnumCellValue::String(String::new()))
        );
        assert_eq!(
            EnumCellLiteral::Int(999_999_999).to_cell_value(),
            Ok(EnumCellValue::Integer(999_999_999))
        );
        assert_eq!(
            EnumCellLiteral::Float(33.5).to_cell_value(),
            Ok(EnumCellValue::Number(33.5))
        );

        let dt = NaiveDate::from_ymd_opt(2025, 12, 8)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid datetime");
        assert_eq!(
            EnumCellLiteral::DateTime(2025, 12, 8, 9, 30, 0).to_cell_value(),
            Ok(EnumCellValue::DateTime(dt))
        );
    }

    #[test]
    fn test_literal_conversion_rejects_impossible_calendar_values() {
        assert!(EnumCellLiteral::Date(2021, 2, 30).to_cell_value().is_err());
        assert!(
            EnumCellLiteral::DateTime(2021, 2, 1, 25, 0, 0)
                .to_cell_value()
                .is_err()
        );
    }

    #[test]
    fn test_derive_records_reports_position_of_bad_literal() {
        static HEADERS: [&str; N_FIELDS] = ["a", "b", "c", "d", "e", "f", "g", "h"];
        static RECORDS: [TypeRecord; 1] = [[
            EnumCellLiteral::Text("x"),
            EnumCellLiteral::Absent,
            EnumCellLiteral::Absent,
            EnumCellLiteral::Absent,
            EnumCellLiteral::Absent,
            EnumCellLiteral::Date(2020, 13, 1),
            EnumCellLiteral::Absent,
            EnumCellLiteral::Absent,
        ]];
        let fixture = SpecFixture {
            name: "bad",
            sheet_name: "s",
            headers: &HEADERS,
            records: &RECORDS,
            path_file_out: "bad.xlsx",
            policy_width: SpecColumnWidthPolicy::default(),
            date_text_promotion: SpecDateTextPromotion::default(),
            msg_done: "done",
            msg_cases_title: None,
            case_groups: &[],
        };

        assert!(matches!(
            fixture.derive_records(),
            Err(EnumFixtureError::InvalidLiteral {
                idx_record: 0,
                idx_col: 5,
                ..
            })
        ));
    }
}
