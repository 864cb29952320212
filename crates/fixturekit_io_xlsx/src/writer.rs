//! XLSX writer kernel: plans one sheet from literal records, then renders it
//! through `rust_xlsxwriter`.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use rust_xlsxwriter::{
    Color, ExcelDateTime, Format, FormatAlign, Formula, Workbook, Worksheet,
};

use crate::spec::{
    EnumAlignH, EnumAlignV, EnumCellDisplay, EnumCellValue, EnumDateTextRule, FixtureXlsxError,
    Result, SpecCellFormat, SpecPlannedCell, SpecSheetPlan, SpecXlsxReport, SpecXlsxWriteOptions,
};
use crate::util::{
    EnumPromotionOutcome, SpecDateTextMatchers, cast_col_num, cast_row_num, derive_cell_display,
    derive_column_widths, sanitize_sheet_name,
};

/// Header rows written above the body.
const N_ROWS_HEADER: usize = 1;
/// Formula evaluating to empty text.
const C_FORMULA_EMPTY_TEXT: &str = "=\"\"";

/// Build the in-memory sheet for `headers` + `records`.
///
/// Values are carried through verbatim; the only rewrite is date-text
/// promotion when `options.date_text_promotion.rule` is
/// [`EnumDateTextRule::Promote`].
pub fn plan_sheet<S, R>(
    headers: &[S],
    records: &[R],
    options: &SpecXlsxWriteOptions,
) -> Result<SpecSheetPlan>
where
    S: AsRef<str>,
    R: AsRef<[EnumCellValue]>,
{
    if headers.is_empty() {
        return Err(FixtureXlsxError::EmptyHeader);
    }
    let l_headers: Vec<String> = headers.iter().map(|h| h.as_ref().to_string()).collect();
    let n_width = l_headers.len();

    for (idx_record, record) in records.iter().enumerate() {
        let n_values = record.as_ref().len();
        if n_values != n_width {
            return Err(FixtureXlsxError::RecordArity {
                idx_record,
                n_values,
                n_expected: n_width,
            });
        }
    }

    let cfg_promotion = &options.date_text_promotion;
    let matchers = match cfg_promotion.rule {
        EnumDateTextRule::Keep => None,
        EnumDateTextRule::Promote => Some(SpecDateTextMatchers::new()?),
    };

    let mut n_cells_promoted = 0usize;
    let mut l_warnings = Vec::new();
    let mut l_rows_values: Vec<Vec<EnumCellValue>> = Vec::with_capacity(records.len());

    for (idx_record, record) in records.iter().enumerate() {
        let mut l_values = Vec::with_capacity(n_width);
        for (idx_col, value) in record.as_ref().iter().enumerate() {
            let Some(matchers) = &matchers else {
                l_values.push(value.clone());
                continue;
            };

            let if_is_date_col = cfg_promotion.cols_date.contains(&idx_col);
            let if_is_datetime_col = cfg_promotion.cols_datetime.contains(&idx_col);
            match matchers.promote(value, if_is_date_col, if_is_datetime_col) {
                EnumPromotionOutcome::Unchanged => l_values.push(value.clone()),
                EnumPromotionOutcome::Promoted(promoted) => {
                    log::debug!("promoted record {idx_record} column {idx_col} to {promoted:?}");
                    n_cells_promoted += 1;
                    l_values.push(promoted);
                }
                EnumPromotionOutcome::Rejected(reason) => {
                    let c_msg = format!(
                        "record {idx_record} column {idx_col}: date-shaped text kept as text ({reason})"
                    );
                    log::warn!("{c_msg}");
                    l_warnings.push(c_msg);
                    l_values.push(value.clone());
                }
            }
        }
        l_rows_values.push(l_values);
    }

    let widths_by_col = derive_column_widths(&l_headers, &l_rows_values, &options.policy_width);

    let rows = l_rows_values
        .into_iter()
        .map(|l_values| {
            l_values
                .into_iter()
                .map(|value| SpecPlannedCell {
                    display: derive_cell_display(&value),
                    value,
                })
                .collect()
        })
        .collect();

    Ok(SpecSheetPlan {
        sheet_name: sanitize_sheet_name(&options.sheet_name, "_"),
        headers: l_headers,
        rows,
        widths_by_col,
        n_cells_promoted,
        warnings: l_warnings,
    })
}

/// Stateful workbook writer.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    options: SpecXlsxWriteOptions,
    fmt_header: Format,
    fmt_date: Format,
    fmt_datetime: Format,
    l_reports: Vec<SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path and options.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(path_file_out: PathBuf, options: SpecXlsxWriteOptions) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            fmt_header: derive_rust_xlsx_format(&options.fmt_header),
            fmt_date: derive_rust_xlsx_format(&options.fmt_date),
            fmt_datetime: derive_rust_xlsx_format(&options.fmt_datetime),
            options,
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Return immutable snapshot of per-sheet write reports.
    pub fn report(&self) -> Vec<SpecXlsxReport> {
        self.l_reports.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook.save(&self.path_file_out)?;
        log::info!("saved workbook to {}", self.path_file_out.display());
        self.if_closed = true;
        Ok(())
    }

    /// Plan and write one sheet.
    pub fn write_sheet<S, R>(&mut self, headers: &[S], records: &[R]) -> Result<SpecXlsxReport>
    where
        S: AsRef<str>,
        R: AsRef<[EnumCellValue]>,
    {
        if self.if_closed {
            return Err(FixtureXlsxError::WriterClosed);
        }
        let plan = plan_sheet(headers, records, &self.options)?;
        self.write_plan(&plan)
    }

    /// Render an already planned sheet.
    pub fn write_plan(&mut self, plan: &SpecSheetPlan) -> Result<SpecXlsxReport> {
        if self.if_closed {
            return Err(FixtureXlsxError::WriterClosed);
        }
        log::debug!(
            "writing sheet {:?}: {} rows x {} cols",
            plan.sheet_name,
            plan.height(),
            plan.width()
        );

        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&plan.sheet_name)?;

        for (idx_col, c_header) in plan.headers.iter().enumerate() {
            worksheet.write_string_with_format(
                cast_row_num(0)?,
                cast_col_num(idx_col)?,
                c_header,
                &self.fmt_header,
            )?;
        }

        let mut n_cells_blank = 0usize;
        for (idx_row, row) in plan.rows.iter().enumerate() {
            for (idx_col, cell) in row.iter().enumerate() {
                if cell.value.is_absent() {
                    n_cells_blank += 1;
                    continue;
                }
                let fmt_display = match cell.display {
                    EnumCellDisplay::General => None,
                    EnumCellDisplay::Date => Some(&self.fmt_date),
                    EnumCellDisplay::DateTime => Some(&self.fmt_datetime),
                };
                write_cell_with_format(
                    worksheet,
                    N_ROWS_HEADER + idx_row,
                    idx_col,
                    &cell.value,
                    fmt_display,
                )?;
            }
        }

        for (idx_col, n_width) in plan.widths_by_col.iter().enumerate() {
            worksheet.set_column_width(cast_col_num(idx_col)?, *n_width)?;
        }
        log::debug!("column widths for {:?}: {:?}", plan.sheet_name, plan.widths_by_col);

        let mut report = SpecXlsxReport {
            sheet_name: plan.sheet_name.clone(),
            n_rows_header: N_ROWS_HEADER,
            n_rows_data: plan.height(),
            n_cols: plan.width(),
            n_cells_blank,
            n_cells_promoted: plan.n_cells_promoted,
            widths_by_col: plan.widths_by_col.clone(),
            warnings: vec![],
        };
        for c_warning in &plan.warnings {
            report.warn(c_warning);
        }

        self.l_reports.push(report.clone());
        Ok(report)
    }
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: Option<&Format>,
) -> Result<()> {
    let n_row = cast_row_num(row_idx)?;
    let n_col = cast_col_num(col_idx)?;

    match value {
        EnumCellValue::None => {}
        EnumCellValue::String(val) if val.is_empty() => {
            // write_string drops "", so store a formula whose cached value is ""
            let formula = Formula::new(C_FORMULA_EMPTY_TEXT).set_result("");
            worksheet.write_formula(n_row, n_col, formula)?;
        }
        EnumCellValue::String(val) => {
            worksheet.write_string(n_row, n_col, val)?;
        }
        EnumCellValue::Integer(val) => {
            worksheet.write_number(n_row, n_col, *val as f64)?;
        }
        EnumCellValue::Number(val) => {
            worksheet.write_number(n_row, n_col, *val)?;
        }
        EnumCellValue::Boolean(val) => {
            worksheet.write_boolean(n_row, n_col, *val)?;
        }
        EnumCellValue::Date(val) => {
            let dt_excel = derive_excel_date(val)?;
            match format {
                Some(fmt) => worksheet.write_datetime_with_format(n_row, n_col, &dt_excel, fmt)?,
                None => worksheet.write_datetime(n_row, n_col, &dt_excel)?,
            };
        }
        EnumCellValue::DateTime(val) => {
            let dt_excel = derive_excel_datetime(val)?;
            match format {
                Some(fmt) => worksheet.write_datetime_with_format(n_row, n_col, &dt_excel, fmt)?,
                None => worksheet.write_datetime(n_row, n_col, &dt_excel)?,
            };
        }
    }
    Ok(())
}

fn derive_excel_date(value: &NaiveDate) -> Result<ExcelDateTime> {
    let n_year = u16::try_from(value.year())
        .map_err(|_| FixtureXlsxError::DateOutOfRange(value.to_string()))?;
    // month/day come from a valid NaiveDate and always fit in u8.
    ExcelDateTime::from_ymd(n_year, value.month() as u8, value.day() as u8)
        .map_err(|_| FixtureXlsxError::DateOutOfRange(value.to_string()))
}

fn derive_excel_datetime(value: &NaiveDateTime) -> Result<ExcelDateTime> {
    derive_excel_date(&value.date())?
        .and_hms(
            value.hour() as u16,
            value.minute() as u8,
            value.second() as u8,
        )
        .map_err(|_| FixtureXlsxError::DateOutOfRange(value.to_string()))
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if spec.bold == Some(true) {
        format = format.set_bold();
    }
    if let Some(align) = spec.align {
        format = format.set_align(match align {
            EnumAlignH::Left => FormatAlign::Left,
            EnumAlignH::Center => FormatAlign::Center,
            EnumAlignH::Right => FormatAlign::Right,
        });
    }
    if let Some(valign) = spec.valign {
        format = format.set_align(match valign {
            EnumAlignV::Top => FormatAlign::Top,
            EnumAlignV::Center => FormatAlign::VerticalCenter,
            EnumAlignV::Bottom => FormatAlign::Bottom,
        });
    }
    if let Some(code) = &spec.num_format {
        format = format.set_num_format(code);
    }
    if let Some(rgb) = spec.bg_color {
        format = format.set_background_color(Color::RGB(rgb));
    }
    if let Some(rgb) = spec.font_color {
        format = format.set_font_color(Color::RGB(rgb));
    }

    format
}
