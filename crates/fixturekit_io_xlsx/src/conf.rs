//! XLSX constants and default preset factories.

use crate::spec::{
    EnumAlignH, EnumAlignV, SpecCellFormat, SpecColumnWidthPolicy, SpecDateTextPromotion,
    SpecXlsxWriteOptions,
};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Sheet name used when none is configured.
pub const C_SHEET_NAME_DEFAULT: &str = "Sheet1";

/// Header fill color (accent blue).
pub const N_COLOR_HEADER_FILL: u32 = 0x4472C4;
/// Header font color.
pub const N_COLOR_HEADER_FONT: u32 = 0xFFFFFF;

/// Display pattern for calendar dates without a time component.
pub const C_NUM_FORMAT_DATE: &str = "yyyy-mm-dd";
/// Display pattern for date-with-time values.
pub const C_NUM_FORMAT_DATETIME: &str = "yyyy-mm-dd hh:mm:ss";

/// Characters added to the longest rendered value before scaling.
pub const N_WIDTH_PADDING_CHARS: usize = 2;
/// Multiplier applied to the padded length.
pub const N_WIDTH_SCALE: f64 = 1.2;

/// Anchored shape accepted for date-text promotion (`YYYY-MM-DD`).
pub const C_PATTERN_DATE_TEXT: &str = r"^\d{4}-\d{2}-\d{2}$";
/// Anchored shape accepted for datetime-text promotion (`YYYY-MM-DD HH:MM:SS`).
pub const C_PATTERN_DATETIME_TEXT: &str = r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$";

/// Canonical format preset keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumFmtKey {
    /// Header cell format.
    Header,
    /// Date-only display format.
    Date,
    /// Date-and-time display format.
    DateTime,
}

/// Build the named format preset for `key`.
pub fn derive_default_xlsx_format(key: EnumFmtKey) -> SpecCellFormat {
    match key {
        EnumFmtKey::Header => SpecCellFormat {
            bold: Some(true),
            align: Some(EnumAlignH::Center),
            valign: Some(EnumAlignV::Center),
            bg_color: Some(N_COLOR_HEADER_FILL),
            font_color: Some(N_COLOR_HEADER_FONT),
            ..Default::default()
        },
        EnumFmtKey::Date => SpecCellFormat {
            num_format: Some(C_NUM_FORMAT_DATE.to_string()),
            ..Default::default()
        },
        EnumFmtKey::DateTime => SpecCellFormat {
            num_format: Some(C_NUM_FORMAT_DATETIME.to_string()),
            ..Default::default()
        },
    }
}

/// Build default write options.
pub fn derive_default_xlsx_write_options() -> SpecXlsxWriteOptions {
    SpecXlsxWriteOptions {
        sheet_name: C_SHEET_NAME_DEFAULT.to_string(),
        fmt_header: derive_default_xlsx_format(EnumFmtKey::Header),
        fmt_date: derive_default_xlsx_format(EnumFmtKey::Date),
        fmt_datetime: derive_default_xlsx_format(EnumFmtKey::DateTime),
        policy_width: SpecColumnWidthPolicy::default(),
        date_text_promotion: SpecDateTextPromotion::default(),
    }
}
