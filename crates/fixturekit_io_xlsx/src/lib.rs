//! `fixturekit_io_xlsx` v1:
//! Rust-side XLSX fixture kernel.
//!
//! Layout:
//! - `conf`   : constants and default presets
//! - `spec`   : specs/models/options/errors
//! - `util`   : pure helper functions (rendering, width estimation, promotion)
//! - `writer` : sheet planning and the `rust_xlsxwriter` writer
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_NUM_FORMAT_DATE, C_NUM_FORMAT_DATETIME, EnumFmtKey, N_LEN_EXCEL_SHEET_NAME_MAX,
    N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, derive_default_xlsx_format,
    derive_default_xlsx_write_options,
};
pub use spec::{
    EnumAlignH, EnumAlignV, EnumCellDisplay, EnumCellValue, EnumDateTextRule, FixtureXlsxError,
    Result, SpecCellFormat, SpecColumnWidthPolicy, SpecDateTextPromotion, SpecPlannedCell,
    SpecSheetPlan, SpecXlsxReport, SpecXlsxWriteOptions,
};
pub use util::{
    calculate_column_width, derive_cell_display, derive_column_widths, render_cell_text,
    sanitize_sheet_name,
};
pub use writer::{XlsxWriter, plan_sheet};
