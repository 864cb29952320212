use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use fixturekit_fixtures::{
    EnumCellLiteral, SpecFixture, baseline, derive_all_fixtures, edge_cases, generate_fixture,
    null_edge_cases,
};
use pretty_assertions::assert_eq;

fn read_sheet(dir_root: &Path, fixture: &SpecFixture) -> Range<Data> {
    let mut workbook: Xlsx<_> =
        open_workbook(dir_root.join(fixture.path_file_out)).expect("open workbook");
    workbook
        .worksheet_range(fixture.sheet_name)
        .expect("employee sheet")
}

/// Cell at absolute sheet position; missing cells read as `Data::Empty`.
fn cell(range: &Range<Data>, idx_row: u32, idx_col: u32) -> Data {
    range
        .get_value((idx_row, idx_col))
        .cloned()
        .unwrap_or(Data::Empty)
}

fn text(s: &str) -> Data {
    Data::String(s.to_string())
}

/// Excel serial of a date cell; whole for date-only, fractional with a time.
fn serial(data: &Data) -> Option<f64> {
    match data {
        Data::DateTime(dt) => Some(dt.as_f64()),
        _ => None,
    }
}

fn assert_date_only(data: &Data) {
    let n_serial = serial(data).expect("date cell");
    assert_eq!(n_serial.fract(), 0.0, "{data:?}");
}

fn assert_date_with_time(data: &Data) {
    let n_serial = serial(data).expect("date cell");
    assert!(n_serial.fract() > 0.0, "{data:?}");
}

#[test]
fn test_all_fixtures_generate_into_one_root() {
    let dir_tmp = tempfile::tempdir().expect("tempdir");

    let l_reports: Vec<_> = derive_all_fixtures()
        .iter()
        .map(|fixture| generate_fixture(fixture, dir_tmp.path()).expect("generate"))
        .collect();

    assert_eq!(
        l_reports.iter().map(|r| r.n_rows_data).collect::<Vec<_>>(),
        vec![10, 12, 30, 30]
    );
    for fixture in derive_all_fixtures() {
        assert!(dir_tmp.path().join(fixture.path_file_out).is_file());
    }
}

#[test]
fn test_baseline_roundtrip() {
    let dir_tmp = tempfile::tempdir().expect("tempdir");
    let fixture = baseline::fixture();
    generate_fixture(&fixture, dir_tmp.path()).expect("generate");
    let range = read_sheet(dir_tmp.path(), &fixture);

    assert_eq!(range.height(), 11);
    assert_eq!(range.width(), 8);
    for (idx_col, c_header) in fixture.headers.iter().enumerate() {
        assert_eq!(cell(&range, 0, idx_col as u32), text(c_header));
    }
    assert_eq!(cell(&range, 4, 0), text("정수진"));
    assert_eq!(cell(&range, 4, 1), Data::Float(30.0));
    assert_date_only(&cell(&range, 4, 5));
    assert_date_with_time(&cell(&range, 4, 6));
    assert_eq!(cell(&range, 4, 7), Data::Bool(true));
}

#[test]
fn test_edge_cases_keep_dirty_values_verbatim() {
    let dir_tmp = tempfile::tempdir().expect("tempdir");
    let fixture = edge_cases::fixture();
    generate_fixture(&fixture, dir_tmp.path()).expect("generate");
    let range = read_sheet(dir_tmp.path(), &fixture);

    assert_eq!(range.height(), 13);
    assert_eq!(cell(&range, 2, 1), text("28세"));
    assert_eq!(cell(&range, 3, 4), text("7,000원"));
    assert_eq!(cell(&range, 4, 5), text("2021-09-20"));
    assert_eq!(cell(&range, 4, 6), text("2025-12-08 10:15:00"));
    assert_eq!(cell(&range, 5, 7), text("TRUE"));
    assert_eq!(cell(&range, 6, 1), Data::Empty);
    assert_eq!(cell(&range, 6, 6), Data::Empty);
    assert_eq!(cell(&range, 7, 1), Data::Float(33.5));
    assert_eq!(cell(&range, 10, 5), text("20/05/2020"));
    assert_eq!(cell(&range, 12, 5), text("invalid-date"));
    assert_eq!(cell(&range, 13, 1), text("  35  "));
}

#[test]
fn test_null_fixture_all_absent_row_is_isolated() {
    let dir_tmp = tempfile::tempdir().expect("tempdir");
    let fixture = null_edge_cases::fixture();
    let report = generate_fixture(&fixture, dir_tmp.path()).expect("generate");
    let range = read_sheet(dir_tmp.path(), &fixture);

    // entry 10 sits on sheet row 10 (header is row 0)
    for idx_col in 0..8u32 {
        assert_eq!(cell(&range, 10, idx_col), Data::Empty, "col {idx_col}");
    }
    assert_eq!(cell(&range, 9, 0), text("오현아"));
    assert_eq!(cell(&range, 9, 2), text("영업팀"));
    assert_eq!(cell(&range, 11, 0), Data::Empty);
    assert_eq!(cell(&range, 11, 1), Data::Float(38.0));
    assert_eq!(cell(&range, 11, 2), text("개발팀"));

    assert!(report.widths_by_col.iter().all(|w| *w >= 12.0));
}

#[test]
fn test_null_fixture_empty_text_survives_as_text() {
    let dir_tmp = tempfile::tempdir().expect("tempdir");
    let fixture = null_edge_cases::fixture();
    let report = generate_fixture(&fixture, dir_tmp.path()).expect("generate");
    let range = read_sheet(dir_tmp.path(), &fixture);

    // entries 14 and 30 carry "" where other rows carry absence
    assert_eq!(cell(&range, 14, 0), text(""));
    assert_eq!(cell(&range, 14, 2), text(""));
    assert_eq!(cell(&range, 30, 0), text(""));
    assert_eq!(cell(&range, 30, 7), text(""));
    assert_eq!(cell(&range, 30, 1), Data::Empty);
    assert_eq!(cell(&range, 30, 5), Data::Empty);

    let n_absent = fixture
        .records
        .iter()
        .flatten()
        .filter(|literal| matches!(literal, EnumCellLiteral::Absent))
        .count();
    assert_eq!(report.n_cells_blank, n_absent);
    assert_eq!(report.n_cells_blank, 33);
}

#[test]
fn test_null_fixture_boundary_values() {
    let dir_tmp = tempfile::tempdir().expect("tempdir");
    let fixture = null_edge_cases::fixture();
    generate_fixture(&fixture, dir_tmp.path()).expect("generate");
    let range = read_sheet(dir_tmp.path(), &fixture);

    assert_eq!(cell(&range, 14, 1), Data::Float(29.0));
    assert_eq!(cell(&range, 25, 7), Data::Float(1.0));
    assert_eq!(cell(&range, 27, 1), Data::Float(-5.0));
    assert_eq!(cell(&range, 28, 4), Data::Float(999_999_999.0));
    assert_eq!(cell(&range, 29, 1), Data::Float(0.0));
    assert_eq!(cell(&range, 17, 5), text("2020-06-15"));
}

#[test]
fn test_promoted_fixture_turns_iso_text_into_dates() {
    let dir_tmp = tempfile::tempdir().expect("tempdir");
    let fixture = null_edge_cases::fixture_promoted();
    let report = generate_fixture(&fixture, dir_tmp.path()).expect("generate");
    let range = read_sheet(dir_tmp.path(), &fixture);

    assert_eq!(report.n_cells_promoted, 2);
    assert_date_only(&cell(&range, 17, 5));
    assert_date_with_time(&cell(&range, 17, 6));
    assert_eq!(cell(&range, 20, 5), text("2021/03/01"));
    assert_eq!(cell(&range, 21, 5), text("20/05/2020"));
    assert_eq!(cell(&range, 23, 5), text("invalid-date"));
}
