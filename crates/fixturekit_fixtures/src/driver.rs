//! Fixture generation and the completion summary printed by the binaries.

use std::fs;
use std::path::Path;

use fixturekit_io_xlsx::{SpecXlsxReport, XlsxWriter};

use crate::spec::{EnumFixtureError, SpecFixture};

/// Write `fixture` under `dir_root`, creating the output directory as needed.
pub fn generate_fixture(
    fixture: &SpecFixture,
    dir_root: &Path,
) -> Result<SpecXlsxReport, EnumFixtureError> {
    let l_records = fixture.derive_records()?;
    let path_file_out = dir_root.join(fixture.path_file_out);

    if let Some(dir_parent) = path_file_out.parent() {
        fs::create_dir_all(dir_parent).map_err(|source| EnumFixtureError::OutputDir {
            path: dir_parent.to_path_buf(),
            source,
        })?;
    }

    let mut writer = XlsxWriter::new(path_file_out, fixture.derive_write_options());
    let report = writer.write_sheet(fixture.headers.as_slice(), &l_records)?;
    writer.close()?;

    log::info!("{}", report.format(&format!("[{}]", fixture.name)));
    Ok(report)
}

/// Completion message: output path, then the numbered case catalogue.
pub fn format_summary(fixture: &SpecFixture, report: &SpecXlsxReport) -> String {
    let mut l_lines = vec![format!("{}: {}", fixture.msg_done, fixture.path_file_out)];
    if fixture.case_groups.is_empty() {
        return l_lines.join("\n");
    }

    if let Some(c_title) = fixture.msg_cases_title {
        l_lines.push(String::new());
        l_lines.push(c_title.to_string());
    }
    let mut n_case = 0usize;
    for group in fixture.case_groups {
        if let Some(c_title) = group.title {
            l_lines.push(String::new());
            l_lines.push(c_title.to_string());
        }
        for c_case in group.cases {
            n_case += 1;
            l_lines.push(format!("{n_case:>3}. {c_case}"));
        }
    }

    if fixture.case_groups.iter().any(|group| group.title.is_some()) {
        l_lines.push(String::new());
        l_lines.push(format!("총 {}개의 테스트 케이스", report.n_rows_data));
    }
    l_lines.join("\n")
}

/// Generate `fixture` relative to the working directory and print its summary.
pub fn run_fixture(fixture: &SpecFixture) -> Result<(), EnumFixtureError> {
    let report = generate_fixture(fixture, Path::new("."))?;
    println!("{}", format_summary(fixture, &report));
    Ok(())
}
