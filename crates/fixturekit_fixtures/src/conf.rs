//! Employee sheet layout and output locations shared by every fixture.

use fixturekit_io_xlsx::{EnumDateTextRule, SpecColumnWidthPolicy, SpecDateTextPromotion};

use crate::spec::N_FIELDS;

/// Employee header row shared by every fixture.
pub static HEADERS_EMPLOYEE: [&str; N_FIELDS] = [
    "이름",
    "나이",
    "부서",
    "직급",
    "연봉",
    "입사일",
    "최근 로그인",
    "재직여부",
];

pub const C_SHEET_NAME_EMPLOYEE: &str = "직원 정보";

pub const N_IDX_COL_HIRE_DATE: usize = 5;
pub const N_IDX_COL_LAST_LOGIN: usize = 6;

/// Width floor of the null-focused fixtures.
pub const N_WIDTH_MIN_NULL_FIXTURE: f64 = 12.0;

pub const C_PATH_SAMPLE: &str = "sample/직원정보.xlsx";
pub const C_PATH_EDGE_CASES: &str = "sample/직원정보_예외케이스.xlsx";
pub const C_PATH_NULL_EDGE_CASES: &str = "sample/직원정보_null_edge_cases.xlsx";
pub const C_PATH_NULL_EDGE_CASES_PROMOTED: &str = "sample/직원정보_null_edge_cases_promoted.xlsx";

pub fn derive_null_fixture_width_policy() -> SpecColumnWidthPolicy {
    SpecColumnWidthPolicy::clamped(N_WIDTH_MIN_NULL_FIXTURE)
}

/// Promote ISO date text in the hire-date and last-login columns.
pub fn derive_employee_date_promotion() -> SpecDateTextPromotion {
    SpecDateTextPromotion {
        rule: EnumDateTextRule::Promote,
        cols_date: vec![N_IDX_COL_HIRE_DATE],
        cols_datetime: vec![N_IDX_COL_LAST_LOGIN],
    }
}
