//! Null-focused edge cases.
//!
//! Varies which positional fields are absent, separates empty text from
//! absence, and adds boundary numbers. Two variants share the records:
//! [`fixture`] keeps date-like text as text, [`fixture_promoted`] turns ISO
//! date text in the date columns into real date cells.

use fixturekit_io_xlsx::SpecDateTextPromotion;

use crate::conf::{
    C_PATH_NULL_EDGE_CASES, C_PATH_NULL_EDGE_CASES_PROMOTED, C_SHEET_NAME_EMPLOYEE,
    HEADERS_EMPLOYEE, derive_employee_date_promotion, derive_null_fixture_width_policy,
};
use crate::spec::EnumCellLiteral::{Absent, Bool, Date, DateTime, Float, Int, Text};
use crate::spec::{SpecCaseGroup, SpecFixture, TypeRecord};

#[rustfmt::skip]
pub static RECORDS: [TypeRecord; 30] = [
    // null
    [Text("김철수"), Int(32), Text("개발팀"), Text("대리"), Int(5500), Date(2020, 3, 15), DateTime(2025, 12, 8, 9, 30, 0), Bool(true)],
    [Text("이영희"), Absent, Text("마케팅팀"), Text("사원"), Int(4200), Date(2022, 6, 1), DateTime(2025, 12, 8, 8, 45, 0), Bool(true)],
    [Text("박민수"), Int(35), Absent, Absent, Int(7000), Date(2018, 1, 10), DateTime(2025, 12, 7, 18, 20, 0), Bool(true)],
    [Text("정수진"), Int(30), Text("인사팀"), Text("대리"), Absent, Date(2021, 9, 20), DateTime(2025, 12, 8, 10, 15, 0), Bool(true)],
    [Text("최동욱"), Int(42), Text("영업팀"), Text("부장"), Int(9000), Absent, DateTime(2025, 12, 8, 7, 30, 0), Bool(true)],
    [Text("강민지"), Int(26), Text("디자인팀"), Text("사원"), Int(4000), Date(2023, 3, 1), Absent, Bool(true)],
    [Text("윤서현"), Int(33), Text("개발팀"), Text("과장"), Int(6800), Date(2019, 7, 15), DateTime(2025, 12, 8, 8, 0, 0), Absent],
    [Text("한지훈"), Absent, Text("마케팅팀"), Text("대리"), Absent, Date(2021, 11, 10), Absent, Bool(true)],
    [Text("오현아"), Absent, Text("영업팀"), Absent, Absent, Absent, Absent, Absent],
    [Absent, Absent, Absent, Absent, Absent, Absent, Absent, Absent],
    [Absent, Int(38), Text("개발팀"), Text("차장"), Int(8200), Date(2016, 8, 1), DateTime(2025, 12, 8, 8, 30, 0), Bool(true)],
    [Text("조민재"), Int(27), Text("기획팀"), Text("사원"), Int(4500), Date(2024, 1, 15), DateTime(2024, 1, 15, 9, 0, 0), Absent],
    [Text("서지우"), Int(35), Absent, Absent, Absent, Date(2019, 3, 10), DateTime(2025, 12, 8, 9, 15, 0), Bool(true)],
    [Text(""), Int(29), Text(""), Text("대리"), Int(5300), Date(2022, 2, 20), DateTime(2025, 12, 8, 10, 0, 0), Bool(true)],
    // type
    [Text("김미래"), Text("28세"), Text("개발팀"), Text("사원"), Int(4500), Date(2023, 5, 10), DateTime(2025, 12, 8, 9, 0, 0), Bool(true)],
    [Text("이과거"), Int(40), Text("영업팀"), Text("과장"), Text("8,500,000원"), Date(2017, 8, 20), DateTime(2025, 12, 8, 8, 30, 0), Bool(true)],
    [Text("박현재"), Int(32), Text("인사팀"), Text("대리"), Int(5600), Text("2020-06-15"), Text("2025-12-08 09:30:00"), Bool(true)],
    [Text("정미래"), Int(35), Text("기획팀"), Text("과장"), Int(7200), Date(2018, 11, 5), DateTime(2025, 12, 8, 8, 15, 0), Text("TRUE")],
    [Text("최현실"), Float(33.5), Text("디자인팀"), Text("대리"), Int(5400), Date(2021, 4, 10), DateTime(2025, 12, 8, 9, 45, 0), Bool(true)],
    [Text("한문자"), Text("30"), Text("개발팀"), Text("대리"), Text("5500"), Text("2021/03/01"), Text("2025/12/08 09:00:00"), Text("Yes")],
    // format
    [Text("윤형식"), Int(31), Text("영업팀"), Text("대리"), Int(5600), Text("20/05/2020"), DateTime(2025, 12, 7, 17, 30, 0), Bool(true)],
    [Text("임특수"), Text("38세 (만)"), Text("개발팀"), Text("차장"), Float(8200.5), Date(2016, 8, 1), DateTime(2025, 12, 8, 8, 30, 0), Bool(true)],
    [Text("조오류"), Int(27), Text("기획팀"), Text("사원"), Int(4500), Text("invalid-date"), DateTime(2024, 1, 15, 9, 0, 0), Bool(false)],
    [Text("서공백"), Text("  35  "), Text("개발팀"), Text("과장"), Text("  6500  "), Date(2019, 3, 10), DateTime(2025, 12, 8, 9, 15, 0), Bool(true)],
    [Text("김숫자"), Int(29), Text("마케팅팀"), Text("사원"), Int(4300), Date(2023, 7, 1), DateTime(2025, 12, 8, 8, 0, 0), Int(1)],
    [Text("이퇴사"), Int(45), Text("개발팀"), Text("부장"), Int(9500), Date(2010, 3, 1), DateTime(2024, 6, 30, 18, 0, 0), Bool(false)],
    // boundary
    [Text("박음수"), Int(-5), Text("영업팀"), Text("사원"), Int(4000), Date(2024, 1, 1), DateTime(2025, 12, 8, 9, 0, 0), Bool(true)],
    [Text("정억만"), Int(50), Text("임원"), Text("사장"), Int(999_999_999), Date(2005, 1, 1), DateTime(2025, 12, 8, 7, 0, 0), Bool(true)],
    [Text("최제로"), Int(0), Text("인턴팀"), Text("인턴"), Int(0), Date(2025, 12, 1), DateTime(2025, 12, 8, 10, 0, 0), Bool(true)],
    [Text(""), Absent, Text(""), Absent, Text(""), Absent, Absent, Text("")],
];

static CASE_GROUPS: [SpecCaseGroup; 4] = [
    SpecCaseGroup {
        title: Some("[NULL 관련 케이스]"),
        cases: &[
            "정상 데이터 (기준)",
            "나이만 null",
            "부서와 직급이 null",
            "연봉만 null",
            "입사일만 null",
            "최근 로그인만 null",
            "재직여부만 null",
            "여러 필드가 null (나이, 연봉, 최근 로그인)",
            "대부분 필드가 null (이름과 부서만 존재)",
            "모든 필드가 null인 행",
            "첫 번째 필드(이름)만 null",
            "마지막 필드(재직여부)만 null",
            "연속된 null 필드 (부서, 직급, 연봉)",
            "빈 문자열 (null과 구분)",
        ],
    },
    SpecCaseGroup {
        title: Some("[타입 관련 케이스]"),
        cases: &[
            "나이가 문자열 ('28세')",
            "연봉이 문자열 ('8,500,000원')",
            "날짜가 문자열 ('2020-06-15')",
            "Boolean이 문자열 ('TRUE')",
            "나이가 실수 (33.5)",
            "모든 필드가 문자열",
        ],
    },
    SpecCaseGroup {
        title: Some("[형식 관련 케이스]"),
        cases: &[
            "날짜 형식이 다름 ('20/05/2020')",
            "특수문자 포함 ('38세 (만)')",
            "잘못된 날짜 형식 ('invalid-date')",
            "공백 포함 숫자 ('  35  ', '  6500  ')",
            "Boolean이 0/1로 되어있는 경우",
            "Boolean이 False인 경우 (퇴사자)",
        ],
    },
    SpecCaseGroup {
        title: Some("[경계값 케이스]"),
        cases: &[
            "음수 나이 (-5)",
            "매우 큰 숫자 (999999999)",
            "0 값들",
            "null과 빈 문자열이 섞인 경우",
        ],
    },
];

const C_MSG_CASES_TITLE: &str = "📋 포함된 Edge Cases:";

pub fn fixture() -> SpecFixture {
    SpecFixture {
        name: "null_edge_cases",
        sheet_name: C_SHEET_NAME_EMPLOYEE,
        headers: &HEADERS_EMPLOYEE,
        records: &RECORDS,
        path_file_out: C_PATH_NULL_EDGE_CASES,
        policy_width: derive_null_fixture_width_policy(),
        date_text_promotion: SpecDateTextPromotion::default(),
        msg_done: "✅ null 및 예외 케이스 엑셀 파일이 생성되었습니다",
        msg_cases_title: Some(C_MSG_CASES_TITLE),
        case_groups: &CASE_GROUPS,
    }
}

/// Same records, with ISO date text promoted to date cells.
pub fn fixture_promoted() -> SpecFixture {
    SpecFixture {
        name: "null_edge_cases_promoted",
        path_file_out: C_PATH_NULL_EDGE_CASES_PROMOTED,
        date_text_promotion: derive_employee_date_promotion(),
        msg_done: "✅ null 및 예외 케이스 엑셀 파일(날짜 텍스트 변환)이 생성되었습니다",
        ..fixture()
    }
}

#[cfg(test)]
mod tests {
    use fixturekit_io_xlsx::{EnumCellDisplay, EnumCellValue, plan_sheet};

    use super::*;

    #[test]
    fn test_catalogue_matches_records() {
        let fixture = fixture();
        assert_eq!(fixture.records.len(), 30);
        assert_eq!(fixture.n_cases(), 30);
        assert_eq!(
            fixture.case_groups.iter().map(|g| g.cases.len()).collect::<Vec<_>>(),
            vec![14, 6, 6, 4]
        );
    }

    #[test]
    fn test_empty_text_is_distinct_from_absent() {
        let l_records = fixture().derive_records().expect("valid literals");
        assert_eq!(l_records[13][0], EnumCellValue::String(String::new()));
        assert_eq!(l_records[10][0], EnumCellValue::None);
        assert!(l_records[9].iter().all(EnumCellValue::is_absent));
    }

    #[test]
    fn test_widths_respect_floor() {
        let fixture = fixture();
        let l_records = fixture.derive_records().expect("valid literals");
        let plan = plan_sheet(fixture.headers, &l_records, &fixture.derive_write_options())
            .expect("plan");

        assert_eq!(plan.widths_by_col.len(), 8);
        assert!(plan.widths_by_col.iter().all(|w| *w >= 12.0));
        // 나이: longest is "38세 (만)", below the floor
        assert_eq!(plan.widths_by_col[1], 12.0);
        // 연봉: "8,500,000원"
        assert!((plan.widths_by_col[4] - 14.4).abs() < 1e-9);
    }

    #[test]
    fn test_promoted_variant_converts_only_iso_text() {
        let fixture = fixture_promoted();
        let l_records = fixture.derive_records().expect("valid literals");
        let plan = plan_sheet(fixture.headers, &l_records, &fixture.derive_write_options())
            .expect("plan");

        // "2020-06-15" and "2025-12-08 09:30:00" in record 17
        assert_eq!(plan.n_cells_promoted, 2);
        assert_eq!(plan.cell(16, 5).map(|c| c.display), Some(EnumCellDisplay::Date));
        assert_eq!(plan.cell(16, 6).map(|c| c.display), Some(EnumCellDisplay::DateTime));
        for (idx_row, c_text) in [(19, "2021/03/01"), (20, "20/05/2020"), (22, "invalid-date")] {
            let cell = plan.cell(idx_row, 5).expect("cell");
            assert_eq!(cell.value, EnumCellValue::String(c_text.to_string()));
            assert_eq!(cell.display, EnumCellDisplay::General);
        }
    }

    #[test]
    fn test_promoted_variant_shares_records() {
        let plain = fixture();
        let promoted = fixture_promoted();
        assert!(std::ptr::eq(plain.records, promoted.records));
        assert_eq!(plain.policy_width, promoted.policy_width);
        assert_ne!(plain.path_file_out, promoted.path_file_out);
    }
}
