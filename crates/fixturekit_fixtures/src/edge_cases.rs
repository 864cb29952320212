//! Type/format edge cases: each record perturbs one dimension of the
//! baseline (numbers and dates as text, boolean as text, one absent value).

use fixturekit_io_xlsx::{SpecColumnWidthPolicy, SpecDateTextPromotion};

use crate::conf::{C_PATH_EDGE_CASES, C_SHEET_NAME_EMPLOYEE, HEADERS_EMPLOYEE};
use crate::spec::EnumCellLiteral::{Absent, Bool, Date, DateTime, Float, Int, Text};
use crate::spec::{SpecCaseGroup, SpecFixture, TypeRecord};

#[rustfmt::skip]
pub static RECORDS: [TypeRecord; 12] = [
    [Text("김철수"), Int(32), Text("개발팀"), Text("대리"), Int(5500), Date(2020, 3, 15), DateTime(2025, 12, 8, 9, 30, 0), Bool(true)],
    [Text("이영희"), Text("28세"), Text("마케팅팀"), Text("사원"), Int(4200), Date(2022, 6, 1), DateTime(2025, 12, 8, 8, 45, 0), Bool(true)],
    [Text("박민수"), Int(35), Text("개발팀"), Text("과장"), Text("7,000원"), Date(2018, 1, 10), DateTime(2025, 12, 7, 18, 20, 0), Bool(true)],
    [Text("정수진"), Int(30), Text("인사팀"), Text("대리"), Int(5200), Text("2021-09-20"), Text("2025-12-08 10:15:00"), Bool(true)],
    [Text("최동욱"), Int(42), Text("영업팀"), Text("부장"), Int(9000), Date(2015, 4, 5), DateTime(2025, 12, 8, 7, 30, 0), Text("TRUE")],
    [Text("강민지"), Absent, Text("디자인팀"), Text("사원"), Int(4000), Date(2023, 3, 1), Absent, Bool(true)],
    [Text("윤서현"), Float(33.5), Text("개발팀"), Text("과장"), Int(6800), Date(2019, 7, 15), DateTime(2025, 12, 8, 8, 0, 0), Bool(true)],
    [Text("한지훈"), Text("29"), Text("마케팅팀"), Text("대리"), Text("5300"), Text("2021/11/10"), Text("2025/12/08 09:45:00"), Text("Yes")],
    [Text("오현아"), Int(31), Text("영업팀"), Text("대리"), Int(5600), Text("20/05/2020"), DateTime(2025, 12, 7, 17, 30, 0), Bool(true)],
    [Text("임태양"), Text("38세 (만)"), Text("개발팀"), Text("차장"), Float(8200.5), Date(2016, 8, 1), DateTime(2025, 12, 8, 8, 30, 0), Bool(true)],
    [Text("조민재"), Int(27), Text("기획팀"), Text("사원"), Int(4500), Text("invalid-date"), DateTime(2024, 1, 15, 9, 0, 0), Bool(false)],
    [Text("서지우"), Text("  35  "), Text("개발팀"), Text("과장"), Text("  6500  "), Date(2019, 3, 10), DateTime(2025, 12, 8, 9, 15, 0), Bool(true)],
];

static CASE_GROUPS: [SpecCaseGroup; 1] = [SpecCaseGroup {
    title: None,
    cases: &[
        "정상 데이터 (기준)",
        "나이가 문자열 ('28세')",
        "연봉이 문자열 ('7,000원')",
        "날짜가 문자열 ('2021-09-20')",
        "Boolean이 문자열 ('TRUE')",
        "빈 셀 (null)",
        "나이가 실수 (33.5)",
        "모든 필드가 문자열",
        "날짜 형식이 다름 ('20/05/2020')",
        "특수문자 포함 ('38세 (만)')",
        "잘못된 날짜 형식 ('invalid-date')",
        "공백 포함 숫자 ('  35  ', '  6500  ')",
    ],
}];

pub fn fixture() -> SpecFixture {
    SpecFixture {
        name: "edge_cases",
        sheet_name: C_SHEET_NAME_EMPLOYEE,
        headers: &HEADERS_EMPLOYEE,
        records: &RECORDS,
        path_file_out: C_PATH_EDGE_CASES,
        policy_width: SpecColumnWidthPolicy::default(),
        date_text_promotion: SpecDateTextPromotion::default(),
        msg_done: "예외 케이스 엑셀 파일이 생성되었습니다",
        msg_cases_title: Some("포함된 예외 케이스:"),
        case_groups: &CASE_GROUPS,
    }
}

#[cfg(test)]
mod tests {
    use fixturekit_io_xlsx::{EnumCellDisplay, EnumCellValue, plan_sheet};

    use super::*;

    #[test]
    fn test_one_case_per_record() {
        let fixture = fixture();
        assert_eq!(fixture.records.len(), 12);
        assert_eq!(fixture.n_cases(), fixture.records.len());
    }

    #[test]
    fn test_date_text_is_kept_as_plain_text() {
        let fixture = fixture();
        let l_records = fixture.derive_records().expect("valid literals");
        let plan = plan_sheet(fixture.headers, &l_records, &fixture.derive_write_options())
            .expect("plan");

        let cell = plan.cell(3, 5).expect("cell");
        assert_eq!(cell.value, EnumCellValue::String("2021-09-20".to_string()));
        assert_eq!(cell.display, EnumCellDisplay::General);
        assert_eq!(plan.n_cells_promoted, 0);
        assert_eq!(plan.cell(0, 5).map(|c| c.display), Some(EnumCellDisplay::Date));
    }

    #[test]
    fn test_widths_have_no_floor() {
        let fixture = fixture();
        let l_records = fixture.derive_records().expect("valid literals");
        let plan = plan_sheet(fixture.headers, &l_records, &fixture.derive_write_options())
            .expect("plan");

        // 재직여부: longest rendering is "False"
        assert!((plan.widths_by_col[7] - 8.4).abs() < 1e-9);
        assert!(plan.widths_by_col.iter().any(|w| *w < 12.0));
    }
}
