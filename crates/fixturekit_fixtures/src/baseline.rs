//! Baseline fixture: ten well-typed employee records.

use fixturekit_io_xlsx::{SpecColumnWidthPolicy, SpecDateTextPromotion};

use crate::conf::{C_PATH_SAMPLE, C_SHEET_NAME_EMPLOYEE, HEADERS_EMPLOYEE};
use crate::spec::EnumCellLiteral::{Bool, Date, DateTime, Int, Text};
use crate::spec::{SpecFixture, TypeRecord};

#[rustfmt::skip]
pub static RECORDS: [TypeRecord; 10] = [
    [Text("김철수"), Int(32), Text("개발팀"), Text("대리"), Int(5500), Date(2020, 3, 15), DateTime(2025, 12, 8, 9, 30, 0), Bool(true)],
    [Text("이영희"), Int(28), Text("마케팅팀"), Text("사원"), Int(4200), Date(2022, 6, 1), DateTime(2025, 12, 8, 8, 45, 0), Bool(true)],
    [Text("박민수"), Int(35), Text("개발팀"), Text("과장"), Int(7000), Date(2018, 1, 10), DateTime(2025, 12, 7, 18, 20, 0), Bool(true)],
    [Text("정수진"), Int(30), Text("인사팀"), Text("대리"), Int(5200), Date(2021, 9, 20), DateTime(2025, 12, 8, 10, 15, 0), Bool(true)],
    [Text("최동욱"), Int(42), Text("영업팀"), Text("부장"), Int(9000), Date(2015, 4, 5), DateTime(2025, 12, 8, 7, 30, 0), Bool(true)],
    [Text("강민지"), Int(26), Text("디자인팀"), Text("사원"), Int(4000), Date(2023, 3, 1), DateTime(2025, 12, 8, 9, 0, 0), Bool(true)],
    [Text("윤서현"), Int(33), Text("개발팀"), Text("과장"), Int(6800), Date(2019, 7, 15), DateTime(2025, 12, 8, 8, 0, 0), Bool(true)],
    [Text("한지훈"), Int(29), Text("마케팅팀"), Text("대리"), Int(5300), Date(2021, 11, 10), DateTime(2025, 12, 8, 9, 45, 0), Bool(true)],
    [Text("오현아"), Int(31), Text("영업팀"), Text("대리"), Int(5600), Date(2020, 5, 20), DateTime(2025, 12, 7, 17, 30, 0), Bool(true)],
    [Text("임태양"), Int(38), Text("개발팀"), Text("차장"), Int(8200), Date(2016, 8, 1), DateTime(2025, 12, 8, 8, 30, 0), Bool(true)],
];

pub fn fixture() -> SpecFixture {
    SpecFixture {
        name: "sample",
        sheet_name: C_SHEET_NAME_EMPLOYEE,
        headers: &HEADERS_EMPLOYEE,
        records: &RECORDS,
        path_file_out: C_PATH_SAMPLE,
        policy_width: SpecColumnWidthPolicy::default(),
        date_text_promotion: SpecDateTextPromotion::default(),
        msg_done: "샘플 엑셀 파일이 생성되었습니다",
        msg_cases_title: None,
        case_groups: &[],
    }
}
