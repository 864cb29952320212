//! `fixturekit_fixtures` v1:
//! Employee spreadsheet fixtures for spreadsheet-import tests.
//!
//! Layout:
//! - `conf`            : shared headers, sheet name, output paths
//! - `spec`            : literal cell/record models, fixture definition, errors
//! - `baseline`        : ten well-typed records
//! - `edge_cases`      : twelve type/format perturbations
//! - `null_edge_cases` : thirty absence/boundary records, plain and promoted
//! - `driver`          : generation and the completion summary
pub mod baseline;
pub mod conf;
pub mod driver;
pub mod edge_cases;
pub mod null_edge_cases;
pub mod spec;

pub use driver::{format_summary, generate_fixture, run_fixture};
pub use spec::{EnumCellLiteral, EnumFixtureError, SpecCaseGroup, SpecFixture, TypeRecord};

/// Every fixture variant, in generation order.
pub fn derive_all_fixtures() -> Vec<SpecFixture> {
    vec![
        baseline::fixture(),
        edge_cases::fixture(),
        null_edge_cases::fixture(),
        null_edge_cases::fixture_promoted(),
    ]
}
