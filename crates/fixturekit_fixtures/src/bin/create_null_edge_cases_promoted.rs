use fixturekit_fixtures::{EnumFixtureError, null_edge_cases, run_fixture};

fn main() -> Result<(), EnumFixtureError> {
    if let Err(err) = fixturekit_log::init_from_env() {
        eprintln!("logger unavailable: {err}");
    }
    run_fixture(&null_edge_cases::fixture_promoted())
}
