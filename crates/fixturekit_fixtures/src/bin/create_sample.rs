use fixturekit_fixtures::{EnumFixtureError, baseline, run_fixture};

fn main() -> Result<(), EnumFixtureError> {
    if let Err(err) = fixturekit_log::init_from_env() {
        eprintln!("logger unavailable: {err}");
    }
    run_fixture(&baseline::fixture())
}
