use anyhow::Result;
use env_logger::Env;

use progress_tracker::config::{default_roster, RunConfig};
use progress_tracker::report;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = RunConfig::new(".", default_roster());
    report::generate_report(&config)?;
    Ok(())
}
