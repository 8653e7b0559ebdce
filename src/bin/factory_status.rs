//! Writes `factories_status.json` and prints the status transcript.
//!
//! Takes no arguments. Paths are resolved against the working directory, so
//! run it from the project root that contains `src/factories/`.

use anyhow::Result;
use factory_status::report::STARTED_MESSAGE;
use factory_status::{InspectorConfig, logging, render_transcript, run_status_pass};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();

    println!("{STARTED_MESSAGE}");
    let config = InspectorConfig::default();
    let mut rng = StdRng::from_entropy();
    let records = run_status_pass(&config, &mut rng)?;

    print!("{}", render_transcript(&records));
    Ok(())
}
