use clap::Parser;
use h1b_counting::generate_reports;
use log::{error, info};
use std::path::PathBuf;

/// Ranks the top occupations and worksite states of certified H-1B applications.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// `;` delimited input file, header line first
    input: PathBuf,

    /// Where to write the top occupations report
    occupations_output: PathBuf,

    /// Where to write the top states report
    states_output: PathBuf,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();

    match generate_reports(&args.input, &args.occupations_output, &args.states_output) {
        Ok(reports) => {
            info!(
                "Ranked {} occupations and {} states",
                reports.occupations.len(),
                reports.states.len()
            );
        }
        Err(e) => {
            error!("Error generating reports: {}", e);
            std::process::exit(1);
        }
    }
}
