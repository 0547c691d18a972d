use std::error::Error;

use clap::Parser;
use log::info;
use rand::thread_rng;

use housing_gen::generator::{confirmation_message, Generator, DEFAULT_OUTPUT};

/// Writes 1000 random Madrid housing records to madrid_housing_1000.csv
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let _cli = Cli::parse();

    let generator = Generator::default();
    let rows = generator.write_to_path(DEFAULT_OUTPUT, &mut thread_rng())?;
    info!("Wrote {rows} rows");

    println!("{}", confirmation_message(DEFAULT_OUTPUT, rows));

    Ok(())
}
