use std::env;
use std::process;

#[macro_use]
extern crate text_io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use molecules::config::{RunConfig, DEFAULT_CONFIG_FILE};
use molecules::dataset::{self, Mismatch};
use molecules::molecule::chain::ChainSet;
use molecules::molecule::render::render;
use molecules::{solve_all, Result, Solver};

const USAGE: &str = "Usage: molecules input.txt [expected-output.txt]";

/// Prints a message and exits the program
fn done(message: &str, code: i32) -> ! {
    println!("{}", message);
    process::exit(code)
}

fn is_txt(path: &str) -> bool {
    path.ends_with(".txt")
}

/// Prints why a dataset failed, along with every molecule its chains can form
fn explain_failure(mismatch: &Mismatch, chains: Option<&ChainSet>, config: &RunConfig) {
    let expected = mismatch.expected.as_deref().unwrap_or("nothing");
    match mismatch.actual {
        Some(actual) => println!(
            "Failed Test {}: Max area was {}, expected {}",
            mismatch.index, actual, expected
        ),
        None => println!(
            "Failed Test {}: No dataset for expected value {}",
            mismatch.index, expected
        ),
    }

    let chains = match chains {
        Some(chains) => chains,
        None => return,
    };
    println!("Original chains were: {}", chains);
    if !config.render_failures {
        return;
    }

    println!("Here are the generated molecules:");
    for molecule in Solver::new(chains).molecules() {
        let cfg = serde_json::to_string(&molecule).unwrap_or_default();
        println!("Config: {}", cfg);
        println!("Area: {}", molecule.area);
        println!("{}", render(chains, &molecule));
        if config.pause_between_renders {
            println!("...");
            let _: String = read!("{}\n");
        }
    }
}

fn run(input: &str, expected: Option<&str>, config: &RunConfig) -> Result<bool> {
    println!("Analyzing \"{}\"...", input);
    let sets = dataset::read_datasets(input, config.sentinel)?;
    let results = solve_all(&sets, config.parallel);
    for result in results.iter() {
        println!("{}", result);
    }
    info!(datasets = sets.len(), "solved all datasets");

    let expected = match expected {
        Some(path) => path,
        None => return Ok(true),
    };
    let mismatches = dataset::read_expected(&results, expected)?;
    if mismatches.is_empty() {
        println!("The results matched the output file!");
        return Ok(true);
    }

    warn!(failed = mismatches.len(), "results differ from expected output");
    for mismatch in mismatches.iter() {
        explain_failure(mismatch, sets.get(mismatch.index), config);
    }
    Ok(false)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (input, expected) = match args.as_slice() {
        [_, input] if is_txt(input) => (input.as_str(), None),
        [_, input, expected] if is_txt(input) && is_txt(expected) => {
            (input.as_str(), Some(expected.as_str()))
        }
        _ => done(USAGE, 1),
    };

    let config = match RunConfig::load_or_default(DEFAULT_CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => done(&e.to_string(), 1),
    };

    match run(input, expected, &config) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => done(&e.to_string(), 1),
    }
}
