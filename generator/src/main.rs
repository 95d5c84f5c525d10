//! # riftgen
//!
//! Generates `riftmod.json` manifests from a declarative description of
//! annotated source elements.
//!
//! ## Usage
//!
//! ```bash
//! # Generate next to the shell
//! riftgen elements.toml
//!
//! # Write into a build directory, strict validation
//! riftgen --strict -o build/generated elements.toml
//! ```
//!
//! The element set file stands in for compiler-frontend discovery: each
//! `[[element]]` table describes one annotated program element with its
//! kind, qualified name, modifiers, interfaces, and annotation values.
//! Exactly one mod element is required whenever anything is annotated;
//! listeners are ordered by ascending priority in the output.

mod cli;
mod config;
mod elements;
mod runner;

use cli::CliResult;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("riftgen");

    let exit_code = match cli::parse_args(&args) {
        CliResult::Help => {
            cli::print_help(program_name);
            0
        }
        CliResult::Error(msg) => {
            eprintln!("Error: {}", msg);
            2
        }
        CliResult::Run(config) => match runner::run(&config) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {}", e);
                2
            }
        },
    };

    std::process::exit(exit_code);
}
