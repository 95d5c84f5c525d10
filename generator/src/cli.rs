//! Command-line interface parsing
//!
//! Handles argument parsing, validation, and help text generation.

use std::path::PathBuf;

use manifest_kit::validator::Strictness;

use crate::config::GenConfig;

/// CLI parsing result
pub enum CliResult {
    /// Run generation with this configuration
    Run(GenConfig),
    /// Show help and exit
    Help,
    /// Error with message
    Error(String),
}

/// Parse command-line arguments
pub fn parse_args(args: &[String]) -> CliResult {
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("riftgen");

    let mut element_set: Option<&str> = None;
    let mut output_dir: Option<PathBuf> = None;
    let mut strictness = Strictness::default();
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args.get(i).map(|s| s.as_str()) {
            Some("--help" | "-h") => {
                return CliResult::Help;
            }
            Some("--quiet" | "-q") => {
                quiet = true;
            }
            Some("--strict") => {
                strictness = Strictness::Strict;
            }
            Some("--lenient") => {
                strictness = Strictness::Lenient;
            }
            Some("--output" | "-o") => {
                i += 1;
                match args.get(i) {
                    Some(val) => output_dir = Some(PathBuf::from(val)),
                    None => return CliResult::Error("--output requires a directory".to_string()),
                }
            }
            Some(arg) if !arg.starts_with('-') => {
                element_set = Some(arg);
            }
            Some(arg) => {
                return CliResult::Error(format!("Unknown option: {}", arg));
            }
            None => break,
        }
        i += 1;
    }

    // Validate the element set path
    let element_set = match element_set {
        Some(p) => PathBuf::from(p),
        None => {
            return CliResult::Error(format!(
                "Missing element set path\nUsage: {} [OPTIONS] <elements.toml>",
                program_name
            ));
        }
    };

    if !element_set.exists() {
        return CliResult::Error(format!("Path not found: {}", element_set.display()));
    }

    let mut config = GenConfig::new(element_set);
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }
    config.strictness = strictness;
    config.quiet = quiet;

    CliResult::Run(config)
}

/// Print full help text
pub fn print_help(program_name: &str) {
    println!("riftgen v{}", env!("CARGO_PKG_VERSION"));
    println!("Rift mod manifest generator\n");

    println!("USAGE:");
    println!(
        "    {} [OPTIONS] <elements.toml>    Generate riftmod.json from an element set",
        program_name
    );
    println!(
        "    {} --help                       Show this help message\n",
        program_name
    );

    println!("OPTIONS:");
    println!("    -h, --help                  Show this help message");
    println!("    -q, --quiet                 Suppress console output");
    println!("    -o, --output <dir>          Directory to write riftmod.json into (default: .)");
    println!("    --strict                    Abort the pass on any content error");
    println!("    --lenient                   Skip bad optional entries instead of aborting (default)");
    println!();

    println!("EXIT CODES:");
    println!("    0    Manifest written, or nothing to do");
    println!("    1    Pass aborted by a validation failure");
    println!("    2    Usage, load, or write error");
    println!();

    println!("EXAMPLES:");
    println!(
        "    {} elements.toml                       # Write riftmod.json next to the shell",
        program_name
    );
    println!(
        "    {} -o build/generated elements.toml    # Write into a build directory",
        program_name
    );
    println!(
        "    {} --strict -q elements.toml           # Strict validation, no console output",
        program_name
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        let mut all = vec!["riftgen".to_string()];
        all.extend(list.iter().map(|s| s.to_string()));
        all
    }

    fn existing_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# empty element set").expect("write");
        file
    }

    #[test]
    fn test_help_flag() {
        assert!(matches!(parse_args(&args(&["--help"])), CliResult::Help));
        assert!(matches!(parse_args(&args(&["-h"])), CliResult::Help));
    }

    #[test]
    fn test_missing_path_is_error() {
        assert!(matches!(parse_args(&args(&[])), CliResult::Error(_)));
    }

    #[test]
    fn test_nonexistent_path_is_error() {
        let result = parse_args(&args(&["/no/such/elements.toml"]));
        match result {
            CliResult::Error(msg) => assert!(msg.contains("Path not found")),
            _ => panic!("expected error"),
        }
    }

    #[test]
    fn test_unknown_option_is_error() {
        let result = parse_args(&args(&["--frobnicate"]));
        match result {
            CliResult::Error(msg) => assert!(msg.contains("Unknown option")),
            _ => panic!("expected error"),
        }
    }

    #[test]
    fn test_full_configuration() {
        let file = existing_file();
        let path = file.path().to_str().expect("utf-8 path").to_string();

        let result = parse_args(&args(&["--strict", "-q", "-o", "out", &path]));
        match result {
            CliResult::Run(config) => {
                assert_eq!(config.element_set, file.path());
                assert_eq!(config.output_dir, PathBuf::from("out"));
                assert_eq!(config.strictness, Strictness::Strict);
                assert!(config.quiet);
            }
            _ => panic!("expected run configuration"),
        }
    }

    #[test]
    fn test_output_requires_value() {
        let result = parse_args(&args(&["--output"]));
        assert!(matches!(result, CliResult::Error(_)));
    }
}
