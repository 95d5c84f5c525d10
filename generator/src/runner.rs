//! Generation run wiring
//!
//! Loads the element set, drives one pipeline pass against the
//! filesystem output store, presents diagnostics, and maps the outcome
//! to an exit code.

use thiserror::Error;

use manifest_kit::diagnostics::{DiagnosticSink, LogSink, MemorySink};
use manifest_kit::document;
use manifest_kit::pipeline::{AbortReason, Pass, PassError, PassOutcome};
use manifest_kit::store::DirStore;

use crate::config::GenConfig;
use crate::elements::{self, ElementSetError};

/// Run one generation pass with the given configuration
pub fn run(config: &GenConfig) -> Result<i32, RunError> {
    let provider = elements::load_element_set(&config.element_set)?;
    log::info!(
        "loaded {} element(s) from {}",
        provider.len(),
        config.element_set.display()
    );

    // Quiet runs still route diagnostics through the log facade so
    // RUST_LOG can surface them.
    let memory = MemorySink::new();
    let log_sink = LogSink::new();
    let sink: &dyn DiagnosticSink = if config.quiet { &log_sink } else { &memory };

    let store = DirStore::new(&config.output_dir);
    let mut pass = Pass::new(&provider, sink, &store).with_strictness(config.strictness);
    let outcome = pass.run()?;

    if !config.quiet {
        for diagnostic in memory.entries() {
            eprintln!("{}", diagnostic);
        }
    }

    let exit_code = match outcome {
        PassOutcome::Written => {
            if !config.quiet {
                println!(
                    "Wrote {} to {}",
                    document::FILE_NAME,
                    config.output_dir.display()
                );
            }
            0
        }
        PassOutcome::NoOp => {
            if !config.quiet {
                println!("No annotated elements discovered, nothing to do");
            }
            0
        }
        PassOutcome::Aborted(reason) => {
            if !config.quiet {
                eprintln!("Generation aborted: {}", describe_abort(reason));
            }
            1
        }
    };

    Ok(exit_code)
}

fn describe_abort(reason: AbortReason) -> &'static str {
    match reason {
        AbortReason::MissingModule => "no eligible mod declaration",
        AbortReason::AmbiguousModule => "more than one mod declaration",
        AbortReason::InvalidModule => "mod declaration failed validation",
        AbortReason::WriteFailed => "output write failed",
    }
}

/// Errors that can occur during a generation run
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] ElementSetError),
    #[error(transparent)]
    Pass(#[from] PassError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    use manifest_kit::validator::Strictness;

    const ACME_SET: &str = r#"
        [[element]]
        kind = "type"
        name = "com.example.AcmeMod"

        [element.mod]
        id = "acme"
        version = "1.0.0"

        [[element]]
        kind = "type"
        name = "com.example.InitHook"
        interfaces = ["org.dimdev.rift.listener.InitListener"]

        [element.listener]
        priority = 1
    "#;

    const AMBIGUOUS_SET: &str = r#"
        [[element]]
        kind = "type"
        name = "com.example.First"

        [element.mod]
        id = "first"
        version = "1.0.0"

        [[element]]
        kind = "type"
        name = "com.example.Second"

        [element.mod]
        id = "second"
        version = "1.0.0"
    "#;

    fn write_set(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("elements.toml");
        fs::write(&path, contents).expect("write element set");
        path
    }

    fn quiet_config(element_set: PathBuf, output_dir: PathBuf) -> GenConfig {
        GenConfig {
            element_set,
            output_dir,
            strictness: Strictness::default(),
            quiet: true,
        }
    }

    #[test]
    fn test_run_writes_manifest() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = quiet_config(write_set(&dir, ACME_SET), dir.path().to_path_buf());

        let exit_code = run(&config).expect("run failed");
        assert_eq!(exit_code, 0);

        let manifest =
            fs::read_to_string(dir.path().join(document::FILE_NAME)).expect("manifest missing");
        assert!(manifest.contains("\"id\": \"acme\""));
        assert!(manifest.contains("com.example.InitHook"));
    }

    #[test]
    fn test_run_aborts_on_ambiguous_mods() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = quiet_config(write_set(&dir, AMBIGUOUS_SET), dir.path().to_path_buf());

        let exit_code = run(&config).expect("run failed");
        assert_eq!(exit_code, 1);
        assert!(!dir.path().join(document::FILE_NAME).exists());
    }

    #[test]
    fn test_run_noop_on_empty_set() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = quiet_config(write_set(&dir, ""), dir.path().to_path_buf());

        let exit_code = run(&config).expect("run failed");
        assert_eq!(exit_code, 0);
        assert!(!dir.path().join(document::FILE_NAME).exists());
    }

    #[test]
    fn test_run_fails_on_missing_element_set() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = quiet_config(dir.path().join("absent.toml"), dir.path().to_path_buf());

        let error = run(&config).expect_err("should fail");
        assert!(matches!(error, RunError::Load(_)));
    }

    #[test]
    fn test_run_surfaces_write_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = quiet_config(
            write_set(&dir, ACME_SET),
            dir.path().join("missing-subdir"),
        );

        let error = run(&config).expect_err("should fail");
        assert!(matches!(error, RunError::Pass(PassError::Write { .. })));
    }
}
