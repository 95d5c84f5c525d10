//! # Generation Pass
//!
//! The single-threaded, single-pass pipeline:
//!
//! ```text
//! Start -> CollectModules -> {Abort | CollectListeners}
//!       -> ValidateModule  -> {Abort | Serialize} -> Write -> Done
//! ```
//!
//! `Abort` is terminal with no file write; `Done` is terminal with
//! exactly one write. A pass records its outcome on the first
//! invocation and replays it afterwards, so the host environment may
//! call [`Pass::run`] repeatedly across a build session without
//! re-validating or re-writing.

use std::io;

use thiserror::Error;

use crate::collector::{Collector, ModuleOutcome};
use crate::diagnostics::DiagnosticSink;
use crate::document::{self, Manifest, RenderError};
use crate::provider::ElementProvider;
use crate::store::OutputStore;
use crate::validator::{self, Strictness};

/// Terminal result of one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// The manifest was written
    Written,
    /// Nothing was discovered; no work performed, no file written
    NoOp,
    /// The pass was aborted; no file written
    Aborted(AbortReason),
}

/// Why a pass aborted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// Listeners or rejected candidates exist but no eligible mod does
    MissingModule,
    /// More than one eligible mod declaration
    AmbiguousModule,
    /// The single mod candidate failed content validation
    InvalidModule,
    /// Rendering or the output write failed; never retried
    WriteFailed,
}

/// One complete collection, validation, and serialization pass
pub struct Pass<'a> {
    provider: &'a dyn ElementProvider,
    sink: &'a dyn DiagnosticSink,
    store: &'a dyn OutputStore,
    strictness: Strictness,
    outcome: Option<PassOutcome>,
}

impl<'a> Pass<'a> {
    pub fn new(
        provider: &'a dyn ElementProvider,
        sink: &'a dyn DiagnosticSink,
        store: &'a dyn OutputStore,
    ) -> Self {
        Self {
            provider,
            sink,
            store,
            strictness: Strictness::default(),
            outcome: None,
        }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Run the pass, or replay the recorded outcome if it already ran.
    ///
    /// Validation failures resolve to [`PassOutcome::Aborted`]; only
    /// rendering and write failures surface as `Err`, and the pass is
    /// finished either way.
    pub fn run(&mut self) -> Result<PassOutcome, PassError> {
        if let Some(outcome) = &self.outcome {
            return Ok(outcome.clone());
        }

        let collector = Collector::new(self.provider);

        let modules = collector.collect_module();
        for diagnostic in modules.diagnostics {
            self.sink.report(diagnostic);
        }

        let candidate = match modules.outcome {
            ModuleOutcome::NoOp => return Ok(self.finish(PassOutcome::NoOp)),
            ModuleOutcome::Missing => {
                return Ok(self.finish(PassOutcome::Aborted(AbortReason::MissingModule)));
            }
            ModuleOutcome::Ambiguous => {
                return Ok(self.finish(PassOutcome::Aborted(AbortReason::AmbiguousModule)));
            }
            ModuleOutcome::Candidate(candidate) => candidate,
        };

        let listeners = collector.collect_listeners();
        for diagnostic in listeners.diagnostics {
            self.sink.report(diagnostic);
        }

        let validation = validator::validate_module(&candidate, self.strictness);
        for diagnostic in validation.diagnostics {
            self.sink.report(diagnostic);
        }

        let module = match validation.descriptor {
            Some(module) => module,
            None => return Ok(self.finish(PassOutcome::Aborted(AbortReason::InvalidModule))),
        };

        let manifest = Manifest::assemble(module, listeners.listeners);
        let contents = match document::render(&manifest) {
            Ok(contents) => contents,
            Err(source) => {
                let _ = self.finish(PassOutcome::Aborted(AbortReason::WriteFailed));
                return Err(PassError::Render(source));
            }
        };

        if let Err(source) = self.store.write(document::FILE_NAME, &contents) {
            let _ = self.finish(PassOutcome::Aborted(AbortReason::WriteFailed));
            return Err(PassError::Write {
                name: document::FILE_NAME,
                source,
            });
        }

        Ok(self.finish(PassOutcome::Written))
    }

    /// The recorded outcome, if the pass has already run
    pub fn outcome(&self) -> Option<&PassOutcome> {
        self.outcome.as_ref()
    }

    fn finish(&mut self, outcome: PassOutcome) -> PassOutcome {
        self.outcome = Some(outcome.clone());
        outcome
    }
}

/// Failures that cross the pipeline boundary.
///
/// Everything else is resolved locally: candidates are dropped or the
/// pass aborts with a diagnostic.
#[derive(Debug, Error)]
pub enum PassError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to write {name}: {source}")]
    Write {
        name: &'static str,
        source: io::Error,
    },
}
