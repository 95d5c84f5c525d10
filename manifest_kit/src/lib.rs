//! # Manifest Kit
//!
//! Extraction, validation, and serialization pipeline for Rift mod
//! manifests (`riftmod.json`). Given a set of discovered annotated
//! elements, the kit resolves a single mod descriptor and an ordered
//! listener set, validates them against a fixed rule set, and renders a
//! deterministic JSON document.
//!
//! ## Modules
//!
//! - `element` - element references from the discovery boundary
//! - `provider` - the discovery provider trait and in-memory impl
//! - `descriptor` - plain value shapes for mod and listener records
//! - `validator` - structural and content acceptance rules
//! - `collector` - candidate collection and listener ordering
//! - `document` - canonical document assembly and rendering
//! - `store` - output persistence boundary
//! - `pipeline` - the single-pass generation state machine
//! - `diagnostics` - note/warning/error reporting
//!
//! ## Usage
//!
//! ```rust,ignore
//! use manifest_kit::diagnostics::LogSink;
//! use manifest_kit::pipeline::Pass;
//! use manifest_kit::provider::InMemoryProvider;
//! use manifest_kit::store::DirStore;
//!
//! let provider = InMemoryProvider::from_elements(elements);
//! let sink = LogSink::new();
//! let store = DirStore::new("target/generated");
//!
//! let outcome = Pass::new(&provider, &sink, &store).run()?;
//! ```

pub mod collector;
pub mod descriptor;
pub mod diagnostics;
pub mod document;
pub mod element;
pub mod pipeline;
pub mod provider;
pub mod store;
pub mod validator;
