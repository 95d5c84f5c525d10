//! # Document Builder
//!
//! Assembles the validated descriptors into the canonical `riftmod.json`
//! shape and renders it deterministically.
//!
//! Key order is part of the external contract: the comment header comes
//! first, then `id`, `name`, `version`, `side`, then `authors` and
//! `listeners` only when non-empty. Listener objects hold the fixed key
//! order `class`, `side`, `priority`. Rendering uses two-space
//! indentation and escapes HTML-unsafe characters so the document is
//! safe to embed in HTML contexts.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use thiserror::Error;

use crate::descriptor::{ListenerDescriptor, ModuleDescriptor, Side};

/// Fixed name of the emitted manifest file
pub const FILE_NAME: &str = "riftmod.json";

/// Generator tag written into the comment header
const GENERATED_WITH: &str = concat!("Generated with riftgen ", env!("CARGO_PKG_VERSION"));

/// The canonical document shape. Field order here is emission order.
#[derive(Debug, Serialize)]
pub struct Manifest {
    #[serde(rename = "__comment")]
    comment: &'static str,
    id: String,
    name: String,
    version: String,
    side: Side,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    authors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    listeners: Vec<ListenerEntry>,
}

#[derive(Debug, Serialize)]
struct ListenerEntry {
    class: String,
    side: Side,
    priority: i32,
}

impl Manifest {
    /// Assemble the document from an accepted mod descriptor and the
    /// ordered listener set. Listener order is preserved as given.
    pub fn assemble(module: ModuleDescriptor, listeners: Vec<ListenerDescriptor>) -> Self {
        Self {
            comment: GENERATED_WITH,
            id: module.id,
            name: module.name,
            version: module.version,
            side: module.side,
            authors: module.authors,
            listeners: listeners
                .into_iter()
                .map(|listener| ListenerEntry {
                    class: listener.class_name,
                    side: listener.side,
                    priority: listener.priority,
                })
                .collect(),
        }
    }
}

/// Render the document to its final UTF-8 text, trailing newline
/// included.
pub fn render(manifest: &Manifest) -> Result<String, RenderError> {
    let mut buf = Vec::with_capacity(256);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter::new());
    manifest.serialize(&mut serializer)?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|_| RenderError::NonUtf8)
}

/// Two-space pretty printer that additionally escapes HTML-unsafe
/// characters (`<`, `>`, `&`, `=`, `'`) as `\uXXXX` inside strings.
struct HtmlSafeFormatter {
    inner: PrettyFormatter<'static>,
}

impl HtmlSafeFormatter {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for HtmlSafeFormatter {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, byte) in fragment.bytes().enumerate() {
            let escape: &[u8] = match byte {
                b'<' => b"\\u003c",
                b'>' => b"\\u003e",
                b'&' => b"\\u0026",
                b'=' => b"\\u003d",
                b'\'' => b"\\u0027",
                _ => continue,
            };
            if start < index {
                writer.write_all(fragment[start..index].as_bytes())?;
            }
            writer.write_all(escape)?;
            start = index + 1;
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Errors that can occur while rendering the document
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("rendered manifest was not valid UTF-8")]
    NonUtf8,
}
