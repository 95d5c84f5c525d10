//! Element set loading
//!
//! Parses the TOML description of the annotated elements in a
//! compilation unit into the kit's element shapes. This file is the
//! stand-in for a compiler frontend: each `[[element]]` table mirrors
//! what discovery would report for one annotated program element.
//!
//! ```toml
//! [[element]]
//! kind = "type"
//! name = "com.example.AcmeMod"
//!
//! [element.mod]
//! id = "acme"
//! version = "1.0.0"
//! authors = ["alice"]
//!
//! [[element]]
//! kind = "type"
//! name = "com.example.InitHook"
//! interfaces = ["org.dimdev.rift.listener.InitListener"]
//!
//! [element.listener]
//! priority = 1
//! side = "client"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use manifest_kit::descriptor::{ParseSideError, Side};
use manifest_kit::element::{ElementKind, ElementRef, ListenerValues, Modifier, ModValues};
use manifest_kit::provider::InMemoryProvider;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementSetFile {
    #[serde(default, rename = "element")]
    elements: Vec<ElementEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementEntry {
    kind: String,
    name: String,
    #[serde(default)]
    nested: bool,
    #[serde(default, rename = "static")]
    is_static: bool,
    #[serde(default)]
    interfaces: Vec<String>,
    #[serde(default, rename = "mod")]
    mod_entry: Option<ModEntry>,
    #[serde(default)]
    listener: Option<ListenerEntry>,
}

/// Raw mod annotation values. All fields default to empty so that
/// required-field enforcement stays in the validator, not the loader.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModEntry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    side: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListenerEntry {
    #[serde(default)]
    priority: i32,
    #[serde(default)]
    side: Option<String>,
}

/// Load an element set file into a discovery provider
pub fn load_element_set(path: &Path) -> Result<InMemoryProvider, ElementSetError> {
    let text = std::fs::read_to_string(path).map_err(|source| ElementSetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let elements = parse_element_set(&text)?;
    Ok(InMemoryProvider::from_elements(elements))
}

/// Parse element set text, preserving declaration order as discovery
/// order
pub fn parse_element_set(text: &str) -> Result<Vec<ElementRef>, ElementSetError> {
    let file: ElementSetFile = toml::from_str(text)?;
    file.elements.into_iter().map(to_element).collect()
}

fn to_element(entry: ElementEntry) -> Result<ElementRef, ElementSetError> {
    let kind = match entry.kind.as_str() {
        "type" | "class" | "interface" => ElementKind::Type,
        "package" => ElementKind::Package,
        _ => ElementKind::Other,
    };

    let mut element = ElementRef::new(kind, &entry.name);
    if entry.nested {
        element = element.nested();
    }
    if entry.is_static {
        element = element.with_modifier(Modifier::Static);
    }
    for interface in entry.interfaces {
        element = element.with_interface(interface);
    }

    if let Some(values) = entry.mod_entry {
        element = element.with_mod(ModValues {
            id: values.id,
            name: values.name,
            version: values.version,
            side: parse_side(values.side, &entry.name)?,
            authors: values.authors,
        });
    }

    if let Some(values) = entry.listener {
        element = element.with_listener(ListenerValues {
            priority: values.priority,
            side: parse_side(values.side, &entry.name)?,
        });
    }

    Ok(element)
}

fn parse_side(token: Option<String>, element: &str) -> Result<Side, ElementSetError> {
    match token {
        Some(token) => token.parse().map_err(|source| ElementSetError::Side {
            element: element.to_string(),
            source,
        }),
        None => Ok(Side::default()),
    }
}

/// Errors that can occur while loading an element set
#[derive(Debug, Error)]
pub enum ElementSetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse element set: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid side for element '{element}': {source}")]
    Side {
        element: String,
        source: ParseSideError,
    },
}
