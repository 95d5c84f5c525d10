//! # Descriptor Model
//!
//! Plain value shapes for the mod and listener records that end up in
//! `riftmod.json`. Descriptors are built once per pass by the validator,
//! are immutable afterwards, and are discarded after the document is
//! written.

use core::fmt;
use core::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Physical side a mod or listener is declared to load on.
///
/// `Both` is the canonical representation of "load everywhere"; the
/// historical `either` token from older manifests parses to it as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Both physical sides
    #[default]
    Both,
    /// The physical client side
    Client,
    /// The physical server side
    Server,
}

impl Side {
    /// The lower-case token used in the emitted manifest
    pub fn token(&self) -> &'static str {
        match self {
            Side::Both => "both",
            Side::Client => "client",
            Side::Server => "server",
        }
    }

    /// Collapse any both-equivalent representation to `Both`.
    ///
    /// All schema versions emit the single token `both` for a side that
    /// targets everything, so canonicalization happens here and nowhere
    /// else.
    pub fn canonical(&self) -> Side {
        match self {
            Side::Both => Side::Both,
            other => *other,
        }
    }

    pub fn is_both(&self) -> bool {
        matches!(self, Side::Both)
    }

    pub fn is_client(&self) -> bool {
        matches!(self, Side::Client)
    }

    pub fn is_server(&self) -> bool {
        matches!(self, Side::Server)
    }

    /// Loading-condition check: `Both` is equivalent to every side
    pub fn is_equivalent_to(&self, side: Side) -> bool {
        self.is_both() || *self == side
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" | "either" => Ok(Side::Both),
            "client" => Ok(Side::Client),
            "server" => Ok(Side::Server),
            other => Err(ParseSideError(other.to_string())),
        }
    }
}

impl Serialize for Side {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.canonical().token())
    }
}

/// Unrecognized side token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized side '{0}', expected 'both', 'client', or 'server'")]
pub struct ParseSideError(pub String);

/// The single top-level metadata record for one pass.
///
/// `name` has already been defaulted to `id` by the validator when the
/// declared name was empty.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    pub id: String,
    pub name: String,
    pub version: String,
    pub side: Side,
    pub authors: Vec<String>,
}

/// One hook/handler record attached to the mod.
#[derive(Debug, Clone)]
pub struct ListenerDescriptor {
    /// Qualified name of the implementing type, derived from the element
    /// reference and never user-supplied
    pub class_name: String,
    /// Loading priority; lower values sort first
    pub priority: i32,
    pub side: Side,
    /// Whether the type implements at least one interface. A listener
    /// without interfaces is accepted but can do nothing at runtime.
    pub has_capabilities: bool,
}
