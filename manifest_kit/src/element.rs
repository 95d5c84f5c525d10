//! # Element References
//!
//! Input shapes consumed from the discovery boundary. An [`ElementRef`]
//! describes one annotated program element: its kind, qualified name,
//! enclosing scope, modifier set, implemented interfaces, and the raw
//! values read from its annotations. The pipeline never inspects source
//! itself; everything it knows about an element arrives through this
//! shape.

use std::collections::BTreeSet;

use crate::descriptor::Side;

/// Declarative tag used to discover candidate elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The mod marker, yielding at most one accepted descriptor per pass
    Mod,
    /// The listener marker
    Listener,
}

/// Kind of a discovered program element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A class or interface declaration
    Type,
    /// A package declaration
    Package,
    /// Anything else (method, field, parameter)
    Other,
}

/// Scope directly enclosing a discovered element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Enclosed by a package, i.e. top-level
    Package,
    /// Nested inside another type
    Type,
}

/// Declaration modifiers relevant to eligibility checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Modifier {
    Static,
    Final,
    Abstract,
}

/// Raw values read from a mod annotation, unvalidated
#[derive(Debug, Clone, Default)]
pub struct ModValues {
    pub id: String,
    pub name: String,
    pub version: String,
    pub side: Side,
    pub authors: Vec<String>,
}

/// Raw values read from a listener annotation, unvalidated
#[derive(Debug, Clone, Default)]
pub struct ListenerValues {
    pub priority: i32,
    pub side: Side,
}

/// One discovered program element with its annotation payloads
#[derive(Debug, Clone)]
pub struct ElementRef {
    pub kind: ElementKind,
    pub qualified_name: String,
    pub enclosing: Scope,
    pub modifiers: BTreeSet<Modifier>,
    pub interfaces: Vec<String>,
    pub mod_values: Option<ModValues>,
    pub listener_values: Option<ListenerValues>,
}

impl ElementRef {
    /// Create a top-level element with no modifiers or annotations
    pub fn new(kind: ElementKind, qualified_name: impl Into<String>) -> Self {
        Self {
            kind,
            qualified_name: qualified_name.into(),
            enclosing: Scope::Package,
            modifiers: BTreeSet::new(),
            interfaces: Vec::new(),
            mod_values: None,
            listener_values: None,
        }
    }

    pub fn nested(mut self) -> Self {
        self.enclosing = Scope::Type;
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        let _ = self.modifiers.insert(modifier);
        self
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_mod(mut self, values: ModValues) -> Self {
        self.mod_values = Some(values);
        self
    }

    pub fn with_listener(mut self, values: ListenerValues) -> Self {
        self.listener_values = Some(values);
        self
    }

    /// Whether the element carries the annotation for the given marker
    pub fn has_marker(&self, marker: Marker) -> bool {
        match marker {
            Marker::Mod => self.mod_values.is_some(),
            Marker::Listener => self.listener_values.is_some(),
        }
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(&Modifier::Static)
    }

    pub fn is_top_level(&self) -> bool {
        matches!(self.enclosing, Scope::Package)
    }

    /// Whether the element implements at least one interface
    pub fn has_capabilities(&self) -> bool {
        !self.interfaces.is_empty()
    }
}
