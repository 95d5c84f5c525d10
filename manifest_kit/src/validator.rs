//! # Validation Rules
//!
//! Pure acceptance rules for discovered elements. Structural checks
//! decide whether an element is a well-formed candidate for its marker;
//! content checks (mod only) decide whether the annotation values are
//! usable and resolve defaults. Results carry their diagnostics
//! explicitly so callers decide where they are reported.

use crate::descriptor::{ListenerDescriptor, ModuleDescriptor};
use crate::diagnostics::Diagnostic;
use crate::element::{ElementKind, ElementRef};

/// How content violations in optional fields are handled.
///
/// `Strict` mirrors the original abort-on-error behavior; `Lenient`
/// drops the offending entry and keeps the rest. One policy applies to
/// the whole pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    Strict,
    #[default]
    Lenient,
}

/// Outcome of mod content validation
#[derive(Debug)]
pub struct ModuleValidation {
    /// The accepted descriptor, or `None` when the candidate was rejected
    pub descriptor: Option<ModuleDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of listener validation
#[derive(Debug)]
pub struct ListenerValidation {
    pub descriptor: Option<ListenerDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Structural eligibility of a mod candidate.
///
/// A mod may be declared on a type or a package. A type nested inside
/// another type must be static. Returns the rejection diagnostic when
/// the element is ineligible.
pub fn module_shape_error(element: &ElementRef) -> Option<Diagnostic> {
    match element.kind {
        ElementKind::Type => {
            if !element.is_top_level() && !element.is_static() {
                return Some(
                    Diagnostic::error("mod marker applied to non-static nested type")
                        .with_element(&element.qualified_name),
                );
            }
            None
        }
        ElementKind::Package => None,
        ElementKind::Other => Some(
            Diagnostic::error("mod marker applied to non-type, non-package element")
                .with_element(&element.qualified_name),
        ),
    }
}

/// Structural eligibility of a listener candidate.
///
/// A listener must be a type, never a package, and the same
/// static-nesting rule applies.
pub fn listener_shape_error(element: &ElementRef) -> Option<Diagnostic> {
    match element.kind {
        ElementKind::Type => {
            if !element.is_top_level() && !element.is_static() {
                return Some(
                    Diagnostic::error("listener type is nested but not static")
                        .with_element(&element.qualified_name),
                );
            }
            None
        }
        _ => Some(
            Diagnostic::error("listener marker applied to non-type element")
                .with_element(&element.qualified_name),
        ),
    }
}

/// Content-validate a structurally eligible mod candidate.
///
/// - empty `id` or `version` rejects the candidate
/// - empty `name` defaults to `id` with a note
/// - an empty `authors` entry rejects the candidate under
///   [`Strictness::Strict`], or is skipped under [`Strictness::Lenient`]
pub fn validate_module(element: &ElementRef, strictness: Strictness) -> ModuleValidation {
    let mut diagnostics = Vec::new();

    let values = match &element.mod_values {
        Some(values) => values,
        None => {
            diagnostics.push(
                Diagnostic::error("mod candidate carries no annotation values")
                    .with_element(&element.qualified_name),
            );
            return ModuleValidation {
                descriptor: None,
                diagnostics,
            };
        }
    };

    if values.id.is_empty() {
        diagnostics.push(
            Diagnostic::error("empty value 'id' in mod annotation")
                .with_element(&element.qualified_name),
        );
        return ModuleValidation {
            descriptor: None,
            diagnostics,
        };
    }

    if values.version.is_empty() {
        diagnostics.push(
            Diagnostic::error("empty value 'version' in mod annotation")
                .with_element(&element.qualified_name),
        );
        return ModuleValidation {
            descriptor: None,
            diagnostics,
        };
    }

    let name = if values.name.is_empty() {
        diagnostics.push(
            Diagnostic::note(format!(
                "empty value 'name' in mod annotation, substituting '{}'",
                values.id
            ))
            .with_element(&element.qualified_name),
        );
        values.id.clone()
    } else {
        values.name.clone()
    };

    let mut authors = Vec::with_capacity(values.authors.len());
    for author in &values.authors {
        if author.is_empty() {
            diagnostics.push(
                Diagnostic::error("empty entry in value 'authors' in mod annotation")
                    .with_element(&element.qualified_name),
            );
            if strictness == Strictness::Strict {
                return ModuleValidation {
                    descriptor: None,
                    diagnostics,
                };
            }
            continue;
        }
        authors.push(author.clone());
    }

    ModuleValidation {
        descriptor: Some(ModuleDescriptor {
            id: values.id.clone(),
            name,
            version: values.version.clone(),
            side: values.side,
            authors,
        }),
        diagnostics,
    }
}

/// Validate a listener candidate, structure first, then capabilities.
///
/// A listener implementing no interfaces is accepted with a warning;
/// its priority and side are well-typed by construction so there is no
/// content validation.
pub fn validate_listener(element: &ElementRef) -> ListenerValidation {
    if let Some(error) = listener_shape_error(element) {
        return ListenerValidation {
            descriptor: None,
            diagnostics: vec![error],
        };
    }

    let mut diagnostics = Vec::new();
    let has_capabilities = element.has_capabilities();

    if !has_capabilities {
        diagnostics.push(
            Diagnostic::warning("listener does not implement any interfaces")
                .with_element(&element.qualified_name),
        );
    }

    let values = element.listener_values.clone().unwrap_or_default();

    ListenerValidation {
        descriptor: Some(ListenerDescriptor {
            class_name: element.qualified_name.clone(),
            priority: values.priority,
            side: values.side,
            has_capabilities,
        }),
        diagnostics,
    }
}
