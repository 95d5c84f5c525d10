//! # Element Discovery Provider
//!
//! Boundary trait for the host capability that discovers annotated
//! elements. The collector only ever talks to this trait, so it can be
//! driven by synthetic element sets in tests instead of a real compiler
//! frontend.

use crate::element::{ElementRef, Marker};

/// Source of discovered elements for a given marker.
///
/// The order of the returned vector is the discovery order, which the
/// collector uses as the tie-break for equal listener priorities.
pub trait ElementProvider {
    fn query_by_marker(&self, marker: Marker) -> Vec<ElementRef>;
}

/// Provider backed by a fixed element set, in insertion order
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    elements: Vec<ElementRef>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<ElementRef>) -> Self {
        Self { elements }
    }

    pub fn push(&mut self, element: ElementRef) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementProvider for InMemoryProvider {
    fn query_by_marker(&self, marker: Marker) -> Vec<ElementRef> {
        self.elements
            .iter()
            .filter(|e| e.has_marker(marker))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementKind, ListenerValues, ModValues};

    #[test]
    fn test_query_filters_by_marker() {
        let mut provider = InMemoryProvider::new();
        provider.push(
            ElementRef::new(ElementKind::Type, "com.example.Acme")
                .with_mod(ModValues::default()),
        );
        provider.push(
            ElementRef::new(ElementKind::Type, "com.example.Hook")
                .with_listener(ListenerValues::default()),
        );
        provider.push(ElementRef::new(ElementKind::Type, "com.example.Plain"));

        let mods = provider.query_by_marker(Marker::Mod);
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].qualified_name, "com.example.Acme");

        let listeners = provider.query_by_marker(Marker::Listener);
        assert_eq!(listeners.len(), 1);
        assert_eq!(listeners[0].qualified_name, "com.example.Hook");
    }

    #[test]
    fn test_query_preserves_insertion_order() {
        let mut provider = InMemoryProvider::new();
        for name in ["a.First", "a.Second", "a.Third"] {
            provider.push(
                ElementRef::new(ElementKind::Type, name).with_listener(ListenerValues::default()),
            );
        }

        let names: Vec<String> = provider
            .query_by_marker(Marker::Listener)
            .into_iter()
            .map(|e| e.qualified_name)
            .collect();
        assert_eq!(names, ["a.First", "a.Second", "a.Third"]);
    }
}
