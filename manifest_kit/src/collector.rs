//! # Candidate Collection
//!
//! Queries the discovery provider for each marker and applies the
//! structural rules as a filter. Mod collection resolves how many
//! eligible candidates exist; listener collection filters each
//! candidate independently and orders the survivors by priority.

use crate::descriptor::ListenerDescriptor;
use crate::diagnostics::Diagnostic;
use crate::element::{ElementRef, Marker};
use crate::provider::ElementProvider;
use crate::validator;

/// Resolution of the mod candidate set for one pass
#[derive(Debug)]
pub enum ModuleOutcome {
    /// Nothing is annotated at all; the pass performs no work
    NoOp,
    /// No eligible mod, but work was discovered that needs one
    Missing,
    /// More than one eligible mod; there is no principled default
    Ambiguous,
    /// Exactly one eligible candidate, ready for content validation
    Candidate(ElementRef),
}

/// Outcome of mod collection with the diagnostics it produced
#[derive(Debug)]
pub struct ModuleCollection {
    pub outcome: ModuleOutcome,
    pub diagnostics: Vec<Diagnostic>,
}

/// Validated, ordered listener set with the diagnostics it produced
#[derive(Debug)]
pub struct ListenerCollection {
    pub listeners: Vec<ListenerDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Applies eligibility rules over a discovery provider.
///
/// The collector is stateless between calls; nothing is cached across
/// passes.
#[derive(Debug)]
pub struct Collector<'a, P: ?Sized> {
    provider: &'a P,
}

impl<'a, P: ElementProvider + ?Sized> Collector<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Resolve the mod candidate set.
    ///
    /// Structural rejections are reported per candidate. Zero eligible
    /// candidates is a no-op when nothing else was discovered, and fatal
    /// when listeners are present or a candidate was rejected. More than
    /// one eligible candidate is always fatal.
    pub fn collect_module(&self) -> ModuleCollection {
        let candidates = self.provider.query_by_marker(Marker::Mod);
        let listeners_present = !self.provider.query_by_marker(Marker::Listener).is_empty();

        let mut diagnostics = Vec::new();
        let mut eligible = Vec::new();

        for candidate in candidates {
            match validator::module_shape_error(&candidate) {
                Some(error) => diagnostics.push(error),
                None => eligible.push(candidate),
            }
        }

        let outcome = match eligible.len() {
            0 => {
                if !listeners_present && diagnostics.is_empty() {
                    ModuleOutcome::NoOp
                } else {
                    diagnostics
                        .push(Diagnostic::error("no eligible mod declaration discovered"));
                    ModuleOutcome::Missing
                }
            }
            1 => {
                let candidate = eligible.remove(0);
                ModuleOutcome::Candidate(candidate)
            }
            count => {
                diagnostics.push(Diagnostic::error(format!(
                    "{count} mod declarations discovered, expected exactly one"
                )));
                ModuleOutcome::Ambiguous
            }
        };

        ModuleCollection {
            outcome,
            diagnostics,
        }
    }

    /// Resolve the listener set.
    ///
    /// Each candidate is validated independently; one rejection never
    /// affects another. Survivors are sorted by ascending priority, with
    /// discovery order breaking ties.
    pub fn collect_listeners(&self) -> ListenerCollection {
        let mut listeners = Vec::new();
        let mut diagnostics = Vec::new();

        for candidate in self.provider.query_by_marker(Marker::Listener) {
            let validation = validator::validate_listener(&candidate);
            diagnostics.extend(validation.diagnostics);
            if let Some(descriptor) = validation.descriptor {
                listeners.push(descriptor);
            }
        }

        // sort_by_key is stable, so discovery order survives ties
        listeners.sort_by_key(|listener| listener.priority);

        ListenerCollection {
            listeners,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Side;
    use crate::diagnostics::Severity;
    use crate::element::{ElementKind, ListenerValues, ModValues};
    use crate::provider::InMemoryProvider;

    fn mod_element(name: &str) -> ElementRef {
        ElementRef::new(ElementKind::Type, name).with_mod(ModValues {
            id: "acme".to_string(),
            name: "Acme".to_string(),
            version: "1.0.0".to_string(),
            side: Side::Both,
            authors: Vec::new(),
        })
    }

    fn listener_element(name: &str, priority: i32) -> ElementRef {
        ElementRef::new(ElementKind::Type, name)
            .with_interface("com.example.Hook")
            .with_listener(ListenerValues {
                priority,
                side: Side::Both,
            })
    }

    #[test]
    fn test_empty_environment_is_noop() {
        let provider = InMemoryProvider::new();
        let collection = Collector::new(&provider).collect_module();

        assert!(matches!(collection.outcome, ModuleOutcome::NoOp));
        assert!(collection.diagnostics.is_empty());
    }

    #[test]
    fn test_listeners_without_mod_is_fatal() {
        let provider =
            InMemoryProvider::from_elements(vec![listener_element("com.example.Hook", 0)]);
        let collection = Collector::new(&provider).collect_module();

        assert!(matches!(collection.outcome, ModuleOutcome::Missing));
        assert_eq!(collection.diagnostics.len(), 1);
        assert_eq!(collection.diagnostics[0].severity, Severity::Error);
    }

    #[test]
    fn test_single_eligible_mod_becomes_candidate() {
        let provider = InMemoryProvider::from_elements(vec![mod_element("com.example.Acme")]);
        let collection = Collector::new(&provider).collect_module();

        match collection.outcome {
            ModuleOutcome::Candidate(candidate) => {
                assert_eq!(candidate.qualified_name, "com.example.Acme");
            }
            other => panic!("expected candidate, got {:?}", other),
        }
        assert!(collection.diagnostics.is_empty());
    }

    #[test]
    fn test_two_mods_are_ambiguous_with_one_error() {
        let provider = InMemoryProvider::from_elements(vec![
            mod_element("com.example.First"),
            mod_element("com.example.Second"),
        ]);
        let collection = Collector::new(&provider).collect_module();

        assert!(matches!(collection.outcome, ModuleOutcome::Ambiguous));
        assert_eq!(collection.diagnostics.len(), 1);
        assert_eq!(collection.diagnostics[0].severity, Severity::Error);
        assert!(collection.diagnostics[0].message.contains("2"));
    }

    #[test]
    fn test_rejected_only_mod_is_missing_not_noop() {
        // A structurally ineligible candidate was discovered, so the
        // pass must abort rather than silently do nothing.
        let element = ElementRef::new(ElementKind::Other, "com.example.Acme#init")
            .with_mod(ModValues::default());
        let provider = InMemoryProvider::from_elements(vec![element]);
        let collection = Collector::new(&provider).collect_module();

        assert!(matches!(collection.outcome, ModuleOutcome::Missing));
        // One rejection plus the missing-mod report
        assert_eq!(collection.diagnostics.len(), 2);
    }

    #[test]
    fn test_listeners_sorted_by_priority() {
        let provider = InMemoryProvider::from_elements(vec![
            listener_element("com.example.Late", 5),
            listener_element("com.example.Early", 1),
        ]);
        let collection = Collector::new(&provider).collect_listeners();

        let names: Vec<&str> = collection
            .listeners
            .iter()
            .map(|l| l.class_name.as_str())
            .collect();
        assert_eq!(names, ["com.example.Early", "com.example.Late"]);
    }

    #[test]
    fn test_listener_ties_keep_discovery_order() {
        let provider = InMemoryProvider::from_elements(vec![
            listener_element("com.example.A", 3),
            listener_element("com.example.B", 0),
            listener_element("com.example.C", 3),
            listener_element("com.example.D", 3),
        ]);
        let collection = Collector::new(&provider).collect_listeners();

        let names: Vec<&str> = collection
            .listeners
            .iter()
            .map(|l| l.class_name.as_str())
            .collect();
        assert_eq!(
            names,
            ["com.example.B", "com.example.A", "com.example.C", "com.example.D"]
        );
    }

    #[test]
    fn test_listener_rejection_is_independent() {
        let provider = InMemoryProvider::from_elements(vec![
            ElementRef::new(ElementKind::Package, "com.example")
                .with_listener(ListenerValues::default()),
            listener_element("com.example.Hook", 0),
        ]);
        let collection = Collector::new(&provider).collect_listeners();

        assert_eq!(collection.listeners.len(), 1);
        assert_eq!(collection.listeners[0].class_name, "com.example.Hook");
        assert_eq!(collection.diagnostics.len(), 1);
        assert_eq!(collection.diagnostics[0].severity, Severity::Error);
    }
}
