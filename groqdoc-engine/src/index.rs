//! The implementer context index built by the scan pass.
//!
//! Written only during pass one, read-only thereafter. Order within each
//! entry is traversal order: units in input order, declarations in
//! declaration order, so prompt content is reproducible for a given
//! input ordering.

use std::collections::HashMap;

use crate::parsers::{CompilationUnit, TypeKind};

/// Map from a fully-qualified interface identifier to the printed source
/// of every class implementing it.
#[derive(Debug, Default)]
pub struct ContextIndex {
    entries: HashMap<String, Vec<String>>,
}

impl ContextIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every class declaration of one unit.
    ///
    /// A class implementing at least one interface is indexed solely
    /// under its *first* listed interface; the remainder are ignored.
    /// That first-only behavior is a documented invariant of the system,
    /// not an accident. Classes implementing nothing are skipped.
    pub fn record_unit(&mut self, unit: &CompilationUnit, source: &str) {
        for decl in &unit.types {
            if decl.kind != TypeKind::Class {
                continue;
            }
            let Some(first) = decl.implements.first() else {
                continue;
            };
            let key = unit.resolve_type_identifier(first);
            let printed = source[decl.range.start..decl.range.end].to_string();
            self.entries.entry(key).or_default().push(printed);
        }
    }

    /// Implementer sources for one interface, in accumulation order.
    /// Unknown interfaces yield an empty slice: they are still processed
    /// by the transform pass with only their own source as context.
    pub fn contexts(&self, identifier: &str) -> &[String] {
        self.entries
            .get(identifier)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of interfaces with at least one recorded implementer.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::JavaParser;

    fn record(index: &mut ContextIndex, parser: &mut JavaParser, source: &str) {
        let unit = parser.parse_unit(source).unwrap();
        index.record_unit(&unit, source);
    }

    #[test]
    fn classes_are_indexed_only_under_their_first_interface() {
        let mut parser = JavaParser::new().unwrap();
        let mut index = ContextIndex::new();
        record(
            &mut index,
            &mut parser,
            "package p;\npublic class Both implements First, Second {}\n",
        );

        assert_eq!(index.contexts("p.First").len(), 1);
        assert!(index.contexts("p.Second").is_empty());
        assert!(index.contexts("p.First")[0].contains("class Both"));
    }

    #[test]
    fn classes_without_interfaces_are_ignored() {
        let mut parser = JavaParser::new().unwrap();
        let mut index = ContextIndex::new();
        record(&mut index, &mut parser, "public class Plain {}");
        assert!(index.is_empty());
    }

    #[test]
    fn accumulation_preserves_traversal_order() {
        let mut parser = JavaParser::new().unwrap();
        let mut index = ContextIndex::new();
        record(
            &mut index,
            &mut parser,
            "package p;\npublic class A implements Greetings {}\n",
        );
        record(
            &mut index,
            &mut parser,
            "package p;\npublic class B implements Greetings {}\n",
        );

        let contexts = index.contexts("p.Greetings");
        assert_eq!(contexts.len(), 2);
        assert!(contexts[0].contains("class A"));
        assert!(contexts[1].contains("class B"));
    }

    #[test]
    fn printed_source_is_the_exact_declaration_slice() {
        let source = "package p;\n\npublic class Impl implements Greetings {\n    public void hi() {}\n}\n";
        let mut parser = JavaParser::new().unwrap();
        let mut index = ContextIndex::new();
        record(&mut index, &mut parser, source);

        let printed = &index.contexts("p.Greetings")[0];
        assert!(printed.starts_with("public class Impl"));
        assert!(printed.ends_with('}'));
    }

    #[test]
    fn qualified_nested_interface_references_share_a_key_with_the_declaration() {
        let mut parser = JavaParser::new().unwrap();
        let mut index = ContextIndex::new();
        record(
            &mut index,
            &mut parser,
            "package p;\npublic class Impl implements Outer.Inner {}\n",
        );

        let host = "package p;\npublic class Outer {\n    public interface Inner {\n        void run();\n    }\n}\n";
        let unit = parser.parse_unit(host).unwrap();
        let inner = &unit.types[1];
        let key = unit.qualified_name(&inner.nested_name);

        assert_eq!(key, "p.Outer.Inner");
        assert_eq!(index.contexts(&key).len(), 1);
    }

    #[test]
    fn interfaces_themselves_are_not_indexed() {
        let mut parser = JavaParser::new().unwrap();
        let mut index = ContextIndex::new();
        record(
            &mut index,
            &mut parser,
            // An interface extending another must not be treated as an
            // implementing class.
            "package p;\npublic interface Wide extends Narrow {}\n",
        );
        assert!(index.is_empty());
    }
}
