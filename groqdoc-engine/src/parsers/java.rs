//! Java parser using native tree-sitter.
//!
//! Extracts packages, imports, class/interface declarations, their
//! methods, and attached leading comments.

use groqdoc_core::errors::ParseError;
use tree_sitter::{Node, Parser};

use super::types::{
    ByteRange, CommentKind, CompilationUnit, LeadingComment, MethodDeclaration, Parameter,
    TypeDeclaration, TypeKind,
};

/// Java parser. Holds the tree-sitter parser instance; the pipeline is
/// single-threaded, so one instance is reused across all parses.
pub struct JavaParser {
    parser: Parser,
}

impl JavaParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language = tree_sitter_java::LANGUAGE;
        parser
            .set_language(&language.into())
            .map_err(|e| ParseError::Grammar(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Parse one compilation unit into the structural model.
    ///
    /// Local syntax errors are recorded on the unit rather than failing
    /// the parse; the caller decides how strict to be.
    pub fn parse_unit(&mut self, source: &str) -> Result<CompilationUnit, ParseError> {
        let tree = self.parser.parse(source, None).ok_or(ParseError::NoTree)?;
        let root = tree.root_node();
        let bytes = source.as_bytes();

        let mut unit = CompilationUnit {
            has_errors: root.has_error(),
            ..Default::default()
        };

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_declaration" => unit.package = package_name(&child, bytes),
                "import_declaration" => {
                    if let Some(path) = import_path(&child, bytes) {
                        unit.imports.push(path);
                    }
                }
                _ => {}
            }
        }

        collect_types(&root, bytes, "", &mut unit.types);
        Ok(unit)
    }
}

fn package_name(node: &Node, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if matches!(child.kind(), "identifier" | "scoped_identifier") {
            return child.utf8_text(source).ok().map(str::to_string);
        }
    }
    None
}

/// Path of a single-type import. Wildcard imports carry no simple-name
/// mapping, so they are skipped.
fn import_path(node: &Node, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    let mut path = None;
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "asterisk" => return None,
            "identifier" | "scoped_identifier" => {
                path = child.utf8_text(source).ok().map(str::to_string);
            }
            _ => {}
        }
    }
    path
}

/// Collect class and interface declarations in declaration order, outer
/// before nested. `prefix` is the enclosing dotted member path, empty at
/// the top level.
fn collect_types(node: &Node, source: &[u8], prefix: &str, out: &mut Vec<TypeDeclaration>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if matches!(child.kind(), "class_declaration" | "interface_declaration") {
            let decl = build_type(&child, source, prefix);
            let inner_prefix = decl
                .as_ref()
                .map(|d| d.nested_name.clone())
                .unwrap_or_else(|| prefix.to_string());
            if let Some(decl) = decl {
                out.push(decl);
            }
            if let Some(body) = child.child_by_field_name("body") {
                collect_types(&body, source, &inner_prefix, out);
            }
        }
    }
}

fn build_type(node: &Node, source: &[u8], prefix: &str) -> Option<TypeDeclaration> {
    let name = field_text(node, "name", source)?;
    let nested_name = if prefix.is_empty() {
        name.clone()
    } else {
        format!("{prefix}.{name}")
    };
    let kind = if node.kind() == "interface_declaration" {
        TypeKind::Interface
    } else {
        TypeKind::Class
    };
    let methods = node
        .child_by_field_name("body")
        .map(|body| collect_methods(&body, source))
        .unwrap_or_default();

    Some(TypeDeclaration {
        kind,
        name,
        nested_name,
        implements: implemented_interfaces(node, source),
        methods,
        range: node_range(node),
    })
}

/// The `implements` clause of a class, in declared order.
fn implemented_interfaces(node: &Node, source: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let Some(supers) = node.child_by_field_name("interfaces") else {
        return out;
    };
    let mut cursor = supers.walk();
    for child in supers.named_children(&mut cursor) {
        if child.kind() == "type_list" {
            let mut types = child.walk();
            for ty in child.named_children(&mut types) {
                if let Ok(text) = ty.utf8_text(source) {
                    out.push(text.to_string());
                }
            }
        }
    }
    out
}

/// Methods declared directly in a class or interface body. Nested types
/// are collected separately and do not contribute methods here.
fn collect_methods(body: &Node, source: &[u8]) -> Vec<MethodDeclaration> {
    let mut out = Vec::new();
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        if child.kind() == "method_declaration" {
            out.push(build_method(&child, source));
        }
    }
    out
}

fn build_method(node: &Node, source: &[u8]) -> MethodDeclaration {
    let name = field_text(node, "name", source).unwrap_or_default();
    let mut parameters = Vec::new();

    if let Some(params) = node.child_by_field_name("parameters") {
        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            match param.kind() {
                "formal_parameter" => {
                    let type_text = param
                        .child_by_field_name("type")
                        .and_then(|t| t.utf8_text(source).ok())
                        .unwrap_or("")
                        .to_string();
                    parameters.push(Parameter::Typed { type_text });
                }
                // Varargs keep the element type plus the ellipsis so both
                // parses of the same method produce the same type text.
                "spread_parameter" => {
                    let type_text = param
                        .named_child(0)
                        .and_then(|t| t.utf8_text(source).ok())
                        .unwrap_or("")
                        .to_string();
                    parameters.push(Parameter::Typed {
                        type_text: format!("{type_text}..."),
                    });
                }
                "line_comment" | "block_comment" => {}
                other => parameters.push(Parameter::Unsupported {
                    kind: other.to_string(),
                }),
            }
        }
    }

    MethodDeclaration {
        name,
        parameters,
        comments: leading_comments(node, source),
        range: node_range(node),
    }
}

/// Comments attached above a declaration: a contiguous run of comment
/// siblings separated from the declaration (and each other) by whitespace
/// only, each starting on its own line. Trailing comments on the previous
/// member's line are not attached.
fn leading_comments(node: &Node, source: &[u8]) -> Vec<LeadingComment> {
    let mut comments = Vec::new();
    let mut current = *node;

    while let Some(prev) = current.prev_named_sibling() {
        let kind = prev.kind();
        if kind != "line_comment" && kind != "block_comment" {
            break;
        }
        let gap = &source[prev.end_byte()..current.start_byte()];
        if !gap.iter().all(|b| b.is_ascii_whitespace()) {
            break;
        }
        if !starts_own_line(prev.start_byte(), source) {
            break;
        }

        let text = prev.utf8_text(source).unwrap_or_default().to_string();
        let comment_kind = if kind == "line_comment" {
            CommentKind::Line
        } else if text.starts_with("/**") {
            CommentKind::Javadoc
        } else {
            CommentKind::Block
        };
        comments.push(LeadingComment {
            kind: comment_kind,
            text,
        });
        current = prev;
    }

    comments.reverse();
    comments
}

/// True when only spaces or tabs precede `start` on its line.
fn starts_own_line(start: usize, source: &[u8]) -> bool {
    source[..start]
        .iter()
        .rev()
        .take_while(|&&b| b != b'\n')
        .all(|&b| b == b' ' || b == b'\t')
}

fn field_text(node: &Node, field: &str, source: &[u8]) -> Option<String> {
    node.child_by_field_name(field)?
        .utf8_text(source)
        .ok()
        .map(str::to_string)
}

fn node_range(node: &Node) -> ByteRange {
    ByteRange {
        start: node.start_byte(),
        end: node.end_byte(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> CompilationUnit {
        JavaParser::new().unwrap().parse_unit(source).unwrap()
    }

    #[test]
    fn parses_interface_with_methods_and_parameters() {
        let unit = parse(
            r#"package dev.example;

public interface Greetings {
    String helloWorld();

    String helloTo(String name);

    void greetAll(String prefix, int times);
}
"#,
        );

        assert_eq!(unit.package.as_deref(), Some("dev.example"));
        assert_eq!(unit.types.len(), 1);
        let decl = &unit.types[0];
        assert_eq!(decl.kind, TypeKind::Interface);
        assert_eq!(decl.name, "Greetings");
        assert_eq!(decl.methods.len(), 3);
        assert_eq!(decl.methods[0].name, "helloWorld");
        assert!(decl.methods[0].parameters.is_empty());

        let hello_to = &decl.methods[1];
        assert_eq!(hello_to.parameters.len(), 1);
        assert!(
            matches!(&hello_to.parameters[0], Parameter::Typed { type_text } if type_text == "String")
        );

        let greet_all = &decl.methods[2];
        assert_eq!(greet_all.parameters.len(), 2);
        assert!(
            matches!(&greet_all.parameters[1], Parameter::Typed { type_text } if type_text == "int")
        );
    }

    #[test]
    fn captures_implemented_interfaces_in_declared_order() {
        let unit = parse(
            "public class Impl implements Second, First { public void run() {} }",
        );
        let decl = &unit.types[0];
        assert_eq!(decl.kind, TypeKind::Class);
        assert_eq!(decl.implements, vec!["Second", "First"]);
    }

    #[test]
    fn attaches_leading_javadoc_to_methods() {
        let unit = parse(
            r#"public interface Greetings {
    /**
     * Greets the world.
     */
    String helloWorld();

    // not documentation
    String goodbyeWorld();

    String helloTo(String name);
}
"#,
        );
        let methods = &unit.types[0].methods;

        let doc = methods[0].leading_doc().expect("javadoc attached");
        assert_eq!(doc.kind, CommentKind::Javadoc);
        assert!(doc.text.contains("Greets the world."));

        assert!(methods[1].has_comment());
        assert!(methods[1].leading_doc().is_none());

        assert!(!methods[2].has_comment());
    }

    #[test]
    fn trailing_comment_on_previous_line_is_not_attached() {
        let unit = parse(
            r#"public interface Greetings {
    String helloWorld(); // trailing note
    String goodbyeWorld();
}
"#,
        );
        let methods = &unit.types[0].methods;
        assert!(!methods[1].has_comment());
    }

    #[test]
    fn nested_types_are_collected_after_their_outer_type() {
        let unit = parse(
            r#"public class Outer {
    public interface Inner {
        void run();
    }
}
"#,
        );
        assert_eq!(unit.types.len(), 2);
        assert_eq!(unit.types[0].name, "Outer");
        assert_eq!(unit.types[0].nested_name, "Outer");
        assert_eq!(unit.types[1].name, "Inner");
        assert_eq!(unit.types[1].nested_name, "Outer.Inner");
        assert_eq!(unit.types[1].kind, TypeKind::Interface);
        // Outer's own method list does not absorb Inner's methods.
        assert!(unit.types[0].methods.is_empty());
    }

    #[test]
    fn varargs_parameters_keep_the_ellipsis() {
        let unit = parse("public interface V { void log(String... parts); }");
        let method = &unit.types[0].methods[0];
        assert!(
            matches!(&method.parameters[0], Parameter::Typed { type_text } if type_text == "String...")
        );
    }

    #[test]
    fn broken_source_is_flagged_not_rejected() {
        let unit = JavaParser::new()
            .unwrap()
            .parse_unit("this is not java at all")
            .unwrap();
        assert!(unit.has_errors);
    }

    #[test]
    fn wildcard_imports_are_skipped() {
        let unit = parse(
            "package p;\nimport java.util.List;\nimport java.io.*;\npublic class C {}\n",
        );
        assert_eq!(unit.imports, vec!["java.util.List"]);
    }
}
