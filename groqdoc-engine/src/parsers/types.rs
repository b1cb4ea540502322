//! Structural model of one Java compilation unit.

/// Half-open byte range of a node in its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
    /// `/** ... */` — the only kind extraction considers documentation.
    Javadoc,
}

/// A comment attached above a declaration, separated from it by
/// whitespace only.
#[derive(Debug, Clone)]
pub struct LeadingComment {
    pub kind: CommentKind,
    pub text: String,
}

/// One declared method parameter.
///
/// `Unsupported` marks declaration shapes the signature matcher refuses
/// to guess about; computing a signature over one is a hard error.
#[derive(Debug, Clone)]
pub enum Parameter {
    Typed { type_text: String },
    Unsupported { kind: String },
}

/// A method declaration. Identity is structural (name + parameter types,
/// see the signature module), never node identity: two values from
/// different parses of the same logical method must compare equal.
#[derive(Debug, Clone)]
pub struct MethodDeclaration {
    pub name: String,
    /// Ordered parameter list; empty means an explicit `()`.
    pub parameters: Vec<Parameter>,
    /// Leading comments in source order, topmost first.
    pub comments: Vec<LeadingComment>,
    pub range: ByteRange,
}

impl MethodDeclaration {
    /// True when any comment is attached, documentation or not. Methods
    /// that already carry a comment are never touched by the merge step.
    pub fn has_comment(&self) -> bool {
        !self.comments.is_empty()
    }

    /// The attached documentation block, but only when the first attached
    /// comment is specifically a Javadoc comment.
    pub fn leading_doc(&self) -> Option<&LeadingComment> {
        self.comments
            .first()
            .filter(|c| c.kind == CommentKind::Javadoc)
    }
}

/// A class or interface declaration.
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    pub name: String,
    /// Dotted member path within the unit, e.g. `Outer.Inner` for a
    /// nested declaration. Equals `name` for top-level declarations.
    pub nested_name: String,
    /// Implemented interfaces as written, in declaration order.
    pub implements: Vec<String>,
    /// Methods declared directly in this type's body.
    pub methods: Vec<MethodDeclaration>,
    pub range: ByteRange,
}

/// Structural model of one compilation unit. Immutable per pass.
#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    pub package: Option<String>,
    /// Single-type import paths, in declaration order.
    pub imports: Vec<String>,
    /// All type declarations, outer before nested.
    pub types: Vec<TypeDeclaration>,
    /// Whether the tree contained syntax errors. Input units are handled
    /// leniently; generated text must parse cleanly.
    pub has_errors: bool,
}

impl CompilationUnit {
    /// Qualify a simple type name with this unit's package.
    pub fn qualified_name(&self, simple: &str) -> String {
        match &self.package {
            Some(package) => format!("{package}.{simple}"),
            None => simple.to_string(),
        }
    }

    /// Resolve a type reference to its index identifier.
    ///
    /// Syntactic resolution only: generic arguments are dropped, simple
    /// names go through the unit's imports and then its package. A
    /// dotted reference resolves its first segment the same way; an
    /// uppercase first segment is a nested-type path (`Outer.Inner`)
    /// relative to this unit, a lowercase one is already
    /// package-qualified. Both passes share this resolver so index keys
    /// and lookups agree.
    pub fn resolve_type_identifier(&self, reference: &str) -> String {
        let name = reference.split('<').next().unwrap_or(reference).trim();
        let first = name.split('.').next().unwrap_or(name);
        for import in &self.imports {
            if import.rsplit('.').next() == Some(first) {
                return match name.split_once('.') {
                    Some((_, rest)) => format!("{import}.{rest}"),
                    None => import.clone(),
                };
            }
        }
        if first != name && !first.starts_with(|c: char| c.is_ascii_uppercase()) {
            return name.to_string();
        }
        self.qualified_name(name)
    }
}
