//! Structural method identity.
//!
//! Two method declarations from independent parses of the same logical
//! source never share node identity, so equality is computed over an
//! explicit signature key: name plus the ordered parameter type texts.
//! Return types are deliberately excluded — the interface and the
//! generated restatement may format or omit them inconsistently, and
//! name + parameter types uniquely identify a method within one
//! interface for this system's purposes.

use groqdoc_core::errors::SignatureError;

use crate::parsers::{MethodDeclaration, Parameter};

/// Compute the signature key, e.g. `helloTo(String)` or `helloWorld()`.
pub fn method_signature(method: &MethodDeclaration) -> Result<String, SignatureError> {
    let mut types = Vec::with_capacity(method.parameters.len());
    for parameter in &method.parameters {
        match parameter {
            Parameter::Typed { type_text } => types.push(type_text.as_str()),
            Parameter::Unsupported { kind } => {
                return Err(SignatureError::UnsupportedParameter { kind: kind.clone() })
            }
        }
    }
    Ok(format!("{}({})", method.name, types.join(", ")))
}

/// Structural signature equality. An absent side compares false, never
/// errors; an unsupported parameter shape on either side is a hard error.
pub fn same_signature(
    a: Option<&MethodDeclaration>,
    b: Option<&MethodDeclaration>,
) -> Result<bool, SignatureError> {
    match (a, b) {
        (Some(a), Some(b)) => Ok(method_signature(a)? == method_signature(b)?),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::ByteRange;

    fn method(name: &str, types: &[&str]) -> MethodDeclaration {
        MethodDeclaration {
            name: name.to_string(),
            parameters: types
                .iter()
                .map(|t| Parameter::Typed {
                    type_text: t.to_string(),
                })
                .collect(),
            comments: Vec::new(),
            range: ByteRange { start: 0, end: 0 },
        }
    }

    #[test]
    fn same_name_and_parameter_types_match() {
        // Same logical method from two different parses: distinct values,
        // equal signatures. Return types play no part.
        let a = method("helloTo", &["String"]);
        let b = method("helloTo", &["String"]);
        assert!(same_signature(Some(&a), Some(&b)).unwrap());
    }

    #[test]
    fn zero_parameter_methods_match() {
        let a = method("helloWorld", &[]);
        let b = method("helloWorld", &[]);
        assert!(same_signature(Some(&a), Some(&b)).unwrap());
        assert_eq!(method_signature(&a).unwrap(), "helloWorld()");
    }

    #[test]
    fn differing_parameter_count_or_type_does_not_match() {
        let base = method("greet", &["String"]);
        assert!(!same_signature(Some(&base), Some(&method("greet", &[]))).unwrap());
        assert!(!same_signature(Some(&base), Some(&method("greet", &["int"]))).unwrap());
        assert!(
            !same_signature(Some(&base), Some(&method("greet", &["String", "int"]))).unwrap()
        );
    }

    #[test]
    fn differing_name_does_not_match() {
        let a = method("hello", &["String"]);
        let b = method("Hello", &["String"]);
        assert!(!same_signature(Some(&a), Some(&b)).unwrap());
    }

    #[test]
    fn absent_sides_are_false_not_errors() {
        let a = method("hello", &[]);
        assert!(!same_signature(None, Some(&a)).unwrap());
        assert!(!same_signature(Some(&a), None).unwrap());
        assert!(!same_signature(None, None).unwrap());
    }

    #[test]
    fn unsupported_parameter_shape_is_a_hard_error() {
        let mut bad = method("weird", &[]);
        bad.parameters.push(Parameter::Unsupported {
            kind: "receiver_parameter".to_string(),
        });
        let err = method_signature(&bad).unwrap_err();
        assert!(matches!(
            err,
            SignatureError::UnsupportedParameter { kind } if kind == "receiver_parameter"
        ));

        let good = method("weird", &[]);
        assert!(same_signature(Some(&bad), Some(&good)).is_err());
    }
}
