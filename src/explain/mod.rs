//! Plain-English explanations for a line's node kinds
//!
//! [`explain`] turns the sorted set of kinds on one line into a sentence:
//!
//! 1. The first [`PATTERN_RULES`](crate::catalog::PATTERN_RULES) entry whose
//!    kinds are all present supplies the text.
//! 2. Otherwise each kind's catalog description is combined: one verbatim, two
//!    joined with "and", three or more as a list ending in ", and".
//! 3. In detailed mode a [`ContextHint`] read from the line's text is appended
//!    in parentheses.
//!
//! The result depends only on the set contents and the text, never on the
//! order the kinds were collected in.

pub mod hints;

use crate::catalog::{patterns, NodeKind};
use crate::correlate::LineTagMap;
use crate::source::SourceFile;
use hints::ContextHint;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

/// Explain a line with kinds `tags` and raw text `source_text`
pub fn explain(tags: &BTreeSet<NodeKind>, source_text: Option<&str>, detailed: bool) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let mut explanation = match patterns::first_match(tags) {
        Some(rule) => rule.text.to_string(),
        None => combine(tags),
    };

    if detailed {
        if let Some(hint) = source_text.and_then(ContextHint::detect) {
            explanation.push_str(" (");
            explanation.push_str(hint.annotation());
            explanation.push(')');
        }
    }

    explanation
}

/// Explain every tagged line of `source`, skipping empty explanations
pub fn explain_lines(
    tags: &LineTagMap,
    source: &SourceFile,
    detailed: bool,
) -> BTreeMap<usize, String> {
    tags.iter()
        .map(|(line, kinds)| (line, explain(kinds, source.line(line), detailed)))
        .filter(|(_, explanation)| !explanation.is_empty())
        .collect()
}

/// Catalog description of a kind, synthesised for unrecognized ones
pub fn describe(kind: &NodeKind) -> Cow<'static, str> {
    match kind.description() {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(format!("unrecognized category: `{}`", kind.as_str())),
    }
}

fn combine(tags: &BTreeSet<NodeKind>) -> String {
    let descriptions: Vec<Cow<'static, str>> = tags.iter().map(describe).collect();

    match descriptions.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("combines {}, and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> BTreeSet<NodeKind> {
        list.iter().map(|tag| NodeKind::from_tag(tag)).collect()
    }

    #[test]
    fn test_empty_tags() {
        assert_eq!(explain(&BTreeSet::new(), Some("int main() {"), true), "");
    }

    #[test]
    fn test_pattern_beats_fallback() {
        let line = tags(&["FunctionDecl", "CompoundStmt", "ParmVarDecl"]);
        assert_eq!(
            explain(&line, None, false),
            "defines a function with a body containing statements"
        );
    }

    #[test]
    fn test_single_description_verbatim() {
        assert_eq!(
            explain(&tags(&["ReturnStmt"]), None, false),
            "returns a value from a function"
        );
    }

    #[test]
    fn test_two_descriptions_joined() {
        assert_eq!(
            explain(&tags(&["ReturnStmt", "IntegerLiteral"]), None, false),
            "represents an integer constant (e.g., 42, 0xFF) and returns a value from a function"
        );
    }

    #[test]
    fn test_three_descriptions_listed() {
        assert_eq!(
            explain(&tags(&["ReturnStmt", "ImplicitCastExpr", "DeclRefExpr"]), None, false),
            "combines references a previously declared variable or function, \
             performs an implicit type conversion, and returns a value from a function"
        );
    }

    #[test]
    fn test_unknown_kind_description() {
        assert_eq!(
            explain(&tags(&["UnheardOfNodeXYZ"]), None, false),
            "unrecognized category: `UnheardOfNodeXYZ`"
        );
    }

    #[test]
    fn test_detailed_appends_hint() {
        let line = tags(&["CompoundStmt", "FunctionDecl"]);
        assert_eq!(
            explain(&line, Some("int main() {"), true),
            "defines a function with a body containing statements (this is the program's entry point)"
        );
        assert_eq!(
            explain(&line, Some("int main() {"), false),
            "defines a function with a body containing statements"
        );
    }

    #[test]
    fn test_explain_lines_uses_line_text() {
        let source = SourceFile::from_text("t.c", "int main() {\n  return 0;\n}");
        let mut map = LineTagMap::new();
        map.insert(1, NodeKind::FunctionDecl);
        map.insert(2, NodeKind::ReturnStmt);

        let lines = explain_lines(&map, &source, true);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[&1],
            "declares a function with its signature and body (this is the program's entry point)"
        );
        assert_eq!(lines[&2], "returns a value from a function");
    }

    #[test]
    fn test_detailed_without_matching_hint() {
        let line = tags(&["ReturnStmt"]);
        assert_eq!(
            explain(&line, Some("  return x;"), true),
            "returns a value from a function"
        );
        assert_eq!(explain(&line, None, true), "returns a value from a function");
    }
}
