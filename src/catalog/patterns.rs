//! Multi-kind pattern rules
//!
//! A [`PatternRule`] names a combination of node kinds that, when all present on
//! one line, is explained by a single canned sentence instead of the per-kind
//! fallback. Rules are tried in [`PATTERN_RULES`] order and the first match
//! wins, so a rule must appear before any rule it is more specific than.

use super::kinds::NodeKind;
use std::collections::BTreeSet;

/// A combination of kinds with its explanation
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub required: &'static [NodeKind],
    pub text: &'static str,
}

impl PatternRule {
    /// True when every required kind is present in `tags`
    pub fn matches(&self, tags: &BTreeSet<NodeKind>) -> bool {
        self.required.iter().all(|kind| tags.contains(kind))
    }
}

pub const PATTERN_RULES: &[PatternRule] = &[
    // Functions
    PatternRule {
        required: &[NodeKind::FunctionDecl, NodeKind::CompoundStmt],
        text: "defines a function with a body containing statements",
    },
    PatternRule {
        required: &[NodeKind::FunctionDecl, NodeKind::ParmVarDecl],
        text: "defines a function that takes parameters",
    },
    PatternRule {
        required: &[NodeKind::CallExpr, NodeKind::DeclRefExpr],
        text: "calls a previously declared function",
    },
    // Variables
    PatternRule {
        required: &[NodeKind::VarDecl, NodeKind::IntegerLiteral],
        text: "declares an integer variable with a literal value",
    },
    PatternRule {
        required: &[NodeKind::VarDecl, NodeKind::CallExpr],
        text: "declares a variable initialized by a function call",
    },
    PatternRule {
        required: &[NodeKind::AssignmentOperator, NodeKind::DeclRefExpr],
        text: "assigns a value to an existing variable",
    },
    // Control flow
    PatternRule {
        required: &[NodeKind::IfStmt, NodeKind::BinaryOperator],
        text: "conditional statement with a comparison",
    },
    PatternRule {
        required: &[NodeKind::ForStmt, NodeKind::BinaryOperator],
        text: "for loop with a comparison condition",
    },
    PatternRule {
        required: &[NodeKind::WhileStmt, NodeKind::BinaryOperator],
        text: "while loop with a comparison condition",
    },
    // Classes
    PatternRule {
        required: &[NodeKind::CXXRecordDecl, NodeKind::CXXMethodDecl],
        text: "defines a class with member methods",
    },
    PatternRule {
        required: &[NodeKind::CXXRecordDecl, NodeKind::FieldDecl],
        text: "defines a class with member variables",
    },
    PatternRule {
        required: &[NodeKind::CXXConstructorDecl, NodeKind::MemberExpr],
        text: "constructor that initializes member variables",
    },
    // Expressions
    PatternRule {
        required: &[NodeKind::BinaryOperator, NodeKind::DeclRefExpr],
        text: "performs an operation on variables",
    },
    PatternRule {
        required: &[NodeKind::CallExpr, NodeKind::MemberExpr],
        text: "calls a method on an object",
    },
    PatternRule {
        required: &[NodeKind::ArraySubscriptExpr, NodeKind::DeclRefExpr],
        text: "accesses an array element",
    },
    // Memory management
    PatternRule {
        required: &[NodeKind::CXXNewExpr, NodeKind::CXXConstructExpr],
        text: "dynamically creates an object",
    },
    PatternRule {
        required: &[NodeKind::CXXDeleteExpr, NodeKind::DeclRefExpr],
        text: "deallocates a dynamically allocated object",
    },
];

/// First rule whose required kinds are all in `tags`
pub fn first_match(tags: &BTreeSet<NodeKind>) -> Option<&'static PatternRule> {
    PATTERN_RULES.iter().find(|rule| rule.matches(tags))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(kinds: &[NodeKind]) -> BTreeSet<NodeKind> {
        kinds.iter().cloned().collect()
    }

    #[test]
    fn test_every_rule_combines_known_kinds() {
        for rule in PATTERN_RULES {
            assert!(rule.required.len() >= 2, "{}", rule.text);
            assert!(rule.required.iter().all(NodeKind::is_known));
        }
    }

    #[test]
    fn test_subset_match() {
        let line = tags(&[
            NodeKind::DeclStmt,
            NodeKind::IntegerLiteral,
            NodeKind::VarDecl,
        ]);
        let rule = first_match(&line).unwrap();
        assert_eq!(rule.text, "declares an integer variable with a literal value");
    }

    #[test]
    fn test_earlier_rule_wins() {
        // Both function rules are subsets; the body rule is declared first
        let line = tags(&[
            NodeKind::CompoundStmt,
            NodeKind::FunctionDecl,
            NodeKind::ParmVarDecl,
        ]);
        let rule = first_match(&line).unwrap();
        assert_eq!(rule.text, "defines a function with a body containing statements");
    }

    #[test]
    fn test_partial_match_is_not_a_match() {
        assert!(first_match(&tags(&[NodeKind::FunctionDecl])).is_none());
        assert!(first_match(&tags(&[])).is_none());
    }
}
