//! Named filter profiles
//!
//! A [`FilterProfile`] decides which node kinds are visible in the output. Each
//! profile is a fixed allow-set or deny-set over [`NodeKind`]; unrecognized
//! kinds are only visible under profiles defined by a deny-set.

use crate::catalog::NodeKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FilterProfile {
    /// Only the most important structural nodes
    Minimal,
    /// Everything except low-signal synthetic nodes
    #[default]
    Clean,
    /// Only declaration nodes
    Declarations,
    /// Only statement and control-flow nodes
    Statements,
    /// Every node (very verbose)
    All,
}

impl FilterProfile {
    /// Whether `kind` is visible under this profile
    pub fn includes(self, kind: &NodeKind) -> bool {
        use NodeKind::*;

        match self {
            FilterProfile::Minimal => matches!(
                kind,
                FunctionDecl
                    | CXXMethodDecl
                    | CXXConstructorDecl
                    | CXXDestructorDecl
                    | CXXRecordDecl
                    | ClassTemplateDecl
                    | VarDecl
                    | FieldDecl
                    | IfStmt
                    | ForStmt
                    | WhileStmt
                    | CXXForRangeStmt
                    | SwitchStmt
                    | ReturnStmt
                    | BreakStmt
                    | ContinueStmt
                    | CompoundStmt
            ),
            FilterProfile::Clean => !matches!(
                kind,
                MaterializeTemporaryExpr
                    | CXXBindTemporaryExpr
                    | ExprWithCleanups
                    | ParenExpr
                    | AlignedAttr
                    | VisibilityAttr
            ),
            FilterProfile::Declarations => matches!(
                kind,
                FunctionDecl
                    | CXXMethodDecl
                    | CXXConstructorDecl
                    | CXXDestructorDecl
                    | CXXRecordDecl
                    | ClassTemplateDecl
                    | VarDecl
                    | FieldDecl
                    | ParmVarDecl
                    | NamespaceDecl
                    | UsingDecl
                    | TypedefDecl
            ),
            FilterProfile::Statements => matches!(
                kind,
                IfStmt
                    | ForStmt
                    | WhileStmt
                    | CXXForRangeStmt
                    | SwitchStmt
                    | ReturnStmt
                    | BreakStmt
                    | ContinueStmt
                    | CompoundStmt
                    | DeclStmt
                    | ExprStmt
                    | NullStmt
            ),
            FilterProfile::All => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterProfile::Minimal => "minimal",
            FilterProfile::Clean => "clean",
            FilterProfile::Declarations => "declarations",
            FilterProfile::Statements => "statements",
            FilterProfile::All => "all",
        }
    }
}

impl fmt::Display for FilterProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FilterProfile::Minimal, "FunctionDecl", true)]
    #[case(FilterProfile::Minimal, "CompoundStmt", true)]
    #[case(FilterProfile::Minimal, "ParmVarDecl", false)]
    #[case(FilterProfile::Minimal, "IntegerLiteral", false)]
    #[case(FilterProfile::Clean, "IntegerLiteral", true)]
    #[case(FilterProfile::Clean, "ParenExpr", false)]
    #[case(FilterProfile::Clean, "ExprWithCleanups", false)]
    #[case(FilterProfile::Clean, "VisibilityAttr", false)]
    #[case(FilterProfile::Declarations, "TypedefDecl", true)]
    #[case(FilterProfile::Declarations, "ReturnStmt", false)]
    #[case(FilterProfile::Statements, "NullStmt", true)]
    #[case(FilterProfile::Statements, "VarDecl", false)]
    #[case(FilterProfile::All, "ParenExpr", true)]
    fn test_profile_membership(
        #[case] profile: FilterProfile,
        #[case] tag: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(profile.includes(&NodeKind::from_tag(tag)), expected);
    }

    #[rstest]
    #[case(FilterProfile::Minimal, false)]
    #[case(FilterProfile::Clean, true)]
    #[case(FilterProfile::Declarations, false)]
    #[case(FilterProfile::Statements, false)]
    #[case(FilterProfile::All, true)]
    fn test_unknown_kind(#[case] profile: FilterProfile, #[case] expected: bool) {
        assert_eq!(profile.includes(&NodeKind::from_tag("UnheardOfNodeXYZ")), expected);
    }

    #[test]
    fn test_names() {
        let names: Vec<String> = [
            FilterProfile::Minimal,
            FilterProfile::Clean,
            FilterProfile::Declarations,
            FilterProfile::Statements,
            FilterProfile::All,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(names, vec!["minimal", "clean", "declarations", "statements", "all"]);
        assert_eq!(FilterProfile::default(), FilterProfile::Clean);
    }
}
