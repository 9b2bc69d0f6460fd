// Node kind catalog for Clang's JSON AST dump

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

/// Declares [`NodeKind`] together with its tag text and description table.
///
/// Every known kind becomes a unit variant whose tag text is the variant
/// name, exactly as Clang spells it in the `kind` field.
macro_rules! node_kinds {
    ($($variant:ident => $desc:literal,)*) => {
        /// A syntax-tree category tag.
        ///
        /// Known Clang kinds get their own variant so filters and patterns can
        /// match exhaustively; anything else is carried verbatim in
        /// [`NodeKind::Other`] so newer Clang releases never break a run.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($variant,)*
            /// A kind this catalog does not know about
            Other(String),
        }

        impl NodeKind {
            /// All known kinds, in declaration order
            pub const KNOWN: &'static [NodeKind] = &[$(NodeKind::$variant,)*];

            /// The tag text as it appears in the AST dump
            pub fn as_str(&self) -> &str {
                match self {
                    $(NodeKind::$variant => stringify!($variant),)*
                    NodeKind::Other(tag) => tag,
                }
            }

            fn static_tag(&self) -> Option<&'static str> {
                match self {
                    $(NodeKind::$variant => Some(stringify!($variant)),)*
                    NodeKind::Other(_) => None,
                }
            }

            /// One-line description, `None` for unrecognized kinds
            pub fn description(&self) -> Option<&'static str> {
                match self {
                    $(NodeKind::$variant => Some($desc),)*
                    NodeKind::Other(_) => None,
                }
            }
        }
    };
}

node_kinds! {
    // Declarations
    FunctionDecl => "declares a function with its signature and body",
    CXXMethodDecl => "declares a class method or member function",
    CXXConstructorDecl => "declares a class constructor",
    CXXDestructorDecl => "declares a class destructor",
    CXXRecordDecl => "declares a class, struct, or union type",
    ClassTemplateDecl => "declares a class template",
    VarDecl => "declares a variable with optional initialization",
    FieldDecl => "declares a class member variable or field",
    ParmVarDecl => "declares a function parameter",
    NamespaceDecl => "declares or opens a namespace",
    UsingDecl => "brings a name from another namespace into scope",
    TypedefDecl => "creates a type alias using typedef",
    EnumDecl => "declares an enumeration type",
    EnumConstantDecl => "declares an enumeration constant",

    // Statements
    CompoundStmt => "represents a block of statements enclosed in braces {}",
    IfStmt => "represents an if conditional statement",
    ForStmt => "represents a traditional for loop",
    WhileStmt => "represents a while loop",
    CXXForRangeStmt => "represents a range-based for loop (C++11)",
    SwitchStmt => "represents a switch statement for multi-way branching",
    CaseStmt => "represents a case label in a switch statement",
    DefaultStmt => "represents the default case in a switch statement",
    ReturnStmt => "returns a value from a function",
    BreakStmt => "breaks out of a loop or switch statement",
    ContinueStmt => "continues to the next iteration of a loop",
    DeclStmt => "represents a declaration statement",
    ExprStmt => "represents an expression used as a statement",
    NullStmt => "represents an empty statement (just a semicolon)",
    DoStmt => "represents a do-while loop",
    GotoStmt => "represents a goto statement",
    LabelStmt => "represents a labeled statement",

    // Expressions
    BinaryOperator => "performs a binary operation (e.g., +, -, ==, &&)",
    UnaryOperator => "performs a unary operation (e.g., ++, --, !, ~)",
    ConditionalOperator => "represents the ternary operator (condition ? true : false)",
    CallExpr => "represents a function call",
    CXXOperatorCallExpr => "represents an overloaded operator call in C++",
    CXXMemberCallExpr => "represents a call to a class member function",
    MemberExpr => "accesses a member of a struct/class (e.g., obj.member)",
    ArraySubscriptExpr => "accesses an array element using [] operator",
    DeclRefExpr => "references a previously declared variable or function",
    IntegerLiteral => "represents an integer constant (e.g., 42, 0xFF)",
    FloatingLiteral => "represents a floating-point constant (e.g., 3.14)",
    StringLiteral => "represents a string literal (e.g., \"hello\")",
    CharacterLiteral => "represents a character literal (e.g., 'a')",
    CXXBoolLiteralExpr => "represents a boolean literal (true or false)",
    CXXNullPtrLiteralExpr => "represents a nullptr literal",
    AssignmentOperator => "assigns a value to a variable (=, +=, -=, etc.)",
    CompoundAssignOperator => "performs compound assignment (+=, -=, *=, etc.)",

    // C++ expressions
    CXXNewExpr => "allocates memory using the new operator",
    CXXDeleteExpr => "deallocates memory using the delete operator",
    CXXThisExpr => "represents the 'this' pointer in a class method",
    CXXThrowExpr => "throws an exception",
    CXXTryStmt => "represents a try-catch block for exception handling",
    CXXCatchStmt => "represents a catch block in exception handling",
    CXXConstructExpr => "constructs an object using a constructor",
    CXXTemporaryObjectExpr => "creates a temporary object",
    CXXFunctionalCastExpr => "performs a functional-style cast",
    CXXStaticCastExpr => "performs a static_cast",
    CXXDynamicCastExpr => "performs a dynamic_cast",
    CXXReinterpretCastExpr => "performs a reinterpret_cast",
    CXXConstCastExpr => "performs a const_cast",

    // Conversions
    ImplicitCastExpr => "performs an implicit type conversion",
    CStyleCastExpr => "performs a C-style cast",
    ParenExpr => "represents parenthesized expression",
    SizeOfExpr => "calculates the size of a type or expression",

    // Temporaries and cleanups
    MaterializeTemporaryExpr => "materializes a temporary object",
    ExprWithCleanups => "manages cleanup of temporary objects",
    CXXBindTemporaryExpr => "binds a temporary object for cleanup",

    // Attributes
    AlignedAttr => "specifies memory alignment requirements",
    VisibilityAttr => "controls symbol visibility",
    DeprecatedAttr => "marks a declaration as deprecated",
    NoReturnAttr => "indicates a function never returns",

    // Templates
    TemplateTypeParmDecl => "declares a template type parameter",
    NonTypeTemplateParmDecl => "declares a non-type template parameter",
    TemplateTemplateParmDecl => "declares a template template parameter",
    ClassTemplateSpecializationDecl => "specializes a class template",
    FunctionTemplateDecl => "declares a function template",

    // Lambdas and initializers
    LambdaExpr => "defines a lambda expression (anonymous function)",
    CXXDefaultArgExpr => "represents a default argument in function call",
    InitListExpr => "represents brace-enclosed initializer list",
    DesignatedInitExpr => "represents designated initializer (C99/C++20)",
    CompoundLiteralExpr => "represents a compound literal",

    // Preprocessor
    MacroExpansion => "represents an expanded macro",
    InclusionDirective => "represents a #include directive",
}

static TAG_INDEX: Lazy<FxHashMap<&'static str, NodeKind>> = Lazy::new(|| {
    NodeKind::KNOWN
        .iter()
        .filter_map(|kind| kind.static_tag().map(|tag| (tag, kind.clone())))
        .collect()
});

impl NodeKind {
    /// Resolve tag text from the dump, falling back to [`NodeKind::Other`]
    pub fn from_tag(tag: &str) -> NodeKind {
        TAG_INDEX
            .get(tag)
            .cloned()
            .unwrap_or_else(|| NodeKind::Other(tag.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, NodeKind::Other(_))
    }
}

// Tags sort by their text so display and matching never depend on
// declaration order.
impl Ord for NodeKind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for NodeKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
