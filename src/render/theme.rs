use crate::catalog::NodeKind;
use crossterm::style::Color;

pub struct Theme {
    pub fg: Color,
    pub bracket: Color,  // Blue
    pub comment: Color,  // Grey
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub function: Color,
    pub type_name: Color, // Cyan for type names
    pub preprocessor: Color,

    // Annotation colours by kind class
    pub callable_decl: Color, // Functions, methods, constructors
    pub type_decl: Color,     // Records and templates
    pub value_decl: Color,    // Variables, fields, parameters
    pub branch_stmt: Color,   // Conditionals and loops
    pub jump_stmt: Color,     // return / break / continue
    pub other_kind: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: rgb(205, 214, 244),
    bracket: rgb(137, 180, 250),
    comment: rgb(108, 112, 134),
    keyword: rgb(137, 180, 250),     // Blue for keywords
    string: rgb(250, 179, 135),      // Orange for strings
    number: rgb(250, 179, 135),      // Orange for numbers
    function: rgb(249, 226, 175),    // Yellow for functions
    type_name: rgb(148, 226, 213),   // Cyan/teal for type names
    preprocessor: rgb(245, 194, 231), // Pink for directives

    callable_decl: rgb(137, 180, 250), // Blue
    type_decl: rgb(166, 227, 161),     // Green
    value_decl: rgb(249, 226, 175),    // Yellow
    branch_stmt: rgb(203, 166, 247),   // Mauve
    jump_stmt: rgb(243, 139, 168),     // Red
    other_kind: rgb(205, 214, 244),
};

impl Theme {
    /// Annotation colour for a node kind
    pub fn kind_color(&self, kind: &NodeKind) -> Color {
        use NodeKind::*;

        match kind {
            FunctionDecl | CXXMethodDecl | CXXConstructorDecl | CXXDestructorDecl => {
                self.callable_decl
            }
            CXXRecordDecl | ClassTemplateDecl => self.type_decl,
            VarDecl | FieldDecl | ParmVarDecl => self.value_decl,
            IfStmt | ForStmt | WhileStmt | CXXForRangeStmt | SwitchStmt => self.branch_stmt,
            ReturnStmt | BreakStmt | ContinueStmt => self.jump_stmt,
            _ => self.other_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes() {
        let theme = &DEFAULT_THEME;
        assert_eq!(theme.kind_color(&NodeKind::CXXMethodDecl), theme.callable_decl);
        assert_eq!(theme.kind_color(&NodeKind::ClassTemplateDecl), theme.type_decl);
        assert_eq!(theme.kind_color(&NodeKind::ParmVarDecl), theme.value_decl);
        assert_eq!(theme.kind_color(&NodeKind::CXXForRangeStmt), theme.branch_stmt);
        assert_eq!(theme.kind_color(&NodeKind::ContinueStmt), theme.jump_stmt);
        assert_eq!(
            theme.kind_color(&NodeKind::from_tag("UnheardOfNodeXYZ")),
            theme.other_kind
        );
    }
}
