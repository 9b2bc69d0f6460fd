// Contextual hints read from the raw text of a source line

/// Something recognisable about a line's text, independent of its node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextHint {
    EntryPoint,
    TypeDefinition,
    Include,
    Output,
    Input,
    Assignment,
}

impl ContextHint {
    pub fn annotation(self) -> &'static str {
        match self {
            ContextHint::EntryPoint => "this is the program's entry point",
            ContextHint::TypeDefinition => "defining a new data type",
            ContextHint::Include => "including external code",
            ContextHint::Output => "performing output operation",
            ContextHint::Input => "performing input operation",
            ContextHint::Assignment => "assignment or initialization",
        }
    }

    /// First hint matching `text`, checked in declaration order
    pub fn detect(text: &str) -> Option<ContextHint> {
        let line = text.trim().to_lowercase();

        if line.contains("main(") {
            Some(ContextHint::EntryPoint)
        } else if line.starts_with("class ") || line.starts_with("struct ") {
            Some(ContextHint::TypeDefinition)
        } else if line.starts_with("#include") {
            Some(ContextHint::Include)
        } else if line.contains("cout") || line.contains("printf") {
            Some(ContextHint::Output)
        } else if line.contains("cin") || line.contains("scanf") {
            Some(ContextHint::Input)
        } else if line.ends_with(';') && line.contains('=') && !line.starts_with("for") {
            Some(ContextHint::Assignment)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("int main() {", Some(ContextHint::EntryPoint))]
    #[case("int MAIN(void)", Some(ContextHint::EntryPoint))]
    #[case("  struct Point {", Some(ContextHint::TypeDefinition))]
    #[case("class Widget : public Base {", Some(ContextHint::TypeDefinition))]
    #[case("#include <stdio.h>", Some(ContextHint::Include))]
    #[case("    printf(\"%d\\n\", x);", Some(ContextHint::Output))]
    #[case("std::cout << x;", Some(ContextHint::Output))]
    #[case("scanf(\"%d\", &x);", Some(ContextHint::Input))]
    #[case("  int x = 5;", Some(ContextHint::Assignment))]
    #[case("for (i = 0; i < n; i = i + 1);", None)]
    #[case("  return x;", None)]
    #[case("", None)]
    fn test_detect(#[case] text: &str, #[case] expected: Option<ContextHint>) {
        assert_eq!(ContextHint::detect(text), expected);
    }

    #[test]
    fn test_entry_point_beats_assignment() {
        assert_eq!(
            ContextHint::detect("int rc = main(argc, argv);"),
            Some(ContextHint::EntryPoint)
        );
    }
}
