//! Lightweight C/C++ syntax highlighting
//!
//! A character-by-character tokenizer picks styles for comments, string and
//! character literals, numbers, keywords, call sites and brackets. It needs
//! no lexer and never fails: anything it does not recognise is printed in the
//! foreground colour.

use crate::render::theme::DEFAULT_THEME;
use crossterm::style::{ContentStyle, StyledContent, Stylize};

/// Split a code line into styled fragments
pub fn highlight_source_code(line: &str) -> Vec<StyledContent<String>> {
    let mut spans = Vec::new();
    let chars: Vec<char> = line.chars().collect();

    // Preprocessor directives are styled as a whole
    if line.trim_start().starts_with('#') {
        spans.push(style(DEFAULT_THEME.preprocessor).apply(line.to_string()));
        return spans;
    }

    let mut current_word = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Comments run to the end of the line
        if c == '/' && matches!(chars.get(i + 1), Some('/') | Some('*')) {
            flush_word(&mut spans, &mut current_word, false);
            let rest: String = chars[i..].iter().collect();
            spans.push(style(DEFAULT_THEME.comment).apply(rest));
            break;
        }

        // String and character literals
        if c == '"' || c == '\'' {
            flush_word(&mut spans, &mut current_word, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != c {
                if chars[end] == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            let end = (end + 1).min(chars.len());
            let literal: String = chars[i..end].iter().collect();
            spans.push(style(DEFAULT_THEME.string).apply(literal));
            i = end;
            continue;
        }

        // Delimiters end the current word
        if !c.is_alphanumeric() && c != '_' {
            flush_word(&mut spans, &mut current_word, c == '(');

            let color = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => DEFAULT_THEME.bracket,
                _ => DEFAULT_THEME.fg,
            };
            spans.push(style(color).apply(c.to_string()));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, false);
    spans
}

fn style(color: crossterm::style::Color) -> ContentStyle {
    ContentStyle::new().with(color)
}

fn flush_word(spans: &mut Vec<StyledContent<String>>, word: &mut String, is_call: bool) {
    if word.is_empty() {
        return;
    }
    let style = word_style(word, is_call);
    spans.push(style.apply(std::mem::take(word)));
}

fn word_style(word: &str, is_call: bool) -> ContentStyle {
    match word {
        "int" | "char" | "void" | "bool" | "float" | "double" | "long" | "short" | "unsigned"
        | "signed" | "auto" | "size_t" => style(DEFAULT_THEME.type_name),
        "struct" | "union" | "enum" | "class" | "namespace" | "template" | "typename"
        | "typedef" | "using" | "public" | "private" | "protected" | "virtual" | "static"
        | "const" | "constexpr" | "inline" | "return" | "if" | "else" | "while" | "for"
        | "do" | "switch" | "case" | "default" | "break" | "continue" | "goto" | "sizeof"
        | "new" | "delete" | "try" | "catch" | "throw" => style(DEFAULT_THEME.keyword).bold(),
        "NULL" | "nullptr" | "true" | "false" | "this" => style(DEFAULT_THEME.number),
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => style(DEFAULT_THEME.number),
        _ if is_call => style(DEFAULT_THEME.function),
        _ => style(DEFAULT_THEME.fg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(line: &str) -> Vec<String> {
        highlight_source_code(line)
            .into_iter()
            .map(|span| span.content().clone())
            .collect()
    }

    #[test]
    fn test_fragments_reassemble_line() {
        for line in [
            "int main() {",
            "  printf(\"%d\\n\", x); // done",
            "  char c = '\\'';",
            "  s = \"unterminated",
            "  /* café */ int y;",
            "",
        ] {
            assert_eq!(fragments(line).concat(), line);
        }
    }

    #[test]
    fn test_tokens() {
        assert_eq!(
            fragments("int x = 5;"),
            vec!["int", " ", "x", " ", "=", " ", "5", ";"]
        );
        assert_eq!(fragments("x; // note"), vec!["x", ";", " ", "// note"]);
    }

    #[test]
    fn test_styles() {
        let spans = highlight_source_code("return add(1);");
        assert_eq!(spans[0].style().foreground_color, Some(DEFAULT_THEME.keyword));
        assert_eq!(spans[2].content(), "add");
        assert_eq!(spans[2].style().foreground_color, Some(DEFAULT_THEME.function));
        assert_eq!(spans[4].style().foreground_color, Some(DEFAULT_THEME.number));
    }

    #[test]
    fn test_directive_is_one_fragment() {
        assert_eq!(fragments("#include <stdio.h>"), vec!["#include <stdio.h>"]);
    }
}
