//! Boilerplate scanner: find where genuine code starts in a C/C++ source file.
//!
//! Boilerplate is everything that has to stay outside an injected wrapping
//! declaration: blank lines, comments, preprocessor directives and forward
//! declarations of class/struct/enum/union types.

use once_cell::sync::Lazy;
use regex::Regex;

static FORWARD_DECL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:class|struct|union|enum(?:\s+(?:class|struct))?)\s+[A-Za-z_]\w*\s*;\s*(?://.*)?$")
        .unwrap()
});

/// How a single line is treated by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    LineComment,
    BlockCommentDelimiter,
    PreprocessorDirective,
    ForwardDeclaration,
    Code,
}

impl LineClass {
    pub fn is_boilerplate(self) -> bool {
        self != LineClass::Code
    }
}

/// Split file content into lines, keeping each line's terminator.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Classify `line` given whether the scan is currently inside a block comment.
///
/// Returns the class and the block-comment state for the next line.
pub fn classify_line(line: &str, in_block_comment: bool) -> (LineClass, bool) {
    let mut trimmed = line.trim();

    if in_block_comment {
        // Text after the close marker is not inspected.
        let still_open = !trimmed.contains("*/");
        return (LineClass::BlockCommentDelimiter, still_open);
    }

    // Peel off leading `/* ... */` comments and classify whatever follows them.
    let mut had_comment = false;
    while let Some(rest) = trimmed.strip_prefix("/*") {
        match rest.find("*/") {
            None => return (LineClass::BlockCommentDelimiter, true),
            Some(close) => {
                trimmed = rest[close + 2..].trim();
                had_comment = true;
            }
        }
    }
    if had_comment && trimmed.is_empty() {
        return (LineClass::BlockCommentDelimiter, false);
    }

    let class = if trimmed.is_empty() {
        LineClass::Blank
    } else if trimmed.starts_with("//") {
        LineClass::LineComment
    } else if trimmed.starts_with('*') {
        LineClass::BlockCommentDelimiter
    } else if trimmed.starts_with('#') {
        LineClass::PreprocessorDirective
    } else if FORWARD_DECL_RE.is_match(trimmed) {
        LineClass::ForwardDeclaration
    } else {
        LineClass::Code
    };
    (class, false)
}

/// Index of the first genuine code line, or `None` when the file is all boilerplate.
///
/// An unterminated block comment swallows the rest of the file.
pub fn find_first_code_line<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    let mut in_block_comment = false;
    for (idx, line) in lines.iter().enumerate() {
        let (class, next) = classify_line(line.as_ref(), in_block_comment);
        in_block_comment = next;
        if !class.is_boilerplate() {
            return Some(idx);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_code() {
        let lines: [&str; 0] = [];
        assert_eq!(find_first_code_line(&lines), None);
    }

    #[test]
    fn skips_comments_blanks_and_includes() {
        let lines = ["// c\n", "\n", "#include <x>\n", "int x;\n"];
        assert_eq!(find_first_code_line(&lines), Some(3));
    }

    #[test]
    fn skips_multiline_block_comment_and_forward_decl() {
        let lines = ["/* a\n", "b */\n", "class Foo;\n", "void f() {}\n"];
        assert_eq!(find_first_code_line(&lines), Some(3));
    }

    #[test]
    fn unterminated_block_comment() {
        let lines = ["/* unterminated\n", "still comment\n"];
        assert_eq!(find_first_code_line(&lines), None);
    }

    #[test]
    fn consecutive_forward_declarations() {
        let lines = ["class Foo;\n", "struct Bar ;\n", "x();\n"];
        assert_eq!(find_first_code_line(&lines), Some(2));
    }

    #[test]
    fn scan_is_repeatable() {
        let lines = ["#pragma once\n", "/**\n", " * doc\n", " */\n", "enum Color;\n", "int y = 0;\n"];
        let first = find_first_code_line(&lines);
        assert_eq!(first, Some(5));
        assert_eq!(find_first_code_line(&lines), first);
    }

    #[test]
    fn definition_is_not_forward_declaration() {
        assert_eq!(classify_line("class Foo { int x; };\n", false).0, LineClass::Code);
        assert_eq!(classify_line("struct Foo {};", false).0, LineClass::Code);
        assert_eq!(classify_line("class Foo : public Bar;", false).0, LineClass::Code);
    }

    #[test]
    fn forward_declaration_variants() {
        for line in [
            "class Foo;",
            "  struct Bar ;  \n",
            "union U;",
            "enum class Mode;",
            "enum struct Kind;",
            "class Widget; // fwd",
        ] {
            assert_eq!(
                classify_line(line, false).0,
                LineClass::ForwardDeclaration,
                "{line:?}"
            );
        }
        assert_eq!(classify_line("classy;", false).0, LineClass::Code);
    }

    #[test]
    fn single_line_block_comment() {
        assert_eq!(
            classify_line("/* note */\n", false),
            (LineClass::BlockCommentDelimiter, false)
        );
        let lines = ["/* note */\n", "int a;\n"];
        assert_eq!(find_first_code_line(&lines), Some(1));
    }

    #[test]
    fn code_after_single_line_block_comment() {
        assert_eq!(classify_line("/* x */ int y;\n", false), (LineClass::Code, false));
        assert_eq!(
            classify_line("/* x */ // y\n", false),
            (LineClass::LineComment, false)
        );
        assert_eq!(
            classify_line("/* x */ /* y\n", false),
            (LineClass::BlockCommentDelimiter, true)
        );
    }

    #[test]
    fn many_inline_comments_before_code() {
        let line = format!("{}int x;\n", "/**/".repeat(20_000));
        assert_eq!(classify_line(&line, false), (LineClass::Code, false));
        let lines = ["// header\n".to_string(), line];
        assert_eq!(find_first_code_line(&lines), Some(1));

        let only_comments = format!("{}\n", "/* c */ ".repeat(20_000));
        assert_eq!(
            classify_line(&only_comments, false),
            (LineClass::BlockCommentDelimiter, false)
        );
    }

    #[test]
    fn close_marker_ends_block_but_line_is_skipped() {
        assert_eq!(
            classify_line("end */ int z;\n", true),
            (LineClass::BlockCommentDelimiter, false)
        );
        assert_eq!(
            classify_line("middle\n", true),
            (LineClass::BlockCommentDelimiter, true)
        );
    }

    #[test]
    fn preprocessor_directives() {
        for line in ["#include \"a.h\"", "#pragma once", "  #define X 1", "#ifndef FOO_H"] {
            assert_eq!(classify_line(line, false).0, LineClass::PreprocessorDirective);
        }
    }

    #[test]
    fn classes_are_boilerplate_except_code() {
        assert!(LineClass::Blank.is_boilerplate());
        assert!(LineClass::ForwardDeclaration.is_boilerplate());
        assert!(!LineClass::Code.is_boilerplate());
    }

    #[test]
    fn split_lines_keeps_terminators() {
        assert_eq!(split_lines("a\nb\r\nc"), vec!["a\n", "b\r\n", "c"]);
        assert!(split_lines("").is_empty());
    }
}
