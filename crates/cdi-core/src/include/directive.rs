//! Locating `@include` directives inside an override body.
//!
//! # Accepted forms
//!
//! | Form  | Example                       | Typical use |
//! |-------|-------------------------------|-------------|
//! | line  | `// @include lib/foo.js`      | scripts     |
//! | block | `/* @include reset.css */`    | styles      |
//!
//! The directive must start its line (leading spaces and tabs are allowed).
//! A line directive runs to the end of the line and only its first token is
//! the name: `// @include a.js b.js` includes `a.js` alone.  A block
//! directive must be the only thing on its line apart from trailing blanks.
//! The referenced name is either a run of non-whitespace characters or a
//! double-quoted string, which may contain spaces.  The quotes are not part
//! of the name.
//!
//! The reported span starts at the beginning of the line and stops before the
//! line terminator, so replacing it keeps the surrounding newlines intact.
//!
//! A marker with no name (`// @include`) is not a directive and is left in
//! the body as ordinary text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?mR)^[ \t]*(?:"#,
        r#"//[ \t]*@include[ \t]+(?P<line>"[^"\r\n]*"|\S+)[^\r\n]*"#,
        r#"|"#,
        r#"/\*[ \t]*@include[ \t]+(?P<block>"[^"\r\n]*"|[^\s*]+)[ \t]*\*/[ \t]*$"#,
        r#")"#,
    ))
    .expect("include directive pattern is valid")
});

/// One include directive found in a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    /// Byte offset of the first character of the directive line.
    pub start: usize,
    /// Byte offset one past the last character (before the line break).
    pub end: usize,
    /// Name of the referenced override file.
    pub name: String,
}

impl IncludeDirective {
    /// The `[start, end)` byte range occupied by the directive.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Finds the first directive that starts at or after byte offset `from`.
///
/// Line anchoring considers the text before `from`, so a `from` in the
/// middle of a line never turns the rest of that line into a directive.
/// Directives whose quoted name is empty are skipped.
///
/// # Example
///
/// ```rust
/// use cdi_core::find_directive;
///
/// let body = "a();\n// @include foo.js\nb();";
/// let directive = find_directive(body, 0).unwrap();
/// assert_eq!(directive.name, "foo.js");
/// assert_eq!(&body[directive.span()], "// @include foo.js");
/// ```
pub fn find_directive(text: &str, from: usize) -> Option<IncludeDirective> {
    let mut position = from;
    while position <= text.len() {
        let caps = DIRECTIVE_RE.captures_at(text, position)?;
        let whole = caps.get(0)?;
        match referenced_name(&caps) {
            Some(name) => {
                return Some(IncludeDirective {
                    start: whole.start(),
                    end: whole.end(),
                    name,
                })
            }
            // Empty quoted name: keep looking after this line.
            None => position = whole.end().max(position + 1),
        }
    }
    None
}

fn referenced_name(caps: &Captures<'_>) -> Option<String> {
    let raw = caps.name("line").or_else(|| caps.name("block"))?.as_str();
    let name = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    (!name.is_empty()).then(|| name.to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
