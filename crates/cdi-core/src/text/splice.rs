//! Region replacement for strings.
//!
//! [`splice`] returns `text[..start] + replacement + text[end..]`.  It knows
//! nothing about include directives; the expander computes the span and
//! hands it here.
//!
//! Offsets are **byte** offsets, matching what `str::find` and the regex
//! scanner report.  Both offsets must fall on UTF-8 character boundaries.

use thiserror::Error;

/// Why a splice request was rejected by [`try_splice`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpliceError {
    #[error("splice range {start}..{end} is reversed")]
    ReversedRange { start: usize, end: usize },

    #[error("splice end {end} is past the end of a {len}-byte string")]
    OutOfBounds { end: usize, len: usize },

    #[error("splice offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Replaces the byte range `[start, end)` of `text` with `replacement`.
///
/// An empty range (`start == end`) inserts `replacement` at `start`.
///
/// # Panics
///
/// Panics if `start > end`, `end > text.len()`, or either offset splits a
/// UTF-8 character, exactly as slicing `text[start..end]` would.
///
/// # Example
///
/// ```rust
/// use cdi_core::splice;
///
/// assert_eq!(splice("foofoo", 3, 3, "bar"), "foobarfoo");
/// assert_eq!(splice("foobarfoo", 3, 6, "B"), "fooBfoo");
/// ```
pub fn splice(text: &str, start: usize, end: usize, replacement: &str) -> String {
    match try_splice(text, start, end, replacement) {
        Ok(spliced) => spliced,
        Err(e) => panic!("invalid splice: {e}"),
    }
}

/// Checked variant of [`splice`].
///
/// # Errors
///
/// Returns a [`SpliceError`] describing the violated precondition instead of
/// panicking.
pub fn try_splice(
    text: &str,
    start: usize,
    end: usize,
    replacement: &str,
) -> Result<String, SpliceError> {
    if start > end {
        return Err(SpliceError::ReversedRange { start, end });
    }
    if end > text.len() {
        return Err(SpliceError::OutOfBounds {
            end,
            len: text.len(),
        });
    }
    for offset in [start, end] {
        if !text.is_char_boundary(offset) {
            return Err(SpliceError::NotCharBoundary { offset });
        }
    }

    let mut spliced = String::with_capacity(text.len() - (end - start) + replacement.len());
    spliced.push_str(&text[..start]);
    spliced.push_str(replacement);
    spliced.push_str(&text[end..]);
    Ok(spliced)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
