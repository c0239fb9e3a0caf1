//! Naming rules for override files.
//!
//! Every override file is named `<level>.<extension>`:
//!
//! | Level            | Script file          | Style file            |
//! |------------------|----------------------|-----------------------|
//! | global sentinel  | `_global.js`         | `_global.css`         |
//! | `com`            | `com.js`             | `com.css`             |
//! | `google.com`     | `google.com.js`      | `google.com.css`      |
//!
//! The extension doubles as the type tag carried in the message delivered to
//! the tab, so the browser side knows whether to inject a `<script>` or a
//! `<style>` element.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Level name of the pseudo-level applied to every hostname.
///
/// Files for this level are fetched before any domain level.
pub const GLOBAL_LEVEL_NAME: &str = "_global";

/// Extension / wire tag for script overrides.
pub const SCRIPT_EXTENSION: &str = "js";
/// Extension / wire tag for style overrides.
pub const STYLE_EXTENSION: &str = "css";

/// Errors produced when parsing override naming inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileNameError {
    /// The script type string was blank.
    #[error("script type must not be empty")]
    EmptyScriptType,

    /// The script type string is neither `js` nor `css`.
    #[error("unsupported script type '{0}' (expected 'js' or 'css')")]
    UnsupportedScriptType(String),
}

/// The kind of override file.
///
/// Serialises as its extension (`"js"` / `"css"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScriptType {
    /// JavaScript, injected as a script.
    #[serde(rename = "js")]
    Script,
    /// CSS, injected as a style sheet.
    #[serde(rename = "css")]
    Style,
}

impl ScriptType {
    /// All types in probe order: script before style within every level.
    pub const ALL: [ScriptType; 2] = [ScriptType::Script, ScriptType::Style];

    /// File extension, which is also the message type tag.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Script => SCRIPT_EXTENSION,
            Self::Style => STYLE_EXTENSION,
        }
    }

    /// Position of this type inside [`ScriptType::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Script => 0,
            Self::Style => 1,
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ScriptType {
    type Err = FileNameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" => Err(FileNameError::EmptyScriptType),
            SCRIPT_EXTENSION => Ok(Self::Script),
            STYLE_EXTENSION => Ok(Self::Style),
            other => Err(FileNameError::UnsupportedScriptType(other.to_string())),
        }
    }
}

/// Name of one override file: a level plus a [`ScriptType`].
///
/// # Example
///
/// ```rust
/// use cdi_core::{OverrideFileName, ScriptType};
///
/// let name = OverrideFileName::new("google.com", ScriptType::Style);
/// assert_eq!(name.to_string(), "google.com.css");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverrideFileName {
    level: String,
    script_type: ScriptType,
}

impl OverrideFileName {
    pub fn new(level: impl Into<String>, script_type: ScriptType) -> Self {
        Self {
            level: level.into(),
            script_type,
        }
    }

    /// The file for the global sentinel level.
    pub fn global(script_type: ScriptType) -> Self {
        Self::new(GLOBAL_LEVEL_NAME, script_type)
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn script_type(&self) -> ScriptType {
        self.script_type
    }
}

impl fmt::Display for OverrideFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.level, self.script_type.extension())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_joins_level_and_extension() {
        let name = OverrideFileName::new("www.google.com", ScriptType::Script);
        assert_eq!(name.to_string(), "www.google.com.js");
    }

    #[test]
    fn test_global_file_names() {
        assert_eq!(OverrideFileName::global(ScriptType::Script).to_string(), "_global.js");
        assert_eq!(OverrideFileName::global(ScriptType::Style).to_string(), "_global.css");
    }

    #[test]
    fn test_empty_level_still_gets_extension() {
        // An empty hostname probes the level "" which maps to ".js".
        assert_eq!(OverrideFileName::new("", ScriptType::Script).to_string(), ".js");
    }

    #[test]
    fn test_probe_order_is_script_then_style() {
        assert_eq!(ScriptType::ALL, [ScriptType::Script, ScriptType::Style]);
        assert_eq!(ScriptType::Script.index(), 0);
        assert_eq!(ScriptType::Style.index(), 1);
    }

    #[test]
    fn test_parse_script_type() {
        assert_eq!("js".parse::<ScriptType>(), Ok(ScriptType::Script));
        assert_eq!(" css ".parse::<ScriptType>(), Ok(ScriptType::Style));
    }

    #[test]
    fn test_parse_rejects_blank_and_unknown_types() {
        assert_eq!("  ".parse::<ScriptType>(), Err(FileNameError::EmptyScriptType));
        assert_eq!(
            "html".parse::<ScriptType>(),
            Err(FileNameError::UnsupportedScriptType("html".to_string()))
        );
    }

    #[test]
    fn test_accessors() {
        let name = OverrideFileName::new("com", ScriptType::Style);
        assert_eq!(name.level(), "com");
        assert_eq!(name.script_type(), ScriptType::Style);
    }
}
