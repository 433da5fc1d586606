//! A single `[name]` block of the configuration file.

use regex::Regex;
use std::sync::LazyLock;

/// Sentinel returned by [`Section::comment`] when the block carries no
/// `comment =` line.
pub const NO_DESCRIPTION: &str = "<no description>";

static RE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"comment[\t ]*=(.*)").unwrap());
static RE_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"path[\t ]*=(.*)").unwrap());

/// One named block of the config file.
///
/// The raw lines (terminators included) are the source of truth: they are
/// written back verbatim on serialization, and the `comment`/`path`
/// accessors re-scan them on every call instead of caching parsed values.
/// For a section parsed from a file, the first line is the `[name]` header
/// itself.
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    lines: Vec<String>,
}

impl Section {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// Build a freshly generated share block.
    ///
    /// The body is a fixed six-line template; an omitted comment defaults
    /// to the path.
    pub(crate) fn share(name: &str, path: &str, comment: Option<&str>, writeable: bool) -> Self {
        let comment = comment.unwrap_or(path);
        Self {
            name: name.to_string(),
            lines: vec![
                format!("[{name}]\n"),
                format!("   path = {path}\n"),
                format!("   comment = {comment}\n"),
                format!("   writeable = {}\n", if writeable { "yes" } else { "no" }),
                "   public = yes\n".to_string(),
                "   browseable = yes\n".to_string(),
            ],
        }
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw lines of the block, header included, terminators intact.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// First `comment = ...` value in the block, trimmed.
    ///
    /// Returns the [`NO_DESCRIPTION`] sentinel when the block has no
    /// comment line. Matches anywhere in the concatenated block, so a
    /// commented-out `; comment = ...` line still wins if it comes first.
    pub fn comment(&self) -> String {
        match RE_COMMENT.captures(&self.lines.concat()) {
            Some(caps) => caps[1].trim().to_string(),
            None => NO_DESCRIPTION.to_string(),
        }
    }

    /// First `path = ...` value in the block, trimmed; empty if absent.
    pub fn path(&self) -> String {
        match RE_PATH.captures(&self.lines.concat()) {
            Some(caps) => caps[1].trim().to_string(),
            None => String::new(),
        }
    }
}

// ============================================================================
// tests
// ============================================================================
