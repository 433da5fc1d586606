//! The `smb.conf` document model.
//!
//! # Module Structure
//!
//! ```text
//! conf/
//! ├── section    # Section (one [name] block, raw lines + accessors)
//! ├── error      # ConfError
//! └── mod.rs     # SmbConf (this file): parse, mutate, serialize
//! ```
//!
//! The document is a header block (everything before the first section
//! header) plus an ordered list of sections, each holding its raw text
//! verbatim. Parsing is best-effort line accumulation and never fails on
//! malformed input; writing concatenates the stored lines back out, so an
//! untouched document round-trips byte-for-byte.

mod error;
mod section;

pub use error::ConfError;
pub use section::{NO_DESCRIPTION, Section};

use crate::debug;
use regex::Regex;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Section names that are never treated as shares.
pub const RESERVED_SECTIONS: [&str; 3] = ["global", "printers", "homes"];

/// A section header is `[...]` anywhere in the line. Non-greedy, so the
/// name runs from the first `[` to the first `]`.
static RE_SECTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// An `smb.conf`-style document bound to its backing file.
///
/// Mutations mark the document dirty; [`SmbConf::save`] persists to the
/// backing file and clears the flag, while [`SmbConf::write_to`] streams
/// the same bytes to any writer without touching it.
#[derive(Debug)]
pub struct SmbConf {
    path: PathBuf,
    header: Vec<String>,
    sections: Vec<Section>,
    dirty: bool,
}

impl SmbConf {
    /// Load and parse the config file at `path`.
    ///
    /// Only I/O can fail here; any readable file parses. A file without a
    /// single section header ends up entirely in the header block.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfError> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|e| ConfError::Io(path.to_path_buf(), e))?;

        let mut header = Vec::new();
        let mut sections: Vec<Section> = Vec::new();

        for line in text.split_inclusive('\n') {
            if let Some(caps) = RE_SECTION.captures(line) {
                // A commented-out header (leading `;`) stays ordinary
                // content of whatever block is open.
                if !line.trim_start().starts_with(';') {
                    sections.push(Section::new(&caps[1]));
                }
            }

            match sections.last_mut() {
                Some(current) => current.push_line(line),
                None => header.push(line.to_string()),
            }
        }

        debug!("conf"; "parsed {} sections from {}", sections.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            header,
            sections,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw lines preceding the first section header.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections that represent exported shares, i.e. everything except the
    /// reserved `global`, `printers` and `homes` blocks.
    pub fn shares(&self) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(|s| !RESERVED_SECTIONS.contains(&s.name()))
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name() == name)
    }

    /// True when in-memory mutations have not been persisted yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append a generated share section.
    ///
    /// An omitted comment defaults to the path. Duplicate names are not
    /// rejected here; callers that care check [`SmbConf::has_section`]
    /// first.
    pub fn add_section(
        &mut self,
        name: &str,
        path: &str,
        comment: Option<&str>,
        writeable: bool,
    ) {
        self.sections
            .push(Section::share(name, path, comment, writeable));
        self.dirty = true;
    }

    /// Remove the first section whose name equals `name` exactly.
    ///
    /// On a miss the document is left untouched and stays clean.
    pub fn delete_section(&mut self, name: &str) -> Result<(), ConfError> {
        match self.sections.iter().position(|s| s.name() == name) {
            Some(index) => {
                self.sections.remove(index);
                self.dirty = true;
                Ok(())
            }
            None => Err(ConfError::SectionNotFound(name.to_string())),
        }
    }

    /// Stream the document to `out`: header lines, then each section's
    /// lines, in order, exactly as stored.
    pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
        for line in &self.header {
            out.write_all(line.as_bytes())?;
        }
        for section in &self.sections {
            for line in section.lines() {
                out.write_all(line.as_bytes())?;
            }
        }
        out.flush()
    }

    /// Overwrite the backing file and clear the dirty flag.
    pub fn save(&mut self) -> Result<(), ConfError> {
        let file =
            fs::File::create(&self.path).map_err(|e| ConfError::Write(self.path.clone(), e))?;
        self.write_to(io::BufWriter::new(file))
            .map_err(|e| ConfError::Write(self.path.clone(), e))?;
        self.dirty = false;
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================
