use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, error, warn};

use crate::error::IniError;
use crate::generator::ini::write_ini;
use crate::models::{Limits, Pair, Section};
use crate::parser::ini::load_into;

/// In-memory INI document
///
/// Sections keep their insertion order. Removing a section leaves an
/// empty-named slot behind, which every lookup and the serializer skip.
///
/// The `modified` flag is raised by mutations made through the document
/// (adding or removing sections, the `*_ex` pair operations) and cleared by a
/// successful [`Document::save`]. Mutating a [`Section`] directly does not
/// raise it.
#[derive(Debug, Default)]
pub struct Document {
    sections: Vec<Section>,
    modified: bool,
    limits: Limits,
}

impl Document {
    /// Create an empty document with the default bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with custom bounds
    pub fn with_limits(limits: Limits) -> Result<Self, IniError> {
        limits.validate()?;
        Ok(Document {
            sections: Vec::new(),
            modified: false,
            limits,
        })
    }

    /// Reset to the empty state without any unsaved-changes check
    pub fn init(&mut self) {
        self.sections = Vec::new();
        self.modified = false;
    }

    /// Release every section and pair
    ///
    /// Warns when the document holds changes that were never saved. Calling
    /// this repeatedly is harmless.
    pub fn clean(&mut self) {
        if self.modified {
            warn!("INI document was modified but not saved");
        }
        self.init();
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Record a change made through a section handle
    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Load an INI file, appending to the current content
    ///
    /// A file that does not exist is not an error; the document is left as is.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), IniError> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("INI file '{}' does not exist, nothing to load", path.display());
                return Ok(());
            }
            Err(e) => {
                error!("Error opening INI file '{}': {}", path.display(), e);
                return Err(e.into());
            }
        };

        self.load(BufReader::new(file)).map_err(|e| {
            error!("Error reading INI file '{}': {}", path.display(), e);
            e
        })
    }

    /// Load INI text from any buffered reader, appending to the current content
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<(), IniError> {
        load_into(self, reader)
    }

    /// Load INI text from a string, appending to the current content
    pub fn parse_str(&mut self, content: &str) -> Result<(), IniError> {
        self.load(content.as_bytes())
    }

    /// Write the document to a file, replacing its previous content
    ///
    /// Clears the modified flag on success only.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<(), IniError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            error!("Error opening INI file '{}' for writing: {}", path.display(), e);
            IniError::from(e)
        })?;

        let mut writer = BufWriter::new(file);
        self.print(&mut writer)?;
        self.modified = false;
        debug!(
            "Saved {} section(s) to '{}'",
            self.section_count(),
            path.display()
        );
        Ok(())
    }

    /// Write the INI text of every live section to a sink
    pub fn print<W: Write>(&self, sink: &mut W) -> Result<(), IniError> {
        sink.write_all(self.to_ini_string().as_bytes())
            .and_then(|_| sink.flush())
            .map_err(|e| {
                error!("Error writing INI document: {}", e);
                IniError::from(e)
            })
    }

    /// Render the document as INI text
    pub fn to_ini_string(&self) -> String {
        self.to_string()
    }

    /// Append a new section, even when one with the same name exists
    ///
    /// The name is truncated to the section bound and must not end up empty.
    pub fn add_section(&mut self, name: &str) -> Result<&mut Section, IniError> {
        if self.limits.section_name(name).is_empty() {
            error!("Section name '{}' is empty after truncation", name);
            return Err(IniError::InvalidInput(format!(
                "section name '{}' is empty after truncation",
                name
            )));
        }

        let index = self.push_section(name)?;
        self.modified = true;
        Ok(&mut self.sections[index])
    }

    /// Find the first live section with exactly this name
    ///
    /// The query is compared byte for byte against the stored (truncated) name.
    pub fn find_section(&self, name: &str) -> Option<&Section> {
        self.position(name).map(|index| &self.sections[index])
    }

    pub fn find_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        match self.position(name) {
            Some(index) => Some(&mut self.sections[index]),
            None => None,
        }
    }

    pub fn section_exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Tombstone a section: its pairs are released and its name cleared
    pub fn remove_section(&mut self, name: &str) -> Result<(), IniError> {
        let index = self.require_position(name)?;
        self.sections[index].tombstone();
        self.modified = true;
        Ok(())
    }

    /// Append a pair to a named section and flag the document as modified
    pub fn add_pair_ex(
        &mut self,
        section: &str,
        key: &str,
        value: &str,
    ) -> Result<&mut Pair, IniError> {
        let index = self.require_position(section)?;
        let Document {
            sections, modified, ..
        } = self;
        let pair = sections[index].add_pair(key, value)?;
        *modified = true;
        Ok(pair)
    }

    pub fn get_value_ex(&self, section: &str, key: &str) -> Option<&str> {
        self.find_section(section)?.get_value(key)
    }

    /// Overwrite the first matching key in a named section
    ///
    /// A missing key is a silent no-op (`Ok(false)`); a missing section is an error.
    pub fn set_value_ex(&mut self, section: &str, key: &str, value: &str) -> Result<bool, IniError> {
        let index = self.require_position(section)?;
        let updated = self.sections[index].set_value(key, value);
        if updated {
            self.modified = true;
        }
        Ok(updated)
    }

    /// Tombstone every matching key in a named section
    pub fn remove_pair_ex(&mut self, section: &str, key: &str) -> Result<usize, IniError> {
        let index = self.require_position(section)?;
        let removed = self.sections[index].remove_pair(key);
        if removed > 0 {
            self.modified = true;
        }
        Ok(removed)
    }

    /// Iterate over live sections in insertion order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(|section| !section.is_tombstoned())
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections().map(Section::name)
    }

    /// Number of live sections
    pub fn section_count(&self) -> usize {
        self.sections().count()
    }

    /// Number of section slots, tombstones included
    pub fn slot_count(&self) -> usize {
        self.sections.len()
    }

    /// Append a section without touching the modified flag
    pub(crate) fn push_section(&mut self, name: &str) -> Result<usize, IniError> {
        if let Err(e) = self.sections.try_reserve(1) {
            error!("Failed to allocate memory for sections: {}", e);
            return Err(IniError::AllocationFailure(e.to_string()));
        }

        self.sections.push(Section::new(name, self.limits));
        Ok(self.sections.len() - 1)
    }

    pub(crate) fn section_at_mut(&mut self, index: usize) -> &mut Section {
        &mut self.sections[index]
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        self.sections.iter().position(|section| section.name == name)
    }

    fn require_position(&self, name: &str) -> Result<usize, IniError> {
        self.position(name).ok_or_else(|| {
            warn!("Section '{}' not found", name);
            IniError::SectionNotFound(name.to_string())
        })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ini(self, f)
    }
}

impl Drop for Document {
    fn drop(&mut self) {
        self.clean();
    }
}
