use log::error;

use crate::error::IniError;
use crate::models::{Limits, Pair};

/// A named group of key/value pairs
///
/// Pairs keep their insertion order. Duplicate keys are allowed; lookups
/// return the first live match. Removed pairs stay in place as tombstones, so
/// [`Section::slot_count`] never shrinks while the section is alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub(crate) name: String,
    pub(crate) pairs: Vec<Pair>,
    pub(crate) limits: Limits,
}

impl Section {
    pub(crate) fn new(name: &str, limits: Limits) -> Self {
        Section {
            name: limits.section_name(name).to_string(),
            pairs: Vec::new(),
            limits,
        }
    }

    /// Name of the section, empty once the section has been removed
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this slot holds a removed section
    pub fn is_tombstoned(&self) -> bool {
        self.name.is_empty()
    }

    /// Append a pair, even when the key is already present
    ///
    /// Key and value are truncated to the configured bounds. This does not
    /// flag the owning document as modified; use
    /// [`Document::add_pair_ex`](crate::Document::add_pair_ex) or
    /// [`Document::mark_modified`](crate::Document::mark_modified) for that.
    pub fn add_pair(&mut self, key: &str, value: &str) -> Result<&mut Pair, IniError> {
        if let Err(e) = self.pairs.try_reserve(1) {
            error!("Failed to allocate memory for pairs in '{}': {}", self.name, e);
            return Err(IniError::AllocationFailure(e.to_string()));
        }

        let index = self.pairs.len();
        let pair = Pair::new(
            self.limits.key(key).to_string(),
            self.limits.value(value).to_string(),
        );
        self.pairs.push(pair);
        Ok(&mut self.pairs[index])
    }

    /// Get the value of the first live pair with the given key
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.matches(key))
            .map(Pair::value)
    }

    /// Overwrite the value of the first live pair with the given key
    ///
    /// A missing key is not an error: nothing changes and `false` is returned.
    pub fn set_value(&mut self, key: &str, value: &str) -> bool {
        let value = self.limits.value(value).to_string();
        match self.pairs.iter_mut().find(|pair| pair.matches(key)) {
            Some(pair) => {
                pair.value = value;
                true
            }
            None => false,
        }
    }

    /// Tombstone every live pair with the given key, returning how many were hit
    pub fn remove_pair(&mut self, key: &str) -> usize {
        let mut removed = 0;
        for pair in self.pairs.iter_mut().filter(|pair| pair.matches(key)) {
            pair.tombstone();
            removed += 1;
        }
        removed
    }

    pub fn key_exists(&self, key: &str) -> bool {
        self.pairs.iter().any(|pair| pair.matches(key))
    }

    /// Iterate over live pairs in insertion order
    pub fn pairs(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter().filter(|pair| !pair.is_tombstoned())
    }

    /// Number of live pairs
    pub fn pair_count(&self) -> usize {
        self.pairs().count()
    }

    /// Number of pair slots, tombstones included
    pub fn slot_count(&self) -> usize {
        self.pairs.len()
    }

    /// Release the pair storage and clear the name
    pub(crate) fn tombstone(&mut self) {
        self.pairs = Vec::new();
        self.name.clear();
    }
}
