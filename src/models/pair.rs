/// A key/value entry within a section
///
/// A pair whose key and value are both empty is a tombstone: it was removed
/// but still occupies its slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pair {
    pub(crate) key: String,
    pub(crate) value: String,
}

impl Pair {
    pub(crate) fn new(key: String, value: String) -> Self {
        Pair { key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this slot holds a removed pair
    pub fn is_tombstoned(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }

    pub(crate) fn matches(&self, key: &str) -> bool {
        !self.is_tombstoned() && self.key == key
    }

    pub(crate) fn tombstone(&mut self) {
        self.key.clear();
        self.value.clear();
    }
}
