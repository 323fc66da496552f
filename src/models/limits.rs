use serde::{Deserialize, Serialize};

use crate::error::IniError;
use crate::utils::truncate_to_bound;

pub const DEFAULT_MAX_SECTION_LENGTH: usize = 128;
pub const DEFAULT_MAX_KEY_LENGTH: usize = 128;
pub const DEFAULT_MAX_VALUE_LENGTH: usize = 128;

/// Field bounds applied to every name, key and value written into a document
///
/// Each bound includes one terminator slot, so a field holds at most
/// `bound - 1` bytes. Longer input is truncated, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Bound for section names
    pub max_section_len: usize,
    /// Bound for keys
    pub max_key_len: usize,
    /// Bound for values
    pub max_value_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_section_len: DEFAULT_MAX_SECTION_LENGTH,
            max_key_len: DEFAULT_MAX_KEY_LENGTH,
            max_value_len: DEFAULT_MAX_VALUE_LENGTH,
        }
    }
}

impl Limits {
    /// Reject bounds that could not hold a single byte
    pub fn validate(&self) -> Result<(), IniError> {
        let fields = [
            ("max_section_len", self.max_section_len),
            ("max_key_len", self.max_key_len),
            ("max_value_len", self.max_value_len),
        ];
        for (name, bound) in fields {
            if bound < 2 {
                return Err(IniError::InvalidInput(format!(
                    "{} must be at least 2, got {}",
                    name, bound
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn section_name<'a>(&self, name: &'a str) -> &'a str {
        truncate_to_bound(name, self.max_section_len)
    }

    pub(crate) fn key<'a>(&self, key: &'a str) -> &'a str {
        truncate_to_bound(key, self.max_key_len)
    }

    pub(crate) fn value<'a>(&self, value: &'a str) -> &'a str {
        truncate_to_bound(value, self.max_value_len)
    }
}
