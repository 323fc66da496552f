//! Core data models for the INI store
//!
//! A [`Document`] owns an ordered list of [`Section`]s, each owning an ordered
//! list of [`Pair`]s. Every name, key and value is cut to the document's
//! [`Limits`] on the way in.
//!
//! # Usage
//!
//! ```rust
//! use zini::models::Document;
//!
//! let mut doc = Document::new();
//! let net = doc.add_section("Net").unwrap();
//! net.add_pair("host", "localhost").unwrap();
//! net.add_pair("port", "8080").unwrap();
//!
//! assert_eq!(doc.get_value_ex("Net", "port"), Some("8080"));
//! assert_eq!(doc.to_ini_string(), "[Net]\nhost=localhost\nport=8080\n\n");
//! ```
//!
//! # Removal
//!
//! Removing a pair or a section leaves a tombstone in its slot instead of
//! shifting the rest of the list. Tombstones are invisible to lookups,
//! iteration and serialization:
//!
//! ```rust
//! use zini::Document;
//!
//! let mut doc = Document::new();
//! doc.add_section("Auth").unwrap().add_pair("token", "abc").unwrap();
//! doc.remove_section("Auth").unwrap();
//!
//! assert!(!doc.section_exists("Auth"));
//! assert_eq!(doc.section_count(), 0);
//! assert_eq!(doc.slot_count(), 1);
//! ```

pub mod document;
pub mod limits;
pub mod pair;
pub mod section;

pub use document::Document;
pub use limits::{
    Limits, DEFAULT_MAX_KEY_LENGTH, DEFAULT_MAX_SECTION_LENGTH, DEFAULT_MAX_VALUE_LENGTH,
};
pub use pair::Pair;
pub use section::Section;
