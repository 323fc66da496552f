//! Line-oriented INI loader
//!
//! Recognized lines:
//!
//! * blank lines and lines starting with `;` are skipped,
//! * `[name]` starts (or re-enters) a section, anything after `]` is ignored,
//! * `key=value` adds a pair to the active section, split at the first `=`.
//!
//! Everything else is ignored.

use std::io::BufRead;

use log::debug;

use crate::error::IniError;
use crate::models::Document;
use crate::utils::strip_line_ending;

/// Classification of a single INI line, newline already stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Header(&'a str),
    /// `[` without a closing `]`
    UnterminatedHeader,
    Pair { key: &'a str, value: &'a str },
    Other,
}

pub fn classify_line(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with(';') {
        return Line::Comment;
    }
    if let Some(rest) = line.strip_prefix('[') {
        return match rest.find(']') {
            Some(end) => Line::Header(&rest[..end]),
            None => Line::UnterminatedHeader,
        };
    }
    match line.split_once('=') {
        Some((key, value)) => Line::Pair { key, value },
        None => Line::Other,
    }
}

/// Read INI text line by line into `doc`
///
/// A repeated header re-enters the existing section, so its pairs merge into
/// one section. Pairs that appear before any header are dropped. The modified
/// flag is left untouched.
pub fn load_into<R: BufRead>(doc: &mut Document, mut reader: R) -> Result<(), IniError> {
    let limits = doc.limits();
    let mut current: Option<usize> = None;
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    let mut pairs_loaded = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let text = String::from_utf8_lossy(&buf);
        match classify_line(strip_line_ending(&text)) {
            Line::Blank | Line::Comment => {}
            Line::Header(name) => {
                let name = limits.section_name(name);
                current = if name.is_empty() {
                    debug!("Line {}: empty section name, following pairs are dropped", line_no);
                    None
                } else {
                    match doc.position(name) {
                        Some(index) => Some(index),
                        None => Some(doc.push_section(name)?),
                    }
                };
            }
            Line::UnterminatedHeader => {
                debug!("Line {}: section header without ']', skipped", line_no);
            }
            Line::Pair { key, value } => match current {
                Some(index) => {
                    doc.section_at_mut(index).add_pair(key, value)?;
                    pairs_loaded += 1;
                }
                None => debug!("Line {}: pair outside of any section, skipped", line_no),
            },
            Line::Other => debug!("Line {}: not a pair, skipped", line_no),
        }
    }

    debug!(
        "Loaded {} line(s), {} pair(s) into {} section(s)",
        line_no,
        pairs_loaded,
        doc.section_count()
    );
    Ok(())
}
