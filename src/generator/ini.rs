use std::fmt::{self, Write};

use crate::models::Document;

/// Write `doc` as INI text
///
/// Each live section is emitted as a `[name]` header, one `key=value` line per
/// live pair, and a trailing blank line. Tombstoned sections and pairs produce
/// no output.
pub fn write_ini<W: Write>(doc: &Document, out: &mut W) -> fmt::Result {
    for section in doc.sections() {
        writeln!(out, "[{}]", section.name())?;
        for pair in section.pairs() {
            writeln!(out, "{}={}", pair.key(), pair.value())?;
        }
        writeln!(out)?;
    }
    Ok(())
}
