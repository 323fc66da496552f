pub mod ini;

pub use ini::{classify_line, load_into, Line};
