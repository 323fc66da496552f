pub mod ini;

pub use ini::write_ini;
