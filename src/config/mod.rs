//! Project configuration for numu
//!
//! - `loader`: locating and parsing the optional `numu.{json,yaml,yml}` file

pub mod loader;


pub use loader::ProjectConfig;
