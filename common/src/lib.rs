//! Functions, constants, and types shared by the Monsters and Memories UI tools: finding
//! characters, tracking which one is copied to which, copying their UI files, and keeping a
//! recent backup of the whole settings tree.
//!
pub use log;

pub mod backup;
pub mod console;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_copier;
pub mod macros;
pub mod rules;
pub mod selection;
pub mod settings;
pub mod types;
pub mod usage;

#[cfg(test)]
pub mod spec_helper;
