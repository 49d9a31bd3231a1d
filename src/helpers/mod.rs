//! Helper Utilities
//!
//! Common utilities used across the library.

mod class_names;
mod fs;

pub use class_names::*;
pub use fs::*;
