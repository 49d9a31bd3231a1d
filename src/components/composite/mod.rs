//! Composite Components
//!
//! Containers built from primitives and caller content.

pub mod card;
