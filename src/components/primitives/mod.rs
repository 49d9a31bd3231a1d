//! Primitive Components
//!
//! Basic building blocks like buttons.

pub mod button;
