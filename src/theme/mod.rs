//! Theme - Utility Class Tables
//!
//! Tailwind-style class tokens shared by the components.

pub mod classes;
