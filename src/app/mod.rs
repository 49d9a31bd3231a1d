//! App - Demo Host
//!
//! A sample consumer of the components: holds a click counter and wires
//! callbacks into buttons and cards.

pub mod application;
pub mod demo;
