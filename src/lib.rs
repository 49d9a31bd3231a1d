//! Widget Kit Library
//!
//! Presentational button and card components that render to a small markup
//! tree with Tailwind-style class strings, plus the demo host that exercises
//! them. Every render checks that the host declares a compatible peer
//! version and logs a warning otherwise.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod helpers;
pub mod markup;
pub mod peer;
pub mod theme;

pub use components::{
    ButtonProps, ButtonSize, ButtonVariant, CardProps, render_button, render_card,
};
pub use error::{Error, Result};
