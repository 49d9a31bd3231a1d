//! Components - Reusable UI Components
//!
//! Pure render functions from props to markup. The only side effect is the
//! peer dependency check each render performs.

pub mod composite;
pub mod primitives;

pub use composite::card::{CardProps, render_card};
pub use primitives::button::{ButtonProps, ButtonSize, ButtonVariant, render_button};
