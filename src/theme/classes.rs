//! Classes - Component Class Tokens

/// Button class palette - accessed via associated constants
pub struct ButtonClasses;

impl ButtonClasses {
    /// Always applied
    pub const BASE: &'static str = "inline-flex items-center justify-center font-medium rounded-md focus:outline-none focus:ring-2 focus:ring-offset-2";

    // Variants
    /// Primary action - Blue
    pub const PRIMARY: &'static str = "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500";
    /// Secondary action - Gray
    pub const SECONDARY: &'static str = "bg-gray-600 text-white hover:bg-gray-700 focus:ring-gray-500";
    /// Destructive action - Red
    pub const DANGER: &'static str = "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500";

    // Sizes
    pub const SMALL: &'static str = "px-2.5 py-1.5 text-xs";
    pub const MEDIUM: &'static str = "px-4 py-2 text-sm";
    pub const LARGE: &'static str = "px-6 py-3 text-base";

    /// Disabled modifier
    pub const DISABLED: &'static str = "opacity-50 cursor-not-allowed";
}

/// Card class palette
pub struct CardClasses;

impl CardClasses {
    /// Container
    pub const BASE: &'static str = "bg-white shadow-md rounded-lg p-6 border border-gray-200";
    /// Title heading
    pub const TITLE: &'static str = "text-lg font-semibold text-gray-900 mb-4";
}
