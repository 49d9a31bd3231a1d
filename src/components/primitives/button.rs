//! Button Component

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::helpers::ClassNames;
use crate::markup::{self, ActivateHandler, Element, Node};
use crate::peer::check_peer_dependencies;
use crate::theme::classes::ButtonClasses;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Primary action button (blue)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Danger button (red)
    Danger,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [Self::Primary, Self::Secondary, Self::Danger];

    /// Class tokens for this variant
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => ButtonClasses::PRIMARY,
            ButtonVariant::Secondary => ButtonClasses::SECONDARY,
            ButtonVariant::Danger => ButtonClasses::DANGER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Danger => "danger",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "primary" => Ok(ButtonVariant::Primary),
            "secondary" => Ok(ButtonVariant::Secondary),
            "danger" => Ok(ButtonVariant::Danger),
            other => Err(Error::InvalidVariant {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Class tokens for this size
    pub fn classes(self) -> &'static str {
        match self {
            ButtonSize::Small => ButtonClasses::SMALL,
            ButtonSize::Medium => ButtonClasses::MEDIUM,
            ButtonSize::Large => ButtonClasses::LARGE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "small" => Ok(ButtonSize::Small),
            "medium" => Ok(ButtonSize::Medium),
            "large" => Ok(ButtonSize::Large),
            other => Err(Error::InvalidSize {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Props for [`render_button`]
#[derive(Clone)]
pub struct ButtonProps {
    pub content: Node,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub on_activate: Option<ActivateHandler>,
}

impl ButtonProps {
    /// Create props with default variant, size and enabled state
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            content: content.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            on_activate: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the activation handler
    pub fn on_activate(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_activate = Some(Rc::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(content: impl Into<Node>) -> Self {
        Self::new(content).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(content: impl Into<Node>) -> Self {
        Self::new(content).variant(ButtonVariant::Secondary)
    }

    /// Create a danger button
    pub fn danger(content: impl Into<Node>) -> Self {
        Self::new(content).variant(ButtonVariant::Danger)
    }

    /// Render into markup
    pub fn render(self) -> Element {
        render_button(self)
    }
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self::new(Node::empty())
    }
}

impl fmt::Debug for ButtonProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonProps")
            .field("content", &self.content)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("disabled", &self.disabled)
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}

impl From<ButtonProps> for Node {
    fn from(props: ButtonProps) -> Self {
        Node::Element(render_button(props))
    }
}

/// Render a `<button type="button">`
///
/// A disabled button carries the `disabled` attribute and no handler, so
/// activation never reaches `on_activate`.
pub fn render_button(props: ButtonProps) -> Element {
    check_peer_dependencies();

    let class = ClassNames::new()
        .push(ButtonClasses::BASE)
        .push(props.variant.classes())
        .push(props.size.classes())
        .push_if(props.disabled, ButtonClasses::DISABLED)
        .build();

    tracing::trace!(variant = %props.variant, size = %props.size, disabled = props.disabled, "render button");

    let mut element = markup::button()
        .class(class)
        .attr("type", "button")
        .bool_attr("disabled", props.disabled)
        .child(props.content);

    if !props.disabled {
        if let Some(handler) = props.on_activate {
            element = element.on_activate_rc(handler);
        }
    }

    element
}
