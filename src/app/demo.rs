//! Demo - Sample Page
//!
//! Renders every variant, size and card shape with a shared counter.

use std::cell::Cell;
use std::rc::Rc;

use crate::components::{ButtonProps, ButtonSize, ButtonVariant, CardProps};
use crate::markup::{Element, Node, div, h1, h4, p};

/// Label prefix of the counting button
pub const COUNTER_LABEL: &str = "Primary Button (Count: ";

/// Demo page state
#[derive(Debug, Clone, Default)]
pub struct DemoApp {
    count: Rc<Cell<u32>>,
}

impl DemoApp {
    /// Create a demo with the counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current click count
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// Render the page for the current count
    ///
    /// Handlers capture the shared counter, so a rendered page stays live
    /// until the host re-renders it.
    pub fn render(&self) -> Element {
        let count = self.count.get();

        let increment = {
            let counter = self.count.clone();
            move || counter.set(counter.get().saturating_add(1))
        };
        let reset = {
            let counter = self.count.clone();
            move || counter.set(0)
        };

        let buttons = div()
            .class("flex gap-4 mb-8")
            .child(ButtonProps::new(format!("{COUNTER_LABEL}{count})")).on_activate(increment))
            .child(ButtonProps::secondary("Reset").on_activate(reset))
            .child(ButtonProps::danger("Small Danger").size(ButtonSize::Small))
            .child(
                ButtonProps::new("Disabled Large")
                    .size(ButtonSize::Large)
                    .disabled(true),
            );

        let basic = CardProps::new(Node::Fragment(vec![
            p().child("This is a basic card with a title. It demonstrates the Card component.")
                .into(),
            ButtonProps::new("Card Action").size(ButtonSize::Small).into(),
        ]))
        .title("Basic Card");

        let untitled = CardProps::new(Node::Fragment(vec![
            h4().child("Card without title prop").into(),
            p().child("This card has a custom heading inside the content instead of a title.")
                .into(),
            p().child(format!("Click count: {count}")).into(),
        ]));

        let styled = CardProps::new(Node::Fragment(vec![
            p().child("This card has custom styling applied via the class name prop.")
                .into(),
            div()
                .class("flex gap-2")
                .child(ButtonProps::new("Accept").variant(ButtonVariant::Primary).size(ButtonSize::Small))
                .child(ButtonProps::danger("Decline").size(ButtonSize::Small))
                .into(),
        ]))
        .title("Custom Styled Card")
        .class_name("border-blue-500 border-2");

        let cards = div()
            .class("grid gap-4")
            .child(basic)
            .child(untitled)
            .child(styled);

        div()
            .class("p-8 font-sans")
            .child(h1().child("Widget Kit Demo"))
            .child(p().child("This demo shows the button and card components."))
            .child(buttons)
            .child(cards)
    }
}

/// The counting button of a rendered demo page
pub fn counter_button(page: &Element) -> Option<&Element> {
    page.find(&|el: &Element| el.tag() == "button" && el.text_content().starts_with(COUNTER_LABEL))
}

/// A button of a rendered demo page by its exact label
pub fn button_labeled<'a>(page: &'a Element, label: &str) -> Option<&'a Element> {
    page.find(&|el: &Element| el.tag() == "button" && el.text_content() == label)
}
