//! Card Component
//!
//! A bordered container with an optional title heading.

use crate::helpers::compose;
use crate::markup::{self, Element, Node};
use crate::peer::check_peer_dependencies;
use crate::theme::classes::CardClasses;

/// Props for [`render_card`]
#[derive(Debug, Clone)]
pub struct CardProps {
    pub content: Node,
    pub title: Option<String>,
    /// Appended after the base classes; both stay applied
    pub class_name: Option<String>,
}

impl CardProps {
    /// Create props with no title and no extra classes
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            content: content.into(),
            title: None,
            class_name: None,
        }
    }

    /// Set the title heading
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set extra classes
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Render into markup
    pub fn render(self) -> Element {
        render_card(self)
    }
}

impl From<CardProps> for Node {
    fn from(props: CardProps) -> Self {
        Node::Element(render_card(props))
    }
}

/// Render a `<div>` card
///
/// The heading is omitted entirely when the title is absent or empty.
pub fn render_card(props: CardProps) -> Element {
    check_peer_dependencies();

    let class = compose([Some(CardClasses::BASE), props.class_name.as_deref()]);
    let title = props.title.filter(|t| !t.is_empty());

    tracing::trace!(titled = title.is_some(), "render card");

    let mut container = markup::div().class(class);

    if let Some(title) = title {
        container = container.child(markup::h3().class(CardClasses::TITLE).child(title));
    }

    // Fragments are spliced so the content lands directly inside the card
    match props.content {
        Node::Fragment(nodes) => container.children(nodes),
        content => container.child(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::p;

    #[test]
    fn test_renders_content_without_heading() {
        let el = render_card(CardProps::new(p().child("Card content")));

        assert_eq!(el.tag(), "div");
        assert!(el.find_by_tag("h3").is_none());
        assert_eq!(el.text_content(), "Card content");
        assert_eq!(el.class_name(), CardClasses::BASE);
    }

    #[test]
    fn test_title_heading_precedes_content() {
        let el = CardProps::new(p().child("Card content"))
            .title("Test Card")
            .render();

        let headings = el.find_all_by_tag("h3");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text_content(), "Test Card");
        assert_eq!(headings[0].class_name(), CardClasses::TITLE);

        let children = el.element_children();
        assert_eq!(children[0].tag(), "h3");
        assert_eq!(children[1].text_content(), "Card content");
    }

    #[test]
    fn test_empty_title_is_omitted() {
        let el = CardProps::new("body").title("").render();
        assert!(el.find_by_tag("h3").is_none());
        assert_eq!(el.child_nodes().len(), 1);
    }

    #[test]
    fn test_extra_classes_are_appended() {
        let el = CardProps::new(p().child("Content"))
            .class_name("border-blue-500 border-2")
            .render();

        let card = el.parent_of_text("Content").expect("card wraps the content");
        for token in CardClasses::BASE.split_whitespace() {
            assert!(card.has_class(token), "missing base class {token}");
        }
        assert!(card.has_class("border-blue-500"));
        assert!(card.has_class("border-2"));
        assert!(card.class_name().ends_with("border-blue-500 border-2"));
    }

    #[test]
    fn test_blank_extra_class_keeps_base_exactly() {
        let el = CardProps::new("x").class_name("  ").render();
        assert_eq!(el.class_name(), CardClasses::BASE);
    }

    #[test]
    fn test_fragment_content_is_unwrapped() {
        let content = Node::Fragment(vec![p().child("one").into(), p().child("two").into()]);
        let el = CardProps::new(content).title("T").render();

        let tags: Vec<_> = el.child_nodes().iter().filter_map(Node::as_element).map(Element::tag).collect();
        assert_eq!(tags, vec!["h3", "p", "p"]);
    }
}
