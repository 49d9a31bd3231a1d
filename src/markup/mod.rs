//! Markup - Render Tree
//!
//! The output of every component: a small element tree with class tokens,
//! attributes and an optional activation handler. Hosts serialize it with
//! [`Node::render_to_string`] or walk it themselves.

mod html;

use std::fmt;
use std::rc::Rc;

/// Zero-argument activation callback
///
/// Rendering is single-threaded, so handlers are reference-counted rather than `Send`.
pub type ActivateHandler = Rc<dyn Fn() + 'static>;

/// A node in the render tree
#[derive(Clone)]
pub enum Node {
    /// Plain text, escaped on serialization
    Text(String),
    /// A tagged element
    Element(Element),
    /// A list of siblings without a wrapping element
    Fragment(Vec<Node>),
}

impl Node {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Create an empty fragment
    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    /// Get the element if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search (pre-order) for the first element matching `pred`
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Element(el) => el.find(pred),
            Node::Fragment(nodes) => nodes.iter().find_map(|n| n.find(pred)),
        }
    }

    /// Collect every element matching `pred`, in document order
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        match self {
            Node::Text(_) => {}
            Node::Element(el) => el.find_all(pred, out),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.find_all(pred, out);
                }
            }
        }
    }

    /// Serialize the tree as HTML
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        html::write_node(self, &mut out);
        out
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Node::Element(el) => el.fmt(f),
            Node::Fragment(nodes) => f.debug_tuple("Fragment").field(nodes).finish(),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Node::Fragment(nodes)
    }
}

/// An element with a tag, class string, attributes and children
#[derive(Clone)]
pub struct Element {
    tag: &'static str,
    class: String,
    attrs: Vec<(String, Option<String>)>,
    children: Vec<Node>,
    on_activate: Option<ActivateHandler>,
}

impl Element {
    /// Create an element with the given tag
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: String::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            on_activate: None,
        }
    }

    /// Set the class string (already composed)
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Set a valued attribute, replacing an existing one with the same name
    ///
    /// `class` is routed to [`class`](Self::class) so it is never emitted twice.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if name == "class" {
            return self.class(value);
        }
        self.set_attr(name, Some(value.into()));
        self
    }

    /// Set or clear a boolean attribute such as `disabled`
    pub fn bool_attr(mut self, name: impl Into<String>, present: bool) -> Self {
        let name = name.into();
        if present {
            self.set_attr(name, None);
        } else {
            self.attrs.retain(|(n, _)| *n != name);
        }
        self
    }

    fn set_attr(&mut self, name: String, value: Option<String>) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Append a child node
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attach an activation handler
    pub fn on_activate(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_activate = Some(Rc::new(handler));
        self
    }

    /// Attach an already shared activation handler
    pub fn on_activate_rc(mut self, handler: ActivateHandler) -> Self {
        self.on_activate = Some(handler);
        self
    }

    // ==================== Getters ====================

    /// Tag name
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Raw class string
    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// Individual class tokens
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class.split_whitespace()
    }

    /// Check whether a class token is applied
    pub fn has_class(&self, token: &str) -> bool {
        self.classes().any(|c| c == token)
    }

    /// Value of an attribute; boolean attributes yield an empty string
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// All attributes in insertion order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }

    /// Child nodes
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Whether the element carries the `disabled` attribute
    pub fn is_disabled(&self) -> bool {
        self.attr_value("disabled").is_some()
    }

    /// Whether an activation handler is attached
    pub fn has_handler(&self) -> bool {
        self.on_activate.is_some()
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    // ==================== Events ====================

    /// Deliver one activation event (a click)
    ///
    /// Disabled elements swallow the event. Returns whether a handler ran.
    pub fn activate(&self) -> bool {
        if self.is_disabled() {
            tracing::trace!(tag = self.tag, "activation ignored on disabled element");
            return false;
        }
        match &self.on_activate {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    // ==================== Queries ====================

    /// Depth-first search (pre-order, self included)
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    /// Collect every matching element (self included), in document order
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for child in &self.children {
            child.find_all(pred, out);
        }
    }

    /// First element with the given tag
    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.tag == tag)
    }

    /// Every element with the given tag
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.find_all(&|el: &Element| el.tag == tag, &mut out);
        out
    }

    /// Innermost element whose text content equals `text`
    pub fn find_by_text(&self, text: &str) -> Option<&Element> {
        for child in &self.children {
            if let Some(found) = child.find(&|el: &Element| el.text_content() == text) {
                return Some(found.find_by_text(text).unwrap_or(found));
            }
        }
        (self.text_content() == text).then_some(self)
    }

    /// Parent of the innermost element whose text content equals `text`
    pub fn parent_of_text(&self, text: &str) -> Option<&Element> {
        let target = self.find_by_text(text)?;
        self.parent_of(target)
    }

    fn parent_of(&self, target: &Element) -> Option<&Element> {
        for child in self.element_children() {
            if std::ptr::eq(child, target) {
                return Some(self);
            }
            if let Some(parent) = child.parent_of(target) {
                return Some(parent);
            }
        }
        None
    }

    /// Element children, looking through fragments
    pub fn element_children(&self) -> Vec<&Element> {
        fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a Element>) {
            for node in nodes {
                match node {
                    Node::Text(_) => {}
                    Node::Element(el) => out.push(el),
                    Node::Fragment(inner) => walk(inner, out),
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.children, &mut out);
        out
    }

    /// Serialize the element as HTML
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        html::write_element(self, &mut out);
        out
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("class", &self.class)
            .field("attrs", &self.attrs)
            .field("children", &self.children)
            .field("has_handler", &self.on_activate.is_some())
            .finish()
    }
}

/// Create a `<div>` element
pub fn div() -> Element {
    Element::new("div")
}

/// Create a `<p>` element
pub fn p() -> Element {
    Element::new("p")
}

/// Create an `<h1>` element
pub fn h1() -> Element {
    Element::new("h1")
}

/// Create an `<h3>` element
pub fn h3() -> Element {
    Element::new("h3")
}

/// Create an `<h4>` element
pub fn h4() -> Element {
    Element::new("h4")
}

/// Create a `<button>` element
pub fn button() -> Element {
    Element::new("button")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_text_content_flattens_fragments() {
        let el = div()
            .child("a")
            .child(Node::Fragment(vec!["b".into(), p().child("c").into()]));
        assert_eq!(el.text_content(), "abc");
    }

    #[test]
    fn test_attr_replaces_existing() {
        let el = button().attr("type", "submit").attr("type", "button");
        assert_eq!(el.attr_value("type"), Some("button"));
        assert_eq!(el.attrs().count(), 1);
    }

    #[test]
    fn test_class_attr_sets_class_string() {
        let el = div().class("a").attr("class", "b c");
        assert_eq!(el.class_name(), "b c");
        assert!(el.has_class("c"));
        assert_eq!(el.attr_value("class"), None);
        assert_eq!(el.render_to_string(), r#"<div class="b c"></div>"#);
    }

    #[test]
    fn test_bool_attr_toggle() {
        let el = button().bool_attr("disabled", true);
        assert!(el.is_disabled());
        let el = el.bool_attr("disabled", false);
        assert!(!el.is_disabled());
    }

    #[test]
    fn test_activate_runs_handler_once() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let el = button().on_activate(move || counter.set(counter.get() + 1));

        assert!(el.activate());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_activate_disabled_is_swallowed() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let el = button()
            .bool_attr("disabled", true)
            .on_activate(move || counter.set(counter.get() + 1));

        assert!(!el.activate());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_activate_without_handler() {
        assert!(!button().activate());
    }

    #[test]
    fn test_find_by_text_returns_innermost() {
        let tree = div().child(div().child(p().child("Content")));
        let found = tree.find_by_text("Content").expect("text should be found");
        assert_eq!(found.tag(), "p");
    }

    #[test]
    fn test_parent_of_text() {
        let tree = div()
            .class("outer")
            .child(div().class("card").child(p().child("Content")));

        let parent = tree.parent_of_text("Content").expect("parent should be found");
        assert_eq!(parent.tag(), "div");
        assert!(parent.has_class("card"));
    }

    #[test]
    fn test_find_all_by_tag_document_order() {
        let tree = div()
            .child(button().child("one"))
            .child(div().child(button().child("two")))
            .child(button().child("three"));
        let labels: Vec<_> = tree
            .find_all_by_tag("button")
            .into_iter()
            .map(Element::text_content)
            .collect();
        assert_eq!(labels, vec!["one", "two", "three"]);
    }
}
