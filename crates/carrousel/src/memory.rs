//! Headless in-memory rendering surface.
//!
//! [`MemorySurface`] keeps a small element tree with classes, inline styles
//! and click handlers. It behaves like a document for everything the
//! carrousel needs: appending an attached element moves it, clicking an
//! element runs its handlers, and the tree can be dumped for inspection.
//!
//! # Example
//!
//! ```
//! use carrousel::{Carrousel, CarrouselOptions, MemorySurface};
//!
//! let surface = MemorySurface::new();
//! let host = surface.host_with_slides(["a", "b", "c"]);
//!
//! let carrousel = Carrousel::new(surface.clone(), host, CarrouselOptions::new())?;
//! assert_eq!(carrousel.slide_count(), 3);
//! println!("{}", surface.format_tree(host));
//! # Ok::<(), carrousel::CarrouselError>(())
//! ```

use std::cell::RefCell;
use std::fmt::Write as FmtWrite;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

use carrousel_core::logging::targets;
use carrousel_core::{CarrouselError, Result};

use crate::surface::Surface;

new_key_type! {
    /// Handle to an element in a [`MemorySurface`].
    pub struct NodeId;
}

/// Style options for tree dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

#[derive(Default)]
struct Node {
    label: Option<String>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    click_handlers: Vec<Rc<dyn Fn()>>,
}

/// A headless element tree implementing [`Surface`].
///
/// Clones share the same tree.
#[derive(Clone, Default)]
pub struct MemorySurface {
    nodes: Rc<RefCell<SlotMap<NodeId, Node>>>,
}

impl MemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element with a text label and no classes.
    pub fn create_element(&self, label: impl Into<String>) -> NodeId {
        self.nodes.borrow_mut().insert(Node {
            label: Some(label.into()),
            ..Node::default()
        })
    }

    /// Create a host element with one labelled child per entry.
    pub fn host_with_slides<I, S>(&self, labels: I) -> NodeId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut nodes = self.nodes.borrow_mut();
        let host = nodes.insert(Node::default());
        for label in labels {
            let child = nodes.insert(Node {
                label: Some(label.into()),
                parent: Some(host),
                ..Node::default()
            });
            nodes[host].children.push(child);
        }
        host
    }

    /// Number of elements ever created and still tracked.
    pub fn node_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    /// The parent of an element, if attached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.borrow().get(node).and_then(|n| n.parent)
    }

    /// The text label of an element.
    pub fn label(&self, node: NodeId) -> Option<String> {
        self.nodes.borrow().get(node).and_then(|n| n.label.clone())
    }

    /// The classes of an element, in the order they were added.
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes
            .borrow()
            .get(node)
            .map(|n| n.classes.clone())
            .unwrap_or_default()
    }

    /// The value of an inline style property.
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow().get(node).and_then(|n| {
            n.styles
                .iter()
                .find(|(name, _)| name == property)
                .map(|(_, value)| value.clone())
        })
    }

    /// Simulate a click, running every handler registered on `node`.
    ///
    /// Returns the number of handlers invoked.
    pub fn click(&self, node: NodeId) -> usize {
        // Handlers may mutate the tree, so release the borrow first.
        let handlers = self
            .nodes
            .borrow()
            .get(node)
            .map(|n| n.click_handlers.clone())
            .unwrap_or_default();

        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    /// Render the subtree under `root` using the default [`TreeStyle`].
    pub fn format_tree(&self, root: NodeId) -> String {
        self.format_tree_with(root, TreeStyle::default())
    }

    /// Render the subtree under `root` with a specific branch style.
    pub fn format_tree_with(&self, root: NodeId, style: TreeStyle) -> String {
        let nodes = self.nodes.borrow();
        let mut output = String::new();
        format_subtree(&nodes, root, style, "", None, &mut output);
        output
    }

    fn with_node<R>(
        &self,
        node: NodeId,
        operation: &str,
        f: impl FnOnce(&mut Node) -> R,
    ) -> Result<R> {
        let mut nodes = self.nodes.borrow_mut();
        nodes
            .get_mut(node)
            .map(f)
            .ok_or_else(|| CarrouselError::surface(operation, format!("unknown node {node:?}")))
    }
}

impl std::fmt::Debug for MemorySurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySurface")
            .field("node_count", &self.node_count())
            .finish()
    }
}

impl Surface for MemorySurface {
    type Element = NodeId;

    fn create_div(&self, class: &str) -> Result<NodeId> {
        Ok(self.nodes.borrow_mut().insert(Node {
            classes: vec![class.to_string()],
            ..Node::default()
        }))
    }

    fn children(&self, parent: &NodeId) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .get(*parent)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        if !nodes.contains_key(*parent) || !nodes.contains_key(*child) {
            return Err(CarrouselError::surface("append_child", "unknown node"));
        }

        let mut ancestor = Some(*parent);
        while let Some(id) = ancestor {
            if id == *child {
                return Err(CarrouselError::surface(
                    "append_child",
                    "cannot append an element to its own descendant",
                ));
            }
            ancestor = nodes[id].parent;
        }

        if let Some(old_parent) = nodes[*child].parent.take() {
            nodes[old_parent].children.retain(|id| id != child);
        }
        nodes[*child].parent = Some(*parent);
        nodes[*parent].children.push(*child);
        tracing::trace!(target: targets::SURFACE, ?parent, ?child, "appended child");
        Ok(())
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) -> Result<()> {
        self.with_node(*element, "set_style", |node| {
            match node.styles.iter_mut().find(|(name, _)| name == property) {
                Some((_, existing)) => *existing = value.to_string(),
                None => node.styles.push((property.to_string(), value.to_string())),
            }
        })
    }

    fn add_class(&self, element: &NodeId, class: &str) -> Result<()> {
        self.with_node(*element, "add_class", |node| {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        })
    }

    fn remove_class(&self, element: &NodeId, class: &str) -> Result<()> {
        self.with_node(*element, "remove_class", |node| {
            node.classes.retain(|c| c != class);
        })
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes
            .borrow()
            .get(*element)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn on_click(&self, element: &NodeId, handler: Box<dyn Fn()>) -> Result<()> {
        let handler: Rc<dyn Fn()> = Rc::from(handler);
        self.with_node(*element, "on_click", |node| node.click_handlers.push(handler))
    }
}

fn format_subtree(
    nodes: &SlotMap<NodeId, Node>,
    id: NodeId,
    style: TreeStyle,
    indent: &str,
    is_last: Option<bool>,
    output: &mut String,
) {
    let Some(node) = nodes.get(id) else {
        return;
    };

    let (branch, last_branch, pipe) = match style {
        TreeStyle::Ascii => ("|-- ", "`-- ", "|   "),
        TreeStyle::Unicode => ("├── ", "└── ", "│   "),
    };

    output.push_str(indent);
    match is_last {
        Some(true) => output.push_str(last_branch),
        Some(false) => output.push_str(branch),
        None => {}
    }

    output.push_str("div");
    for class in &node.classes {
        write!(output, ".{class}").expect("write to String");
    }
    if let Some(label) = &node.label {
        write!(output, " \"{label}\"").expect("write to String");
    }
    if !node.styles.is_empty() {
        let styles: Vec<String> = node
            .styles
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        write!(output, " [{}]", styles.join("; ")).expect("write to String");
    }
    output.push('\n');

    let child_indent = match is_last {
        Some(true) => format!("{indent}    "),
        Some(false) => format!("{indent}{pipe}"),
        None => indent.to_string(),
    };
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        format_subtree(
            nodes,
            *child,
            style,
            &child_indent,
            Some(i == child_count - 1),
            output,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_host_with_slides() {
        let surface = MemorySurface::new();
        let host = surface.host_with_slides(["a", "b"]);

        let children = surface.children(&host);
        assert_eq!(children.len(), 2);
        assert_eq!(surface.label(children[0]).as_deref(), Some("a"));
        assert_eq!(surface.parent(children[1]), Some(host));
        assert_eq!(surface.node_count(), 3);
    }

    #[test]
    fn test_append_moves_element() {
        let surface = MemorySurface::new();
        let host = surface.host_with_slides(["a"]);
        let slide = surface.children(&host)[0];
        let wrapper = surface.create_div("wrapper").unwrap();

        surface.append_child(&wrapper, &slide).unwrap();

        assert!(surface.children(&host).is_empty());
        assert_eq!(surface.children(&wrapper), vec![slide]);
        assert_eq!(surface.parent(slide), Some(wrapper));
        assert_eq!(surface.node_count(), 3);
    }

    #[test]
    fn test_append_rejects_cycles() {
        let surface = MemorySurface::new();
        let outer = surface.create_div("outer").unwrap();
        let inner = surface.create_div("inner").unwrap();
        surface.append_child(&outer, &inner).unwrap();

        let err = surface.append_child(&inner, &outer).unwrap_err();
        assert!(matches!(err, CarrouselError::Surface { .. }));
        assert!(surface.append_child(&inner, &inner).is_err());
    }

    #[test]
    fn test_classes_and_styles() {
        let surface = MemorySurface::new();
        let div = surface.create_div("box").unwrap();

        surface.add_class(&div, "box--hidden").unwrap();
        surface.add_class(&div, "box--hidden").unwrap();
        assert_eq!(surface.classes(div), vec!["box", "box--hidden"]);

        surface.toggle_class(&div, "box--hidden", false).unwrap();
        assert!(!surface.has_class(&div, "box--hidden"));
        surface.remove_class(&div, "missing").unwrap();

        surface.set_style(&div, "width", "50%").unwrap();
        surface.set_style(&div, "width", "25%").unwrap();
        assert_eq!(surface.style(div, "width").as_deref(), Some("25%"));
        assert_eq!(surface.style(div, "transform"), None);
    }

    #[test]
    fn test_click_runs_handlers() {
        let surface = MemorySurface::new();
        let button = surface.create_div("button").unwrap();
        let clicks = Rc::new(Cell::new(0));

        let clicks_clone = clicks.clone();
        surface
            .on_click(&button, Box::new(move || clicks_clone.set(clicks_clone.get() + 1)))
            .unwrap();

        assert_eq!(surface.click(button), 1);
        assert_eq!(surface.click(button), 1);
        assert_eq!(clicks.get(), 2);

        let other = surface.create_div("other").unwrap();
        assert_eq!(surface.click(other), 0);
    }

    #[test]
    fn test_format_tree() {
        let surface = MemorySurface::new();
        let root = surface.create_div("root").unwrap();
        let first = surface.create_div("first").unwrap();
        let second = surface.create_element("slide");
        surface.append_child(&root, &first).unwrap();
        surface.append_child(&root, &second).unwrap();
        surface.set_style(&first, "width", "50%").unwrap();

        assert_eq!(
            surface.format_tree(root),
            "div.root\n├── div.first [width: 50%]\n└── div \"slide\"\n"
        );
        assert_eq!(
            surface.format_tree_with(root, TreeStyle::Ascii),
            "div.root\n|-- div.first [width: 50%]\n`-- div \"slide\"\n"
        );
    }
}
