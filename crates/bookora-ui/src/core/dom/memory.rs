//! In-memory document used for headless runs and tests.
//!
//! # Design
//! - Nodes live in a shared arena; element handles are `(tree, index)` pairs
//!   so clones stay cheap and compare by identity.
//! - Click dispatch walks target → ancestors → document. A handler returning
//!   [`Propagation::Stop`] lets the remaining handlers on the same element run
//!   and then ends the walk, matching `stopPropagation`.
//! - Handlers are cloned out of the arena before they run, so they are free
//!   to mutate the tree.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::selector::Selector;
use super::{ChangeHandler, ClickHandler, DocumentClickHandler, DomDocument, DomElement, Propagation};

type SharedClick = Rc<dyn Fn(Option<&MemoryElement>) -> Propagation>;
type SharedDocumentClick = Rc<dyn Fn(Option<&MemoryElement>)>;
type SharedChange = Rc<dyn Fn()>;

const ROOT: usize = 0;
const BODY: usize = 1;

#[derive(Debug)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    value: String,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            value: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    fn classes(&self) -> Vec<&str> {
        self.attributes
            .get("class")
            .map(|value| value.split_whitespace().collect())
            .unwrap_or_default()
    }
}

#[derive(Default)]
struct Tree {
    nodes: Vec<Node>,
    click: Vec<(usize, SharedClick)>,
    document_click: Vec<SharedDocumentClick>,
    change: Vec<(usize, SharedChange)>,
}

impl Tree {
    fn ancestors_inclusive(&self, index: usize) -> Vec<usize> {
        let mut path = vec![index];
        let mut cursor = self.nodes[index].parent;
        while let Some(parent) = cursor {
            path.push(parent);
            cursor = self.nodes[parent].parent;
        }
        path
    }

    fn descendants(&self, index: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.nodes[index].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next].children.iter().rev().copied());
        }
        out
    }

    fn matching(&self, scope: usize, include_scope: bool, selector: &str) -> Vec<usize> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut candidates = Vec::new();
        if include_scope {
            candidates.push(scope);
        }
        candidates.extend(self.descendants(scope));
        candidates
            .into_iter()
            .filter(|idx| {
                let node = &self.nodes[*idx];
                selector.matches(&node.tag, &node.attributes)
            })
            .collect()
    }

    fn set_classes(&mut self, index: usize, classes: &[&str]) {
        let joined = classes.join(" ");
        self.nodes[index]
            .attributes
            .insert("class".to_string(), joined);
    }
}

/// Arena-backed document with an `<html>` root and a `<body>` child.
#[derive(Clone)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree.borrow();
        f.debug_struct("MemoryDocument")
            .field("nodes", &tree.nodes.len())
            .field("click_handlers", &tree.click.len())
            .field("document_click_handlers", &tree.document_click.len())
            .field("change_handlers", &tree.change.len())
            .finish()
    }
}

impl MemoryDocument {
    /// Empty page: `<html><body></body></html>`.
    #[must_use]
    pub fn new() -> Self {
        let mut tree = Tree::default();
        tree.nodes.push(Node::new("html"));
        let mut body = Node::new("body");
        body.parent = Some(ROOT);
        tree.nodes.push(body);
        tree.nodes[ROOT].children.push(BODY);
        Self {
            tree: Rc::new(RefCell::new(tree)),
        }
    }

    /// The `<body>` element.
    #[must_use]
    pub fn body(&self) -> MemoryElement {
        self.handle(BODY)
    }

    /// Create a detached element.
    #[must_use]
    pub fn create_element(&self, tag: &str) -> MemoryElement {
        let mut tree = self.tree.borrow_mut();
        tree.nodes.push(Node::new(tag));
        let index = tree.nodes.len() - 1;
        drop(tree);
        self.handle(index)
    }

    /// Simulate a user click on `target`. Returns whether the click reached
    /// the document-level handlers. Elements from another document are ignored.
    pub fn click(&self, target: &MemoryElement) -> bool {
        if !self.owns(target) {
            return false;
        }
        let path = self.tree.borrow().ancestors_inclusive(target.index);
        for node in path {
            let handlers: Vec<SharedClick> = self
                .tree
                .borrow()
                .click
                .iter()
                .filter(|(idx, _)| *idx == node)
                .map(|(_, handler)| Rc::clone(handler))
                .collect();
            let mut stopped = false;
            for handler in handlers {
                if handler(Some(target)) == Propagation::Stop {
                    stopped = true;
                }
            }
            if stopped {
                return false;
            }
        }
        let handlers: Vec<SharedDocumentClick> =
            self.tree.borrow().document_click.iter().map(Rc::clone).collect();
        for handler in handlers {
            handler(Some(target));
        }
        true
    }

    /// Simulate a user editing `input` to `value` and committing the change.
    pub fn change_value(&self, input: &MemoryElement, value: &str) {
        if !self.owns(input) {
            return;
        }
        input.set_value(value);
        let handlers: Vec<SharedChange> = self
            .tree
            .borrow()
            .change
            .iter()
            .filter(|(idx, _)| *idx == input.index)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler();
        }
    }

    /// Total registered listeners (element click, document click, change).
    #[must_use]
    pub fn listener_count(&self) -> usize {
        let tree = self.tree.borrow();
        tree.click.len() + tree.document_click.len() + tree.change.len()
    }

    fn owns(&self, element: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.tree, &element.tree)
    }

    fn handle(&self, index: usize) -> MemoryElement {
        MemoryElement {
            tree: Rc::clone(&self.tree),
            index,
        }
    }
}

impl DomDocument for MemoryDocument {
    type Element = MemoryElement;

    fn root(&self) -> Option<MemoryElement> {
        Some(self.handle(ROOT))
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let index = {
            let tree = self.tree.borrow();
            std::iter::once(ROOT)
                .chain(tree.descendants(ROOT))
                .find(|idx| tree.nodes[*idx].attributes.get("id").is_some_and(|v| v == id))
        };
        index.map(|idx| self.handle(idx))
    }

    fn query_selector(&self, selector: &str) -> Option<MemoryElement> {
        self.query_selector_all(selector).into_iter().next()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<MemoryElement> {
        let matches = self.tree.borrow().matching(ROOT, true, selector);
        matches.into_iter().map(|idx| self.handle(idx)).collect()
    }

    fn on_click(&self, element: &MemoryElement, handler: ClickHandler<MemoryElement>) {
        if !self.owns(element) {
            return;
        }
        self.tree
            .borrow_mut()
            .click
            .push((element.index, Rc::from(handler)));
    }

    fn on_document_click(&self, handler: DocumentClickHandler<MemoryElement>) {
        self.tree
            .borrow_mut()
            .document_click
            .push(Rc::from(handler));
    }

    fn on_change(&self, element: &MemoryElement, handler: ChangeHandler) {
        if !self.owns(element) {
            return;
        }
        self.tree
            .borrow_mut()
            .change
            .push((element.index, Rc::from(handler)));
    }
}

/// Handle to a node inside a [`MemoryDocument`].
#[derive(Clone)]
pub struct MemoryElement {
    tree: Rc<RefCell<Tree>>,
    index: usize,
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree.borrow();
        let node = &tree.nodes[self.index];
        f.debug_struct("MemoryElement")
            .field("index", &self.index)
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .finish()
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.index == other.index
    }
}

impl Eq for MemoryElement {}

impl MemoryElement {
    /// Lower-case tag name.
    #[must_use]
    pub fn tag_name(&self) -> String {
        self.tree.borrow().nodes[self.index].tag.clone()
    }

    /// Append `child`, detaching it from any previous parent. Returns `self`.
    /// A child from another document is left untouched.
    pub fn append(&self, child: &Self) -> &Self {
        if !Rc::ptr_eq(&self.tree, &child.tree) {
            return self;
        }
        let mut tree = self.tree.borrow_mut();
        if let Some(previous) = tree.nodes[child.index].parent.take() {
            tree.nodes[previous].children.retain(|idx| *idx != child.index);
        }
        tree.nodes[child.index].parent = Some(self.index);
        tree.nodes[self.index].children.push(child.index);
        drop(tree);
        self
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Replace the current form value without firing change handlers.
    pub fn set_value(&self, value: &str) {
        self.tree.borrow_mut().nodes[self.index].value = value.to_string();
    }
}

impl DomElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.tree.borrow().nodes[self.index]
            .attributes
            .get(name)
            .cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.tree.borrow_mut().nodes[self.index]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn has_class(&self, class: &str) -> bool {
        self.tree.borrow().nodes[self.index]
            .classes()
            .contains(&class)
    }

    fn add_class(&self, class: &str) {
        let mut tree = self.tree.borrow_mut();
        let mut classes: Vec<String> = tree.nodes[self.index]
            .classes()
            .into_iter()
            .map(str::to_string)
            .collect();
        if classes.iter().any(|existing| existing == class) {
            return;
        }
        classes.push(class.to_string());
        let refs: Vec<&str> = classes.iter().map(String::as_str).collect();
        tree.set_classes(self.index, &refs);
    }

    fn remove_class(&self, class: &str) {
        let mut tree = self.tree.borrow_mut();
        if !tree.nodes[self.index].attributes.contains_key("class") {
            return;
        }
        let classes: Vec<String> = tree.nodes[self.index]
            .classes()
            .into_iter()
            .filter(|existing| *existing != class)
            .map(str::to_string)
            .collect();
        let refs: Vec<&str> = classes.iter().map(String::as_str).collect();
        tree.set_classes(self.index, &refs);
    }

    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn contains(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree)
            && self
                .tree
                .borrow()
                .ancestors_inclusive(other.index)
                .contains(&self.index)
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        let first = self
            .tree
            .borrow()
            .matching(self.index, false, selector)
            .into_iter()
            .next();
        first.map(|index| Self {
            tree: Rc::clone(&self.tree),
            index,
        })
    }

    fn value(&self) -> String {
        self.tree.borrow().nodes[self.index].value.clone()
    }
}
