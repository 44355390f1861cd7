//! Read-only outline of an HTML fragment.
//!
//! The shell never renders markup itself; it only needs to know which
//! elements a fragment contains, in document order, with their classes,
//! attributes and nesting. Every element is addressed by its *position*:
//! its index in document order. The desktop bridge addresses elements the
//! same way (`container.querySelectorAll('*')[position]`), so positions
//! computed here line up with the live document.

use std::collections::BTreeMap;

use html5ever::tendril::TendrilSink;
use html5ever::{parse_fragment, LocalName, Namespace, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const HTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// One element of a fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Index in document order
    pub position: usize,
    /// Lowercased tag name
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// All attributes, names lowercased (includes `id` and `class`)
    pub attrs: BTreeMap<String, String>,
    /// Position of the enclosing element, `None` at the top level
    pub parent: Option<usize>,
    pub depth: usize,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Value of a `data-*` attribute.
    pub fn data(&self, name: &str) -> Option<&str> {
        self.attr(&format!("data-{}", name))
    }
}

/// Parsed outline of a fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Build the outline of `html`.
    ///
    /// The fragment goes through the HTML5 tree builder in a `<body>`
    /// context, the way `innerHTML` does in the webview. Implied elements
    /// (`<tbody>` inside a bare table, for one) get positions of their own,
    /// and `<template>` contents are left out just as
    /// `querySelectorAll('*')` leaves them out.
    pub fn parse(html: &str) -> Self {
        let context = QualName::new(None, Namespace::from(HTML_NS), LocalName::from("body"));
        let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new())
            .one(html);

        // The fragment's nodes hang off a synthetic <html> root.
        let root = dom.document.children.borrow().first().cloned();
        let mut elements = Vec::new();
        if let Some(root) = root {
            collect(&root, &mut elements);
        }
        Self { elements }
    }

pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Element> {
        self.elements.get(position)
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id.as_deref() == Some(id))
    }

    pub fn with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements.iter().filter(move |el| el.has_class(class))
    }

    /// First element in document order matching `pred`.
    pub fn find(&self, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.elements.iter().find(|el| pred(el))
    }

    /// The element itself followed by its ancestors, innermost first.
    pub fn lineage(&self, position: usize) -> Vec<&Element> {
        let mut chain = Vec::new();
        let mut next = self.get(position);
        while let Some(el) = next {
            chain.push(el);
            next = el.parent.and_then(|p| self.get(p));
        }
        chain
    }

    /// The next element sharing `position`'s parent.
    pub fn next_sibling(&self, position: usize) -> Option<&Element> {
        let el = self.get(position)?;
        self.elements[position + 1..]
            .iter()
            .take_while(|other| other.depth >= el.depth)
            .find(|other| other.parent == el.parent)
    }
}

/// Pre-order walk below `root`, skipping text and comments.
fn collect(root: &Handle, out: &mut Vec<Element>) {
    let mut stack: Vec<(Handle, Option<usize>, usize)> = root
        .children
        .borrow()
        .iter()
        .rev()
        .map(|child| (child.clone(), None, 0))
        .collect();

    while let Some((node, parent, depth)) = stack.pop() {
        let NodeData::Element {
            ref name,
            ref attrs,
            ..
        } = node.data
        else {
            continue;
        };

        let attrs: BTreeMap<String, String> = attrs
            .borrow()
            .iter()
            .map(|attr| (attr.name.local.to_ascii_lowercase().to_string(), attr.value.to_string()))
            .collect();
        let classes = attrs
            .get("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        let position = out.len();
        out.push(Element {
            position,
            tag: name.local.to_ascii_lowercase().to_string(),
            id: attrs.get("id").cloned(),
            classes,
            attrs,
            parent,
            depth,
        });

        for child in node.children.borrow().iter().rev() {
            stack.push((child.clone(), Some(position), depth + 1));
        }
    }
}
