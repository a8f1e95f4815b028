//! Element tree model

use crate::attr::Attribute;
use crate::error::{Error, ErrorKind, Result};

/// A content node, owned by its parent element's child list
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Content {
    /// A nested element
    Element(Element),
    /// A raw text run, opaque to the tree
    Text(String),
}

/// An element in the markup tree
///
/// Attribute and child order is insertion order and is significant for the
/// rendered output; nothing is reordered or deduplicated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Content>,
}

/// Elements that can never have children and render without a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Element {
    /// Create an element with no attributes or children
    ///
    /// Fails with [`ErrorKind::MissingName`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::new(ErrorKind::MissingName));
        }
        Ok(Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Returns true if the name is in the void-element set
    pub fn is_self_closing(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }

    /// Returns true if the element renders on a single line: no children, or
    /// exactly one child that is a text run
    pub fn is_trivial(&self) -> bool {
        matches!(self.children.as_slice(), [] | [Content::Text(_)])
    }

    /// The text of a trivial element; empty when there are no children
    pub fn trivial_text(&self) -> &str {
        match self.children.first() {
            Some(Content::Text(text)) => text,
            _ => "",
        }
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
