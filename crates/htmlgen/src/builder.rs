//! Generic element construction facade

use tracing::debug;

use crate::attr::Attribute;
use crate::element::{Content, Element};
use crate::error::{Error, ErrorKind, Result};

/// One argument to [`create_element`]
///
/// Arguments are classified in call order: the first text argument fills the
/// element's name slot, every later text argument becomes a text-run child.
/// Attributes and elements always append to their respective lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arg {
    Text(String),
    Attr(Attribute),
    Child(Element),
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Attribute> for Arg {
    fn from(attribute: Attribute) -> Self {
        Self::Attr(attribute)
    }
}

impl From<Element> for Arg {
    fn from(element: Element) -> Self {
        Self::Child(element)
    }
}

/// Build one element from an ordered sequence of heterogeneous arguments
///
/// The name slot stays empty until a non-empty text argument fills it, so a
/// call that passes only attributes, or passes no arguments at all, fails
/// with [`ErrorKind::MissingName`].
pub fn create_element<I>(args: I) -> Result<Element>
where
    I: IntoIterator<Item = Arg>,
{
    let mut name = String::new();
    let mut attributes = Vec::new();
    let mut children = Vec::new();

    for arg in args {
        match arg {
            Arg::Text(text) => {
                if name.is_empty() {
                    name = text;
                } else {
                    children.push(Content::Text(text));
                }
            }
            Arg::Attr(attribute) => attributes.push(attribute),
            Arg::Child(element) => children.push(Content::Element(element)),
        }
    }

    if name.is_empty() {
        return Err(Error::new(ErrorKind::MissingName));
    }

    debug!(name = %name, "built element");
    Ok(Element {
        name,
        attributes,
        children,
    })
}
