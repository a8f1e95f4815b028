//! htmlgen - HTML element tree construction and rendering
//!
//! This crate provides functionality to:
//! - Build an element tree through a generic, order-sensitive builder
//! - Validate global attributes against the HTML rule tables
//! - Render the tree to text with configurable indentation and escaping
//!
//! # Quick Start
//!
//! ```
//! use htmlgen::{attr, create_element, render, Options};
//! # fn main() -> Result<(), htmlgen::Error> {
//! let tree = create_element([
//!     "article".into(),
//!     attr("class=post")?.into(),
//!     create_element(["h1".into(), "Hello".into()])?.into(),
//! ])?;
//! let html = render(&tree, &Options::default())?;
//! assert_eq!(html, "<article class=\"post\">\n    <h1>Hello</h1>\n</article>\n");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod attr;
pub use attr::{attr, Attribute};

pub mod element;
pub use element::{Content, Element, VOID_ELEMENTS};

pub mod builder;
pub use builder::{create_element, Arg};

pub mod render;
pub use render::{render, render_all, render_all_into, render_into, Options};
