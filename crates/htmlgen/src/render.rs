//! Recursive tree-to-text renderer

use tracing::debug;

use crate::attr::Attribute;
use crate::element::{Content, Element};
use crate::error::{Error, ErrorKind, Result};

/// Rendering configuration
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Spaces per indentation level; ignored when `indent_with_tab` is set
    pub indent_width: usize,
    /// Indentation level of the top-level element
    pub initial_level: usize,
    /// Escape `&`, `<` and `>` in text runs; element and attribute names are
    /// never escaped. Off by default so template markers and pre-encoded
    /// fragments pass through untouched.
    pub escape_text: bool,
    /// Emit the final newline of the rendered output
    pub trailing_newline: bool,
    /// Indent with one tab character per level instead of spaces
    pub indent_with_tab: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent_width: 4,
            initial_level: 0,
            escape_text: false,
            trailing_newline: true,
            indent_with_tab: false,
        }
    }
}

/// Indentation tracker carried through the recursive descent
#[derive(Clone, Copy, Debug)]
struct Indent {
    width: usize,
    level: usize,
    use_tab: bool,
}

impl Indent {
    fn new(options: &Options) -> Self {
        Self {
            width: options.indent_width,
            level: options.initial_level,
            use_tab: options.indent_with_tab,
        }
    }

    fn next_level(self) -> Self {
        Self {
            level: self.level + 1,
            ..self
        }
    }

    fn write_to(self, output: &mut String) {
        if self.use_tab {
            for _ in 0..self.level {
                output.push('\t');
            }
        } else {
            for _ in 0..self.level * self.width {
                output.push(' ');
            }
        }
    }
}

/// Render a single element to a string
pub fn render(element: &Element, options: &Options) -> Result<String> {
    let mut output = String::new();
    render_into(element, &mut output, options)?;
    Ok(output)
}

/// Render a list of top-level elements to a string
///
/// Elements are rendered independently with the same options and joined with
/// a newline; `trailing_newline` applies only after the last one.
pub fn render_all(elements: &[Element], options: &Options) -> Result<String> {
    let mut output = String::new();
    render_all_into(elements, &mut output, options)?;
    Ok(output)
}

/// Render a single element into an existing buffer
///
/// The buffer is cleared first and then only appended to.
pub fn render_into(element: &Element, output: &mut String, options: &Options) -> Result<()> {
    render_all_into(std::slice::from_ref(element), output, options)
}

/// Render a list of top-level elements into an existing buffer
///
/// The buffer is cleared first and then only appended to.
pub fn render_all_into(elements: &[Element], output: &mut String, options: &Options) -> Result<()> {
    output.clear();
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        write_element(element, Indent::new(options), output, options)?;
    }
    if options.trailing_newline && !elements.is_empty() {
        output.push('\n');
    }
    debug!(elements = elements.len(), bytes = output.len(), "rendered");
    Ok(())
}

fn write_element(
    element: &Element,
    indent: Indent,
    output: &mut String,
    options: &Options,
) -> Result<()> {
    if element.is_self_closing() {
        if !element.children.is_empty() {
            return Err(Error::new(ErrorKind::VoidWithChildren {
                name: element.name.clone(),
            }));
        }
        indent.write_to(output);
        write_open_tag(element, output);
        output.push_str(" />");
        return Ok(());
    }

    if element.is_trivial() {
        indent.write_to(output);
        write_open_tag(element, output);
        output.push('>');
        write_text(element.trivial_text(), output, options);
        output.push_str("</");
        output.push_str(&element.name);
        output.push('>');
        return Ok(());
    }

    indent.write_to(output);
    write_open_tag(element, output);
    output.push_str(">\n");
    for (index, child) in element.children.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        match child {
            Content::Element(child) => write_element(child, indent.next_level(), output, options)?,
            Content::Text(text) => {
                indent.next_level().write_to(output);
                write_text(text, output, options);
            }
        }
    }
    output.push('\n');
    indent.write_to(output);
    output.push_str("</");
    output.push_str(&element.name);
    output.push('>');
    Ok(())
}

fn write_open_tag(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&element.name);
    for attribute in &element.attributes {
        write_attribute(attribute, output);
    }
}

fn write_attribute(attribute: &Attribute, output: &mut String) {
    match attribute {
        // A false boolean attribute has no textual form; absence is the value.
        Attribute::Bool { value: false, .. } => {}
        Attribute::Bool { name, .. } => {
            output.push(' ');
            output.push_str(name);
        }
        Attribute::String { name, value } => {
            output.push(' ');
            output.push_str(name);
            output.push_str("=\"");
            output.push_str(value);
            output.push('"');
        }
    }
}

fn write_text(text: &str, output: &mut String, options: &Options) {
    if options.escape_text {
        output.push_str(&escape(text));
    } else {
        output.push_str(text);
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
