//! Minimal XML element tree with a deterministic pretty printer.
//!
//! Only what job config documents need: elements, attributes and text
//! leaves. All values are escaped on output, so callers can pass untrusted
//! strings straight in.

use std::fmt::Write as _;

const INDENT: &str = "  ";
const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Adds an attribute. Attributes are written in insertion order.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First direct child with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Follows a `/`-separated path of child names, e.g. `"scm/branches"`.
    pub fn find_path(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .try_fold(self, |el, segment| el.find(segment))
    }

    /// Serializes the tree as a complete document: declaration, then the
    /// element indented by two spaces per level, newline terminated.
    pub fn to_document(&self) -> String {
        let mut out = String::new();
        out.push_str(DECLARATION);
        out.push('\n');
        self.write_to(&mut out, 0);
        out
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        let pad = INDENT.repeat(depth);
        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", key, escape_attr(value));
        }

        let text = self.text.as_deref().filter(|t| !t.is_empty());
        match (text, self.children.is_empty()) {
            (None, true) => out.push_str("/>\n"),
            (Some(text), true) => {
                let _ = writeln!(out, ">{}</{}>", escape_text(text), self.name);
            }
            (text, false) => {
                out.push_str(">\n");
                if let Some(text) = text {
                    let _ = writeln!(out, "{pad}{INDENT}{}", escape_text(text));
                }
                for child in &self.children {
                    child.write_to(out, depth + 1);
                }
                let _ = writeln!(out, "{pad}</{}>", self.name);
            }
        }
    }
}

/// Escapes character data. Characters XML 1.0 cannot carry are dropped.
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().filter(|c| is_xml_char(*c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            // Parsers fold a raw CR into LF.
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a double-quoted attribute value.
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().filter(|c| is_xml_char(*c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}
