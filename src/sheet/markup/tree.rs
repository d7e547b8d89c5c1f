//! Minimal element tree built from HTML or XML text.
//!
//! XML is parsed strictly (end tags must match). HTML is parsed leniently:
//! tag names are lower-cased, void elements never open a scope, a new `tr`
//! or `td` closes the previous one, and stray end tags are dropped.

use crate::common::xml::unescape_xml;
use crate::common::{Error, Result};
use log::warn;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Declared content kind of a markup document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Xml,
}

/// HTML elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// A node of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with its attributes and children in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Qualified name as written (lower-cased for HTML).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name.rsplit_once(':').map_or(&self.name, |(_, local)| local)
    }

    /// Namespace prefix, if the name has one.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// All descendants (not `self`) accepted by `predicate`, in document order.
    pub fn descendants<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.collect_descendants(&predicate, &mut found);
        found
    }

    fn collect_descendants<'a, F>(&'a self, predicate: &F, found: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        for element in self.elements() {
            if predicate(element) {
                found.push(element);
            }
            element.collect_descendants(predicate, found);
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }
}

/// Parsed markup document.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupTree {
    kind: ContentKind,
    document: Element,
}

impl MarkupTree {
    /// Parse `text` as the given content kind.
    ///
    /// Malformed markup fails with `InvalidDocumentFormat`.
    pub fn parse(text: &str, kind: ContentKind) -> Result<Self> {
        let mut reader = Reader::from_str(text);
        let config = reader.config_mut();
        config.check_end_names = kind == ContentKind::Xml;
        // A bare `&` is plain text in HTML
        config.allow_dangling_amp = kind == ContentKind::Html;

        // The bottom of the stack is the nameless document node
        let mut stack: Vec<Element> = vec![Element::default()];

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let element = start_element(e, kind)?;
                    if kind == ContentKind::Html {
                        close_implied(&mut stack, element.name());
                        if VOID_ELEMENTS.contains(&element.name()) {
                            append(&mut stack, Node::Element(element));
                            continue;
                        }
                    }
                    stack.push(element);
                },
                Ok(Event::Empty(ref e)) => {
                    let element = start_element(e, kind)?;
                    if kind == ContentKind::Html {
                        close_implied(&mut stack, element.name());
                    }
                    append(&mut stack, Node::Element(element));
                },
                Ok(Event::End(ref e)) => {
                    let name = decode_name(e.name().as_ref(), kind)?;
                    close_element(&mut stack, &name, kind)?;
                },
                Ok(Event::Text(ref t)) => {
                    let text = t
                        .decode()
                        .map_err(quick_xml::Error::from)?;
                    top(&mut stack).push_text(&text);
                },
                Ok(Event::CData(ref c)) => {
                    let text = c
                        .decode()
                        .map_err(quick_xml::Error::from)?;
                    top(&mut stack).push_text(&text);
                },
                Ok(Event::GeneralRef(ref r)) => {
                    let name = r
                        .decode()
                        .map_err(quick_xml::Error::from)?;
                    let text = resolve_entity(&name, kind);
                    top(&mut stack).push_text(&text);
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::from(e).at_position(reader.error_position())),
                _ => {}, // Skip declarations, comments, doctype and processing instructions
            }
        }

        if stack.len() > 1 {
            if kind == ContentKind::Xml {
                return Err(Error::InvalidDocumentFormat(format!(
                    "unclosed element <{}>",
                    top(&mut stack).name()
                )));
            }
            while stack.len() > 1 {
                pop_into_parent(&mut stack);
            }
        }

        let document = stack.pop().unwrap_or_default();
        Ok(MarkupTree { kind, document })
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// The nameless node holding the top-level content.
    pub fn document(&self) -> &Element {
        &self.document
    }

    /// First top-level element.
    pub fn root_element(&self) -> Option<&Element> {
        self.document.elements().next()
    }
}

fn top(stack: &mut [Element]) -> &mut Element {
    // The document node is never popped while parsing
    let last = stack.len() - 1;
    &mut stack[last]
}

fn append(stack: &mut [Element], node: Node) {
    top(stack).children.push(node);
}

fn pop_into_parent(stack: &mut Vec<Element>) {
    if stack.len() > 1
        && let Some(element) = stack.pop()
    {
        append(stack, Node::Element(element));
    }
}

fn decode_name(raw: &[u8], kind: ContentKind) -> Result<String> {
    let name = std::str::from_utf8(raw)
        .map_err(|e| Error::InvalidDocumentFormat(format!("invalid tag name: {}", e)))?;
    Ok(match kind {
        ContentKind::Html => name.to_ascii_lowercase(),
        ContentKind::Xml => name.to_string(),
    })
}

fn start_element(e: &BytesStart<'_>, kind: ContentKind) -> Result<Element> {
    let mut element = Element::new(decode_name(e.name().as_ref(), kind)?);

    match kind {
        ContentKind::Xml => {
            for attr in e.attributes() {
                let attr = attr.map_err(quick_xml::Error::from)?;
                let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                let value = String::from_utf8_lossy(&attr.value);
                element.attributes.push((key, unescape_xml(&value).into_owned()));
            }
        },
        ContentKind::Html => {
            // HTML allows valueless and unquoted attributes; keep what parses
            for attr in e.html_attributes().with_checks(false).flatten() {
                let key = String::from_utf8_lossy(attr.key.as_ref()).to_ascii_lowercase();
                let value = String::from_utf8_lossy(&attr.value);
                element.attributes.push((key, unescape_xml(&value).into_owned()));
            }
        },
    }

    Ok(element)
}

/// HTML optional end tags: a new row closes the open cell and row, a new
/// cell closes the open cell.
fn close_implied(stack: &mut Vec<Element>, opening: &str) {
    let closes: &[&str] = match opening {
        "tr" => &["td", "th", "tr"],
        "td" | "th" => &["td", "th"],
        _ => return,
    };
    while stack.len() > 1 && closes.contains(&top(stack).name()) {
        pop_into_parent(stack);
    }
}

fn close_element(stack: &mut Vec<Element>, name: &str, kind: ContentKind) -> Result<()> {
    match kind {
        ContentKind::Xml => {
            if stack.len() < 2 {
                return Err(Error::InvalidDocumentFormat(format!(
                    "unexpected end tag </{}>",
                    name
                )));
            }
            pop_into_parent(stack);
        },
        ContentKind::Html => match stack.iter().skip(1).rposition(|e| e.name() == name) {
            Some(position) => {
                // `position` is relative to the skipped document node
                while stack.len() > position + 1 {
                    pop_into_parent(stack);
                }
            },
            None => warn!("ignoring end tag </{}> without an open element", name),
        },
    }
    Ok(())
}

fn resolve_entity(name: &str, kind: ContentKind) -> String {
    if let Some(c) = crate::common::xml::resolve_reference(name) {
        return c.to_string();
    }
    match (kind, name) {
        (ContentKind::Html, "nbsp") => '\u{a0}'.to_string(),
        _ => {
            warn!("keeping unknown entity &{};", name);
            format!("&{};", name)
        },
    }
}
