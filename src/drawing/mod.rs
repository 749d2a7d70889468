//! SVG drawing tree
//!
//! Builds a small element tree from an SVG document using the `svg` crate's
//! event parser. Only the structure needed to find path elements is kept;
//! every other element is an [`ElementKind::Unknown`] that still owns its
//! children.

pub mod commands;

use std::path::Path;

use log::debug;
use svg::node::element::tag;
use svg::node::Attributes;
use svg::parser::Event;
use thiserror::Error;

use crate::normalizer::DrawCommand;

pub use commands::{decode_path_data, decode_segment};

/// Errors that can occur while reading a drawing
#[derive(Debug, Error)]
pub enum DrawingError {
    /// The document could not be read
    #[error("failed to read drawing: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed
    #[error("malformed SVG: {0}")]
    Syntax(String),

    /// A path `d` attribute could not be decoded
    #[error("invalid path data{}: {reason}", id.as_ref().map(|id| format!(" in '{}'", id)).unwrap_or_default())]
    InvalidPathData { id: Option<String>, reason: String },
}

impl DrawingError {
    /// Create an invalid path data error
    pub fn invalid_data(id: Option<&str>, reason: impl Into<String>) -> Self {
        Self::InvalidPathData {
            id: id.map(str::to_string),
            reason: reason.into(),
        }
    }
}

/// A path element and its decoded commands
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathElement {
    pub id: Option<String>,
    pub commands: Vec<DrawCommand>,
}

/// Kinds of drawing elements the converter distinguishes
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// The `<svg>` root (or a nested viewport)
    Svg,
    /// A `<g>` group
    Group { id: Option<String> },
    /// A `<path>` element
    Path(PathElement),
    /// Any other element; only its children matter
    Unknown(String),
}

/// A node in the drawing tree
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Build an element from a start or empty tag
    fn from_tag(name: &str, attributes: &Attributes) -> Result<Self, DrawingError> {
        let id = attributes.get("id").map(|v| v.to_string());
        let kind = match name {
            tag::SVG => ElementKind::Svg,
            tag::Group => ElementKind::Group { id },
            tag::Path => {
                let commands = match attributes.get("d") {
                    Some(d) => decode_path_data(d, id.as_deref())?,
                    None => Vec::new(),
                };
                ElementKind::Path(PathElement { id, commands })
            }
            other => ElementKind::Unknown(other.to_string()),
        };
        Ok(Self::new(kind))
    }

    /// Collect path elements in document order (element before children)
    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a PathElement>) {
        match &self.kind {
            ElementKind::Path(path) => out.push(path),
            ElementKind::Svg | ElementKind::Group { .. } | ElementKind::Unknown(_) => {}
        }
        for child in &self.children {
            child.collect_paths(out);
        }
    }
}

/// A parsed SVG document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Drawing {
    /// Top-level elements, normally a single `<svg>`
    pub elements: Vec<Element>,
}

impl Drawing {
    /// Load a drawing from a file
    pub fn open(path: &Path) -> Result<Self, DrawingError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a drawing from SVG source text
    pub fn parse(source: &str) -> Result<Self, DrawingError> {
        let mut roots: Vec<Element> = Vec::new();
        let mut open: Vec<Element> = Vec::new();

        for event in svg::read(source)? {
            match event {
                Event::Tag(name, tag::Type::Start, attributes) => {
                    open.push(Element::from_tag(name, &attributes)?);
                }
                Event::Tag(name, tag::Type::Empty, attributes) => {
                    let element = Element::from_tag(name, &attributes)?;
                    attach(&mut open, &mut roots, element);
                }
                Event::Tag(_, tag::Type::End, _) => {
                    // Stray end tags close whatever is open
                    if let Some(element) = open.pop() {
                        attach(&mut open, &mut roots, element);
                    }
                }
                Event::Error(e) => return Err(DrawingError::Syntax(e.to_string())),
                _ => {}
            }
        }

        // Unclosed elements are kept
        while let Some(element) = open.pop() {
            attach(&mut open, &mut roots, element);
        }

        let drawing = Drawing { elements: roots };
        debug!("parsed drawing with {} path element(s)", drawing.paths().len());
        Ok(drawing)
    }

    /// All path elements in document order
    pub fn paths(&self) -> Vec<&PathElement> {
        let mut out = Vec::new();
        for element in &self.elements {
            element.collect_paths(&mut out);
        }
        out
    }
}

fn attach(open: &mut [Element], roots: &mut Vec<Element>, element: Element) {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None => roots.push(element),
    }
}
