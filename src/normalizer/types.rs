//! Core types for path normalization

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// A 2D point in source drawing space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Kind of an SVG path command, independent of its coordinate mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Move,
    Line,
    HorizontalLine,
    VerticalLine,
    CubicCurve,
    SmoothCubicCurve,
    QuadCurve,
    SmoothQuadCurve,
    Arc,
}

impl CommandKind {
    /// SVG letter of the absolute form (`M`, `C`, ...)
    pub fn absolute_letter(self) -> char {
        match self {
            CommandKind::Move => 'M',
            CommandKind::Line => 'L',
            CommandKind::HorizontalLine => 'H',
            CommandKind::VerticalLine => 'V',
            CommandKind::CubicCurve => 'C',
            CommandKind::SmoothCubicCurve => 'S',
            CommandKind::QuadCurve => 'Q',
            CommandKind::SmoothQuadCurve => 'T',
            CommandKind::Arc => 'A',
        }
    }

    /// SVG letter of the relative form (`m`, `c`, ...)
    pub fn relative_letter(self) -> char {
        self.absolute_letter().to_ascii_lowercase()
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relative_letter())
    }
}

/// A single drawing command in absolute coordinates
///
/// Relative commands are kept as `Relative` so the normalizer can reject
/// them by name instead of silently dropping them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Start a contour at a point
    Move(Point),
    /// Cubic Bezier: first control, second control, end point
    CubicCurve(Point, Point, Point),
    /// Quadratic Bezier: control, end point
    QuadCurve(Point, Point),
    /// Close the current contour
    ClosePath,
    /// A relative-coordinate command, which is never supported
    Relative(CommandKind),
}

/// Vertex type tag; the discriminant is the wire code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VertexKind {
    /// On-curve point
    Anchor = 1,
    /// Off-curve point of a quadratic segment
    QuadControl = 2,
    /// Off-curve point of a cubic segment
    CubicControl = 3,
}

impl VertexKind {
    /// Integer code used in the output formats
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for VertexKind {
    type Error = i64;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(VertexKind::Anchor),
            2 => Ok(VertexKind::QuadControl),
            3 => Ok(VertexKind::CubicControl),
            other => Err(other),
        }
    }
}

/// A typed path vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub kind: VertexKind,
    pub pos: Point,
}

impl Vertex {
    pub fn new(kind: VertexKind, pos: Point) -> Self {
        Self { kind, pos }
    }

    pub fn anchor(pos: Point) -> Self {
        Self::new(VertexKind::Anchor, pos)
    }

    pub fn quad_control(pos: Point) -> Self {
        Self::new(VertexKind::QuadControl, pos)
    }

    pub fn cubic_control(pos: Point) -> Self {
        Self::new(VertexKind::CubicControl, pos)
    }
}

/// One continuous contour; vertex order is rendering order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Subpath {
    vertices: Vec<Vertex>,
}

impl Subpath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Vertex type codes in order, mostly useful for assertions
    pub fn kind_codes(&self) -> Vec<u8> {
        self.vertices.iter().map(|v| v.kind.code()).collect()
    }
}

impl From<Vec<Vertex>> for Subpath {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }
}

impl<'a> IntoIterator for &'a Subpath {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// An ordered list of subpaths produced from one source
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    subpaths: Vec<Subpath>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subpath: Subpath) {
        self.subpaths.push(subpath);
    }

    /// Append all subpaths of another document, keeping their order
    pub fn extend(&mut self, other: Document) {
        self.subpaths.extend(other.subpaths);
    }

    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    pub fn len(&self) -> usize {
        self.subpaths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subpath> {
        self.subpaths.iter()
    }
}

impl From<Vec<Subpath>> for Document {
    fn from(subpaths: Vec<Subpath>) -> Self {
        Self { subpaths }
    }
}

impl IntoIterator for Document {
    type Item = Subpath;
    type IntoIter = std::vec::IntoIter<Subpath>;

    fn into_iter(self) -> Self::IntoIter {
        self.subpaths.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Subpath;
    type IntoIter = std::slice::Iter<'a, Subpath>;

    fn into_iter(self) -> Self::IntoIter {
        self.subpaths.iter()
    }
}

/// Policy for splitting a command stream into subpaths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentationMode {
    /// One subpath per path element; close commands are ignored
    #[default]
    WholeElement,
    /// A close command seals the current subpath; unclosed trailing data is dropped
    PerClose,
}

impl fmt::Display for SegmentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentationMode::WholeElement => write!(f, "whole-element"),
            SegmentationMode::PerClose => write!(f, "per-close"),
        }
    }
}

impl FromStr for SegmentationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whole-element" => Ok(SegmentationMode::WholeElement),
            "per-close" => Ok(SegmentationMode::PerClose),
            other => Err(format!(
                "unknown segmentation mode '{}' (expected whole-element or per-close)",
                other
            )),
        }
    }
}
