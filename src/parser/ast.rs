//! Parsed vertex records

use crate::error::ParseError;
use crate::normalizer::{Point, Subpath, Vertex, VertexKind};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// One `<type> <x> <y>` line
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Raw type code; validated when converted to a vertex
    pub kind: i64,
    pub x: f64,
    pub y: f64,
    pub span: Span,
}

impl Record {
    /// Convert to a typed vertex, rejecting unknown type codes
    pub fn to_vertex(&self) -> Result<Vertex, ParseError> {
        let kind = VertexKind::try_from(self.kind)
            .map_err(|code| ParseError::unknown_vertex_type(code, self.span.clone()))?;
        Ok(Vertex::new(kind, Point::new(self.x, self.y)))
    }
}

/// Build one subpath from records, reporting every bad type code
pub fn records_to_subpath(records: &[Record]) -> Result<Subpath, Vec<ParseError>> {
    let mut subpath = Subpath::new();
    let mut errors = Vec::new();

    for record in records {
        match record.to_vertex() {
            Ok(vertex) => subpath.push(vertex),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(subpath)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: i64, x: f64, y: f64) -> Record {
        Record {
            kind,
            x,
            y,
            span: 0..1,
        }
    }

    #[test]
    fn test_record_to_vertex() {
        let vertex = record(2, 1.5, 2.5).to_vertex().unwrap();
        assert_eq!(vertex, Vertex::quad_control(Point::new(1.5, 2.5)));
    }

    #[test]
    fn test_unknown_type_collects_all_errors() {
        let errors =
            records_to_subpath(&[record(0, 0.0, 0.0), record(1, 0.0, 0.0), record(9, 0.0, 0.0)])
                .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[1].to_string().contains('9'));
    }
}
