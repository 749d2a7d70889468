//! Decoding of SVG path data into draw commands

use log::warn;
use svgtypes::{PathParser, PathSegment};

use crate::normalizer::{CommandKind, DrawCommand, Point};

use super::DrawingError;

/// Decode a path `d` attribute
///
/// Numbers are read at full `f64` precision. Relative commands become
/// [`DrawCommand::Relative`]; absolute commands other than `M`, `C` and `Q`
/// are skipped, as are the implicit line-to pairs that follow a move.
pub fn decode_path_data(d: &str, id: Option<&str>) -> Result<Vec<DrawCommand>, DrawingError> {
    let mut commands = Vec::new();

    for segment in PathParser::from(d) {
        let segment = segment.map_err(|e| DrawingError::invalid_data(id, e.to_string()))?;
        if let Some(command) = decode_segment(segment, id) {
            commands.push(command);
        }
    }

    Ok(commands)
}

/// Map one parsed segment onto a [`DrawCommand`], if it has one
pub fn decode_segment(segment: PathSegment, id: Option<&str>) -> Option<DrawCommand> {
    let (abs, kind) = match segment {
        PathSegment::ClosePath { .. } => return Some(DrawCommand::ClosePath),
        PathSegment::MoveTo { abs, .. } => (abs, CommandKind::Move),
        PathSegment::LineTo { abs, .. } => (abs, CommandKind::Line),
        PathSegment::HorizontalLineTo { abs, .. } => (abs, CommandKind::HorizontalLine),
        PathSegment::VerticalLineTo { abs, .. } => (abs, CommandKind::VerticalLine),
        PathSegment::CurveTo { abs, .. } => (abs, CommandKind::CubicCurve),
        PathSegment::SmoothCurveTo { abs, .. } => (abs, CommandKind::SmoothCubicCurve),
        PathSegment::Quadratic { abs, .. } => (abs, CommandKind::QuadCurve),
        PathSegment::SmoothQuadratic { abs, .. } => (abs, CommandKind::SmoothQuadCurve),
        PathSegment::EllipticalArc { abs, .. } => (abs, CommandKind::Arc),
    };

    if !abs {
        return Some(DrawCommand::Relative(kind));
    }

    match segment {
        PathSegment::MoveTo { x, y, .. } => Some(DrawCommand::Move(Point::new(x, y))),
        PathSegment::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            ..
        } => Some(DrawCommand::CubicCurve(
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(x, y),
        )),
        PathSegment::Quadratic { x1, y1, x, y, .. } => {
            Some(DrawCommand::QuadCurve(Point::new(x1, y1), Point::new(x, y)))
        }
        _ => {
            warn!(
                "{}: skipping unsupported command '{}'",
                describe(id),
                kind.absolute_letter()
            );
            None
        }
    }
}

fn describe(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("path '{}'", id),
        None => "path".to_string(),
    }
}
