//! Path normalization
//!
//! Turns an ordered sequence of drawing commands into typed vertices,
//! grouped into subpaths according to a [`SegmentationMode`].

pub mod error;
pub mod types;

pub use error::NormalizeError;
pub use types::{
    CommandKind, Document, DrawCommand, Point, SegmentationMode, Subpath, Vertex, VertexKind,
};

use log::{debug, trace};

/// Converts drawing commands into a [`Document`] of typed vertices
#[derive(Debug, Clone, Copy, Default)]
pub struct PathNormalizer {
    mode: SegmentationMode,
}

impl PathNormalizer {
    pub fn new(mode: SegmentationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> SegmentationMode {
        self.mode
    }

    /// Normalize one command sequence in a single pass
    ///
    /// - `Move` emits an anchor.
    /// - `CubicCurve` emits control, control, anchor in source order.
    /// - `QuadCurve` emits control, anchor.
    /// - `ClosePath` seals the current subpath in [`SegmentationMode::PerClose`]
    ///   and is ignored in [`SegmentationMode::WholeElement`].
    ///
    /// A relative command aborts the whole sequence with
    /// [`NormalizeError::UnsupportedCommand`]; nothing is returned for it.
    pub fn normalize(&self, commands: &[DrawCommand]) -> Result<Document, NormalizeError> {
        let mut document = Document::new();
        let mut current = Subpath::new();

        for command in commands {
            trace!("normalize {:?}", command);
            match *command {
                DrawCommand::Move(to) => current.push(Vertex::anchor(to)),
                DrawCommand::CubicCurve(c1, c2, to) => {
                    current.push(Vertex::cubic_control(c1));
                    current.push(Vertex::cubic_control(c2));
                    current.push(Vertex::anchor(to));
                }
                DrawCommand::QuadCurve(c, to) => {
                    current.push(Vertex::quad_control(c));
                    current.push(Vertex::anchor(to));
                }
                DrawCommand::ClosePath => match self.mode {
                    SegmentationMode::PerClose => {
                        // Empty contours are never sealed
                        if !current.is_empty() {
                            document.push(std::mem::take(&mut current));
                        }
                    }
                    SegmentationMode::WholeElement => {}
                },
                DrawCommand::Relative(kind) => {
                    return Err(NormalizeError::unsupported(kind));
                }
            }
        }

        match self.mode {
            SegmentationMode::WholeElement => document.push(current),
            SegmentationMode::PerClose => {
                if !current.is_empty() {
                    debug!(
                        "dropping {} trailing vertices with no closing command",
                        current.len()
                    );
                }
            }
        }

        Ok(document)
    }
}

/// Normalize `commands` with the given segmentation mode
pub fn normalize(
    commands: &[DrawCommand],
    mode: SegmentationMode,
) -> Result<Document, NormalizeError> {
    PathNormalizer::new(mode).normalize(commands)
}
