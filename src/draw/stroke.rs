//! Freehand stroke definitions.

use super::color::Rgba;

/// What a stroke does when rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeKind {
    /// Pen stroke painted with the color captured when it started
    Pen { color: Rgba },
    /// Eraser stroke; paints the canvas background, whatever it is at render time
    Eraser,
}

/// A freehand polyline traced by the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Pen or eraser
    pub kind: StrokeKind,
    /// Line thickness in pixels
    pub width: f32,
    /// Sequence of (x, y) canvas coordinates
    pub points: Vec<(f32, f32)>,
}

impl Stroke {
    /// Starts a stroke at a single point.
    pub fn new(kind: StrokeKind, width: f32, start: (f32, f32)) -> Self {
        Self {
            kind,
            width,
            points: vec![start],
        }
    }

    /// Appends a point, skipping exact repeats of the last one.
    pub fn push(&mut self, point: (f32, f32)) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    /// A stroke that never moved; rendered as a dot.
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    pub fn is_eraser(&self) -> bool {
        matches!(self.kind, StrokeKind::Eraser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_skips_repeated_points() {
        let mut stroke = Stroke::new(StrokeKind::Eraser, 10.0, (1.0, 1.0));
        stroke.push((1.0, 1.0));
        assert!(stroke.is_dot());

        stroke.push((2.0, 3.0));
        stroke.push((2.0, 3.0));
        assert_eq!(stroke.points, vec![(1.0, 1.0), (2.0, 3.0)]);
        assert!(!stroke.is_dot());
    }
}
