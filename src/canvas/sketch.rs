//! In-memory sketch surface with stroke history.

use std::mem;

use super::handle::CanvasHandle;
use super::props::CanvasProps;
use crate::draw::{HexColor, Stroke, StrokeKind};

/// History entry that can be undone.
#[derive(Debug)]
enum Done {
    /// The newest committed stroke
    Stroke,
    /// A clear, holding the strokes it removed
    Clear(Vec<Stroke>),
}

/// History entry that can be redone.
#[derive(Debug)]
enum Undone {
    Stroke(Stroke),
    Clear,
}

/// Freehand drawing surface backing the desktop shell.
///
/// Records pointer drags as [`Stroke`]s using the last applied
/// [`CanvasProps`] and keeps its own undo/redo history.
#[derive(Debug)]
pub struct SketchCanvas {
    props: CanvasProps,
    erasing: bool,
    strokes: Vec<Stroke>,
    active: Option<Stroke>,
    undo_stack: Vec<Done>,
    redo_stack: Vec<Undone>,
}

impl SketchCanvas {
    /// Creates an empty surface configured with `props`.
    pub fn new(props: CanvasProps) -> Self {
        Self {
            props,
            erasing: false,
            strokes: Vec::new(),
            active: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Starts a stroke at `point`, committing any stroke still in progress.
    pub fn begin_stroke(&mut self, point: (f32, f32)) {
        self.end_stroke();

        let (kind, width) = if self.erasing {
            (StrokeKind::Eraser, self.props.eraser_width)
        } else {
            (
                StrokeKind::Pen {
                    color: self.props.stroke_color,
                },
                self.props.stroke_width,
            )
        };
        self.active = Some(Stroke::new(kind, f32::from(width), point));
    }

    /// Extends the stroke in progress; ignored when no stroke is active.
    pub fn extend_stroke(&mut self, point: (f32, f32)) {
        if let Some(stroke) = self.active.as_mut() {
            stroke.push(point);
        }
    }

    /// Commits the stroke in progress to the history.
    pub fn end_stroke(&mut self) {
        let Some(stroke) = self.active.take() else {
            return;
        };
        log::debug!(
            "committing {} stroke with {} points",
            if stroke.is_eraser() { "eraser" } else { "pen" },
            stroke.points.len()
        );
        self.strokes.push(stroke);
        self.undo_stack.push(Done::Stroke);
        self.redo_stack.clear();
    }

    /// Committed strokes in draw order (first = bottom).
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The stroke currently being traced, if any.
    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    pub fn props(&self) -> &CanvasProps {
        &self.props
    }

    pub fn background(&self) -> &HexColor {
        &self.props.canvas_color
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

impl CanvasHandle for SketchCanvas {
    fn erase_mode(&mut self, enabled: bool) {
        // A half-drawn stroke keeps the tool it started with.
        self.end_stroke();
        self.erasing = enabled;
    }

    fn undo(&mut self) {
        self.end_stroke();
        match self.undo_stack.pop() {
            Some(Done::Stroke) => {
                if let Some(stroke) = self.strokes.pop() {
                    self.redo_stack.push(Undone::Stroke(stroke));
                }
            }
            Some(Done::Clear(removed)) => {
                self.strokes = removed;
                self.redo_stack.push(Undone::Clear);
            }
            None => log::debug!("nothing to undo"),
        }
    }

    fn redo(&mut self) {
        self.end_stroke();
        match self.redo_stack.pop() {
            Some(Undone::Stroke(stroke)) => {
                self.strokes.push(stroke);
                self.undo_stack.push(Done::Stroke);
            }
            Some(Undone::Clear) => {
                let removed = mem::take(&mut self.strokes);
                self.undo_stack.push(Done::Clear(removed));
            }
            None => log::debug!("nothing to redo"),
        }
    }

    fn clear_canvas(&mut self) {
        self.end_stroke();
        if self.strokes.is_empty() {
            return;
        }
        let removed = mem::take(&mut self.strokes);
        self.undo_stack.push(Done::Clear(removed));
        self.redo_stack.clear();
    }

    fn apply_props(&mut self, props: &CanvasProps) {
        if self.props != *props {
            self.props = props.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::to_rgba;

    fn props() -> CanvasProps {
        CanvasProps {
            stroke_width: 5,
            stroke_color: to_rgba(&HexColor::black(), 100),
            canvas_color: HexColor::white(),
            eraser_width: 10,
        }
    }

    fn draw_line(canvas: &mut SketchCanvas, from: (f32, f32), to: (f32, f32)) {
        canvas.begin_stroke(from);
        canvas.extend_stroke(to);
        canvas.end_stroke();
    }

    #[test]
    fn pen_stroke_captures_color_and_width() {
        let mut canvas = SketchCanvas::new(props());
        draw_line(&mut canvas, (0.0, 0.0), (10.0, 10.0));

        let stroke = &canvas.strokes()[0];
        assert_eq!(stroke.width, 5.0);
        assert_eq!(
            stroke.kind,
            StrokeKind::Pen {
                color: to_rgba(&HexColor::black(), 100)
            }
        );
        assert_eq!(stroke.points, vec![(0.0, 0.0), (10.0, 10.0)]);
    }

    #[test]
    fn eraser_stroke_uses_eraser_width() {
        let mut canvas = SketchCanvas::new(props());
        canvas.erase_mode(true);
        draw_line(&mut canvas, (0.0, 0.0), (4.0, 4.0));

        let stroke = &canvas.strokes()[0];
        assert!(stroke.is_eraser());
        assert_eq!(stroke.width, 10.0);
    }

    #[test]
    fn committed_strokes_keep_their_color_after_props_change() {
        let mut canvas = SketchCanvas::new(props());
        draw_line(&mut canvas, (0.0, 0.0), (1.0, 1.0));

        let mut next = props();
        next.stroke_color = to_rgba(&HexColor::parse("#ff0000").unwrap(), 50);
        canvas.apply_props(&next);
        draw_line(&mut canvas, (2.0, 2.0), (3.0, 3.0));

        assert_eq!(
            canvas.strokes()[0].kind,
            StrokeKind::Pen {
                color: to_rgba(&HexColor::black(), 100)
            }
        );
        assert_eq!(
            canvas.strokes()[1].kind,
            StrokeKind::Pen {
                color: next.stroke_color
            }
        );
    }

    #[test]
    fn undo_and_redo_walk_stroke_history() {
        let mut canvas = SketchCanvas::new(props());
        draw_line(&mut canvas, (0.0, 0.0), (1.0, 1.0));
        draw_line(&mut canvas, (2.0, 2.0), (3.0, 3.0));

        canvas.undo();
        assert_eq!(canvas.strokes().len(), 1);
        assert!(canvas.can_redo());

        canvas.redo();
        assert_eq!(canvas.strokes().len(), 2);
        assert_eq!(canvas.strokes()[1].points[0], (2.0, 2.0));
        assert!(!canvas.can_redo());
    }

    #[test]
    fn new_stroke_discards_redo_entries() {
        let mut canvas = SketchCanvas::new(props());
        draw_line(&mut canvas, (0.0, 0.0), (1.0, 1.0));
        canvas.undo();
        draw_line(&mut canvas, (5.0, 5.0), (6.0, 6.0));

        assert!(!canvas.can_redo());
        canvas.redo();
        assert_eq!(canvas.strokes().len(), 1);
    }

    #[test]
    fn clear_is_undoable() {
        let mut canvas = SketchCanvas::new(props());
        draw_line(&mut canvas, (0.0, 0.0), (1.0, 1.0));
        draw_line(&mut canvas, (2.0, 2.0), (3.0, 3.0));

        canvas.clear_canvas();
        assert!(canvas.strokes().is_empty());

        canvas.undo();
        assert_eq!(canvas.strokes().len(), 2);

        canvas.redo();
        assert!(canvas.strokes().is_empty());
    }

    #[test]
    fn clearing_empty_canvas_records_nothing() {
        let mut canvas = SketchCanvas::new(props());
        canvas.clear_canvas();
        assert!(!canvas.can_undo());
    }

    #[test]
    fn undo_on_empty_history_is_harmless() {
        let mut canvas = SketchCanvas::new(props());
        canvas.undo();
        canvas.redo();
        assert!(canvas.strokes().is_empty());
    }

    #[test]
    fn switching_tools_commits_stroke_in_progress() {
        let mut canvas = SketchCanvas::new(props());
        canvas.begin_stroke((0.0, 0.0));
        canvas.extend_stroke((1.0, 0.0));
        canvas.erase_mode(true);

        assert!(!canvas.is_drawing());
        assert!(!canvas.strokes()[0].is_eraser());
        assert!(canvas.is_erasing());
    }

    #[test]
    fn extend_without_begin_is_ignored() {
        let mut canvas = SketchCanvas::new(props());
        canvas.extend_stroke((1.0, 1.0));
        canvas.end_stroke();
        assert!(canvas.strokes().is_empty());
    }
}
