//! iced canvas program rendering a [`SketchCanvas`] and capturing pointer drags.

use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, LineCap, LineJoin, Path, Stroke, event};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use super::messages::{Message, SketchMessage};
use super::style::{hex_to_color, rgba_to_color};
use crate::canvas::{CursorStyle, SketchCanvas};
use crate::draw::{self, StrokeKind};

pub struct SketchView<'a> {
    /// `None` until a surface is attached to the panel
    pub sketch: Option<&'a SketchCanvas>,
    /// Committed strokes; cleared by the app whenever they change
    pub cache: &'a Cache,
    pub cursor: CursorStyle,
}

/// Per-widget pointer bookkeeping.
#[derive(Debug, Default)]
pub struct PointerState {
    hovered: bool,
    pressed: bool,
}

impl PointerState {
    /// Records the hover state, returning the crossing message when it flipped.
    fn track_hover(&mut self, hovered: bool) -> Option<SketchMessage> {
        if hovered == self.hovered {
            return None;
        }
        self.hovered = hovered;
        Some(if hovered {
            SketchMessage::PointerEntered
        } else {
            SketchMessage::PointerLeft
        })
    }
}

impl<'a> canvas::Program<Message> for SketchView<'a> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut PointerState,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        let canvas::Event::Mouse(mouse_event) = event else {
            return (event::Status::Ignored, None);
        };
        let position = cursor.position_in(bounds);
        let crossing = state.track_hover(position.is_some());

        let (status, action) = match mouse_event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => match position {
                Some(point) => {
                    state.pressed = true;
                    (event::Status::Captured, Some(SketchMessage::StrokeStarted(point)))
                }
                None => (event::Status::Ignored, None),
            },
            mouse::Event::CursorMoved { .. } if state.pressed => match position {
                Some(point) => (event::Status::Captured, Some(SketchMessage::StrokeMoved(point))),
                None => (event::Status::Ignored, None),
            },
            mouse::Event::ButtonReleased(mouse::Button::Left) if state.pressed => {
                state.pressed = false;
                (event::Status::Captured, Some(SketchMessage::StrokeEnded))
            }
            _ => (event::Status::Ignored, None),
        };

        // `update` yields a single message, so a crossing rides along with
        // the stroke action of the same event.
        let message = match (crossing, action) {
            (None, None) => None,
            (Some(single), None) | (None, Some(single)) => Some(Message::Sketch(single)),
            (Some(crossing), Some(action)) => Some(Message::SketchBatch(vec![crossing, action])),
        };
        (status, message)
    }

    fn draw(
        &self,
        _state: &PointerState,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(sketch) = self.sketch else {
            return Vec::new();
        };
        let background = hex_to_color(sketch.background());

        let committed = self.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(Point::ORIGIN, frame.size(), background);
            for stroke in sketch.strokes() {
                paint_stroke(frame, stroke, background);
            }
        });

        let mut live = Frame::new(renderer, bounds.size());
        if let Some(stroke) = sketch.active_stroke() {
            paint_stroke(&mut live, stroke, background);
        }

        vec![committed, live.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &PointerState,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !cursor.is_over(bounds) {
            return mouse::Interaction::Idle;
        }
        match self.cursor {
            CursorStyle::Default => mouse::Interaction::Idle,
            CursorStyle::Crosshair => mouse::Interaction::Crosshair,
        }
    }
}

fn paint_stroke(frame: &mut Frame, stroke: &draw::Stroke, background: Color) {
    let color = match stroke.kind {
        StrokeKind::Pen { color } => rgba_to_color(color),
        StrokeKind::Eraser => background,
    };

    if stroke.is_dot() {
        let (x, y) = stroke.points[0];
        frame.fill(&Path::circle(Point::new(x, y), stroke.width / 2.0), color);
        return;
    }

    let path = Path::new(|builder| {
        let mut points = stroke.points.iter();
        if let Some(&(x, y)) = points.next() {
            builder.move_to(Point::new(x, y));
        }
        for &(x, y) in points {
            builder.line_to(Point::new(x, y));
        }
    });
    frame.stroke(
        &path,
        Stroke::default()
            .with_color(color)
            .with_width(stroke.width)
            .with_line_cap(LineCap::Round)
            .with_line_join(LineJoin::Round),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas::Program;

    const BOUNDS: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    fn feed(
        state: &mut PointerState,
        event: mouse::Event,
        at: (f32, f32),
    ) -> (event::Status, Vec<SketchMessage>) {
        let cache = Cache::new();
        let view = SketchView {
            sketch: None,
            cache: &cache,
            cursor: CursorStyle::Crosshair,
        };
        let cursor = mouse::Cursor::Available(Point::new(at.0, at.1));
        let (status, message) = view.update(state, canvas::Event::Mouse(event), BOUNDS, cursor);
        let messages = match message {
            None => Vec::new(),
            Some(Message::Sketch(single)) => vec![single],
            Some(Message::SketchBatch(batch)) => batch,
            Some(other) => panic!("unexpected message {other:?}"),
        };
        (status, messages)
    }

    fn press() -> mouse::Event {
        mouse::Event::ButtonPressed(mouse::Button::Left)
    }

    fn release() -> mouse::Event {
        mouse::Event::ButtonReleased(mouse::Button::Left)
    }

    fn moved(x: f32, y: f32) -> mouse::Event {
        mouse::Event::CursorMoved {
            position: Point::new(x, y),
        }
    }

    #[test]
    fn press_move_release_maps_to_stroke_messages() {
        let mut state = PointerState::default();
        let (_, entered) = feed(&mut state, moved(5.0, 5.0), (5.0, 5.0));
        assert_eq!(entered, vec![SketchMessage::PointerEntered]);

        let (status, started) = feed(&mut state, press(), (5.0, 5.0));
        assert_eq!(status, event::Status::Captured);
        assert_eq!(started, vec![SketchMessage::StrokeStarted(Point::new(5.0, 5.0))]);

        let (_, extended) = feed(&mut state, moved(20.0, 30.0), (20.0, 30.0));
        assert_eq!(extended, vec![SketchMessage::StrokeMoved(Point::new(20.0, 30.0))]);

        let (_, ended) = feed(&mut state, release(), (20.0, 30.0));
        assert_eq!(ended, vec![SketchMessage::StrokeEnded]);
        assert!(!state.pressed);
    }

    #[test]
    fn press_as_first_event_starts_stroke() {
        let mut state = PointerState::default();
        let (status, messages) = feed(&mut state, press(), (10.0, 10.0));

        assert_eq!(status, event::Status::Captured);
        assert_eq!(
            messages,
            vec![
                SketchMessage::PointerEntered,
                SketchMessage::StrokeStarted(Point::new(10.0, 10.0)),
            ]
        );
        assert!(state.pressed);
    }

    #[test]
    fn drag_leaving_and_reentering_keeps_reentry_point() {
        let mut state = PointerState::default();
        feed(&mut state, press(), (10.0, 10.0));

        let (_, left) = feed(&mut state, moved(150.0, 10.0), (150.0, 10.0));
        assert_eq!(left, vec![SketchMessage::PointerLeft]);

        let (_, outside) = feed(&mut state, moved(160.0, 40.0), (160.0, 40.0));
        assert!(outside.is_empty());

        let (_, back) = feed(&mut state, moved(90.0, 40.0), (90.0, 40.0));
        assert_eq!(
            back,
            vec![
                SketchMessage::PointerEntered,
                SketchMessage::StrokeMoved(Point::new(90.0, 40.0)),
            ]
        );
    }

    #[test]
    fn release_outside_bounds_ends_stroke() {
        let mut state = PointerState::default();
        feed(&mut state, press(), (10.0, 10.0));
        feed(&mut state, moved(150.0, 10.0), (150.0, 10.0));

        let (status, messages) = feed(&mut state, release(), (150.0, 10.0));
        assert_eq!(status, event::Status::Captured);
        assert_eq!(messages, vec![SketchMessage::StrokeEnded]);
        assert!(!state.pressed);
    }

    #[test]
    fn release_that_leaves_reports_both() {
        let mut state = PointerState::default();
        feed(&mut state, press(), (10.0, 10.0));

        let (_, messages) = feed(&mut state, release(), (150.0, 10.0));
        assert_eq!(
            messages,
            vec![SketchMessage::PointerLeft, SketchMessage::StrokeEnded]
        );
    }

    #[test]
    fn press_outside_bounds_is_ignored() {
        let mut state = PointerState::default();
        let (status, messages) = feed(&mut state, press(), (150.0, 10.0));

        assert_eq!(status, event::Status::Ignored);
        assert!(messages.is_empty());
        assert!(!state.pressed);
    }

    #[test]
    fn hover_without_press_only_reports_crossings() {
        let mut state = PointerState::default();
        assert_eq!(
            feed(&mut state, moved(5.0, 5.0), (5.0, 5.0)).1,
            vec![SketchMessage::PointerEntered]
        );
        assert!(feed(&mut state, moved(6.0, 5.0), (6.0, 5.0)).1.is_empty());
        assert_eq!(
            feed(&mut state, moved(200.0, 5.0), (200.0, 5.0)).1,
            vec![SketchMessage::PointerLeft]
        );
    }
}
