//! Command interface of the drawing surface.

use super::props::CanvasProps;

/// Imperative commands the tool panel forwards to a drawing surface.
///
/// The panel depends only on this trait. Stroke capture, history and
/// rendering belong to the implementor.
pub trait CanvasHandle {
    /// Switches between pen (`false`) and eraser (`true`) input.
    fn erase_mode(&mut self, enabled: bool);

    /// Reverts the most recent history entry, if any.
    fn undo(&mut self);

    /// Re-applies the most recently undone entry, if any.
    fn redo(&mut self);

    /// Removes every stroke from the surface.
    fn clear_canvas(&mut self);

    /// Receives the passive configuration after every panel state change.
    fn apply_props(&mut self, props: &CanvasProps);
}

impl<T: CanvasHandle + ?Sized> CanvasHandle for Box<T> {
    fn erase_mode(&mut self, enabled: bool) {
        (**self).erase_mode(enabled);
    }

    fn undo(&mut self) {
        (**self).undo();
    }

    fn redo(&mut self) {
        (**self).redo();
    }

    fn clear_canvas(&mut self) {
        (**self).clear_canvas();
    }

    fn apply_props(&mut self, props: &CanvasProps) {
        (**self).apply_props(props);
    }
}
