//! Panel input events and the commands they produce.

use crate::draw::HexColor;

/// A user interaction with one of the panel controls.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    StrokeColorChanged(HexColor),
    CanvasColorChanged(HexColor),
    /// Opacity percent, 0-100
    StrokeOpacityChanged(u8),
    /// Pen width in pixels, 1-20
    StrokeWidthChanged(u8),
    /// Eraser width in pixels, 1-20
    EraserWidthChanged(u8),
    PenSelected,
    EraserSelected,
    UndoClicked,
    RedoClicked,
    ClearClicked,
}

/// Imperative command destined for the canvas handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasCommand {
    EraseMode(bool),
    Undo,
    Redo,
    Clear,
}
