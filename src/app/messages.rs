use iced::Point;

use crate::panel::PanelEvent;

#[derive(Debug, Clone)]
pub enum Message {
    /// A panel control changed or a panel button was pressed
    Panel(PanelEvent),
    /// Raw text typed into the stroke color field
    StrokeColorInput(String),
    /// Raw text typed into the canvas color field
    CanvasColorInput(String),
    /// Pointer activity over the canvas
    Sketch(SketchMessage),
    /// A boundary crossing followed by the press, move or release that caused it
    SketchBatch(Vec<SketchMessage>),
}

/// Pointer activity reported by the canvas widget, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SketchMessage {
    StrokeStarted(Point),
    StrokeMoved(Point),
    StrokeEnded,
    PointerEntered,
    PointerLeft,
}
