//! Passive configuration pushed to the drawing surface.

use crate::draw::{HexColor, Rgba};

/// Configuration re-applied to the canvas on every panel state change.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasProps {
    /// Pen thickness in pixels
    pub stroke_width: u8,
    /// Pen color with the opacity already applied
    pub stroke_color: Rgba,
    /// Background fill
    pub canvas_color: HexColor,
    /// Eraser thickness in pixels
    pub eraser_width: u8,
}

/// Pointer cursor shown over the canvas region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStyle {
    /// Regular arrow, used while the host window can be dragged
    Default,
    /// Precision cursor, used when dragging is disabled
    Crosshair,
}

impl CursorStyle {
    pub fn for_draggable(draggable: bool) -> Self {
        if draggable {
            CursorStyle::Default
        } else {
            CursorStyle::Crosshair
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draggable_hosts_keep_default_cursor() {
        assert_eq!(CursorStyle::for_draggable(true), CursorStyle::Default);
        assert_eq!(CursorStyle::for_draggable(false), CursorStyle::Crosshair);
    }
}
