//! Pen/eraser tool selection.

/// Active drawing tool.
///
/// Exactly one tool is active at any time; the panel starts on [`ToolMode::Pen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Freehand pen using the stroke color, opacity and width (default)
    #[default]
    Pen,
    /// Eraser using the eraser width; ignores stroke color and opacity
    Eraser,
}

impl ToolMode {
    pub fn is_erasing(self) -> bool {
        matches!(self, ToolMode::Eraser)
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolMode::Pen => "Pen",
            ToolMode::Eraser => "Eraser",
        }
    }
}

/// Which groups of panel controls accept input for the current tool.
///
/// Disabled controls stay visible; their values are locked, not reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsEnabled {
    /// Stroke width and stroke opacity sliders
    pub stroke_controls: bool,
    /// Eraser width slider
    pub eraser_controls: bool,
}

impl ControlsEnabled {
    /// The "Pen" button only makes sense while erasing.
    pub fn pen_button(&self) -> bool {
        self.eraser_controls
    }

    /// The "Eraser" button only makes sense while drawing.
    pub fn eraser_button(&self) -> bool {
        self.stroke_controls
    }
}

/// Derives control availability from the active tool.
pub fn controls_enabled(mode: ToolMode) -> ControlsEnabled {
    match mode {
        ToolMode::Pen => ControlsEnabled {
            stroke_controls: true,
            eraser_controls: false,
        },
        ToolMode::Eraser => ControlsEnabled {
            stroke_controls: false,
            eraser_controls: true,
        },
    }
}
