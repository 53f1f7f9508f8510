//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas region settings.
///
/// Controls how the drawing surface is embedded below the tool panel. The
/// tool defaults themselves (widths, colors, opacity) are fixed and not
/// configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Whether the host window can be dragged from the canvas.
    /// Purely cosmetic: `true` shows the default cursor, `false` a crosshair.
    #[serde(default = "default_draggable")]
    pub draggable: bool,

    /// Canvas height in pixels (valid range: 100 - 4000)
    #[serde(default = "default_canvas_height")]
    pub height: f32,

    /// Border line width around the canvas in pixels (valid range: 0 - 16)
    #[serde(default = "default_border_width")]
    pub border_width: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            draggable: default_draggable(),
            height: default_canvas_height(),
            border_width: default_border_width(),
        }
    }
}

/// Main window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WindowConfig {
    /// Initial window width in pixels (valid range: 320 - 7680)
    #[serde(default = "default_window_width")]
    pub width: f32,

    /// Initial window height in pixels (valid range: 240 - 4320)
    #[serde(default = "default_window_height")]
    pub height: f32,

    /// Window title
    #[serde(default = "default_window_title")]
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            title: default_window_title(),
        }
    }
}

fn default_draggable() -> bool {
    true
}

fn default_canvas_height() -> f32 {
    387.0
}

fn default_border_width() -> f32 {
    2.0
}

fn default_window_width() -> f32 {
    960.0
}

fn default_window_height() -> f32 {
    640.0
}

fn default_window_title() -> String {
    "Freedraw".to_string()
}
