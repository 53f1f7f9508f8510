//! Tool panel UI state and its transitions.

use std::ops::RangeInclusive;

use super::events::{CanvasCommand, PanelEvent};
use super::mode::{ControlsEnabled, ToolMode, controls_enabled};
use crate::canvas::CanvasProps;
use crate::draw::{HexColor, Rgba, to_rgba};

/// Range of the stroke and eraser width sliders, in pixels.
pub const WIDTH_RANGE: RangeInclusive<u8> = 1..=20;
/// Range of the stroke opacity slider, in percent.
pub const OPACITY_RANGE: RangeInclusive<u8> = 0..=100;

pub const DEFAULT_STROKE_WIDTH: u8 = 5;
pub const DEFAULT_ERASER_WIDTH: u8 = 10;
pub const DEFAULT_STROKE_OPACITY: u8 = 100;

/// Everything the panel controls, held for the lifetime of one panel.
///
/// Changes go through [`PanelState::reduce`] so that disabled controls can
/// never alter their value. Read access is through the getters.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    mode: ToolMode,
    stroke_width: u8,
    eraser_width: u8,
    stroke_color: HexColor,
    stroke_opacity: u8,
    canvas_color: HexColor,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            mode: ToolMode::Pen,
            stroke_width: DEFAULT_STROKE_WIDTH,
            eraser_width: DEFAULT_ERASER_WIDTH,
            stroke_color: HexColor::black(),
            stroke_opacity: DEFAULT_STROKE_OPACITY,
            canvas_color: HexColor::white(),
        }
    }
}

impl PanelState {
    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn stroke_width(&self) -> u8 {
        self.stroke_width
    }

    pub fn eraser_width(&self) -> u8 {
        self.eraser_width
    }

    pub fn stroke_color(&self) -> &HexColor {
        &self.stroke_color
    }

    pub fn stroke_opacity(&self) -> u8 {
        self.stroke_opacity
    }

    pub fn canvas_color(&self) -> &HexColor {
        &self.canvas_color
    }

    pub fn controls(&self) -> ControlsEnabled {
        controls_enabled(self.mode)
    }

    /// Stroke color with the opacity applied. Recomputed on every call.
    pub fn effective_stroke_color(&self) -> Rgba {
        to_rgba(&self.stroke_color, self.stroke_opacity)
    }

    /// Snapshot of the passive canvas configuration.
    pub fn canvas_props(&self) -> CanvasProps {
        CanvasProps {
            stroke_width: self.stroke_width,
            stroke_color: self.effective_stroke_color(),
            canvas_color: self.canvas_color.clone(),
            eraser_width: self.eraser_width,
        }
    }

    /// Applies one panel event.
    ///
    /// Returns the command the canvas must execute, if the event maps to one.
    /// Slider values outside their range are clamped; values sent to a
    /// disabled control are dropped.
    pub fn reduce(&mut self, event: PanelEvent) -> Option<CanvasCommand> {
        let controls = self.controls();
        match event {
            PanelEvent::StrokeColorChanged(color) => {
                self.stroke_color = color;
                None
            }
            PanelEvent::CanvasColorChanged(color) => {
                self.canvas_color = color;
                None
            }
            PanelEvent::StrokeOpacityChanged(value) => {
                if controls.stroke_controls {
                    self.stroke_opacity = clamp_to(value, &OPACITY_RANGE);
                } else {
                    log::debug!("stroke opacity is locked while erasing; ignoring {value}");
                }
                None
            }
            PanelEvent::StrokeWidthChanged(value) => {
                if controls.stroke_controls {
                    self.stroke_width = clamp_to(value, &WIDTH_RANGE);
                } else {
                    log::debug!("stroke width is locked while erasing; ignoring {value}");
                }
                None
            }
            PanelEvent::EraserWidthChanged(value) => {
                if controls.eraser_controls {
                    self.eraser_width = clamp_to(value, &WIDTH_RANGE);
                } else {
                    log::debug!("eraser width is locked while drawing; ignoring {value}");
                }
                None
            }
            PanelEvent::PenSelected => {
                self.mode = ToolMode::Pen;
                Some(CanvasCommand::EraseMode(false))
            }
            PanelEvent::EraserSelected => {
                self.mode = ToolMode::Eraser;
                Some(CanvasCommand::EraseMode(true))
            }
            PanelEvent::UndoClicked => Some(CanvasCommand::Undo),
            PanelEvent::RedoClicked => Some(CanvasCommand::Redo),
            PanelEvent::ClearClicked => Some(CanvasCommand::Clear),
        }
    }
}

fn clamp_to(value: u8, range: &RangeInclusive<u8>) -> u8 {
    value.clamp(*range.start(), *range.end())
}
