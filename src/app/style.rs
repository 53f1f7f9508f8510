//! Container styles for the panel and the canvas frame.

use iced::border::Radius;
use iced::theme::Theme;
use iced::widget::container::{Appearance, StyleSheet};
use iced::{Background, Border, Color};

use crate::draw::{HexColor, Rgba};

pub fn hex_to_color(hex: &HexColor) -> Color {
    let [r, g, b] = hex.rgb();
    Color::from_rgb8(r, g, b)
}

pub fn rgba_to_color(rgba: Rgba) -> Color {
    Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a as f32)
}

/// Label color for controls that are currently disabled.
pub const DISABLED_TEXT: Color = Color {
    r: 0.6,
    g: 0.6,
    b: 0.6,
    a: 1.0,
};

pub const ERROR_TEXT: Color = Color {
    r: 0.85,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

/// Solid border drawn around the canvas.
#[derive(Clone, Copy)]
pub struct CanvasFrameStyle {
    pub border_width: f32,
}

impl StyleSheet for CanvasFrameStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> Appearance {
        Appearance {
            background: None,
            text_color: None,
            border: Border {
                color: Color::BLACK,
                width: self.border_width,
                radius: Radius::from(0.0),
            },
            shadow: Default::default(),
        }
    }
}

/// Small swatch next to a color field.
#[derive(Clone, Copy)]
pub struct ColorPreviewStyle {
    pub color: Color,
    pub is_invalid: bool,
}

impl StyleSheet for ColorPreviewStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> Appearance {
        Appearance {
            background: Some(Background::Color(self.color)),
            text_color: None,
            border: Border {
                color: if self.is_invalid {
                    Color::from_rgb(0.9, 0.4, 0.4)
                } else {
                    Color::from_rgb(0.4, 0.4, 0.4)
                },
                width: 1.0,
                radius: Radius::from(6.0),
            },
            shadow: Default::default(),
        }
    }
}
