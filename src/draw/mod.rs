//! Drawing primitives shared by the panel and the sketch canvas.
//!
//! - [`HexColor`]: `#RRGGBB` value coming from a color picker
//! - [`Rgba`]: color with opacity applied, see [`to_rgba`]
//! - [`Stroke`]: freehand polyline recorded by the canvas

pub mod color;
pub mod stroke;

pub use color::{ColorParseError, HexColor, Rgba, to_rgba};
pub use stroke::{Stroke, StrokeKind};
