//! Drawing surface seen from the tool panel.
//!
//! The panel talks to a surface only through [`CanvasHandle`] and pushes
//! [`CanvasProps`] after each change. [`SketchCanvas`] is the surface used by
//! the desktop shell.

pub mod handle;
pub mod props;
pub mod sketch;

pub use handle::CanvasHandle;
pub use props::{CanvasProps, CursorStyle};
pub use sketch::SketchCanvas;
