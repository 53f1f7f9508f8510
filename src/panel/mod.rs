//! Tool panel: pen/eraser selection, color and width controls, history buttons.
//!
//! This module turns panel interactions into state updates and canvas
//! commands. It holds no drawing history of its own; undo, redo and clear are
//! forwarded to the attached [`CanvasHandle`](crate::canvas::CanvasHandle).

pub mod controller;
pub mod events;
pub mod mode;
pub mod state;


pub use controller::{PanelOptions, PointerHook, ToolPanel};
pub use events::{CanvasCommand, PanelEvent};
pub use mode::{ControlsEnabled, ToolMode, controls_enabled};
pub use state::{OPACITY_RANGE, PanelState, WIDTH_RANGE};
