//! Tool panel controller: binds panel state to a canvas handle.

use std::fmt;

use super::events::{CanvasCommand, PanelEvent};
use super::mode::{ControlsEnabled, ToolMode};
use super::state::PanelState;
use crate::canvas::{CanvasHandle, CanvasProps, CursorStyle};
use crate::draw::HexColor;

/// Callback fired when the pointer crosses the canvas boundary.
pub type PointerHook = Box<dyn FnMut()>;

/// Options supplied by whatever embeds the panel.
pub struct PanelOptions {
    /// Invoked when the pointer enters the canvas region
    pub on_canvas_mouse_enter: Option<PointerHook>,
    /// Invoked when the pointer leaves the canvas region
    pub on_canvas_mouse_leave: Option<PointerHook>,
    /// Cosmetic only: selects the default cursor instead of a crosshair
    pub draggable: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            on_canvas_mouse_enter: None,
            on_canvas_mouse_leave: None,
            draggable: true,
        }
    }
}

impl PanelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn on_canvas_mouse_enter(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_canvas_mouse_enter = Some(Box::new(hook));
        self
    }

    pub fn on_canvas_mouse_leave(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_canvas_mouse_leave = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for PanelOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelOptions")
            .field("on_canvas_mouse_enter", &self.on_canvas_mouse_enter.is_some())
            .field("on_canvas_mouse_leave", &self.on_canvas_mouse_leave.is_some())
            .field("draggable", &self.draggable)
            .finish()
    }
}

/// Controller owning the panel state and, once mounted, the canvas handle.
///
/// Every change is routed through [`ToolPanel::dispatch`]: the state is
/// updated, the resulting command (if any) is forwarded to the handle, and
/// the passive [`CanvasProps`] are re-applied when they changed. Commands
/// issued while no handle is attached are dropped silently.
pub struct ToolPanel<C> {
    state: PanelState,
    handle: Option<C>,
    options: PanelOptions,
    pointer_inside: bool,
}

impl<C: CanvasHandle> ToolPanel<C> {
    /// Creates a panel with default tool state and no canvas attached.
    pub fn new(options: PanelOptions) -> Self {
        Self {
            state: PanelState::default(),
            handle: None,
            options,
            pointer_inside: false,
        }
    }

    /// Mounts a canvas handle, syncing it with the current state.
    ///
    /// Returns the previously attached handle, if any.
    pub fn attach(&mut self, mut handle: C) -> Option<C> {
        handle.apply_props(&self.state.canvas_props());
        handle.erase_mode(self.state.mode().is_erasing());
        log::debug!("canvas attached in {} mode", self.state.mode().label());
        self.handle.replace(handle)
    }

    /// Unmounts and returns the canvas handle.
    pub fn detach(&mut self) -> Option<C> {
        let handle = self.handle.take();
        if handle.is_some() {
            log::debug!("canvas detached");
        }
        handle
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&C> {
        self.handle.as_ref()
    }

    pub fn handle_mut(&mut self) -> Option<&mut C> {
        self.handle.as_mut()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn mode(&self) -> ToolMode {
        self.state.mode()
    }

    /// Control availability for this render.
    pub fn controls(&self) -> ControlsEnabled {
        self.state.controls()
    }

    pub fn canvas_props(&self) -> CanvasProps {
        self.state.canvas_props()
    }

    pub fn is_draggable(&self) -> bool {
        self.options.draggable
    }

    pub fn cursor(&self) -> CursorStyle {
        CursorStyle::for_draggable(self.options.draggable)
    }

    /// Applies a panel event and forwards its effects to the canvas.
    pub fn dispatch(&mut self, event: PanelEvent) {
        let before = self.state.canvas_props();
        let command = self.state.reduce(event);

        if let Some(command) = command {
            self.forward(command);
        }

        let after = self.state.canvas_props();
        if after != before {
            if let Some(handle) = self.handle.as_mut() {
                handle.apply_props(&after);
            }
        }
    }

    pub fn set_stroke_color(&mut self, color: HexColor) {
        self.dispatch(PanelEvent::StrokeColorChanged(color));
    }

    pub fn set_canvas_color(&mut self, color: HexColor) {
        self.dispatch(PanelEvent::CanvasColorChanged(color));
    }

    pub fn set_stroke_opacity(&mut self, percent: u8) {
        self.dispatch(PanelEvent::StrokeOpacityChanged(percent));
    }

    pub fn set_stroke_width(&mut self, width: u8) {
        self.dispatch(PanelEvent::StrokeWidthChanged(width));
    }

    pub fn set_eraser_width(&mut self, width: u8) {
        self.dispatch(PanelEvent::EraserWidthChanged(width));
    }

    pub fn activate_eraser(&mut self) {
        self.dispatch(PanelEvent::EraserSelected);
    }

    pub fn activate_pen(&mut self) {
        self.dispatch(PanelEvent::PenSelected);
    }

    pub fn undo(&mut self) {
        self.dispatch(PanelEvent::UndoClicked);
    }

    pub fn redo(&mut self) {
        self.dispatch(PanelEvent::RedoClicked);
    }

    pub fn clear(&mut self) {
        self.dispatch(PanelEvent::ClearClicked);
    }

    /// Reports that the pointer is now over the canvas.
    pub fn pointer_entered(&mut self) {
        if self.pointer_inside {
            return;
        }
        self.pointer_inside = true;
        if let Some(hook) = self.options.on_canvas_mouse_enter.as_mut() {
            hook();
        }
    }

    /// Reports that the pointer has left the canvas.
    pub fn pointer_left(&mut self) {
        if !self.pointer_inside {
            return;
        }
        self.pointer_inside = false;
        if let Some(hook) = self.options.on_canvas_mouse_leave.as_mut() {
            hook();
        }
    }

    pub fn is_pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    fn forward(&mut self, command: CanvasCommand) {
        let Some(handle) = self.handle.as_mut() else {
            log::debug!("no canvas attached; dropping {command:?}");
            return;
        };

        match command {
            CanvasCommand::EraseMode(enabled) => {
                log::info!(
                    "switched to {} mode",
                    if enabled { "eraser" } else { "pen" }
                );
                handle.erase_mode(enabled);
            }
            CanvasCommand::Undo => handle.undo(),
            CanvasCommand::Redo => handle.redo(),
            CanvasCommand::Clear => {
                log::debug!("clearing canvas");
                handle.clear_canvas();
            }
        }
    }
}

impl<C> fmt::Debug for ToolPanel<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolPanel")
            .field("state", &self.state)
            .field("attached", &self.handle.is_some())
            .field("options", &self.options)
            .finish()
    }
}
