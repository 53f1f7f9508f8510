//! Library exports for the freedraw tool panel and canvas.
//!
//! The panel controller, its state and the canvas command interface are
//! usable without the desktop shell, so other front ends (or tests) can drive
//! a [`panel::ToolPanel`] against their own [`canvas::CanvasHandle`].

pub mod app;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod panel;

pub use config::Config;
