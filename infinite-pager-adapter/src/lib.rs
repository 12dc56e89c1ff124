//! Adapter utilities for the `infinite-pager` crate.
//!
//! The `infinite-pager` crate is UI-agnostic and only decides *what* should happen when a drag
//! ends. This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A tween-based settle animation runner
//! - Drag recognition with a minimum distance and a velocity-based predicted end translation
//! - A frame-driven [`Controller`] wiring both to a pager
//!
//! This crate is intentionally framework-agnostic (no winit/egui/iced bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod gesture;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use gesture::{DEFAULT_DECELERATION_RATE, DragRecognizer, VELOCITY_WINDOW_MS};
pub use tween::{Easing, Tween};
