//! Adapter utilities for the `listwindow` crate.
//!
//! The `listwindow` crate is UI-agnostic and only deals in logical offsets. This crate provides
//! the small, framework-neutral pieces an adapter needs to connect it to a real scroll container:
//!
//! - [`DirectionAdapter`]: raw ↔ logical scroll offsets for horizontal right-to-left lists, with
//!   a process-wide, lazily detected [`RtlOffsetType`]
//! - [`ResizeReactor`]: filters container resize signals, honoring pinned sizes
//! - [`ScrollSurface`] + [`Controller`]: wires scroll events, resizes and imperative
//!   scroll-to-index requests into a `listwindow::Virtualizer`
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod direction;
mod resize;
mod surface;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use direction::{
    DirectionAdapter, RtlOffsetType, RtlProbe, ScrollMetrics, cached_rtl_offset_type,
    detect_rtl_offset_type, override_rtl_offset_type, rtl_offset_type,
};
pub use resize::{OnResize, PinnedSize, ResizeChange, ResizeReactor};
pub use surface::{MemorySurface, ScrollBehavior, ScrollSurface, ScrollToIndex};
