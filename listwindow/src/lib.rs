//! A headless list windowing engine.
//!
//! For adapter-level utilities (RTL scroll coordinates, resize handling, scroll-surface wiring),
//! see the `listwindow-adapter` crate.
//!
//! Given a very large ordered collection inside a finite scrollable viewport, this crate decides
//! which items intersect the viewport, at which offset each item sits, and which scroll offset
//! brings an arbitrary item into view. The core pieces are:
//!
//! - [`resolve_item_size`]: turns an [`ItemSize`] (fixed, percentage of the container, or a
//!   per-item function) into one [`ResolvedSize`] shape.
//! - [`CachedBounds`]: a lazily grown, append-only index → [`Bounds`] table.
//! - [`estimated_total_size`]: the scrollable extent, extrapolated from the cached prefix.
//! - [`find_ranges`]: visible and overscan [`ItemRange`]s for a scroll offset.
//! - [`plan_offset`]: the target offset for an index under an [`Align`] policy.
//! - [`Virtualizer`]: the stateful owner of all of the above.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - container dimensions
//! - logical (left-to-right) scroll offsets
//! - an item size specification
//!
//! ```
//! use listwindow::{Align, Dimensions, Virtualizer, VirtualizerOptions};
//!
//! let options = VirtualizerOptions::new(1000, 50.0)
//!     .with_initial_dimensions(Some(Dimensions::new(400.0, 300.0)));
//! let mut v = Virtualizer::new(options).unwrap();
//!
//! v.set_scroll_offset(500.0);
//! assert_eq!(v.visible_range().start_index, 10);
//! assert_eq!(v.estimated_total_size(), 50_000.0);
//!
//! assert_eq!(v.scroll_to_index(999, Align::End).unwrap(), 49_600.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bounds;
mod error;
mod estimate;
mod options;
mod plan;
mod range;
mod size;
mod types;
mod virtualizer;


pub use bounds::CachedBounds;
pub use error::{ConfigurationError, Error, IndexError, Result};
pub use estimate::{estimated_total_size, is_estimate_exact};
pub use options::{OnChangeCallback, OnItemsRendered, OnScroll, VirtualizerOptions};
pub use plan::plan_offset;
pub use range::find_ranges;
pub use size::{ItemSize, ResolvedSize, SizeFn, resolve_item_size};
pub use types::{
    Align, Axis, Bounds, Dimensions, Direction, ItemRange, ItemRanges, ScrollDirection,
    ScrollEvent, VirtualItem,
};
pub use virtualizer::Virtualizer;
