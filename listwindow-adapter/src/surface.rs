use listwindow::Align;

use crate::{RtlOffsetType, ScrollMetrics};

/// How a scroll command should be animated. Passed through to the surface untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
    Instant,
}

/// An imperative scroll-to-index request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToIndex {
    pub index: usize,
    pub align: Align,
    pub behavior: ScrollBehavior,
}

impl ScrollToIndex {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            align: Align::Auto,
            behavior: ScrollBehavior::Auto,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

/// The host's scroll container, in raw (environment) coordinates.
pub trait ScrollSurface {
    /// The raw scroll-start position along the scroll axis.
    fn scroll_start(&self) -> f64;

    fn metrics(&self) -> ScrollMetrics;

    /// Commands the surface to scroll to `raw`.
    ///
    /// Returns `false` if the command was ignored (e.g. the surface is not mounted yet), in which
    /// case the caller applies the offset itself.
    fn scroll_to(&mut self, raw: f64, behavior: ScrollBehavior) -> bool;

    /// Probes the environment's RTL convention. Only called once per process.
    fn detect_rtl_offset_type(&mut self) -> RtlOffsetType {
        RtlOffsetType::Negative
    }
}

/// An in-memory [`ScrollSurface`] for tests, demos and headless hosts.
///
/// Interactive surfaces accept scroll commands immediately (clamped to their scroll range, like a
/// real scroller would); detached ones ignore them. `rtl` is the convention of a horizontal RTL
/// surface, `None` for every other layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemorySurface {
    pub scroll_start: f64,
    pub metrics: ScrollMetrics,
    pub interactive: bool,
    pub rtl: Option<RtlOffsetType>,
    pub last_behavior: Option<ScrollBehavior>,
}

impl MemorySurface {
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self {
            scroll_start: 0.0,
            metrics,
            interactive: true,
            rtl: None,
            last_behavior: None,
        }
    }

    pub fn detached(metrics: ScrollMetrics) -> Self {
        Self {
            interactive: false,
            ..Self::new(metrics)
        }
    }

    /// Makes this a horizontal RTL surface, scrolled to its start edge.
    pub fn with_rtl(mut self, rtl: RtlOffsetType) -> Self {
        self.rtl = Some(rtl);
        self.scroll_start = match rtl {
            RtlOffsetType::PositiveDescending => self.metrics.max_scroll_start(),
            RtlOffsetType::Negative | RtlOffsetType::PositiveAscending => 0.0,
        };
        self
    }

    fn raw_range(&self) -> (f64, f64) {
        let max = self.metrics.max_scroll_start();
        match self.rtl {
            Some(RtlOffsetType::Negative) => (-max, 0.0),
            _ => (0.0, max),
        }
    }
}

impl ScrollSurface for MemorySurface {
    fn scroll_start(&self) -> f64 {
        self.scroll_start
    }

    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn scroll_to(&mut self, raw: f64, behavior: ScrollBehavior) -> bool {
        if !self.interactive {
            return false;
        }
        let (lo, hi) = self.raw_range();
        self.scroll_start = raw.clamp(lo, hi);
        self.last_behavior = Some(behavior);
        true
    }

    fn detect_rtl_offset_type(&mut self) -> RtlOffsetType {
        self.rtl.unwrap_or(RtlOffsetType::Negative)
    }
}
