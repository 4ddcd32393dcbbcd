use core::sync::atomic::{AtomicU8, Ordering};

use listwindow::{Axis, Direction};

/// How an environment reports the scroll-start position of a horizontal right-to-left scroller.
///
/// Logical offsets always grow from the start edge (the right edge in RTL), like LTR offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RtlOffsetType {
    /// `0` at the start edge, decreasing to `-(scroll_size - client_size)`.
    Negative,
    /// `scroll_size - client_size` at the start edge, decreasing to `0`.
    PositiveDescending,
    /// `0` at the start edge, increasing like LTR.
    PositiveAscending,
}

/// Scroll extents of a surface along its scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Total scrollable content size (`scrollWidth` / `scrollHeight`).
    pub scroll_size: f64,
    /// Visible size (`clientWidth` / `clientHeight`).
    pub client_size: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_size: f64, client_size: f64) -> Self {
        Self {
            scroll_size,
            client_size,
        }
    }

    pub fn max_scroll_start(&self) -> f64 {
        (self.scroll_size - self.client_size).max(0.0)
    }
}

/// Translates raw scroll positions to logical left-to-right offsets and back.
///
/// Vertical lists and LTR lists pass through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionAdapter {
    rtl: Option<RtlOffsetType>,
}

impl DirectionAdapter {
    pub fn identity() -> Self {
        Self { rtl: None }
    }

    /// Builds an adapter with an explicit RTL convention.
    pub fn new(axis: Axis, direction: Direction, rtl_offset_type: RtlOffsetType) -> Self {
        Self {
            rtl: needs_translation(axis, direction).then_some(rtl_offset_type),
        }
    }

    /// Builds an adapter using the process-wide convention, running `detect` only if the
    /// convention is needed and has not been detected yet. See [`rtl_offset_type`].
    pub fn detect(
        axis: Axis,
        direction: Direction,
        detect: impl FnOnce() -> RtlOffsetType,
    ) -> Self {
        Self {
            rtl: needs_translation(axis, direction).then(|| rtl_offset_type(detect)),
        }
    }

    /// The RTL convention in use, or `None` when offsets pass through unchanged.
    pub fn rtl_offset_type(&self) -> Option<RtlOffsetType> {
        self.rtl
    }

    pub fn to_logical(&self, raw: f64, metrics: ScrollMetrics) -> f64 {
        match self.rtl {
            None | Some(RtlOffsetType::PositiveAscending) => raw,
            Some(RtlOffsetType::Negative) => -raw,
            Some(RtlOffsetType::PositiveDescending) => {
                metrics.scroll_size - metrics.client_size - raw
            }
        }
    }

    pub fn from_logical(&self, logical: f64, metrics: ScrollMetrics) -> f64 {
        match self.rtl {
            None | Some(RtlOffsetType::PositiveAscending) => logical,
            Some(RtlOffsetType::Negative) => -logical,
            Some(RtlOffsetType::PositiveDescending) => {
                metrics.scroll_size - metrics.client_size - logical
            }
        }
    }
}

fn needs_translation(axis: Axis, direction: Direction) -> bool {
    axis == Axis::Horizontal && direction == Direction::Rtl
}

/// A throwaway horizontal RTL scroller used to detect the environment's [`RtlOffsetType`].
///
/// Implementations should set up an RTL container whose content is wider than its viewport,
/// without scrolling it.
pub trait RtlProbe {
    /// The raw scroll-start position (`scrollLeft`).
    fn scroll_start(&self) -> f64;
    fn set_scroll_start(&mut self, value: f64);
}

/// Classifies the convention of `probe` from its initial position and its response to a
/// scroll-start write of `1`.
pub fn detect_rtl_offset_type(probe: &mut impl RtlProbe) -> RtlOffsetType {
    if probe.scroll_start() > 0.0 {
        return RtlOffsetType::PositiveDescending;
    }
    probe.set_scroll_start(1.0);
    if probe.scroll_start() == 0.0 {
        RtlOffsetType::Negative
    } else {
        RtlOffsetType::PositiveAscending
    }
}

const UNKNOWN: u8 = 0;

static RTL_OFFSET_TYPE: AtomicU8 = AtomicU8::new(UNKNOWN);

fn encode(value: RtlOffsetType) -> u8 {
    match value {
        RtlOffsetType::Negative => 1,
        RtlOffsetType::PositiveDescending => 2,
        RtlOffsetType::PositiveAscending => 3,
    }
}

fn decode(value: u8) -> Option<RtlOffsetType> {
    match value {
        1 => Some(RtlOffsetType::Negative),
        2 => Some(RtlOffsetType::PositiveDescending),
        3 => Some(RtlOffsetType::PositiveAscending),
        _ => None,
    }
}

/// Returns the process-wide RTL convention, running `detect` the first time it is needed.
///
/// The first detected (or overridden) value wins; later `detect` closures are not called.
pub fn rtl_offset_type(detect: impl FnOnce() -> RtlOffsetType) -> RtlOffsetType {
    if let Some(known) = decode(RTL_OFFSET_TYPE.load(Ordering::Acquire)) {
        return known;
    }
    let detected = detect();
    match RTL_OFFSET_TYPE.compare_exchange(
        UNKNOWN,
        encode(detected),
        Ordering::AcqRel,
        Ordering::Acquire,
    ) {
        Ok(_) => {
            adebug!(?detected, "detected RTL offset type");
            detected
        }
        Err(existing) => decode(existing).unwrap_or(detected),
    }
}

/// The cached process-wide convention, if it was detected or overridden.
pub fn cached_rtl_offset_type() -> Option<RtlOffsetType> {
    decode(RTL_OFFSET_TYPE.load(Ordering::Acquire))
}

/// Pins the process-wide convention (`Some`) or forgets it so the next use re-detects (`None`).
pub fn override_rtl_offset_type(value: Option<RtlOffsetType>) {
    RTL_OFFSET_TYPE.store(value.map_or(UNKNOWN, encode), Ordering::Release);
}
