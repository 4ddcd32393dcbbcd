use alloc::sync::Arc;
use core::fmt;

use listwindow::{Axis, Dimensions};

/// A resize callback: `(next, previous)`.
pub type OnResize = Arc<dyn Fn(Dimensions, Option<Dimensions>) + Send + Sync>;

/// Dimensions fixed by the host (e.g. explicit styling) that no resize signal may override.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinnedSize {
    pub height: Option<f64>,
    pub width: Option<f64>,
}

impl PinnedSize {
    pub fn for_axis(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }

    fn is_empty(&self) -> bool {
        self.height.is_none() && self.width.is_none()
    }

    fn overlay(&self, dimensions: Dimensions) -> Dimensions {
        Dimensions {
            height: self.height.unwrap_or(dimensions.height),
            width: self.width.unwrap_or(dimensions.width),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeChange {
    pub next: Dimensions,
    pub previous: Option<Dimensions>,
}

/// Filters container resize signals down to actual dimension changes.
///
/// The reactor does not care how signals are delivered; feed it every report from your resize
/// observer and forward the returned [`ResizeChange`]s.
#[derive(Clone)]
pub struct ResizeReactor {
    axis: Axis,
    pinned: PinnedSize,
    current: Option<Dimensions>,
    on_resize: Option<OnResize>,
}

impl ResizeReactor {
    pub fn new(axis: Axis, pinned: PinnedSize) -> Self {
        Self {
            axis,
            pinned,
            current: None,
            on_resize: None,
        }
    }

    /// Seeds the dimensions to report before the first signal arrives.
    pub fn with_default(mut self, dimensions: Option<Dimensions>) -> Self {
        self.current = dimensions.map(|d| self.pinned.overlay(d));
        self
    }

    pub fn with_on_resize(
        mut self,
        on_resize: Option<impl Fn(Dimensions, Option<Dimensions>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_resize = on_resize.map(|f| Arc::new(f) as _);
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    pub fn pinned(&self) -> PinnedSize {
        self.pinned
    }

    /// `false` when the scroll axis size is pinned: signals are then ignored entirely.
    pub fn is_observing(&self) -> bool {
        self.pinned.for_axis(self.axis).is_none()
    }

    /// Current dimensions with pinned values applied.
    pub fn dimensions(&self) -> Option<Dimensions> {
        match self.current {
            Some(d) => Some(d),
            None if !self.pinned.is_empty() => Some(self.pinned.overlay(Dimensions::default())),
            None => None,
        }
    }

    /// Handles a resize signal. Returns the change if the dimensions actually changed.
    pub fn observe(&mut self, next: Dimensions) -> Option<ResizeChange> {
        if !self.is_observing() {
            return None;
        }
        let next = self.pinned.overlay(next);
        if self.current == Some(next) {
            return None;
        }
        let previous = self.current.replace(next);
        atrace!(
            height = next.height,
            width = next.width,
            "container resized"
        );
        if let Some(cb) = &self.on_resize {
            cb(next, previous);
        }
        Some(ResizeChange { next, previous })
    }
}

impl fmt::Debug for ResizeReactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeReactor")
            .field("axis", &self.axis)
            .field("pinned", &self.pinned)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
