use listwindow::{Axis, Dimensions, Direction, IndexError, Virtualizer, VirtualizerOptions};

use crate::{
    DirectionAdapter, PinnedSize, ResizeReactor, RtlOffsetType, ScrollBehavior, ScrollSurface,
    ScrollToIndex,
};

/// A framework-neutral controller that wires a [`ScrollSurface`] to a `listwindow::Virtualizer`.
///
/// The controller owns the surface handle, the RTL coordinate adapter and the resize filter, so
/// the virtualizer only ever sees logical (left-to-right) offsets. Adapters drive it by calling:
/// - `on_scroll(now_ms)` when the surface reports a scroll
/// - `on_resize(dimensions)` when the container's resize observer fires
/// - `tick(now_ms)` from a timer, for `is_scrolling` debouncing
///
/// Imperative scrolls (`scroll_to_index` / `scroll_to_offset`) command the surface. A surface that
/// ignores the command (e.g. not mounted yet) gets the offset applied synchronously instead, so
/// the published ranges always follow the request.
#[derive(Clone, Debug)]
pub struct Controller<S, P = ()> {
    v: Virtualizer<P>,
    surface: S,
    direction: DirectionAdapter,
    resize: ResizeReactor,
    rtl_override: Option<RtlOffsetType>,
    requested_raw: Option<f64>,
}

impl<S: ScrollSurface, P: Clone + PartialEq> Controller<S, P> {
    /// Creates a controller, detecting the RTL convention through `surface` if this is the first
    /// horizontal RTL list in the process.
    pub fn new(options: VirtualizerOptions<P>, surface: S) -> listwindow::Result<Self> {
        Self::build(options, surface, None)
    }

    /// Creates a controller with a fixed RTL convention, bypassing process-wide detection.
    pub fn with_rtl_offset_type(
        options: VirtualizerOptions<P>,
        surface: S,
        rtl_offset_type: RtlOffsetType,
    ) -> listwindow::Result<Self> {
        Self::build(options, surface, Some(rtl_offset_type))
    }

    fn build(
        options: VirtualizerOptions<P>,
        mut surface: S,
        rtl_override: Option<RtlOffsetType>,
    ) -> listwindow::Result<Self> {
        let direction =
            direction_adapter(&mut surface, options.axis, options.direction, rtl_override);
        let resize = ResizeReactor::new(options.axis, PinnedSize::default())
            .with_default(options.initial_dimensions);
        let v = Virtualizer::new(options)?;
        adebug!(rtl = ?direction.rtl_offset_type(), "Controller::new");
        Ok(Self {
            v,
            surface,
            direction,
            resize,
            rtl_override,
            requested_raw: None,
        })
    }

    /// Replaces the resize filter, e.g. to pin a size or attach an `on_resize` callback.
    ///
    /// The reactor's current dimensions (if any) are applied right away.
    pub fn with_resize_reactor(mut self, mut resize: ResizeReactor) -> listwindow::Result<Self> {
        resize.set_axis(self.v.axis());
        if let Some(dimensions) = resize.dimensions() {
            self.v.set_dimensions(dimensions)?;
        }
        self.resize = resize;
        Ok(self)
    }

    pub fn virtualizer(&self) -> &Virtualizer<P> {
        &self.v
    }

    pub fn virtualizer_mut(&mut self) -> &mut Virtualizer<P> {
        &mut self.v
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn direction_adapter(&self) -> DirectionAdapter {
        self.direction
    }

    pub fn resize_reactor(&self) -> &ResizeReactor {
        &self.resize
    }

    pub fn into_parts(self) -> (Virtualizer<P>, S) {
        (self.v, self.surface)
    }

    /// Replaces the options. A changed axis or direction rebuilds the coordinate adapter.
    pub fn set_options(&mut self, options: VirtualizerOptions<P>) -> listwindow::Result<()> {
        let (axis, direction) = (options.axis, options.direction);
        let layout_changed = axis != self.v.axis() || direction != self.v.direction();
        self.v.set_options(options)?;
        if layout_changed {
            self.direction =
                direction_adapter(&mut self.surface, axis, direction, self.rtl_override);
            self.resize.set_axis(axis);
            self.requested_raw = None;
        }
        Ok(())
    }

    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut VirtualizerOptions<P>),
    ) -> listwindow::Result<()> {
        let mut next = self.v.options().clone();
        f(&mut next);
        self.set_options(next)
    }

    /// Call this when the surface reports a scroll.
    ///
    /// The raw position is translated to a logical offset and clamped to the surface's scroll
    /// range, which swallows elastic overscroll. Returns the applied logical offset.
    pub fn on_scroll(&mut self, now_ms: u64) -> f64 {
        let metrics = self.surface.metrics();
        let raw = self.surface.scroll_start();
        let logical = self
            .direction
            .to_logical(raw, metrics)
            .clamp(0.0, metrics.max_scroll_start());
        atrace!(raw, logical, now_ms, "Controller::on_scroll");

        // Matched on the raw value: a raw/logical round trip is not exact in floating point.
        if self.requested_raw.take() == Some(raw) {
            self.v.batch_update(|v| {
                v.scroll_to_offset(logical);
                v.notify_scroll_event(now_ms);
            });
        } else {
            self.v.apply_scroll_offset_event(logical, now_ms);
        }
        self.v.scroll_offset()
    }

    /// Call this when the container's resize observer fires.
    ///
    /// Returns `true` if the dimensions changed and were applied.
    pub fn on_resize(&mut self, dimensions: Dimensions) -> listwindow::Result<bool> {
        let Some(change) = self.resize.observe(dimensions) else {
            return Ok(false);
        };
        self.v.set_dimensions(change.next)?;
        Ok(true)
    }

    /// Runs `is_scrolling` debouncing.
    pub fn tick(&mut self, now_ms: u64) {
        self.v.update_scrolling(now_ms);
    }

    /// Plans the offset for `request` and commands the surface to scroll there.
    ///
    /// Returns the planned logical offset.
    pub fn scroll_to_index(&mut self, request: ScrollToIndex) -> Result<f64, IndexError> {
        let offset = self.v.scroll_to_index_offset(request.index, request.align)?;
        adebug!(
            index = request.index,
            align = ?request.align,
            offset,
            "Controller::scroll_to_index"
        );
        Ok(self.command(offset, request.behavior))
    }

    /// Commands the surface to scroll to a logical offset (negative values scroll to `0`).
    ///
    /// Returns the applied logical offset.
    pub fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior) -> f64 {
        self.command(offset.max(0.0), behavior)
    }

    fn command(&mut self, offset: f64, behavior: ScrollBehavior) -> f64 {
        let raw = self.direction.from_logical(offset, self.surface.metrics());
        if self.surface.scroll_to(raw, behavior) {
            self.requested_raw = Some(raw);
            offset
        } else {
            atrace!(offset, "surface ignored scroll command; applying directly");
            self.requested_raw = None;
            self.v.scroll_to_offset(offset)
        }
    }
}

fn direction_adapter<S: ScrollSurface>(
    surface: &mut S,
    axis: Axis,
    direction: Direction,
    rtl_override: Option<RtlOffsetType>,
) -> DirectionAdapter {
    match rtl_override {
        Some(rtl) => DirectionAdapter::new(axis, direction, rtl),
        None => DirectionAdapter::detect(axis, direction, || surface.detect_rtl_offset_type()),
    }
}
