use crate::*;

use core::sync::atomic::{AtomicUsize, Ordering};
use listwindow::{Align, Axis, Dimensions, Direction, IndexError, ItemSize, VirtualizerOptions};
use std::sync::Arc;

const METRICS: ScrollMetrics = ScrollMetrics {
    scroll_size: 1000.0,
    client_size: 200.0,
};

const CONVENTIONS: [RtlOffsetType; 3] = [
    RtlOffsetType::Negative,
    RtlOffsetType::PositiveDescending,
    RtlOffsetType::PositiveAscending,
];

fn list_options() -> VirtualizerOptions {
    VirtualizerOptions::new(1000, 50.0).with_initial_dimensions(Some(Dimensions::new(400.0, 300.0)))
}

fn rtl_options() -> VirtualizerOptions {
    VirtualizerOptions::new(1000, 50.0)
        .with_axis(Axis::Horizontal)
        .with_direction(Direction::Rtl)
        .with_initial_dimensions(Some(Dimensions::new(300.0, 400.0)))
}

fn list_metrics() -> ScrollMetrics {
    ScrollMetrics::new(50_000.0, 400.0)
}

#[test]
fn rtl_offsets_round_trip_for_every_convention() {
    for rtl in CONVENTIONS {
        let adapter = DirectionAdapter::new(Axis::Horizontal, Direction::Rtl, rtl);
        assert_eq!(adapter.rtl_offset_type(), Some(rtl));
        for x in [0.0, 1.0, 100.5, 799.0, 800.0] {
            let raw = adapter.from_logical(x, METRICS);
            assert_eq!(adapter.to_logical(raw, METRICS), x, "{rtl:?} x={x}");
        }
    }
}

#[test]
fn rtl_conversions_follow_each_convention() {
    let negative = DirectionAdapter::new(Axis::Horizontal, Direction::Rtl, RtlOffsetType::Negative);
    assert_eq!(negative.to_logical(-150.0, METRICS), 150.0);
    assert_eq!(negative.from_logical(150.0, METRICS), -150.0);

    let descending = DirectionAdapter::new(
        Axis::Horizontal,
        Direction::Rtl,
        RtlOffsetType::PositiveDescending,
    );
    // The start edge is reported as the maximum raw position.
    assert_eq!(descending.to_logical(800.0, METRICS), 0.0);
    assert_eq!(descending.to_logical(650.0, METRICS), 150.0);
    assert_eq!(descending.from_logical(800.0, METRICS), 0.0);

    let ascending = DirectionAdapter::new(
        Axis::Horizontal,
        Direction::Rtl,
        RtlOffsetType::PositiveAscending,
    );
    assert_eq!(ascending.to_logical(150.0, METRICS), 150.0);
}

#[test]
fn vertical_and_ltr_offsets_pass_through() {
    for (axis, direction) in [
        (Axis::Vertical, Direction::Ltr),
        (Axis::Vertical, Direction::Rtl),
        (Axis::Horizontal, Direction::Ltr),
    ] {
        let adapter = DirectionAdapter::new(axis, direction, RtlOffsetType::Negative);
        assert_eq!(adapter.rtl_offset_type(), None);
        assert_eq!(adapter.to_logical(-5.0, METRICS), -5.0);
        assert_eq!(adapter.from_logical(42.0, METRICS), 42.0);
    }
    assert_eq!(DirectionAdapter::identity(), DirectionAdapter::default());
}

struct FakeProbe {
    start: f64,
    min: f64,
    max: f64,
    writes: usize,
}

impl FakeProbe {
    fn new(start: f64, min: f64, max: f64) -> Self {
        Self {
            start,
            min,
            max,
            writes: 0,
        }
    }
}

impl RtlProbe for FakeProbe {
    fn scroll_start(&self) -> f64 {
        self.start
    }

    fn set_scroll_start(&mut self, value: f64) {
        self.writes += 1;
        self.start = value.clamp(self.min, self.max);
    }
}

#[test]
fn rtl_detection_classifies_conventions() {
    let mut descending = FakeProbe::new(100.0, 0.0, 100.0);
    assert_eq!(
        detect_rtl_offset_type(&mut descending),
        RtlOffsetType::PositiveDescending
    );
    assert_eq!(descending.writes, 0);

    let mut negative = FakeProbe::new(0.0, -100.0, 0.0);
    assert_eq!(detect_rtl_offset_type(&mut negative), RtlOffsetType::Negative);

    let mut ascending = FakeProbe::new(0.0, 0.0, 100.0);
    assert_eq!(
        detect_rtl_offset_type(&mut ascending),
        RtlOffsetType::PositiveAscending
    );
}

// The only test touching the process-wide convention; keep it that way so parallel tests cannot
// race on it.
#[test]
fn process_wide_convention_is_detected_once_and_overridable() {
    override_rtl_offset_type(None);
    assert_eq!(cached_rtl_offset_type(), None);

    let calls = AtomicUsize::new(0);
    let detect = || {
        calls.fetch_add(1, Ordering::Relaxed);
        RtlOffsetType::PositiveDescending
    };
    assert_eq!(rtl_offset_type(detect), RtlOffsetType::PositiveDescending);
    assert_eq!(rtl_offset_type(detect), RtlOffsetType::PositiveDescending);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    let adapter = DirectionAdapter::detect(Axis::Horizontal, Direction::Rtl, || {
        panic!("already detected")
    });
    assert_eq!(
        adapter.rtl_offset_type(),
        Some(RtlOffsetType::PositiveDescending)
    );

    override_rtl_offset_type(Some(RtlOffsetType::Negative));
    assert_eq!(cached_rtl_offset_type(), Some(RtlOffsetType::Negative));

    let mut surface =
        MemorySurface::new(ScrollMetrics::new(50_000.0, 400.0)).with_rtl(RtlOffsetType::Negative);
    surface.interactive = false;
    let c = Controller::new(rtl_options(), surface).unwrap();
    assert_eq!(
        c.direction_adapter().rtl_offset_type(),
        Some(RtlOffsetType::Negative)
    );

    override_rtl_offset_type(None);
    assert_eq!(cached_rtl_offset_type(), None);
    assert_eq!(
        rtl_offset_type(|| RtlOffsetType::PositiveAscending),
        RtlOffsetType::PositiveAscending
    );
    override_rtl_offset_type(None);
}

#[test]
fn resize_reactor_reports_only_changes() {
    let fired = Arc::new(AtomicUsize::new(0));
    let fired2 = Arc::clone(&fired);
    let mut r = ResizeReactor::new(Axis::Vertical, PinnedSize::default()).with_on_resize(Some(
        move |_: Dimensions, _: Option<Dimensions>| {
            fired2.fetch_add(1, Ordering::Relaxed);
        },
    ));
    assert!(r.is_observing());
    assert_eq!(r.dimensions(), None);

    let first = Dimensions::new(400.0, 300.0);
    assert_eq!(
        r.observe(first),
        Some(ResizeChange {
            next: first,
            previous: None
        })
    );
    assert_eq!(r.observe(first), None);

    let second = Dimensions::new(500.0, 300.0);
    assert_eq!(
        r.observe(second),
        Some(ResizeChange {
            next: second,
            previous: Some(first)
        })
    );
    assert_eq!(r.dimensions(), Some(second));
    assert_eq!(fired.load(Ordering::Relaxed), 2);
}

#[test]
fn pinned_axis_size_disables_observation() {
    let pinned = PinnedSize {
        height: Some(500.0),
        width: None,
    };
    let mut r = ResizeReactor::new(Axis::Vertical, pinned);
    assert!(!r.is_observing());
    assert_eq!(r.observe(Dimensions::new(400.0, 300.0)), None);
    assert_eq!(r.dimensions(), Some(Dimensions::new(500.0, 0.0)));

    let r = ResizeReactor::new(Axis::Vertical, pinned)
        .with_default(Some(Dimensions::new(400.0, 300.0)));
    assert_eq!(r.dimensions(), Some(Dimensions::new(500.0, 300.0)));

    // A pinned cross-axis size still lets the scroll axis follow resizes.
    let mut r = ResizeReactor::new(
        Axis::Vertical,
        PinnedSize {
            height: None,
            width: Some(120.0),
        },
    );
    assert!(r.is_observing());
    let change = r.observe(Dimensions::new(400.0, 300.0)).unwrap();
    assert_eq!(change.next, Dimensions::new(400.0, 120.0));
}

#[test]
fn detached_surface_applies_scroll_synchronously() {
    let surface = MemorySurface::detached(list_metrics());
    let mut c = Controller::new(list_options(), surface).unwrap();

    let offset = c
        .scroll_to_index(ScrollToIndex::new(999).with_align(Align::End))
        .unwrap();
    assert_eq!(offset, 49_600.0);
    assert_eq!(c.surface().scroll_start, 0.0);

    let v = c.virtualizer();
    assert_eq!(v.scroll_offset(), 49_600.0);
    assert!(v.scroll_update_was_requested());
    assert_eq!(v.visible_range().start_index, 992);
    assert_eq!(v.visible_range().end_index, 1000);
}

#[test]
fn interactive_surface_is_commanded_then_reports_back() {
    let surface = MemorySurface::new(list_metrics());
    let mut c = Controller::new(list_options(), surface).unwrap();

    let offset = c
        .scroll_to_index(
            ScrollToIndex::new(100)
                .with_align(Align::Start)
                .with_behavior(ScrollBehavior::Smooth),
        )
        .unwrap();
    assert_eq!(offset, 5000.0);
    assert_eq!(c.surface().scroll_start, 5000.0);
    assert_eq!(c.surface().last_behavior, Some(ScrollBehavior::Smooth));
    // Nothing is published until the surface reports the scroll.
    assert_eq!(c.virtualizer().scroll_offset(), 0.0);

    assert_eq!(c.on_scroll(10), 5000.0);
    let v = c.virtualizer();
    assert_eq!(v.visible_range().start_index, 100);
    assert!(v.scroll_update_was_requested());
    assert!(v.is_scrolling());

    c.tick(100);
    assert!(c.virtualizer().is_scrolling());
    c.tick(200);
    assert!(!c.virtualizer().is_scrolling());

    c.surface_mut().scroll_start = 4900.0;
    assert_eq!(c.on_scroll(300), 4900.0);
    let v = c.virtualizer();
    assert!(!v.scroll_update_was_requested());
    assert_eq!(v.scroll_direction(), listwindow::ScrollDirection::Backward);
}

#[test]
fn negative_rtl_controller_translates_both_ways() {
    let surface = MemorySurface::new(list_metrics()).with_rtl(RtlOffsetType::Negative);
    let mut c =
        Controller::with_rtl_offset_type(rtl_options(), surface, RtlOffsetType::Negative).unwrap();
    assert_eq!(c.virtualizer().container_size(), 400.0);

    let offset = c
        .scroll_to_index(ScrollToIndex::new(10).with_align(Align::Start))
        .unwrap();
    assert_eq!(offset, 500.0);
    assert_eq!(c.surface().scroll_start, -500.0);

    assert_eq!(c.on_scroll(0), 500.0);
    assert_eq!(c.virtualizer().visible_range().start_index, 10);
}

#[test]
fn descending_rtl_controller_starts_at_max_raw_position() {
    let surface = MemorySurface::new(list_metrics()).with_rtl(RtlOffsetType::PositiveDescending);
    assert_eq!(surface.scroll_start, 49_600.0);
    let mut c =
        Controller::with_rtl_offset_type(rtl_options(), surface, RtlOffsetType::PositiveDescending)
            .unwrap();

    assert_eq!(c.on_scroll(0), 0.0);
    assert_eq!(c.virtualizer().visible_range().start_index, 0);

    assert_eq!(c.scroll_to_offset(1000.0, ScrollBehavior::Instant), 1000.0);
    assert_eq!(c.surface().scroll_start, 48_600.0);
    assert_eq!(c.on_scroll(16), 1000.0);
    assert_eq!(c.virtualizer().visible_range().start_index, 20);
}

#[test]
fn requested_scroll_survives_inexact_round_trip() {
    // 1000.3 - 0.1 - 0.3 does not convert back to exactly 0.3.
    let metrics = ScrollMetrics::new(1000.3, 0.1);
    let surface = MemorySurface::new(metrics).with_rtl(RtlOffsetType::PositiveDescending);
    let mut c =
        Controller::with_rtl_offset_type(rtl_options(), surface, RtlOffsetType::PositiveDescending)
            .unwrap();
    let adapter = c.direction_adapter();
    assert_ne!(
        adapter.to_logical(adapter.from_logical(0.3, metrics), metrics),
        0.3
    );

    c.scroll_to_offset(0.3, ScrollBehavior::Auto);
    let applied = c.on_scroll(5);
    assert!((applied - 0.3).abs() < 1e-9);
    assert!(c.virtualizer().scroll_update_was_requested());

    c.surface_mut().scroll_start = 990.0;
    c.on_scroll(10);
    assert!(!c.virtualizer().scroll_update_was_requested());
}

#[test]
fn overscrolled_positions_are_clamped() {
    let mut c = Controller::new(list_options(), MemorySurface::new(list_metrics())).unwrap();

    c.surface_mut().scroll_start = -30.0;
    assert_eq!(c.on_scroll(0), 0.0);

    c.surface_mut().scroll_start = 60_000.0;
    assert_eq!(c.on_scroll(16), 49_600.0);
    assert_eq!(c.virtualizer().visible_range().stop_index(), Some(999));
}

#[test]
fn on_resize_updates_percent_sizes() {
    let options = VirtualizerOptions::new(1000, ItemSize::percent("10%"))
        .with_initial_dimensions(Some(Dimensions::new(400.0, 300.0)));
    let mut c = Controller::new(options, MemorySurface::detached(list_metrics())).unwrap();
    assert_eq!(c.virtualizer().bounds(1).unwrap().offset, 40.0);

    assert!(!c.on_resize(Dimensions::new(400.0, 300.0)).unwrap());
    assert!(c.on_resize(Dimensions::new(800.0, 300.0)).unwrap());
    assert_eq!(c.virtualizer().container_size(), 800.0);
    assert_eq!(c.virtualizer().bounds(1).unwrap().offset, 80.0);
}

#[test]
fn pinned_resize_reactor_overrides_container() {
    let reactor = ResizeReactor::new(
        Axis::Vertical,
        PinnedSize {
            height: Some(200.0),
            width: None,
        },
    );
    let mut c = Controller::new(list_options(), MemorySurface::detached(list_metrics()))
        .unwrap()
        .with_resize_reactor(reactor)
        .unwrap();
    assert_eq!(c.virtualizer().container_size(), 200.0);
    assert!(!c.on_resize(Dimensions::new(400.0, 300.0)).unwrap());
    assert_eq!(c.virtualizer().container_size(), 200.0);
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut c = Controller::new(list_options(), MemorySurface::new(list_metrics())).unwrap();
    assert_eq!(
        c.scroll_to_index(ScrollToIndex::new(1000)),
        Err(IndexError {
            index: 1000,
            count: 1000
        })
    );
    assert_eq!(c.surface().last_behavior, None);
}

#[test]
fn layout_change_rebuilds_direction_adapter() {
    let mut c = Controller::with_rtl_offset_type(
        list_options(),
        MemorySurface::detached(list_metrics()),
        RtlOffsetType::PositiveDescending,
    )
    .unwrap();
    assert_eq!(c.direction_adapter().rtl_offset_type(), None);

    c.update_options(|o| {
        o.axis = Axis::Horizontal;
        o.direction = Direction::Rtl;
    })
    .unwrap();
    assert_eq!(
        c.direction_adapter().rtl_offset_type(),
        Some(RtlOffsetType::PositiveDescending)
    );
    assert_eq!(c.resize_reactor().axis(), Axis::Horizontal);
}
