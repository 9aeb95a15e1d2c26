//! Property-based invariant tests for the window calculator.
//!
//! 1. Every item intersecting the viewport is rendered.
//! 2. The window never exceeds ceil(C/H) + 2*overscan + 1 items.
//! 3. Scrolling forward never moves either end of the window backwards.
//! 4. offset_y + rendered + trailing == total_height.
//! 5. Identical inputs give identical windows.
//! 6. Indices stay inside 0..len and the start bound holds.
//! 7. Non-positive heights are always rejected.

use proptest::prelude::*;
use shelf_window::{
    ScrollAlign, ScrollContainer, WindowConfig, compute_visible_range, slice_visible_items,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn height() -> impl Strategy<Value = f64> {
    prop_oneof![1.0f64..200.0, (1u32..=120).prop_map(f64::from)]
}

fn scroll() -> impl Strategy<Value = f64> {
    prop_oneof![0.0f64..1_000_000.0, (0u32..20_000).prop_map(|v| f64::from(v) * 10.0)]
}

/// Indices whose span `[i*h, (i+1)*h)` intersects `[top, top+c)`.
fn geometrically_visible(len: usize, h: f64, c: f64, top: f64) -> Vec<usize> {
    (0..len)
        .filter(|&i| {
            let item_top = i as f64 * h;
            let item_bottom = item_top + h;
            item_bottom > top && item_top < top + c
        })
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Full coverage
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_visible_item_is_rendered(
        len in 0usize..400,
        h in height(),
        c in height(),
        top in scroll(),
        overscan in 0usize..8,
    ) {
        let range = compute_visible_range(len, h, c, top, overscan).unwrap();
        for i in geometrically_visible(len, h, c, range.scroll_top) {
            prop_assert!(
                range.contains(i),
                "item {} visible at scroll {} but render is {:?}", i, range.scroll_top, range.render
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Minimality bound
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn window_size_is_bounded(
        len in 0usize..1_000_000,
        h in height(),
        c in height(),
        top in scroll(),
        overscan in 0usize..16,
    ) {
        let range = compute_visible_range(len, h, c, top, overscan).unwrap();
        let bound = (c / h).ceil() as usize + 2 * overscan + 1;
        prop_assert!(range.len() <= bound, "{} > {}", range.len(), bound);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn forward_scroll_never_moves_window_back(
        len in 1usize..5_000,
        h in height(),
        c in height(),
        a in scroll(),
        b in scroll(),
        overscan in 0usize..8,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let first = compute_visible_range(len, h, c, lo, overscan).unwrap();
        let second = compute_visible_range(len, h, c, hi, overscan).unwrap();
        prop_assert!(first.render.start <= second.render.start);
        prop_assert!(first.render.end <= second.render.end);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Scrollbar geometry
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn geometry_adds_up(
        len in 0usize..100_000,
        h in height(),
        c in height(),
        top in scroll(),
        overscan in 0usize..8,
    ) {
        let range = compute_visible_range(len, h, c, top, overscan).unwrap();
        let sum = range.offset_y + range.rendered_height() + range.trailing_height();
        prop_assert!((sum - range.total_height).abs() <= range.total_height * 1e-9 + 1e-9);
        prop_assert!(range.offset_y >= 0.0);
        prop_assert!(range.offset_y <= range.total_height);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn identical_inputs_identical_windows(
        len in 0usize..100_000,
        h in height(),
        c in height(),
        top in scroll(),
        overscan in 0usize..8,
    ) {
        let a = compute_visible_range(len, h, c, top, overscan).unwrap();
        let b = compute_visible_range(len, h, c, top, overscan).unwrap();
        prop_assert_eq!(a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Index bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn indices_stay_in_bounds(
        len in 0usize..10_000,
        h in height(),
        c in height(),
        top in prop_oneof![scroll(), Just(-1e9), Just(f64::INFINITY), Just(f64::NAN)],
        overscan in 0usize..8,
    ) {
        let range = compute_visible_range(len, h, c, top, overscan).unwrap();
        prop_assert!(range.render.end <= len);
        prop_assert!(range.render.start <= range.render.end);
        prop_assert!(range.render.start <= range.visible.start);
        prop_assert!(range.visible.end <= range.render.end);
        prop_assert_eq!(range.is_empty(), len == 0);

        if len > 0 {
            let raw_start = (range.scroll_top / h).floor() as usize;
            prop_assert!(range.start_index() >= raw_start.saturating_sub(overscan).min(len - 1));
            let raw_end = ((range.scroll_top + c) / h).ceil() as usize;
            prop_assert!(range.end_index().unwrap() <= (len - 1).min(raw_end + overscan));
        }

        let items: Vec<usize> = (0..len).collect();
        let slice = match range.end_index() {
            Some(end) => slice_visible_items(&items, range.start_index(), end),
            None => &[],
        };
        prop_assert_eq!(slice.len(), range.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Invalid configuration
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn non_positive_heights_rejected(
        len in 0usize..1_000,
        bad in prop_oneof![-1_000.0f64..=0.0, Just(f64::NAN), Just(f64::NEG_INFINITY)],
        good in height(),
    ) {
        prop_assert!(compute_visible_range(len, bad, good, 0.0, 5).is_err());
        prop_assert!(compute_visible_range(len, good, bad, 0.0, 5).is_err());
        prop_assert!(WindowConfig::new(bad, good, 5).is_err());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Container: scroll_to_index always makes the target visible
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_to_index_makes_target_visible(
        len in 1usize..5_000,
        h in height(),
        c in height(),
        start in scroll(),
        target in 0usize..6_000,
        align in prop_oneof![
            Just(ScrollAlign::Start),
            Just(ScrollAlign::Center),
            Just(ScrollAlign::End),
            Just(ScrollAlign::Auto),
        ],
    ) {
        let mut view = ScrollContainer::new(WindowConfig::new(h, c, 0).unwrap()).unwrap();
        view.set_scroll_top(start);
        view.scroll_to_index(target, len, align);
        let range = view.visible_range(len);
        prop_assert!(range.contains(target.min(len - 1)), "target {} not in {:?}", target, range.render);
    }
}
