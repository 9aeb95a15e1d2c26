#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shelf_window::{ScrollAlign, ScrollContainer, WindowConfig, compute_visible_range};

#[derive(Debug, Arbitrary)]
struct Input {
    length: u32,
    item_height: f64,
    container_height: f64,
    scroll_top: f64,
    overscan: u8,
    jump_to: u32,
}

fn valid_height(h: f64) -> bool {
    h.is_finite() && h > 0.0
}

fuzz_target!(|input: Input| {
    let length = input.length as usize;
    let overscan = usize::from(input.overscan);

    let Ok(range) = compute_visible_range(
        length,
        input.item_height,
        input.container_height,
        input.scroll_top,
        overscan,
    ) else {
        // Only bad heights may be rejected.
        assert!(!valid_height(input.item_height) || !valid_height(input.container_height));
        return;
    };

    // Post-conditions that must always hold:
    assert!(range.render.end <= length, "render end past list");
    assert!(range.render.start <= range.render.end);
    assert!(range.render.start <= range.visible.start);
    assert!(range.visible.end <= range.render.end);
    assert_eq!(range.is_empty(), length == 0);
    assert!(range.offset_y >= 0.0 && range.offset_y <= range.total_height);
    assert!(range.scroll_top >= 0.0);

    let config = WindowConfig {
        item_height: input.item_height,
        container_height: input.container_height,
        overscan,
    };
    let mut view = ScrollContainer::new(config).expect("heights validated above");
    view.set_scroll_top(input.scroll_top);
    view.scroll_to_index(input.jump_to as usize, length, ScrollAlign::Auto);
    let layout = view.layout(length);
    assert!(layout.range.render.end <= length);
});
