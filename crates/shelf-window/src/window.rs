#![forbid(unsafe_code)]

//! Fixed-height window calculator.
//!
//! Given the item count, a uniform item height, the viewport height and the
//! current scroll offset, [`compute_visible_range`] returns which items must
//! be materialized (strictly visible items plus overscan on each side) and
//! the pixel geometry that keeps the scrollbar sized for the whole list:
//!
//! ```text
//!  0 ┌──────────────┐
//!    │ leading      │  offset_y = render.start * item_height
//!    ├──────────────┤
//!    │ overscan     │
//!    │ visible      │  rendered_height = render.len() * item_height
//!    │ overscan     │
//!    ├──────────────┤
//!    │ trailing     │
//!    └──────────────┘  total_height = len * item_height
//! ```
//!
//! Everything here is O(1) and allocation free; it runs once per scroll
//! event without throttling.

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, ensure_positive};

/// Extra items materialized on each side of the visible window.
pub const DEFAULT_OVERSCAN: usize = 5;

/// The window of a list that must be rendered for one scroll position.
///
/// Both ranges are half-open item indices. `visible` holds the items that
/// intersect `[scroll_top, scroll_top + container_height)`; `render` widens it
/// by the overscan and is what the caller materializes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisibleRange {
    /// Total items in the sequence.
    pub total_len: usize,
    /// Strictly visible items.
    pub visible: Range<usize>,
    /// Visible items plus overscan, clamped to `0..total_len`.
    pub render: Range<usize>,
    /// Uniform item height used for the geometry below.
    pub item_height: f64,
    /// Height of the full logical list (spacer height).
    pub total_height: f64,
    /// Translation of the first rendered item.
    pub offset_y: f64,
    /// Scroll offset after clamping to `[0, max_scroll_top]`.
    pub scroll_top: f64,
}

impl VisibleRange {
    /// The range of an empty sequence: nothing rendered, zero geometry.
    #[must_use]
    pub fn empty(item_height: f64) -> Self {
        Self {
            total_len: 0,
            visible: 0..0,
            render: 0..0,
            item_height,
            total_height: 0.0,
            offset_y: 0.0,
            scroll_top: 0.0,
        }
    }

    /// First rendered index (inclusive). `0` for an empty range.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.render.start
    }

    /// Last rendered index (inclusive), or `None` when nothing is rendered.
    #[must_use]
    pub fn end_index(&self) -> Option<usize> {
        if self.render.is_empty() {
            None
        } else {
            Some(self.render.end - 1)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.render.is_empty()
    }

    /// Number of rendered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.render.len()
    }

    /// Number of strictly visible items.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Whether `index` is materialized by this window.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.render.contains(&index)
    }

    /// Stacked height of the rendered items.
    #[must_use]
    pub fn rendered_height(&self) -> f64 {
        self.render.len() as f64 * self.item_height
    }

    /// Implicit spacer below the rendered items.
    #[must_use]
    pub fn trailing_height(&self) -> f64 {
        (self.total_len - self.render.end) as f64 * self.item_height
    }

    /// Borrow the rendered items out of the caller's sequence.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.end_index() {
            Some(end) => slice_visible_items(items, self.start_index(), end),
            None => &[],
        }
    }
}

/// Largest meaningful scroll offset: the list bottom aligned with the
/// viewport bottom, or `0` when the whole list fits.
#[must_use]
pub fn max_scroll_top(length: usize, item_height: f64, container_height: f64) -> f64 {
    (length as f64 * item_height - container_height).max(0.0)
}

/// Clamp a reported scroll offset into `[0, max_scroll_top]`.
///
/// Wheel bursts and resize races can report offsets past either end; `NaN`
/// is treated as the top of the list.
#[must_use]
pub fn clamp_scroll_top(scroll_top: f64, max_scroll_top: f64) -> f64 {
    if scroll_top.is_nan() {
        return 0.0;
    }
    scroll_top.clamp(0.0, max_scroll_top.max(0.0))
}

/// Compute the window of items to render for one scroll position.
///
/// Returns [`WindowError::InvalidConfiguration`](crate::WindowError) when
/// either height is zero, negative or not finite. `scroll_top` is clamped,
/// never rejected.
pub fn compute_visible_range(
    length: usize,
    item_height: f64,
    container_height: f64,
    scroll_top: f64,
    overscan: usize,
) -> Result<VisibleRange> {
    let item_height = ensure_positive("item_height", item_height)?;
    let container_height = ensure_positive("container_height", container_height)?;

    if length == 0 {
        return Ok(VisibleRange::empty(item_height));
    }

    let max_scroll = max_scroll_top(length, item_height, container_height);
    let scroll_top = clamp_scroll_top(scroll_top, max_scroll);

    // f64 -> usize casts saturate, so very long lists cannot wrap.
    let raw_start = ((scroll_top / item_height).floor() as usize).min(length - 1);
    let raw_end = (((scroll_top + container_height) / item_height).ceil() as usize)
        .max(raw_start + 1)
        .min(length);

    let render_start = raw_start.saturating_sub(overscan);
    let render_end = raw_end.saturating_add(overscan).min(length);

    Ok(VisibleRange {
        total_len: length,
        visible: raw_start..raw_end,
        render: render_start..render_end,
        item_height,
        total_height: length as f64 * item_height,
        offset_y: render_start as f64 * item_height,
        scroll_top,
    })
}

/// Inclusive sub-slice `sequence[start_index..=end_index]`.
///
/// Returns an empty slice when `start_index > end_index` or the start lies
/// past the end of the sequence; an `end_index` past the end is clamped.
#[must_use]
pub fn slice_visible_items<T>(sequence: &[T], start_index: usize, end_index: usize) -> &[T] {
    if start_index > end_index || start_index >= sequence.len() {
        return &[];
    }
    let end = end_index.min(sequence.len() - 1);
    &sequence[start_index..=end]
}
