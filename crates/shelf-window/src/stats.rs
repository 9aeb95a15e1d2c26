#![forbid(unsafe_code)]

//! Per-frame window metrics for JSONL session logs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::window::VisibleRange;

/// One scroll frame, flattened for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowFrameStats {
    /// Monotonic frame counter within the session.
    pub frame: u64,
    /// Scroll offset after clamping.
    pub scroll_top: f64,
    /// Items in the list.
    pub total_len: usize,
    /// Strictly visible items.
    pub visible_len: usize,
    /// Materialized items (visible plus overscan).
    pub render_len: usize,
    /// First materialized index; `None` for an empty list.
    pub start_index: Option<usize>,
    /// Last materialized index; `None` for an empty list.
    pub end_index: Option<usize>,
    /// Spacer height.
    pub total_height: f64,
    /// Translation of the inner group.
    pub offset_y: f64,
    /// Viewport height this frame.
    pub container_height: f64,
}

impl WindowFrameStats {
    #[must_use]
    pub fn from_range(frame: u64, range: &VisibleRange, container_height: f64) -> Self {
        let empty = range.is_empty();
        Self {
            frame,
            scroll_top: range.scroll_top,
            total_len: range.total_len,
            visible_len: range.visible_len(),
            render_len: range.len(),
            start_index: (!empty).then_some(range.start_index()),
            end_index: range.end_index(),
            total_height: range.total_height,
            offset_y: range.offset_y,
            container_height,
        }
    }

    /// Fraction of the list that is materialized, in `[0, 1]`.
    #[must_use]
    pub fn render_ratio(&self) -> f64 {
        if self.total_len == 0 {
            0.0
        } else {
            self.render_len as f64 / self.total_len as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::compute_visible_range;

    #[test]
    fn stats_from_mid_scroll_range() {
        let range = compute_visible_range(1000, 50.0, 500.0, 2500.0, 5).unwrap();
        let stats = WindowFrameStats::from_range(7, &range, 500.0);
        assert_eq!(stats.frame, 7);
        assert_eq!(stats.visible_len, 10);
        assert_eq!(stats.render_len, 20);
        assert_eq!(stats.start_index, Some(45));
        assert_eq!(stats.end_index, Some(64));
        assert_eq!(stats.offset_y, 2250.0);
        assert!((stats.render_ratio() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn stats_for_empty_list_have_no_indices() {
        let range = compute_visible_range(0, 50.0, 500.0, 0.0, 5).unwrap();
        let stats = WindowFrameStats::from_range(0, &range, 500.0);
        assert_eq!(stats.start_index, None);
        assert_eq!(stats.end_index, None);
        assert_eq!(stats.render_ratio(), 0.0);
    }
}
