#![forbid(unsafe_code)]

//! Stateful scroll container around the window calculator.
//!
//! [`ScrollContainer`] owns the one time-varying input, `scroll_top`, and
//! turns it into the three things a host view needs each frame:
//!
//! 1. an outer scrollable region of `container_height`,
//! 2. a spacer of `total_height` so the scrollbar reflects the whole list,
//! 3. an inner group translated by `offset_y` holding only the rendered items.
//!
//! Updates are synchronous: every scroll event stores the new offset and the
//! next [`ScrollContainer::layout`] or [`ScrollContainer::render`] call
//! recomputes the window. There is no debouncing or batching.
//!
//! The container never owns the items. Callers pass the current slice to
//! [`ScrollContainer::render`] along with a [`RenderItem`] (any
//! `FnMut(&T, usize) -> R` works). It does remember the last length it was
//! asked about, so stored offsets stay within the list and relative scrolls
//! start from the offset the viewer actually sees.

use std::cell::Cell;
use std::fmt;

use crate::config::WindowConfig;
use crate::error::{Result, ensure_positive};
use crate::window::{VisibleRange, clamp_scroll_top};

/// Produces the rendered form of one item.
///
/// Called once per materialized item, in ascending index order, with the
/// item's absolute index in the full sequence. It may be called again for the
/// same item on every scroll event while that item stays in the window.
pub trait RenderItem<T> {
    type Output;

    fn render(&mut self, item: &T, index: usize) -> Self::Output;
}

impl<T, R, F> RenderItem<T> for F
where
    F: FnMut(&T, usize) -> R,
{
    type Output = R;

    fn render(&mut self, item: &T, index: usize) -> R {
        self(item, index)
    }
}

/// Where [`ScrollContainer::scroll_to_index`] places the target item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Item top at the viewport top.
    Start,
    /// Item centered in the viewport.
    Center,
    /// Item bottom at the viewport bottom.
    End,
    /// Leave the offset alone if the item is fully visible, otherwise scroll
    /// the minimum distance (`Start` when above, `End` when below).
    #[default]
    Auto,
}

/// Geometry for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowLayout {
    /// Height of the outer scrollable region.
    pub outer_height: f64,
    /// Height of the spacer inside it.
    pub spacer_height: f64,
    /// Translation of the inner group.
    pub offset_y: f64,
    /// The window itself.
    pub range: VisibleRange,
}

/// A rendered window: layout plus the outputs of the item renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedWindow<R> {
    pub layout: WindowLayout,
    /// One entry per index in `layout.range.render`, ascending.
    pub items: Vec<R>,
}

impl<R> RenderedWindow<R> {
    /// Pair every output with its absolute item index.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &R)> {
        let start = self.layout.range.start_index();
        self.items.iter().enumerate().map(move |(i, r)| (start + i, r))
    }
}

type ScrollObserver = Box<dyn FnMut(f64)>;

/// Owns the scroll offset of one virtualized list view.
pub struct ScrollContainer {
    config: WindowConfig,
    scroll_top: f64,
    known_len: Cell<Option<usize>>,
    on_scroll: Option<ScrollObserver>,
}

impl fmt::Debug for ScrollContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollContainer")
            .field("config", &self.config)
            .field("scroll_top", &self.scroll_top)
            .field("known_len", &self.known_len.get())
            .field("on_scroll", &self.on_scroll.is_some())
            .finish()
    }
}

impl ScrollContainer {
    /// Mount a container scrolled to the top.
    ///
    /// Fails with `InvalidConfiguration` so a bad setup surfaces here rather
    /// than in the render path.
    pub fn new(config: WindowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scroll_top: 0.0,
            known_len: Cell::new(None),
            on_scroll: None,
        })
    }

    /// Attach an observer called after every processed scroll update.
    #[must_use]
    pub fn with_on_scroll(mut self, observer: impl FnMut(f64) + 'static) -> Self {
        self.on_scroll = Some(Box::new(observer));
        self
    }

    pub fn set_on_scroll(&mut self, observer: impl FnMut(f64) + 'static) {
        self.on_scroll = Some(Box::new(observer));
    }

    pub fn clear_on_scroll(&mut self) {
        self.on_scroll = None;
    }

    #[must_use]
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Stored scroll offset, always finite and never negative.
    ///
    /// Once a length is known it is also within `[0, max_scroll_top]`.
    /// Before that an over-scroll is kept as reported and clamped when the
    /// window is computed.
    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Last list length seen by any length-taking method.
    #[must_use]
    pub fn known_len(&self) -> Option<usize> {
        self.known_len.get()
    }

    fn remember_len(&self, length: usize) {
        self.known_len.set(Some(length));
    }

    /// Upper bound for stored offsets: the last page of the known list, or
    /// the largest finite offset while no length has been seen.
    fn upper_bound(&self) -> f64 {
        match self.known_len.get() {
            Some(length) => self.config.max_scroll_top(length),
            None => f64::MAX,
        }
    }

    /// Scroll event handler entry point.
    ///
    /// Negative and `NaN` offsets are stored as `0`, and offsets past the
    /// end of the known list are stored as its last page. The observer
    /// receives the stored value.
    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = clamp_scroll_top(scroll_top, self.upper_bound());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "window.scroll",
            requested = scroll_top,
            scroll_top = self.scroll_top
        );

        if let Some(observer) = self.on_scroll.as_mut() {
            observer(self.scroll_top);
        }
    }

    /// Scroll by a signed delta (positive = toward the end of the list).
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_top(self.scroll_top + delta);
    }

    pub fn scroll_to_top(&mut self) {
        self.set_scroll_top(0.0);
    }

    /// Align the last item with the viewport bottom.
    pub fn scroll_to_bottom(&mut self, length: usize) {
        self.remember_len(length);
        self.set_scroll_top(self.config.max_scroll_top(length));
    }

    /// Bring item `index` into view. Out-of-range indices target the last
    /// item; an empty list scrolls to the top.
    pub fn scroll_to_index(&mut self, index: usize, length: usize, align: ScrollAlign) {
        self.remember_len(length);
        if length == 0 {
            self.scroll_to_top();
            return;
        }

        let WindowConfig {
            item_height,
            container_height,
            ..
        } = self.config;
        let index = index.min(length - 1);
        let item_top = index as f64 * item_height;
        let item_bottom = item_top + item_height;
        let current = clamp_scroll_top(self.scroll_top, self.config.max_scroll_top(length));

        let target = match align {
            ScrollAlign::Start => item_top,
            ScrollAlign::End => item_bottom - container_height,
            ScrollAlign::Center => item_top + (item_height - container_height) / 2.0,
            ScrollAlign::Auto => {
                if item_top < current {
                    item_top
                } else if item_bottom > current + container_height {
                    item_bottom - container_height
                } else {
                    current
                }
            }
        };

        self.set_scroll_top(clamp_scroll_top(target, self.config.max_scroll_top(length)));
    }

    /// Pull a stale offset back into range after the list shrank.
    pub fn clamp_to(&mut self, length: usize) {
        self.remember_len(length);
        let clamped = clamp_scroll_top(self.scroll_top, self.config.max_scroll_top(length));
        if clamped != self.scroll_top {
            self.set_scroll_top(clamped);
        }
    }

    /// Viewport resize. Rejected values leave the container unchanged.
    ///
    /// A taller viewport lowers the last page; the stored offset follows it
    /// without notifying the observer.
    pub fn resize(&mut self, container_height: f64) -> Result<()> {
        self.config.container_height = ensure_positive("container_height", container_height)?;
        self.scroll_top = clamp_scroll_top(self.scroll_top, self.upper_bound());

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "window.resize", container_height);

        Ok(())
    }

    /// Change the item height, keeping the same item at the viewport top.
    pub fn set_item_height(&mut self, item_height: f64) -> Result<()> {
        let item_height = ensure_positive("item_height", item_height)?;
        let anchor = self.scroll_top / self.config.item_height;
        self.config.item_height = item_height;

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "window.resize", item_height, anchor);

        self.set_scroll_top(anchor * item_height);
        Ok(())
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.config.overscan = overscan;
    }

    /// Window for the current offset and `length` items.
    #[must_use]
    pub fn visible_range(&self, length: usize) -> VisibleRange {
        self.remember_len(length);
        // The config is validated on every write, so the calculator cannot
        // reject it here; an empty window keeps the render path alive anyway.
        self.config
            .compute(length, self.scroll_top)
            .unwrap_or_else(|_| VisibleRange::empty(self.config.item_height))
    }

    /// Frame geometry for `length` items.
    #[must_use]
    pub fn layout(&self, length: usize) -> WindowLayout {
        let range = self.visible_range(length);
        WindowLayout {
            outer_height: self.config.container_height,
            spacer_height: range.total_height,
            offset_y: range.offset_y,
            range,
        }
    }

    /// Materialize the current window of `items`.
    pub fn render<T, F>(&self, items: &[T], mut render_item: F) -> RenderedWindow<F::Output>
    where
        F: RenderItem<T>,
    {
        let layout = self.layout(items.len());
        let start = layout.range.start_index();
        let rendered: Vec<F::Output> = layout
            .range
            .slice(items)
            .iter()
            .enumerate()
            .map(|(i, item)| render_item.render(item, start + i))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "window.render",
            start = layout.range.start_index(),
            rendered = rendered.len(),
            total = items.len(),
            offset_y = layout.offset_y
        );

        RenderedWindow {
            layout,
            items: rendered,
        }
    }
}
