#![forbid(unsafe_code)]

//! List windowing for the shelf item-sharing views.
//!
//! Listings, chat history, borrow requests and moderation queues can run to
//! tens of thousands of rows. This crate computes which rows of a fixed-height
//! list are on screen for a given scroll offset, so a view only materializes
//! that window plus a small overscan while the scrollbar still reflects the
//! full list.
//!
//! - [`compute_visible_range`] / [`slice_visible_items`]: the pure calculator.
//! - [`ScrollContainer`]: owns `scroll_top`, handles scroll/resize events and
//!   renders the window through a [`RenderItem`].
//! - [`WindowConfig`]: geometry knobs, loadable from TOML/JSON with the
//!   `window-config` feature.
//! - [`WindowFrameStats`]: per-frame metrics for session logs.
//!
//! ```
//! use shelf_window::{ScrollContainer, WindowConfig};
//!
//! let listings: Vec<String> = (0..1000).map(|i| format!("listing {i}")).collect();
//! let mut view = ScrollContainer::new(WindowConfig::new(50.0, 500.0, 5)?)?;
//! view.set_scroll_top(2500.0);
//!
//! let window = view.render(&listings, |title: &String, index: usize| format!("{index}: {title}"));
//! assert_eq!(window.layout.offset_y, 2250.0);
//! assert_eq!(window.items.first().map(String::as_str), Some("45: listing 45"));
//! # Ok::<(), shelf_window::WindowError>(())
//! ```

pub mod config;
pub mod container;
pub mod error;
pub mod stats;
pub mod window;

pub use config::WindowConfig;
pub use container::{RenderItem, RenderedWindow, ScrollAlign, ScrollContainer, WindowLayout};
pub use error::{Result, WindowError};
pub use stats::WindowFrameStats;
pub use window::{
    DEFAULT_OVERSCAN, VisibleRange, clamp_scroll_top, compute_visible_range, max_scroll_top,
    slice_visible_items,
};
