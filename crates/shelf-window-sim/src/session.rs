//! Scripted scroll sessions.
//!
//! A session is a comma-separated list of events applied in order to one
//! [`ScrollContainer`]; every event produces one frame:
//!
//! | Event          | Effect                                        |
//! |----------------|-----------------------------------------------|
//! | `2500`         | scroll event reporting `scroll_top = 2500`    |
//! | `by:-120`      | relative scroll                               |
//! | `resize:640`   | viewport height change                        |
//! | `height:32`    | item height change (top item kept anchored)   |
//! | `index:40`     | bring item 40 into view (`Auto` alignment)    |
//! | `index:40@center` | same with `start`/`center`/`end`/`auto`    |
//! | `top` / `bottom` | jump to either end                          |

use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;
use std::str::FromStr;

use clap::Args;
use serde::Serialize;
use shelf_window::{ScrollAlign, ScrollContainer, WindowConfig, WindowFrameStats};

use crate::error::{Result, SimError};
use crate::geometry::GeometryArgs;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    ScrollTo(f64),
    ScrollBy(f64),
    Resize(f64),
    ItemHeight(f64),
    ScrollToIndex(usize, ScrollAlign),
    Top,
    Bottom,
}

fn parse_number(event: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SimError::invalid(format!("event `{event}`: `{value}` is not a number")))
}

fn parse_align(event: &str, value: &str) -> Result<ScrollAlign> {
    match value {
        "start" => Ok(ScrollAlign::Start),
        "center" => Ok(ScrollAlign::Center),
        "end" => Ok(ScrollAlign::End),
        "auto" => Ok(ScrollAlign::Auto),
        other => Err(SimError::invalid(format!(
            "event `{event}`: unknown alignment `{other}`"
        ))),
    }
}

impl FromStr for SessionEvent {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        let event = s.trim();
        match event {
            "top" => return Ok(Self::Top),
            "bottom" => return Ok(Self::Bottom),
            _ => {}
        }

        let Some((kind, value)) = event.split_once(':') else {
            return parse_number(event, event).map(Self::ScrollTo);
        };

        match kind {
            "by" => parse_number(event, value).map(Self::ScrollBy),
            "resize" => parse_number(event, value).map(Self::Resize),
            "height" => parse_number(event, value).map(Self::ItemHeight),
            "index" => {
                let (index, align) = match value.split_once('@') {
                    Some((index, align)) => (index, parse_align(event, align)?),
                    None => (value, ScrollAlign::Auto),
                };
                let index = index.trim().parse::<usize>().map_err(|_| {
                    SimError::invalid(format!("event `{event}`: `{index}` is not an index"))
                })?;
                Ok(Self::ScrollToIndex(index, align))
            }
            other => Err(SimError::invalid(format!("unknown event kind `{other}`"))),
        }
    }
}

/// Replay a scripted scroll session and print one JSON line per frame.
#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// Items in the list.
    #[arg(long)]
    pub length: usize,

    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Comma-separated events, e.g. `0,by:250,index:400@center,resize:640,bottom`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub events: Vec<String>,
}

/// Trailing line of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub status: &'static str,
    pub frames: u64,
    pub scroll_notifications: u64,
    pub final_scroll_top: f64,
}

fn apply(view: &mut ScrollContainer, length: usize, event: SessionEvent) -> Result<()> {
    match event {
        SessionEvent::ScrollTo(top) => view.set_scroll_top(top),
        SessionEvent::ScrollBy(delta) => view.scroll_by(delta),
        SessionEvent::Resize(height) => view.resize(height)?,
        SessionEvent::ItemHeight(height) => view.set_item_height(height)?,
        SessionEvent::ScrollToIndex(index, align) => view.scroll_to_index(index, length, align),
        SessionEvent::Top => view.scroll_to_top(),
        SessionEvent::Bottom => view.scroll_to_bottom(length),
    }
    Ok(())
}

/// Run `events` against a fresh container, writing JSON lines to `out`.
///
/// Frame 0 is the mounted state before any event.
pub fn replay(
    config: WindowConfig,
    length: usize,
    events: &[SessionEvent],
    out: &mut impl Write,
) -> Result<SessionSummary> {
    let notifications = Rc::new(Cell::new(0u64));
    let counter = Rc::clone(&notifications);
    let mut view =
        ScrollContainer::new(config)?.with_on_scroll(move |_| counter.set(counter.get() + 1));

    let mut frame = 0u64;
    let emit = |view: &ScrollContainer, frame: u64, out: &mut dyn Write| -> Result<()> {
        let range = view.visible_range(length);
        let stats = WindowFrameStats::from_range(frame, &range, view.config().container_height);
        serde_json::to_writer(&mut *out, &stats)?;
        writeln!(out)?;
        Ok(())
    };

    emit(&view, frame, &mut *out)?;
    for &event in events {
        frame += 1;
        apply(&mut view, length, event)?;
        tracing::debug!(message = "sim.frame", frame, event = ?event);
        emit(&view, frame, &mut *out)?;
    }

    let summary = SessionSummary {
        status: "ok",
        frames: frame + 1,
        scroll_notifications: notifications.get(),
        final_scroll_top: view.scroll_top(),
    };
    serde_json::to_writer(&mut *out, &summary)?;
    writeln!(out)?;
    Ok(summary)
}

pub fn run_replay(args: ReplayArgs, out: &mut impl Write) -> Result<()> {
    let config = args.geometry.resolve()?;
    let events = args
        .events
        .iter()
        .map(|raw| raw.parse::<SessionEvent>())
        .collect::<Result<Vec<_>>>()?;
    replay(config, args.length, &events, out)?;
    Ok(())
}
