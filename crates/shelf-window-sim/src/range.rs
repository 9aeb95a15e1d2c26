use std::io::Write;

use clap::Args;
use serde::Serialize;
use shelf_window::VisibleRange;

use crate::error::Result;
use crate::geometry::GeometryArgs;

/// Compute a single window and print it as JSON.
#[derive(Debug, Clone, Args)]
pub struct RangeArgs {
    /// Items in the list.
    #[arg(long)]
    pub length: usize,

    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Reported scroll offset (clamped into range).
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub scroll_top: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeReport {
    pub start_index: Option<usize>,
    pub end_index: Option<usize>,
    #[serde(flatten)]
    pub range: VisibleRange,
}

pub fn run_range(args: RangeArgs, out: &mut impl Write) -> Result<RangeReport> {
    let config = args.geometry.resolve()?;
    let range = config.compute(args.length, args.scroll_top)?;
    let report = RangeReport {
        start_index: range.end_index().map(|_| range.start_index()),
        end_index: range.end_index(),
        range,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(report)
}
