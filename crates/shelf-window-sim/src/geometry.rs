use std::path::PathBuf;

use clap::Args;
use shelf_window::WindowConfig;

use crate::error::Result;

/// Window geometry: an optional config file, overridden flag by flag.
#[derive(Debug, Clone, Default, Args)]
pub struct GeometryArgs {
    /// TOML file with item_height / container_height / overscan.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Height of every item.
    #[arg(long)]
    pub item_height: Option<f64>,

    /// Height of the scrollable viewport.
    #[arg(long)]
    pub container_height: Option<f64>,

    /// Items rendered beyond each viewport edge.
    #[arg(long)]
    pub overscan: Option<usize>,
}

impl GeometryArgs {
    pub fn resolve(&self) -> Result<WindowConfig> {
        let mut config = match &self.config {
            Some(path) => WindowConfig::from_toml_file(path)?,
            None => WindowConfig::default(),
        };
        if let Some(item_height) = self.item_height {
            config.item_height = item_height;
        }
        if let Some(container_height) = self.container_height {
            config.container_height = container_height;
        }
        if let Some(overscan) = self.overscan {
            config.overscan = overscan;
        }
        config.validate()?;

        tracing::debug!(
            message = "sim.geometry",
            item_height = config.item_height,
            container_height = config.container_height,
            overscan = config.overscan,
            from_file = self.config.is_some()
        );
        Ok(config)
    }
}
