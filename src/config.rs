use std::path::PathBuf;

use anyhow::{bail, Result};

/// Data file read at startup when no path is given on the command line.
pub const DEFAULT_DATA_PATH: &str = "dados-treino-final.csv";

const USAGE: &str = "usage: gym-dashboard [PATH]";

// ---------------------------------------------------------------------------
// Launch configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            window_title: "Dashboard de Treino da academia".to_string(),
            inner_size: [1280.0, 900.0],
            min_inner_size: [800.0, 500.0],
        }
    }
}

impl DashboardConfig {
    /// Build the config from process arguments (program name excluded).
    /// The only accepted argument is an optional data file path.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        if let Some(path) = args.next() {
            if path.starts_with('-') {
                bail!("unknown option '{path}'\n{USAGE}");
            }
            config.data_path = PathBuf::from(path);
        }
        if let Some(extra) = args.next() {
            bail!("unexpected argument '{extra}'\n{USAGE}");
        }
        Ok(config)
    }
}
