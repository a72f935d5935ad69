//! Optional YAML configuration file. Everything here can also be given on the
//! command line; the file just saves retyping paths and custom markers.

use crate::region::Markers;
use anyhow::{Context, bail};
use inliner_util::{ResultTracedAnyhow, paths::normalize_path};
use serde::Deserialize;
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use tracing::info;

/// Contents of a config file. All fields are optional.
///
/// ```yaml
/// source: components/BubbleMenu.tsx
/// destination: pages/BubbleMenu.tsx
/// resync: true
/// markers:
///   closing: "`;"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File to embed. Relative paths are relative to the config file
    pub source: Option<PathBuf>,
    /// File containing the placeholder. Relative paths are relative to the
    /// config file
    pub destination: Option<PathBuf>,
    /// Find an already inlined block if the placeholder is gone
    pub resync: bool,
    pub markers: Markers,
}

impl Config {
    /// Load and validate configuration from a YAML file. Paths in the file are
    /// resolved against the file's directory.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        info!(?path, "Loading configuration file");
        (|| {
            let file = File::open(path)?;
            let mut config: Self = serde_yaml::from_reader(file)?;
            if let Some(field) = config.markers.empty_field() {
                bail!("Marker `{field}` cannot be empty");
            }

            let base_dir = path.parent().unwrap_or(Path::new(""));
            for file in [&mut config.source, &mut config.destination]
                .into_iter()
                .flatten()
            {
                *file = normalize_path(base_dir, file);
            }
            Ok::<_, anyhow::Error>(config)
        })()
        .context(format!("Error loading configuration from {path:?}"))
        .traced()
    }
}
