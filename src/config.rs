use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::CursorArg;

/// Defaults for the `mesh` command, loaded from `--config`.
///
/// ```toml
/// blocks = "assets/blocks.toml"
/// cursor = "contiguous"
/// threads = 4
/// out_dir = "out"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub blocks: Option<PathBuf>,
    pub cursor: Option<CursorArg>,
    pub threads: Option<usize>,
    pub out_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }
}
