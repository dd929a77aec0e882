pub mod models;

pub use models::{Config, RecordSpec, Zone};

use crate::error::{Error, Result};
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

pub fn load_config(path: &Path) -> Result<Config> {
    let mut file = File::open(path)
        .map_err(|e| Error::Config(format!("Failed to open {}: {}", path.display(), e)))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(contents)
        .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

    config
        .validate()
        .map_err(|e| Error::Config(e.to_string()))?;

    Ok(config)
}
