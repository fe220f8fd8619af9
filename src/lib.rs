pub mod msg;
pub mod numerics;
pub mod sensors;
pub mod subscriber;
pub mod transport;

use std::fs;
use std::path::Path;
use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::Deserialize;

macro_rules! define_float {
    ($f:tt) => {
        pub type Float = $f;
    }
}

define_float!(f64);

pub const DEFAULT_TOPIC_NAME: &str = "/odom";
pub const DEFAULT_BUFFER_SIZE: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IngestorConfig {
    pub topic_name: String,
    /// Queue depth handed to the transport. Not enforced by the ingestor itself.
    pub buffer_size: usize
}

impl Default for IngestorConfig {
    fn default() -> IngestorConfig {
        IngestorConfig {
            topic_name: String::from(DEFAULT_TOPIC_NAME),
            buffer_size: DEFAULT_BUFFER_SIZE
        }
    }
}

impl IngestorConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<IngestorConfig> {
        let config: IngestorConfig = serde_yaml::from_str(yaml).wrap_err("malformed ingestor config")?;
        if config.buffer_size == 0 {
            return Err(eyre!("buffer_size must be positive"));
        }
        Ok(config)
    }
}

pub fn load_ingestor_conf(path: &Path) -> Result<IngestorConfig> {
    let contents = fs::read_to_string(path).wrap_err_with(|| format!("could not read {}", path.display()))?;
    IngestorConfig::from_yaml_str(&contents)
}
