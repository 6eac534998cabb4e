#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

/// Effective runtime settings after merging the command line with the
/// optional TOML file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: String,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl ConfigProvider for Settings {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn random_seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)
    }
}
