use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::ports::Storage;
use crate::domain::skills::DEFAULT_DATA_FILE;
use crate::utils::error::Result;
use clap::Parser;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "skillsort")]
#[command(about = "Balance volunteers with three-skill sets across five community groups")]
pub struct CliConfig {
    /// Path of the flat-file snapshot loaded on start and saved on exit
    #[arg(long)]
    pub data_file: Option<String>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    /// Seed for the random test-data command; omitted means OS entropy
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fold the optional TOML settings under the command line arguments.
    /// Anything given on the command line wins; the data file path falls
    /// back to [`DEFAULT_DATA_FILE`].
    pub fn resolve(&self, toml: Option<&TomlConfig>) -> Settings {
        let data_file = self
            .data_file
            .clone()
            .or_else(|| toml.and_then(|t| t.data_file().map(str::to_string)))
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

        Settings {
            data_file,
            seed: self.seed.or_else(|| toml.and_then(TomlConfig::seed)),
            verbose: self.verbose || toml.and_then(TomlConfig::verbose).unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        let contents = fs::read_to_string(full_path)?;
        Ok(contents)
    }

    fn write_string(&self, path: &str, contents: &str) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(full_path, contents)?;
        Ok(())
    }
}
