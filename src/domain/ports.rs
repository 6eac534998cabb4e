use crate::utils::error::Result;

/// Flat-file persistence port. The whole serialized document is written and
/// read as one string; a write fully overwrites any prior contents.
pub trait Storage {
    fn read_to_string(&self, path: &str) -> Result<String>;
    fn write_string(&self, path: &str, contents: &str) -> Result<()>;
}

/// The settings the shell needs, regardless of whether they came from
/// command line arguments, a TOML file, or both.
pub trait ConfigProvider {
    fn data_file(&self) -> &str;
    fn random_seed(&self) -> Option<u64>;
}
