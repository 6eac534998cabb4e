pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, LocalStorage};
pub use crate::config::Settings;

pub use crate::app::Shell;
pub use crate::core::{CommunityGroup, SkillSorter, TextSerialize, Volunteer};
pub use crate::utils::error::{Result, SorterError};
