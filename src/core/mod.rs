pub mod codec;
pub mod group;
pub mod sorter;
pub mod stats;

pub use crate::domain::model::Volunteer;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
pub use codec::TextSerialize;
pub use group::CommunityGroup;
pub use sorter::SkillSorter;
