//! Separator-delimited text form of the whole sorter, applied recursively:
//! a volunteer is its canonical skill string, a group is its volunteers
//! joined with [`GROUP_SEPARATOR`], the sorter is its groups joined with
//! [`SORTER_SEPARATOR`]. Decoding never trusts encoded aggregates; every
//! volunteer is replayed through the normal add path.

use crate::core::group::CommunityGroup;
use crate::core::sorter::SkillSorter;
use crate::domain::model::Volunteer;
use crate::domain::skills::GROUP_COUNT;
use crate::utils::error::{Result, SorterError};
use regex::Regex;

/// Joins volunteers inside one group.
pub const GROUP_SEPARATOR: &str = ",";

/// Joins group segments at the top level. Distinct from the group-level
/// separator so the nesting stays unambiguous.
pub const SORTER_SEPARATOR: &str = "|";

/// Anything that can render itself into the flat text form.
pub trait TextSerialize {
    fn to_text(&self) -> String;
}

impl TextSerialize for Volunteer {
    fn to_text(&self) -> String {
        self.skill_set()
    }
}

impl TextSerialize for CommunityGroup {
    fn to_text(&self) -> String {
        let members: Vec<String> = self.volunteers().iter().map(Volunteer::skill_set).collect();
        members.join(GROUP_SEPARATOR)
    }
}

impl TextSerialize for SkillSorter {
    fn to_text(&self) -> String {
        let segments: Vec<String> = self.groups().iter().map(TextSerialize::to_text).collect();
        segments.join(SORTER_SEPARATOR)
    }
}

/// Split `document` on a literal separator. The separator is quoted with
/// [`regex::escape`] before compiling, so separators like `|` that carry
/// meaning in a pattern still split literally.
pub fn split_segments(document: &str, separator: &str) -> Vec<String> {
    let pattern = Regex::new(&regex::escape(separator)).unwrap();
    pattern.split(document).map(str::to_string).collect()
}

impl CommunityGroup {
    /// Rebuild one group from its text segment. An empty segment is an empty
    /// group. Every member goes through the normal add path, so the totals
    /// and stat map are re-derived rather than decoded.
    pub fn from_text(segment: &str) -> Result<Self> {
        let mut group = CommunityGroup::new();
        if segment.is_empty() {
            return Ok(group);
        }

        for member in split_segments(segment, GROUP_SEPARATOR) {
            if member.is_empty() {
                return Err(SorterError::DeserializationMalformed {
                    message: format!("empty member entry in group segment `{}`", segment),
                });
            }
            group.add(Volunteer::parse(&member)?)?;
        }

        Ok(group)
    }
}

impl SkillSorter {
    /// Rebuild a whole sorter from its text document. The document must
    /// split into exactly [`GROUP_COUNT`] segments; the group list length is
    /// part of the sorter's identity and never changes.
    pub fn from_text(document: &str) -> Result<Self> {
        let segments = split_segments(document, SORTER_SEPARATOR);
        if segments.len() != GROUP_COUNT {
            return Err(SorterError::GroupCountMismatch {
                expected: GROUP_COUNT,
                found: segments.len(),
            });
        }

        let mut groups = Vec::with_capacity(GROUP_COUNT);
        for segment in &segments {
            groups.push(CommunityGroup::from_text(segment)?);
        }

        Ok(SkillSorter::from_groups(groups))
    }
}
