use crate::utils::error::{Result, SorterError};

/// The fixed skill alphabet, in index order.
pub const SKILLS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

/// Number of distinct skills.
pub const SKILL_NUM: usize = SKILLS.len();

/// Every volunteer carries exactly this many skill characters.
pub const SKILL_ARITY: usize = 3;

/// The sorter owns exactly this many groups for its whole lifetime.
pub const GROUP_COUNT: usize = 5;

/// Ceiling on the member count of a single group.
pub const MAX_GROUP_SIZE: usize = 100;

/// Default path of the flat-file snapshot.
pub const DEFAULT_DATA_FILE: &str = "volunteers.dat";

/// Index of a skill label in the alphabet.
pub fn skill_index(label: char) -> Result<usize> {
    SKILLS
        .iter()
        .position(|&skill| skill == label)
        .ok_or(SorterError::UnknownSkill { skill: label })
}

/// Label of the skill at `index`.
pub fn skill_name(index: usize) -> Result<char> {
    SKILLS
        .get(index)
        .copied()
        .ok_or(SorterError::SkillIndexOutOfRange { index })
}
