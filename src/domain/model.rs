use crate::domain::skills::{self, SKILL_ARITY, SKILL_NUM};
use crate::utils::error::{Result, SorterError};
use std::fmt;

/// A volunteer is an immutable multiset of exactly [`SKILL_ARITY`] skills,
/// stored as per-skill occurrence counts. Two volunteers with the same
/// counts are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volunteer {
    skill_points: [u32; SKILL_NUM],
}

impl Volunteer {
    /// Parse a skill string such as `"AAB"` or `"CDE"`. The string must have
    /// exactly [`SKILL_ARITY`] characters, all drawn from the skill alphabet.
    pub fn parse(skills_str: &str) -> Result<Self> {
        let mut skill_points = [0u32; SKILL_NUM];
        let mut length = 0usize;

        for label in skills_str.chars() {
            length += 1;
            if length > SKILL_ARITY {
                break;
            }
            let index =
                skills::skill_index(label).map_err(|_| SorterError::InvalidSkillString {
                    value: skills_str.to_string(),
                    reason: format!("unknown skill `{}`", label),
                })?;
            skill_points[index] += 1;
        }

        if length != SKILL_ARITY {
            return Err(SorterError::InvalidSkillString {
                value: skills_str.to_string(),
                reason: format!("expected exactly {} skill characters", SKILL_ARITY),
            });
        }

        Ok(Self { skill_points })
    }

    /// Occurrence count of the skill at `index`. Valid indices only.
    pub fn skill_point(&self, index: usize) -> u32 {
        self.skill_points[index]
    }

    /// Occurrence count of the skill with the given label.
    pub fn count_of(&self, label: char) -> Result<u32> {
        Ok(self.skill_points[skills::skill_index(label)?])
    }

    /// Canonical string form: each skill label repeated by its count, in
    /// ascending index order. `{A: 2, B: 1}` renders as `"AAB"`. This is both
    /// the display form and the wire form.
    pub fn skill_set(&self) -> String {
        let mut out = String::with_capacity(SKILL_ARITY);
        for (index, &count) in self.skill_points.iter().enumerate() {
            for _ in 0..count {
                out.push(skills::SKILLS[index]);
            }
        }
        out
    }
}

impl fmt::Display for Volunteer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.skill_set())
    }
}
