use crate::core::group::CommunityGroup;
use crate::core::stats::population_variance;
use crate::domain::model::Volunteer;
use crate::domain::skills::{GROUP_COUNT, SKILL_NUM};
use crate::utils::error::{Result, SorterError};
use std::collections::BTreeMap;

/// Owns the fixed set of community groups and decides, on every insertion,
/// which group keeps the per-skill totals and the group sizes best balanced.
#[derive(Debug, Clone)]
pub struct SkillSorter {
    groups: Vec<CommunityGroup>,
}

impl Default for SkillSorter {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillSorter {
    /// A sorter with [`GROUP_COUNT`] empty groups. The group list never
    /// changes length after this.
    pub fn new() -> Self {
        Self {
            groups: (0..GROUP_COUNT).map(|_| CommunityGroup::new()).collect(),
        }
    }

    /// Used by the text codec once every decoded group has been rebuilt.
    pub(crate) fn from_groups(groups: Vec<CommunityGroup>) -> Self {
        debug_assert_eq!(groups.len(), GROUP_COUNT);
        Self { groups }
    }

    pub fn groups(&self) -> &[CommunityGroup] {
        &self.groups
    }

    /// Add a volunteer to the group where the insertion keeps the groups
    /// best balanced, and return that group's index.
    ///
    /// The cost of placing the volunteer in a candidate group is the mean of
    /// the cross-group population variances of every per-skill total plus
    /// the variance of the group sizes, all computed as if the volunteer
    /// were already in the candidate. Full groups are never candidates. Ties
    /// go to the lowest index: groups are scanned in order and only a
    /// strictly smaller cost displaces the incumbent.
    pub fn add_volunteer(&mut self, volunteer: Volunteer) -> Result<usize> {
        let mut best_index: Option<usize> = None;
        let mut best_cost = f64::INFINITY;

        for index in 0..self.groups.len() {
            if self.groups[index].is_full() {
                continue;
            }
            let cost = self.placement_cost(&volunteer, index)?;
            if cost < best_cost {
                best_cost = cost;
                best_index = Some(index);
            }
        }

        let index = best_index.ok_or(SorterError::AllocationImpossible)?;
        self.groups[index].add(volunteer)?;
        Ok(index)
    }

    /// Delete one volunteer with the given skill set from the given group.
    pub fn delete_volunteer(&mut self, skills_str: &str, group_index: usize) -> Result<()> {
        self.check_index(group_index)?;
        if self.groups[group_index].remove(skills_str)? {
            Ok(())
        } else {
            Err(SorterError::SkillSetNotFound {
                skills: skills_str.to_string(),
                group: group_index,
            })
        }
    }

    /// Move one volunteer with the given skill set between two groups.
    ///
    /// The destination add happens before the source removal: a full
    /// destination fails the whole call with the source untouched, instead
    /// of silently dropping the volunteer. If the source turns out not to
    /// hold the skill set, the destination add is rolled back.
    pub fn move_volunteer(&mut self, skills_str: &str, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        let volunteer = Volunteer::parse(skills_str)?;
        let canonical = volunteer.skill_set();
        self.groups[to].add(volunteer)?;

        if !self.groups[from].remove(&canonical)? {
            self.groups[to].remove(&canonical)?;
            return Err(SorterError::SkillSetNotFound {
                skills: skills_str.to_string(),
                group: from,
            });
        }

        Ok(())
    }

    /// Drop every volunteer from every group.
    pub fn delete_all(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
    }

    /// Member count per distinct skill set for one group.
    pub fn group_stats(&self, group_index: usize) -> Result<BTreeMap<String, usize>> {
        self.check_index(group_index)?;
        Ok(self.groups[group_index].stats())
    }

    pub fn total_volunteers(&self) -> usize {
        self.groups.iter().map(CommunityGroup::member_count).sum()
    }

    fn check_index(&self, group_index: usize) -> Result<()> {
        if group_index >= self.groups.len() {
            return Err(SorterError::InvalidGroupIndex { index: group_index });
        }
        Ok(())
    }

    fn placement_cost(&self, volunteer: &Volunteer, candidate: usize) -> Result<f64> {
        let mut values = [0u32; GROUP_COUNT];
        let mut total = 0.0;

        for skill in 0..SKILL_NUM {
            for (index, group) in self.groups.iter().enumerate() {
                values[index] = group.skill_total(skill)
                    + if index == candidate {
                        volunteer.skill_point(skill)
                    } else {
                        0
                    };
            }
            total += population_variance(&values)?;
        }

        for (index, group) in self.groups.iter().enumerate() {
            values[index] = group.member_count() as u32 + u32::from(index == candidate);
        }
        total += population_variance(&values)?;

        Ok(total / (SKILL_NUM as f64 + 1.0))
    }
}
