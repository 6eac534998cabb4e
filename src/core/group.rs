use crate::domain::model::Volunteer;
use crate::domain::skills::{self, MAX_GROUP_SIZE, SKILL_NUM};
use crate::utils::error::{Result, SorterError};
use std::collections::BTreeMap;
use std::fmt;

/// One community group: its members, a running per-skill total kept in sync
/// with every membership change, and a count of members per distinct skill
/// set. `skill_totals[i]` always equals the sum of `skill_point(i)` over the
/// members, and the stat-map counts always sum to the member count.
#[derive(Debug, Clone, Default)]
pub struct CommunityGroup {
    volunteers: Vec<Volunteer>,
    skill_totals: [u32; SKILL_NUM],
    stats: BTreeMap<String, usize>,
}

impl CommunityGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a volunteer to this group. Does nothing to balance the groups;
    /// balancing is the sorter's job.
    pub fn add(&mut self, volunteer: Volunteer) -> Result<()> {
        if self.is_full() {
            return Err(SorterError::GroupFull {
                capacity: MAX_GROUP_SIZE,
            });
        }

        for index in 0..SKILL_NUM {
            self.skill_totals[index] += volunteer.skill_point(index);
        }
        *self.stats.entry(volunteer.skill_set()).or_insert(0) += 1;
        self.volunteers.push(volunteer);
        Ok(())
    }

    /// Remove one member whose skill multiset matches `skills_str`. Members
    /// with equal skills are interchangeable, so insertion order of the
    /// remaining members is not preserved. Returns `Ok(false)` when no
    /// member matches.
    pub fn remove(&mut self, skills_str: &str) -> Result<bool> {
        let target = Volunteer::parse(skills_str)?;

        let Some(position) = self.volunteers.iter().position(|member| *member == target) else {
            return Ok(false);
        };

        let removed = self.volunteers.swap_remove(position);
        for index in 0..SKILL_NUM {
            self.skill_totals[index] -= removed.skill_point(index);
        }

        let key = removed.skill_set();
        if let Some(count) = self.stats.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.stats.remove(&key);
            }
        }

        Ok(true)
    }

    /// Running total of the skill at `index`.
    pub fn skill_total(&self, index: usize) -> u32 {
        self.skill_totals[index]
    }

    pub fn member_count(&self) -> usize {
        self.volunteers.len()
    }

    pub fn is_full(&self) -> bool {
        self.volunteers.len() >= MAX_GROUP_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.volunteers.is_empty()
    }

    /// Snapshot of the member count per distinct canonical skill set.
    pub fn stats(&self) -> BTreeMap<String, usize> {
        self.stats.clone()
    }

    /// Drop all members and reset every aggregate.
    pub fn clear(&mut self) {
        self.volunteers.clear();
        self.skill_totals = [0; SKILL_NUM];
        self.stats.clear();
    }

    pub(crate) fn volunteers(&self) -> &[Volunteer] {
        &self.volunteers
    }

    /// Human-readable per-skill totals,
    /// e.g. `Skill A: 13, Skill B: 20, Skill C: 23, Skill D: 5, Skill E: 41`.
    pub fn skills_totals(&self) -> String {
        let parts: Vec<String> = skills::SKILLS
            .iter()
            .enumerate()
            .map(|(index, label)| format!("Skill {}: {}", label, self.skill_totals[index]))
            .collect();
        parts.join(", ")
    }
}

impl fmt::Display for CommunityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.skills_totals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volunteer(skills: &str) -> Volunteer {
        Volunteer::parse(skills).unwrap()
    }

    #[test]
    fn test_add_updates_totals_and_stats() {
        let mut group = CommunityGroup::new();
        group.add(volunteer("ABC")).unwrap();
        group.add(volunteer("BEE")).unwrap();

        assert_eq!(group.member_count(), 2);
        assert_eq!(group.skill_total(0), 1); // A
        assert_eq!(group.skill_total(1), 2); // B
        assert_eq!(group.skill_total(2), 1); // C
        assert_eq!(group.skill_total(4), 2); // E

        let stats = group.stats();
        assert_eq!(stats.get("ABC"), Some(&1));
        assert_eq!(stats.get("BEE"), Some(&1));
    }

    #[test]
    fn test_stats_group_equal_skill_sets() {
        let mut group = CommunityGroup::new();
        group.add(volunteer("AAB")).unwrap();
        group.add(volunteer("ABA")).unwrap();

        assert_eq!(group.stats().get("AAB"), Some(&2));
    }

    #[test]
    fn test_remove_restores_pre_add_aggregates() {
        let mut group = CommunityGroup::new();
        group.add(volunteer("ABC")).unwrap();
        let totals_before: Vec<u32> = (0..SKILL_NUM).map(|i| group.skill_total(i)).collect();
        let stats_before = group.stats();

        group.add(volunteer("CDE")).unwrap();
        assert!(group.remove("CDE").unwrap());

        let totals_after: Vec<u32> = (0..SKILL_NUM).map(|i| group.skill_total(i)).collect();
        assert_eq!(totals_before, totals_after);
        assert_eq!(stats_before, group.stats());
        assert_eq!(group.member_count(), 1);
    }

    #[test]
    fn test_remove_matches_on_multiset_not_spelling() {
        let mut group = CommunityGroup::new();
        group.add(volunteer("AAB")).unwrap();
        assert!(group.remove("ABA").unwrap());
        assert!(group.is_empty());
    }

    #[test]
    fn test_remove_missing_member_returns_false() {
        let mut group = CommunityGroup::new();
        group.add(volunteer("ABC")).unwrap();
        assert!(!group.remove("CEA").unwrap());
        assert_eq!(group.member_count(), 1);
    }

    #[test]
    fn test_remove_rejects_malformed_skill_string() {
        let mut group = CommunityGroup::new();
        assert!(matches!(
            group.remove("AXB"),
            Err(SorterError::InvalidSkillString { .. })
        ));
    }

    #[test]
    fn test_add_fails_at_capacity() {
        let mut group = CommunityGroup::new();
        for _ in 0..MAX_GROUP_SIZE {
            group.add(volunteer("ABC")).unwrap();
        }
        assert!(group.is_full());
        assert!(matches!(
            group.add(volunteer("ABC")),
            Err(SorterError::GroupFull { .. })
        ));
        assert_eq!(group.member_count(), MAX_GROUP_SIZE);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut group = CommunityGroup::new();
        group.add(volunteer("ABC")).unwrap();
        group.add(volunteer("DDE")).unwrap();
        group.clear();

        assert!(group.is_empty());
        assert!(group.stats().is_empty());
        for index in 0..SKILL_NUM {
            assert_eq!(group.skill_total(index), 0);
        }
    }

    #[test]
    fn test_skills_totals_rendering() {
        let mut group = CommunityGroup::new();
        group.add(volunteer("ABC")).unwrap();
        group.add(volunteer("BEE")).unwrap();
        assert_eq!(
            group.skills_totals(),
            "Skill A: 1, Skill B: 2, Skill C: 1, Skill D: 0, Skill E: 2"
        );
    }
}
