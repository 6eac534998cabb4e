use crate::domain::skills::{SKILLS, SKILL_ARITY, SKILL_NUM};
use crate::utils::rng::Rng;

/// A skill string of [`SKILL_ARITY`] independent uniform draws, e.g. "BAE".
pub fn random_skills(rng: &mut Rng) -> String {
    (0..SKILL_ARITY)
        .map(|_| SKILLS[rng.next_below(SKILL_NUM)])
        .collect()
}

/// A single-skill triple such as "AAA" or "DDD". Extreme sets stress the
/// balancer far harder than uniform draws, since every arrival shifts one
/// skill total by the full arity.
pub fn random_extreme_skills(rng: &mut Rng) -> String {
    let skill = SKILLS[rng.next_below(SKILL_NUM)];
    std::iter::repeat(skill).take(SKILL_ARITY).collect()
}
