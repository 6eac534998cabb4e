// Domain layer: the volunteer model, the skill alphabet, and the ports the
// outer layers implement.

pub mod model;
pub mod ports;
pub mod skills;
