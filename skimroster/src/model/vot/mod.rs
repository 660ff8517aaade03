mod vot_group_resolver;
mod vot_range;

pub use vot_group_resolver::VotGroupResolver;
pub use vot_range::VotRange;
