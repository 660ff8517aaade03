pub mod impedance;
pub mod matrix;
pub mod roster;
mod roster_builder;
pub mod vot;

pub use roster_builder::RosterBuilder;
