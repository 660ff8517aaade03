pub mod blend_ops;
mod impedance_roster;
mod skim_value;

pub use impedance_roster::ImpedanceRoster;
pub use skim_value::SkimValue;
