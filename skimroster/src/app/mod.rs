mod app_error;
mod roster_app;
mod roster_summary;

pub use app_error::AppError;
pub use roster_app::{RosterApp, RosterOperation};
pub use roster_summary::RosterSummary;
