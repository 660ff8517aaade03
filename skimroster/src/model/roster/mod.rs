mod roster_combinations;
mod roster_entry;
mod roster_entry_ops;
mod roster_error;
mod roster_index;
mod roster_table;

pub use roster_combinations::RosterCombinations;
pub use roster_entry::RosterEntry;
pub use roster_entry_ops::{read_roster_entries, read_roster_entries_from_csv};
pub use roster_error::RosterError;
pub use roster_index::RosterIndex;
pub use roster_table::RosterTable;
