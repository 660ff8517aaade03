use super::{AppError, RosterSummary};
use crate::{
    config::RosterConfiguration,
    model::{impedance::ImpedanceRoster, RosterBuilder},
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use skimroster_core::model::{Mode, PathType};
use std::path::{Path, PathBuf};

/// command line tool for building an impedance roster and querying it
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RosterApp {
    /// select the roster operation to run
    #[command(subcommand)]
    pub op: RosterOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum RosterOperation {
    /// builds the roster and prints its variables, matrices and combinations as JSON
    Summary {
        /// roster configuration file (TOML or JSON)
        #[arg(short, long)]
        config: PathBuf,
    },
    /// builds the roster and prints one impedance value as JSON
    Query {
        /// roster configuration file (TOML or JSON)
        #[arg(short, long)]
        config: PathBuf,
        /// roster variable, such as ivtime or distance
        #[arg(long)]
        variable: String,
        /// travel mode name or id
        #[arg(long)]
        mode: Mode,
        /// network path type name
        #[arg(long, default_value = "full-network")]
        path_type: PathType,
        /// value of time
        #[arg(long)]
        vot: f64,
        /// minute on the roster clock, where 1 is 03:00
        #[arg(long)]
        minute: usize,
        /// external origin zone id
        #[arg(long)]
        origin: i64,
        /// external destination zone id
        #[arg(long)]
        destination: i64,
    },
}

impl RosterOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            RosterOperation::Summary { config } => {
                let roster = build_roster(config)?;
                let summary = RosterSummary::from(&roster);
                println!("{}", serde_json::to_string_pretty(&summary)?);
                Ok(())
            }
            RosterOperation::Query {
                config,
                variable,
                mode,
                path_type,
                vot,
                minute,
                origin,
                destination,
            } => {
                let roster = build_roster(config)?;
                let o = zone_index(&roster, *origin)?;
                let d = zone_index(&roster, *destination)?;
                let value = roster.get_value(variable, *mode, *path_type, *vot, *minute, o, d)?;
                println!("{}", serde_json::to_string(&value)?);
                Ok(())
            }
        }
    }
}

fn build_roster(config_file: &Path) -> Result<ImpedanceRoster, AppError> {
    let config = RosterConfiguration::try_from(config_file)?;
    let roster = RosterBuilder::new(config).build()?;
    Ok(roster)
}

fn zone_index(roster: &ImpedanceRoster, zone_id: i64) -> Result<usize, AppError> {
    roster
        .mappings()
        .zones
        .get_index(zone_id)
        .ok_or(AppError::UnknownZone(zone_id))
}
