//! Worktime accounting on top of Watson time logs.
//!
//! The crate wires the interval arithmetic from `wt-core` to the Watson data
//! directory, the configuration stack and the command-line surface.

mod cli;
pub mod commands;
mod config;
pub mod holidays;
pub mod store;

pub use cli::{Cli, Commands, DaySpanArgs, ReportArgs, VacationAction};
pub use config::{Config, DayListStyle, Settings};
