//! CLI subcommand implementations.

pub mod ignore;
pub mod report;
pub mod vacation;
