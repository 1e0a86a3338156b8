use anyhow::Result;
use chrono::{Local, NaiveDateTime, Timelike};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use wt_cli::{Cli, Commands, Config, VacationAction, commands, store};
use wt_core::{Calendar, PeriodSelection};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let now = now_seconds();
    let today = now.date();

    match cli.command {
        Some(Commands::Report(args)) => {
            let config = Config::load(cli.config.as_deref())?;
            let intervals = store::load_intervals(config.watson_dir(), args.current, now)?;
            let calendar = Calendar::from_intervals(intervals);
            let selection = PeriodSelection {
                from: args.from,
                to: args.to,
                period: args.period,
                workweek: args.workweek,
            };
            commands::report::run(&mut std::io::stdout(), &config, &calendar, selection, today)?;
        }
        Some(Commands::Vacation { action }) => {
            let mut config = Config::load(cli.config.as_deref())?;
            match action {
                VacationAction::List => {
                    commands::vacation::list(&mut std::io::stdout(), &config, today)?;
                }
                VacationAction::Add(args) => {
                    let intervals = store::load_intervals(config.watson_dir(), false, now)?;
                    let calendar = Calendar::from_intervals(intervals);
                    commands::vacation::add(&mut config, &calendar, &args.days, args.span())?;
                }
                VacationAction::Del(args) => {
                    commands::vacation::del(&mut config, &args.days, args.span())?;
                }
            }
        }
        Some(Commands::Ignore { days }) => {
            let mut config = Config::load(cli.config.as_deref())?;
            commands::ignore::ignore(&mut config, &days)?;
        }
        Some(Commands::Unignore { days }) => {
            let mut config = Config::load(cli.config.as_deref())?;
            commands::ignore::unignore(&mut config, &days)?;
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}

/// The current local time, truncated to whole seconds to match the frame log
/// resolution.
fn now_seconds() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
