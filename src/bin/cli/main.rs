mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use ratib_lib::schedule::Slot;
use ratib_lib::settings::parse_start_date;

/// Longest listing `upcoming` will print
const MAX_UPCOMING_DAYS: i64 = 366;

#[derive(Parser)]
#[command(name = "ratib-cli", about = "Daily morning and evening hizb schedule", version)]
struct Cli {
    /// Data directory holding settings and ratib.toml
    #[arg(long, global = true, env = "RATIB_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SlotArg {
    Morning,
    Evening,
}

impl From<SlotArg> for Slot {
    fn from(slot: SlotArg) -> Self {
        match slot {
            SlotArg::Morning => Slot::Morning,
            SlotArg::Evening => Slot::Evening,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Show the morning and evening readings for a day
    Day {
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// List the readings for consecutive days
    Upcoming {
        /// First day (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        from: Option<NaiveDate>,
        /// Number of days (1-366)
        #[arg(long, default_value = "7", value_parser = clap::value_parser!(u16).range(1..=MAX_UPCOMING_DAYS))]
        days: u16,
    },

    /// Print the text of a reading
    Read {
        /// Which slot to read
        slot: SlotArg,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Print a short reflection on the day's readings
    Reflect {
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Show or change the starting point
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Show the stored start date and hizb
    Show,

    /// Set the hizb read on the morning of the start date
    SetHizb {
        /// Hizb number (1-60)
        #[arg(allow_negative_numbers = true)]
        hizb: i64,
    },

    /// Set the start date, keeping the hizb
    SetDate {
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
    },

    /// Replace both the start date and hizb
    Reset {
        /// Start date (defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
        /// Hizb number (1-60)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        hizb: i64,
    },
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_start_date(raw).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let data_dir = cli.data_dir;

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(data_dir)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::Day { date }) => {
            let app = app::App::new(data_dir)?;
            commands::day::run(&app, date, &cli.format, use_color)?;
        }
        Some(Command::Upcoming { from, days }) => {
            let app = app::App::new(data_dir)?;
            commands::upcoming::run(&app, from, usize::from(days), &cli.format, use_color)?;
        }
        Some(Command::Read { slot, date }) => {
            let app = app::App::new(data_dir)?;
            commands::read::run(&app, slot.into(), date, &cli.format, use_color)?;
        }
        Some(Command::Reflect { date }) => {
            let app = app::App::new(data_dir)?;
            commands::reflect::run(&app, date, &cli.format)?;
        }
        Some(Command::Settings(subcmd)) => {
            let mut app = app::App::new(data_dir)?;
            match subcmd {
                SettingsCommand::Show => {
                    commands::settings::run_show(&app, &cli.format)?;
                }
                SettingsCommand::SetHizb { hizb } => {
                    commands::settings::run_set_hizb(&mut app, hizb, &cli.format)?;
                }
                SettingsCommand::SetDate { date } => {
                    commands::settings::run_set_date(&mut app, date, &cli.format)?;
                }
                SettingsCommand::Reset { date, hizb } => {
                    commands::settings::run_reset(&mut app, date, hizb, &cli.format)?;
                }
            }
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(data_dir)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal()
}
