extern crate monthgrid as lib;

use chrono::{Local, NaiveDate};
use flexi_logger::{FileSpec, Logger};
use lib::state::{parse_date, CalendarState};
use lib::view::MonthView;
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;

#[derive(Debug, Clone, Copy)]
pub enum Format {
    Text,
    Toml,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Format::Text),
            "toml" => Ok(Format::Toml),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "monthgrid",
    about = "Print the month grid around a date."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(
        short = "d",
        long = "date",
        help = "reference date as YYYY-MM-DD, defaults to today",
        parse(try_from_str = parse_date)
    )]
    pub date: Option<NaiveDate>,

    #[structopt(
        short = "p",
        long = "prev",
        default_value = "0",
        help = "number of months to go back"
    )]
    pub prev: u32,

    #[structopt(
        short = "n",
        long = "next",
        default_value = "0",
        help = "number of months to go forward"
    )]
    pub next: u32,

    #[structopt(
        short = "f",
        long = "format",
        default_value = "text",
        possible_values = &["text", "toml"],
        help = "output format"
    )]
    pub format: Format,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let mut state = args.date.map_or_else(CalendarState::today, CalendarState::new);

    for _ in 0..args.prev {
        state.prev_month()?;
    }
    for _ in 0..args.next {
        state.next_month()?;
    }

    match args.format {
        Format::Text => print!(
            "{}",
            MonthView::with_config(&state, &config.view).today(Local::now().date_naive())
        ),
        Format::Toml => print!("{}", toml::to_string(&state.snapshot())?),
    }

    Ok(())
}
