//! Ledgerview command line.
//!
//! Loads a snapshot of movements, builds one calendar view and prints it.
//!
//! Usage:
//!   ledgerview --input movements.json --view week --date 2024-03-07
//!   ledgerview --view month --shift -1 --json < movements.json

mod render;

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgerview_core::calendar::{Clock, FixedClock, SystemClock};
use ledgerview_core::{
    Direction, Granularity, Movement, MovementAggregator, ViewModelBuilder, ViewRequest,
};
use ledgerview_shared::{AmountFormat, AppConfig, AppError};

/// Largest `--shift` accepted: a century of months.
const MAX_SHIFT: i64 = 1200;

#[derive(Parser, Debug)]
#[command(name = "ledgerview", version, about = "Accounting calendar over a movement snapshot")]
struct Cli {
    /// JSON array of movements (defaults to stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// View to build: day, week, month or year
    #[arg(short = 'v', long = "view", default_value = "month")]
    view: Granularity,

    /// Any day inside the period to show (defaults to today)
    #[arg(short = 'd', long = "date")]
    date: Option<NaiveDate>,

    /// Overrides today's date
    #[arg(long = "today")]
    today: Option<NaiveDate>,

    /// Number of periods to move; negative goes back
    #[arg(
        long = "shift",
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-MAX_SHIFT..=MAX_SHIFT)
    )]
    shift: i32,

    /// Print the view model as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ledgerview: {err:#}");
            ExitCode::from(err.downcast_ref::<AppError>().map_or(1, AppError::exit_code))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let tz = config.calendar.tz()?;
    let movements = load_movements(cli.input.as_deref())?;
    info!(count = movements.len(), timezone = %tz, "Loaded movement snapshot");

    let request = match cli.today {
        Some(today) => view_request(cli, &FixedClock(today)),
        None => view_request(cli, &SystemClock::new(tz)),
    };

    let builder = ViewModelBuilder::new(MovementAggregator::new(tz));
    let view = builder.build(&movements, &request);

    let mut out = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &view)?;
        writeln!(out)?;
    } else {
        render::write_view(&mut out, &view, &AmountFormat::from_config(&config.display))?;
    }
    out.flush()?;

    Ok(())
}

fn load_movements(path: Option<&str>) -> Result<Vec<Movement>, AppError> {
    let reader: Box<dyn Read> = match path {
        Some(path) => Box::new(
            File::open(path).map_err(|err| AppError::NotFound(format!("{path}: {err}")))?,
        ),
        None => Box::new(io::stdin()),
    };

    serde_json::from_reader(BufReader::new(reader))
        .map_err(|err| AppError::Validation(format!("invalid movement snapshot: {err}")))
}

fn view_request(cli: &Cli, clock: &impl Clock) -> ViewRequest {
    let today = clock.today();
    let request = ViewRequest::new(cli.date.unwrap_or(today), cli.view, today);
    shift(request, cli.shift)
}

fn shift(mut request: ViewRequest, steps: i32) -> ViewRequest {
    let direction = if steps < 0 {
        Direction::Previous
    } else {
        Direction::Next
    };
    for _ in 0..steps.unsigned_abs() {
        request = request.shifted(direction);
    }
    request
}
