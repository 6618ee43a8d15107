//! # fyclose CLI
//!
//! `fyclose [OPTIONS] <TICKER> <YEAR>` prints the close nearest to the fiscal
//! year-end; `--earnings` prints the close nearest to every earnings date in the
//! year instead. Builds with the `mock` feature accept a hidden `--mock` flag that
//! serves lookups from the offline fixture connector.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use fyclose::{
    FyError, Fyclose, LookupRequest, PriceRounding, render_earnings_report, render_report,
};
use fyclose_core::FyConnector;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum RoundingArg {
    HalfUp,
    HalfEven,
}

impl From<RoundingArg> for PriceRounding {
    fn from(r: RoundingArg) -> Self {
        match r {
            RoundingArg::HalfUp => Self::HalfUp,
            RoundingArg::HalfEven => Self::HalfEven,
        }
    }
}

#[derive(Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Closing share price nearest to a company's fiscal year-end"
)]
struct Cli {
    #[arg(help = "Ticker symbol, passed to the provider as-is (e.g. AAPL, 7203.T)")]
    ticker: String,

    #[arg(help = "Calendar year of the fiscal year-end")]
    year: i32,

    #[arg(
        long,
        help = "List every earnings date in the year with the nearest close"
    )]
    earnings: bool,

    #[arg(
        long = "pad-days",
        value_parser = clap::value_parser!(u32).range(1..=366),
        help = "Calendar days of price history on each side of the target date [default: 5, or 3 with --earnings]"
    )]
    pad_days: Option<u32>,

    #[arg(long, value_enum, default_value_t = RoundingArg::HalfUp, help = "Rounding of the closing price")]
    rounding: RoundingArg,

    #[arg(
        long = "timeout-secs",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Timeout for each provider request"
    )]
    timeout_secs: u64,

    #[arg(long, help = "Print the result as JSON instead of the report")]
    json: bool,

    #[cfg(feature = "mock")]
    #[arg(long, hide = true)]
    mock: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(feature = "mock")]
fn connector(cli: &Cli) -> Result<Arc<dyn FyConnector>, FyError> {
    if cli.mock {
        return Ok(Arc::new(fyclose_mock::MockConnector::new()));
    }
    Ok(Arc::new(fyclose_yfinance::YfConnector::try_new_default()?))
}

#[cfg(not(feature = "mock"))]
fn connector(_cli: &Cli) -> Result<Arc<dyn FyConnector>, FyError> {
    Ok(Arc::new(fyclose_yfinance::YfConnector::try_new_default()?))
}

fn build(cli: &Cli) -> Result<Fyclose, FyError> {
    let mut builder = Fyclose::builder()
        .with_connector(connector(cli)?)
        .provider_timeout(Duration::from_secs(cli.timeout_secs))
        .rounding(cli.rounding.into());
    if let Some(pad) = cli.pad_days {
        builder = if cli.earnings {
            builder.earnings_pad_days(pad)
        } else {
            builder.window_pad_days(pad)
        };
    }
    builder.build()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, FyError> {
    serde_json::to_string_pretty(value).map_err(|e| FyError::Data(format!("serialize result: {e}")))
}

async fn run(cli: &Cli, req: &LookupRequest) -> Result<(), FyError> {
    let fy = build(cli)?;

    if !cli.json {
        let what = if cli.earnings {
            "earnings-date prices"
        } else {
            "fiscal year-end price"
        };
        println!("Fetching {what} for {} ({})...", req.ticker(), req.year());
        println!();
    }

    if cli.earnings {
        let report = fy.earnings_prices(req).await?;
        if cli.json {
            println!("{}", to_json(&report)?);
        } else {
            print!("{}", render_earnings_report(&report));
        }
    } else {
        let result = fy.lookup(req).await?;
        if cli.json {
            println!("{}", to_json(&result)?);
        } else {
            print!("{}", render_report(&result));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            print!("{}", err.render());
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let req = match LookupRequest::new(cli.ticker.as_str(), cli.year) {
        Ok(req) => req,
        Err(err) => {
            println!("{err}");
            println!();
            println!("{}", Cli::command().render_usage());
            return ExitCode::FAILURE;
        }
    };

    init_tracing();

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(&cli, &req)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
