use clap::{Parser, ValueEnum};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use vehicle_sim_core::{report, run_batch, InputKey, SimError, SimulationConfig};

/// Vehicle projection: velocity, distance and fuel after a fixed interval
#[derive(Parser, Debug)]
#[command(name = "vehicle-sim")]
#[command(about = "Project velocity, distance and remaining fuel over a fixed interval", long_about = None)]
struct Args {
    /// TOML file with initial conditions and optional [[scenarios]]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial velocity in km/h, or in m/s with an `m/s` suffix
    #[arg(long, allow_hyphen_values = true)]
    initial_velocity: Option<String>,

    /// Acceleration in m/s² (negative to decelerate)
    #[arg(long, allow_hyphen_values = true)]
    acceleration: Option<String>,

    /// Elapsed time in seconds
    #[arg(short, long, allow_hyphen_values = true)]
    time: Option<String>,

    /// Initial distance in km
    #[arg(long, allow_hyphen_values = true)]
    initial_distance: Option<String>,

    /// Initial fuel in kg
    #[arg(long, allow_hyphen_values = true)]
    initial_fuel: Option<String>,

    /// Fuel burn rate in kg/s
    #[arg(long, allow_hyphen_values = true)]
    burn_rate: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log calculation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Args {
    fn overrides(&self) -> [(InputKey, Option<&str>); 6] {
        [
            (InputKey::InitialVelocity, self.initial_velocity.as_deref()),
            (InputKey::Acceleration, self.acceleration.as_deref()),
            (InputKey::Time, self.time.as_deref()),
            (InputKey::InitialDistance, self.initial_distance.as_deref()),
            (InputKey::InitialFuel, self.initial_fuel.as_deref()),
            (InputKey::BurnRate, self.burn_rate.as_deref()),
        ]
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(args: &Args) -> Result<SimulationConfig, SimError> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    for (key, text) in args.overrides() {
        if let Some(text) = text {
            config.override_value(key, text)?;
        }
    }
    Ok(config)
}

/// Print the report; returns false if any quantity could not be computed.
fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    let config = load_config(args)?;
    debug!(inputs = ?config.inputs, scenarios = config.scenarios.len(), "configuration ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let failures: Vec<(Option<String>, String)> = if config.scenarios.is_empty() {
        let outcome = config.inputs.run();
        match args.format {
            OutputFormat::Text => report::write_text(&mut out, &outcome)?
                .into_iter()
                .map(|err| (None, err.to_string()))
                .collect(),
            OutputFormat::Json => match outcome.into_result() {
                Ok(result) => {
                    report::write_json(&mut out, &result)?;
                    Vec::new()
                }
                Err(err) => vec![(None, err.to_string())],
            },
        }
    } else {
        let outcomes = run_batch(&config.scenarios);
        let failures = match args.format {
            OutputFormat::Text => report::write_batch_text(&mut out, &outcomes)?,
            OutputFormat::Json => report::write_batch_json(&mut out, &outcomes)?,
        };
        failures
            .into_iter()
            .map(|(name, err)| (Some(name.to_owned()), err.to_string()))
            .collect()
    };
    out.flush()?;

    for (scenario, message) in &failures {
        match scenario {
            Some(name) => eprintln!("error: [{name}] {message}"),
            None => eprintln!("error: {message}"),
        }
    }
    Ok(failures.is_empty())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
