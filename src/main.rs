use anyhow::{ Context, Result };
use clap::Parser;
use dotenv::dotenv;
use log::{ debug, info };

use mathlab::{ LabConfig, RandomProblemGenerator, Session };
mod cli;
use cli::{ Commands, LabCli };

fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = LabCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // .env is optional
    if dotenv().is_err() {
        debug!("No .env file found");
    }

    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Stats { data } => {
            cli::commands::stats::execute(data.as_deref(), &cli.output_format)?;
        }

        Commands::Recurrence { seed } => {
            let tolerance = config.tolerance()?;
            let generator = build_generator(&config, *seed)?;
            let mut session = Session::new(generator, tolerance);
            cli::commands::recurrence::execute(&mut session)?;
        }

        Commands::Problem { seed, reveal } => {
            let mut generator = build_generator(&config, *seed)?;
            cli::commands::problem::execute(&mut generator, *reveal, &cli.output_format)?;
        }
    }

    Ok(())
}

fn load_config(cli: &LabCli) -> Result<LabConfig> {
    let config = match &cli.config {
        Some(path) =>
            LabConfig::from_file(path).with_context(||
                format!("Failed to load config from {}", path.display())
            )?,
        None => LabConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}

/// A `--seed` flag wins over the configured seed; no seed means OS entropy
fn build_generator(
    config: &LabConfig,
    seed: Option<u64>
) -> Result<RandomProblemGenerator<rand::rngs::StdRng>> {
    let generator = match seed.or(config.seed) {
        Some(seed) => {
            info!("Using seed {}", seed);
            RandomProblemGenerator::seeded(seed, config.generator.clone())?
        }
        None => RandomProblemGenerator::from_entropy(config.generator.clone())?,
    };
    Ok(generator)
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
