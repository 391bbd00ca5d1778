//! CoffeeMaker demo: loads the machine, brews once, and reports the result.
//!
//! ```text
//! coffeemaker --water 400 --coffee 40
//! coffeemaker --water 400 --coffee 0        # NoCoffee fault
//! coffeemaker --no-pot                      # NoPot fault
//! coffeemaker --config machine.json -v
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use tracing_subscriber::filter::LevelFilter;

use coffeemaker::adapters::log_sink::LogEventSink;
use coffeemaker::{CoffeeMaker, MachineConfig, Pot, WeightVessel};

#[derive(Parser)]
#[command(name = "coffeemaker")]
#[command(version)]
#[command(about = "Brew one pot on a simulated drip coffee maker")]
struct Cli {
    /// Water poured into the reservoir
    #[arg(long, default_value = "400")]
    water: i32,

    /// Grounds dropped into the hopper
    #[arg(long, default_value = "400")]
    coffee: i32,

    /// Brew without placing a pot on the plate
    #[arg(long)]
    no_pot: bool,

    /// JSON file overriding the machine configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<MachineConfig> {
    let Some(path) = path else {
        return Ok(MachineConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    MachineConfig::from_json(&text).with_context(|| format!("loading {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("CoffeeMaker v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_ref())?;
    let mut maker = CoffeeMaker::with_config(config).context("building the machine")?;
    let mut sink = LogEventSink::new();

    if !cli.no_pot {
        maker.put_pot(Pot::new())?;
    }
    maker.pour_water_into_the_boiler(cli.water);
    maker.drop_coffee(cli.coffee);

    let outcome = maker.brew_coffee();
    maker.drain_into(&mut sink);

    match outcome {
        Ok(()) if maker.drink_ready() => {
            let pot = maker.take_pot()?;
            maker.drain_into(&mut sink);
            println!("Coffee brewed: {}", pot.current_weight() - pot.baseline());
        }
        Ok(()) => {
            warn!("Brew did not finish: state {}", maker.state());
            println!("Brew incomplete: {}", maker.state());
        }
        Err(e) => {
            println!("Brew failed: {e}");
        }
    }
    Ok(())
}
