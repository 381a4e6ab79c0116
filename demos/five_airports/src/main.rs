//! five_airports — smallest demo for the flightsir epidemic model.
//!
//! Seeds an infection at ATL on a five-airport ring and prints the S/I/R
//! counts after every step.
//!
//! # Example
//!
//! ```bash
//! # Default run: infection 0.4, recovery 0.2, 20 steps
//! five_airports
//!
//! # Show which airports are infected at each step, with trace logs
//! RUST_LOG=flu_sim=trace five_airports --show-airports --seed 7
//!
//! # 100 independent replicates, final counts only
//! five_airports --replicates 100
//! ```

mod network;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flu_core::{InfectionState, SimRng, SirParams, StateCounts, Tick};
use flu_network::FlightNetwork;
use flu_sim::{SimBuilder, SimObserver};

use network::build_network;

/// SIR spread over a five-airport flight ring.
#[derive(Parser, Debug)]
#[command(name = "five_airports")]
#[command(version, about, long_about = None)]
struct Args {
    /// Chance an infected airport infects a susceptible destination per step
    #[arg(short = 'i', long, default_value_t = 0.4)]
    infection_chance: f64,

    /// Chance an infected airport recovers per step
    #[arg(short = 'r', long, default_value_t = 0.2)]
    recovery_chance: f64,

    /// Number of steps to run
    #[arg(short = 'n', long, default_value_t = 20)]
    steps: u64,

    /// Random seed for reproducible results
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Airports infected before the first step
    #[arg(long = "infect", default_values_t = vec!["ATL".to_string()])]
    infect: Vec<String>,

    /// Also list the infected airports after each step
    #[arg(long)]
    show_airports: bool,

    /// Run this many independent replicates and print only final counts
    #[arg(long, default_value_t = 1)]
    replicates: u64,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints one `t=<index>: {S: .., I: .., R: ..}` line per step.
struct StepPrinter {
    show_airports: bool,
}

impl SimObserver for StepPrinter {
    fn on_step_end(&mut self, tick: Tick, counts: &StateCounts, network: &FlightNetwork) {
        let t = tick.0 - 1;
        if self.show_airports {
            let infected: Vec<_> = network.codes_in(InfectionState::Infected).collect();
            println!("t={t}: {counts}  infected: [{}]", infected.join(", "));
        } else {
            println!("t={t}: {counts}");
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let params = SirParams::new(args.infection_chance, args.recovery_chance)
        .with_seed(args.seed)
        .with_steps(args.steps);

    let mut net = build_network();
    for code in &args.infect {
        net.seed_infection(code)
            .with_context(|| format!("cannot seed infection at {code}"))?;
    }

    if args.replicates > 1 {
        return run_replicates(net, &params, args.replicates);
    }

    info!(seed = params.seed, steps = params.steps, "starting run");
    let mut sim = SimBuilder::new(net, params.clone())
        .build()
        .context("failed to build simulation")?;
    sim.run_observed(params.steps, &mut StepPrinter { show_airports: args.show_airports });

    Ok(())
}

/// Run independent replicates, each on its own copy of the network with its
/// own derived random stream.
fn run_replicates(net: FlightNetwork, params: &SirParams, replicates: u64) -> Result<()> {
    println!("{:<10} {:<24}", "Replicate", "Final counts");
    println!("{}", "-".repeat(34));

    let mut ever_infected = 0usize;
    for k in 0..replicates {
        let mut sim = SimBuilder::new(net.clone(), params.clone())
            .rng(SimRng::for_replicate(params.seed, k))
            .build()
            .with_context(|| format!("failed to build replicate {k}"))?;
        sim.run(params.steps);

        let last = sim.current_counts();
        ever_infected += last.infected + last.recovered;
        println!("{k:<10} {last}");
    }

    println!();
    println!(
        "Mean airports ever infected: {:.2} of {}",
        ever_infected as f64 / replicates as f64,
        net.len()
    );
    Ok(())
}
