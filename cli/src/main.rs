//! Command-line front end for the checkpoint simulator
//!
//! Loads a configuration (JSON file and/or flags), drives a full run, prints
//! a summary to stdout, and optionally exports the completion records as CSV
//! and the event log as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use checkpoint_simulator_core_rs::collector::RecordCollector;
use checkpoint_simulator_core_rs::{ArrivalConfig, Lane, Simulation, SimulationConfig};

#[derive(Debug, Parser)]
#[command(name = "checkpoint-sim", about = "Airport security checkpoint simulator")]
struct Cli {
    /// JSON configuration file; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (identical seeds replay identical runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation horizon in time units
    #[arg(long)]
    horizon: Option<f64>,

    /// Number of screening agents
    #[arg(long)]
    agents: Option<usize>,

    /// Mean inter-arrival time
    #[arg(long)]
    mean_arrival: Option<f64>,

    /// Probability a passenger uses the expedited lane
    #[arg(long)]
    expedited_probability: Option<f64>,

    /// Probability a passenger needs secondary screening
    #[arg(long)]
    secondary_probability: Option<f64>,

    /// Routing/dispatch tick interval
    #[arg(long)]
    tick: Option<f64>,

    /// Write completion records to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the full event log to this JSON file
    #[arg(long)]
    events: Option<PathBuf>,
}

impl Cli {
    /// Resolve the effective configuration: file first, then flag overrides.
    fn build_config(&self) -> anyhow::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => SimulationConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.rng_seed = seed;
        }
        if let Some(horizon) = self.horizon {
            config.horizon = horizon;
        }
        if let Some(agents) = self.agents {
            config.agent_count = agents;
        }
        if let Some(tick) = self.tick {
            config.tick_interval = tick;
        }
        if self.mean_arrival.is_some()
            || self.expedited_probability.is_some()
            || self.secondary_probability.is_some()
        {
            let arrival = config.arrival.get_or_insert_with(ArrivalConfig::default);
            if let Some(mean) = self.mean_arrival {
                arrival.mean_interarrival = mean;
            }
            if let Some(p) = self.expedited_probability {
                arrival.expedited_probability = p;
            }
            if let Some(p) = self.secondary_probability {
                arrival.secondary_probability = p;
            }
        }

        Ok(config)
    }
}

fn write_csv(path: &PathBuf, collector: &RecordCollector) -> anyhow::Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record([
        "passenger_id",
        "lane",
        "arrival_time",
        "screening_start_time",
        "exit_time",
        "wait_time",
        "needs_secondary",
    ])?;
    for record in collector.records() {
        writer.write_record(&[
            record.passenger_id.to_string(),
            record.lane.to_string(),
            record.arrival_time.value().to_string(),
            record.screening_start_time.value().to_string(),
            record.exit_time.value().to_string(),
            record.wait_time.to_string(),
            record.needs_secondary.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn print_summary(config: &SimulationConfig, sim: &Simulation, collector: &RecordCollector) {
    println!("Checkpoint simulation complete");
    println!("  seed:                {}", config.rng_seed);
    println!("  horizon:             {}", config.horizon);
    println!("  agents:              {}", config.agent_count);
    println!("  passengers created:  {}", sim.passengers_created());
    println!("  passengers screened: {}", sim.passengers_completed());
    println!("  still in system:     {}", sim.passengers_in_system());

    match collector.mean_wait() {
        Some(mean) => println!("  mean wait:           {:.2}", mean),
        None => println!("  mean wait:           n/a"),
    }
    for lane in [Lane::Expedited, Lane::Regular] {
        match collector.mean_wait_for(lane) {
            Some(mean) => println!("  mean wait ({}): {:.2}", lane, mean),
            None => println!("  mean wait ({}): n/a", lane),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.build_config()?;

    let mut sim = Simulation::new(config.clone()).context("building simulation")?;
    let mut collector = RecordCollector::new();
    sim.run(&mut collector).context("running simulation")?;

    print_summary(&config, &sim, &collector);

    if let Some(path) = &cli.output {
        write_csv(path, &collector)?;
        println!("  records written to   {}", path.display());
    }
    if let Some(path) = &cli.events {
        let json = serde_json::to_string_pretty(sim.event_log().events())
            .context("serializing event log")?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("  event log written to {}", path.display());
    }

    Ok(())
}
