//! field — one cotton field run, from first row to the last tick.
//!
//! A harvester works east/west rows and streams telemetry to the base
//! station; whenever its bin passes the trigger level a transport cart
//! drives out, unloads it, and returns to the field corner.  Parameters
//! come from the built-in defaults, an optional JSON `RunConfig`, and the
//! command-line overrides below.  Set `RUST_LOG=debug` to see every
//! telemetry snapshot.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use hv_core::{RunConfig, SimRng, Tick};
use hv_sim::{PathRecorder, SimBuilder, SimObserver, SimState, TickState};
use hv_telemetry::{AlertPolicy, BaseStation};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "field")]
#[command(about = "Simulate a harvester and transport cart working one field")]
struct Args {
    /// JSON run configuration (`{"sim": …, "field": …, "cart": …}`); any
    /// missing section or field keeps its default
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Raise an alert only on the first over-threshold snapshot of a cycle
    #[arg(long)]
    rising_edge: bool,

    /// Print a status line every N ticks (0 disables)
    #[arg(long, default_value_t = 200)]
    every: u64,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

// ── Observer wrapper to count ticks per state ────────────────────────────────

struct RunObserver {
    inner:       PathRecorder,
    every:       u64,
    harvesting:  u64,
    approaching: u64,
    unloading:   u64,
    returning:   u64,
    arrivals:    Vec<Tick>,
}

impl RunObserver {
    fn new(every: u64) -> Self {
        Self {
            inner: PathRecorder::new(),
            every,
            harvesting: 0,
            approaching: 0,
            unloading: 0,
            returning: 0,
            arrivals: Vec::new(),
        }
    }
}

impl SimObserver for RunObserver {
    fn on_tick_end(&mut self, state: &TickState) {
        match state.state {
            SimState::Harvesting => self.harvesting += 1,
            s if s.is_unloading() => self.unloading += 1,
            SimState::CartApproaching(_) => self.approaching += 1,
            SimState::CartReturning => self.returning += 1,
        }
        if self.every > 0 && state.tick.0 % self.every == 0 {
            println!(
                "{:<8} {:<18} {:>6.1}%  {:<26} {:<12}",
                state.tick.to_string(),
                state.state.as_str(),
                state.bin_fill_ratio * 100.0,
                state.harvester_position.to_string(),
                state.cart_mode.as_str(),
            );
        }
        self.inner.on_tick_end(state);
    }

    fn on_state_change(&mut self, tick: Tick, from: SimState, to: SimState) {
        if !from.is_unloading() && to.is_unloading() {
            self.arrivals.push(tick);
        }
        self.inner.on_state_change(tick, from, to);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // 1. Effective configuration.
    let mut run = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<RunConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => RunConfig::default(),
    };
    if let Some(seed) = args.seed {
        run.sim.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        run.sim.total_ticks = ticks;
    }
    run.validate()?;

    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&run)?);
        return Ok(());
    }

    let policy = if args.rising_edge { AlertPolicy::RisingEdge } else { AlertPolicy::EveryTick };
    info!(
        ticks = run.sim.total_ticks,
        seed = run.sim.seed,
        origin = %run.field.origin,
        steps_per_row = run.field.steps_per_row(),
        ?policy,
        "starting field run"
    );

    // 2. Build sim.
    let rng = SimRng::new(run.sim.seed);
    let mut sim = SimBuilder::new(run.sim.clone(), BaseStation::with_policy(policy), rng)
        .field(run.field.clone())
        .cart(run.cart.clone())
        .build()?;

    // 3. Run.
    println!("{:<8} {:<18} {:>7}  {:<26} {:<12}", "Tick", "State", "Bin", "Harvester", "Cart");
    println!("{}", "-".repeat(76));
    let mut obs = RunObserver::new(args.every);
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    // 4. Summary.
    let clock = sim.clock();
    let station = sim.sink();
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  simulated time   : {:.1} s ({})", clock.elapsed_secs(), clock.current_tick);
    println!("  rows completed   : {}", sim.harvester().row_index());
    println!("  service cycles   : {}", sim.service_cycles());
    println!("  telemetry / alert: {} / {}", station.log().len(), station.alert_count());
    println!("  final state      : {}", sim.state());
    println!();

    println!("{:<14} {:>8}", "State", "Ticks");
    println!("{}", "-".repeat(23));
    println!("{:<14} {:>8}", "harvesting", obs.harvesting);
    println!("{:<14} {:>8}", "approaching", obs.approaching);
    println!("{:<14} {:>8}", "unloading", obs.unloading);
    println!("{:<14} {:>8}", "returning", obs.returning);
    println!();

    if !obs.arrivals.is_empty() {
        let list: Vec<String> = obs.arrivals.iter().map(Tick::to_string).collect();
        println!("Cart alongside at: {}", list.join(", "));
    }
    println!(
        "Recorded {} harvester points, {} cart trail points",
        obs.inner.harvester_path().len(),
        obs.inner.cart_trail_len(),
    );

    Ok(())
}
