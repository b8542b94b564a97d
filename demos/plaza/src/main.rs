//! plaza — a walled public square crossed by a mixed crowd.
//!
//! Sixty agents of five personalities walk between four gates around a
//! 30 × 30 plaza with a fountain in the middle, a row of pillars and two
//! kiosks that pull distracted walkers aside.  Positions are written to
//! `output/plaza/` and one arrival-timing session is recorded.
//!
//! Run with `RUST_LOG=debug` to see every arrival.

mod scene;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use sf_agent::{AgentStore, load_profiles_reader};
use sf_core::{SimClock, SimConfig, Tick};
use sf_env::{DestinationCycler, StraightLineNavigator};
use sf_output::{ArrivalRecorder, CsvWriter, SimOutputObserver};
use sf_sim::{ArrivalEvent, SimBuilder, SimObserver};

use scene::{build_environment, spawn_crowd};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:           usize = 60;
const SEED:                  u64   = 42;
const TICK_DURATION_SECS:    f32   = 0.1;
const SIM_SECS:              u64   = 600;
const OUTPUT_INTERVAL_TICKS: u64   = 10; // one snapshot per simulated second
const RECORD_FROM_TICK:      u64   = 600;
const STOPPING_DISTANCE:     f32   = 0.75;

// ── Profile presets ───────────────────────────────────────────────────────────

// One row per named profile; the personality column picks the behaviour
// family, the remaining columns are the force coefficients.
const PROFILES_CSV: &str = "\
name,personality,obstacle_weight,obstacle_strength,obstacle_range,agent_weight,agent_strength,agent_range,direction_weight,range_dir_factor,angular_range,angular_range_large,wall_weight,wall_strength,wall_range,driving_weight,desired_speed,attraction_weight,attraction_strength,attraction_range\n\
commuter,standard,1,5,1.5,1,45,5,2,0.4,2,3,1,2,0.4,1,0.5,0.2,0.5,3\n\
courier,aggressive,1,4,1.2,1,30,3,2,0.4,2,3,1,2,0.4,1,0.8,0.2,0.5,3\n\
pensioner,cautious,1,7,2,1,60,7,2,0.4,2,3,1,3,0.6,1,0.35,0.2,0.5,3\n\
tourist,distracted,1,5,1.5,1,45,5,2,0.4,2,3,1,2,0.4,1,0.4,1,2,6\n\
skater,reckless,0.5,2.5,1,1,35,4,2,0.4,2,3,0.5,1,0.25,1,0.9,0.2,0.5,3\n";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Writes CSV output, runs one recording session, and counts arrivals.
struct PlazaObserver {
    output:        SimOutputObserver<CsvWriter>,
    recorder:      ArrivalRecorder,
    arrivals:      usize,
    snapshot_rows: usize,
}

impl SimObserver for PlazaObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        self.output.on_tick_start(tick);
    }

    fn on_arrival(&mut self, event: &ArrivalEvent) {
        self.arrivals += 1;
        self.output.on_arrival(event);
        self.recorder.on_arrival(event);
    }

    fn on_tick_end(&mut self, tick: Tick, arrivals: usize) {
        self.output.on_tick_end(tick, arrivals);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.snapshot_rows += agents.count;
        self.output.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.output.on_sim_end(final_tick);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    println!("=== plaza: social-force crowd ===");
    println!();

    // 1. Profiles.
    let profiles = load_profiles_reader(Cursor::new(PROFILES_CSV))?;
    println!("Loaded {} personality profiles", profiles.len());

    // 2. Config.
    let config = SimConfig {
        tick_duration_secs:    TICK_DURATION_SECS,
        total_ticks:           SimClock::new(TICK_DURATION_SECS).ticks_for_secs(SIM_SECS as f32),
        seed:                  SEED,
        num_threads:           None, // all logical cores
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        ..SimConfig::default()
    };

    // 3. Environment and crowd.
    let environment = build_environment()?;
    let agents = spawn_crowd(AGENT_COUNT, SEED, &profiles, config.default_agent_radius)?;
    println!(
        "Scene: {} agents, {} gates, {} walls, {} pillars, {} kiosks",
        agents.count,
        environment.destination_count(),
        environment.walls().len(),
        environment.obstacles().len(),
        environment.attractors().len(),
    );
    println!(
        "Sim: {} ticks of {} s, snapshot every {} ticks",
        config.total_ticks, TICK_DURATION_SECS, OUTPUT_INTERVAL_TICKS
    );
    println!();

    // 4. Build sim.
    let destination_count = environment.destination_count();
    let mut sim = SimBuilder::new(
        config.clone(),
        agents,
        profiles,
        environment,
        StraightLineNavigator::new(STOPPING_DISTANCE)?,
    )
    .cycler(DestinationCycler::uniform_random(SEED))
    .build()?;

    // 5. Output.
    std::fs::create_dir_all("output/plaza")?;
    let writer = CsvWriter::new(Path::new("output/plaza"))?;
    let mut obs = PlazaObserver {
        output:        SimOutputObserver::new(writer, &config),
        recorder:      ArrivalRecorder::new(destination_count),
        arrivals:      0,
        snapshot_rows: 0,
    };

    // 6. Warm up, then switch to round-robin and record one session.
    let t0 = Instant::now();
    sim.run_ticks(RECORD_FROM_TICK, &mut obs)?;
    sim.cycler = DestinationCycler::round_robin();
    sim.reset_cycler();
    obs.recorder.start();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.output.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  arrivals.csv        : {} rows", obs.arrivals);
    println!();

    println!("{:<6} {:<12} {:>10}", "Gate", "Personality", "Leg (s)");
    println!("{}", "-".repeat(30));
    for (gate, slot) in obs.recorder.times().iter().enumerate() {
        match slot {
            Some(t) => println!("{:<6} {:<12} {:>10.1}", gate, t.personality, t.elapsed_secs),
            None => println!("{:<6} {:<12} {:>10}", gate, "-", "-"),
        }
    }
    if obs.recorder.is_recording() {
        println!("(session still open after {} arrivals)", obs.recorder.recorded());
    }

    Ok(())
}
