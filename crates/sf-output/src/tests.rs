//! Integration tests for sf-output.

#[cfg(test)]
mod helpers {
    use sf_agent::{AgentSpawn, AgentStoreBuilder, ProfileTable};
    use sf_core::{ProfileId, SimConfig, Vec3};
    use sf_env::{EnvironmentBuilder, StraightLineNavigator};
    use sf_sim::{Sim, SimBuilder};

    pub fn config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
        SimConfig {
            tick_duration_secs: 0.1,
            total_ticks,
            seed: 1,
            num_threads: Some(1),
            output_interval_ticks,
            ..SimConfig::default()
        }
    }

    /// `n` agents, four units apart along z, shuttling between two points.
    pub fn shuttle(config: SimConfig, n: usize) -> Sim {
        let profiles = ProfileTable::presets();
        let agents = AgentStoreBuilder::new(0.5)
            .spawn_all((0..n).map(|i| AgentSpawn::at(Vec3::new(0.0, 0.0, i as f32 * 4.0), ProfileId(0))))
            .build(&profiles)
            .unwrap();
        let env = EnvironmentBuilder::new()
            .destinations([Vec3::new(2.0, 0.0, 4.0), Vec3::new(-2.0, 0.0, 4.0)])
            .build()
            .unwrap();
        SimBuilder::new(config, agents, profiles, env, StraightLineNavigator::default())
            .build()
            .unwrap()
    }
}

#[cfg(test)]
mod csv_tests {
    use sf_core::PersonalityType;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, ArrivalRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64, heading: Option<f32>) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            tick,
            time_secs: tick as f32 * 0.5,
            x:         agent_id as f32,
            y:         0.0,
            z:         -1.5,
            vx:        0.25,
            vz:        0.0,
            speed:     0.25,
            heading,
            profile:   2,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("arrivals.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("agent_snapshots.csv")),
            ["agent_id", "tick", "time_secs", "x", "y", "z", "vx", "vz", "speed", "heading", "profile"]
        );
        assert_eq!(
            headers(dir.path().join("arrivals.csv")),
            ["tick", "agent_id", "profile", "personality", "destination", "elapsed_secs"]
        );
        assert_eq!(headers(dir.path().join("tick_summaries.csv")), ["tick", "time_secs", "arrivals"]);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 4, Some(1.5)), snap_row(1, 4, None)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "0");   // agent_id
        assert_eq!(&read_rows[0][1], "4");   // tick
        assert_eq!(&read_rows[0][2], "2");   // time_secs
        assert_eq!(&read_rows[0][5], "-1.5"); // z
        assert_eq!(&read_rows[0][9], "1.5"); // heading
        assert_eq!(&read_rows[1][9], "");    // standing still
        assert_eq!(&read_rows[1][10], "2");  // profile
    }

    #[test]
    fn csv_arrival_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_arrival(&ArrivalRow {
            tick:         12,
            agent_id:     3,
            profile:      1,
            personality:  PersonalityType::Aggressive,
            destination:  0,
            elapsed_secs: 1.25,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("arrivals.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][3], "aggressive");
        assert_eq!(&read_rows[0][5], "1.25");
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 3, time_secs: 1.5, arrivals: 2 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");
        assert_eq!(&read_rows[0][1], "1.5");
        assert_eq!(&read_rows[0][2], "2");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use super::helpers::{config, shuttle};
    use crate::{CsvWriter, SimOutputObserver};

    #[test]
    fn integration_csv() {
        let config = config(300, 100);
        let mut sim = shuttle(config.clone(), 3);

        let dir = TempDir::new().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 100 → snapshots at ticks 0, 100, 200 (3 ticks × 3 agents)
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 9 snapshot rows, got {}", rows.len());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 300);
        let reported: u64 = summaries.iter().map(|r| r[2].parse::<u64>().unwrap()).sum();

        let mut rdr = csv::Reader::from_path(dir.path().join("arrivals.csv")).unwrap();
        let arrivals: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert!(!arrivals.is_empty());
        assert_eq!(arrivals.len() as u64, reported);
        assert!(arrivals.iter().all(|r| &r[3] == "standard"));
    }
}

#[cfg(test)]
mod recorder_tests {
    use sf_core::{AgentId, DestinationId, PersonalityType, ProfileId, Tick};
    use sf_sim::ArrivalEvent;

    use super::helpers::{config, shuttle};
    use crate::ArrivalRecorder;

    fn event(destination: u32, elapsed_secs: f32, tick: u64) -> ArrivalEvent {
        ArrivalEvent {
            agent:        AgentId(0),
            profile:      ProfileId(4),
            personality:  PersonalityType::Reckless,
            destination:  DestinationId(destination),
            tick:         Tick(tick),
            elapsed_secs,
        }
    }

    #[test]
    fn ignores_arrivals_before_start() {
        let mut rec = ArrivalRecorder::new(2);
        assert!(!rec.record(&event(0, 1.0, 1)));
        assert_eq!(rec.recorded(), 0);
        assert!(rec.times().iter().all(Option::is_none));
    }

    #[test]
    fn completes_after_count_plus_one() {
        let mut rec = ArrivalRecorder::new(2);
        rec.start();
        assert!(rec.record(&event(0, 4.0, 10)));
        assert!(rec.record(&event(1, 5.0, 20)));
        assert!(rec.is_recording());
        assert!(rec.record(&event(0, 6.0, 30)));
        assert!(!rec.is_recording());
        assert_eq!(rec.completed_at(), Some(Tick(30)));

        // Latest time wins per destination.
        let slot = rec.time_for(DestinationId(0)).unwrap();
        assert_eq!(slot.elapsed_secs, 6.0);
        assert_eq!(slot.personality, PersonalityType::Reckless);
        assert_eq!(rec.time_for(DestinationId(1)).unwrap().elapsed_secs, 5.0);

        // Closed session ignores further arrivals.
        assert!(!rec.record(&event(1, 9.0, 40)));
        assert_eq!(rec.recorded(), 3);
    }

    #[test]
    fn unknown_destination_ignored() {
        let mut rec = ArrivalRecorder::new(1);
        rec.start();
        assert!(!rec.record(&event(5, 1.0, 1)));
        assert_eq!(rec.recorded(), 0);
        assert!(rec.is_recording());
    }

    #[test]
    fn restart_resets_count() {
        let mut rec = ArrivalRecorder::new(1);
        rec.start();
        rec.record(&event(0, 1.0, 1));
        rec.record(&event(0, 2.0, 2));
        assert!(!rec.is_recording());
        rec.start();
        assert!(rec.is_recording());
        assert_eq!(rec.recorded(), 0);
        assert_eq!(rec.completed_at(), None);
    }

    #[test]
    fn records_from_a_running_sim() {
        let mut sim = shuttle(config(2_000, 0), 1);
        let mut rec = ArrivalRecorder::new(sim.environment.destination_count());
        sim.reset_cycler();
        rec.start();
        sim.run(&mut rec).unwrap();

        assert!(!rec.is_recording(), "three arrivals should close a two-destination session");
        assert_eq!(rec.recorded(), 3);
        assert!(rec.times().iter().all(|t| t.is_some_and(|t| t.elapsed_secs > 0.0)));
    }
}
