//! `sf-output` — simulation output writers for the crowd simulator.
//!
//! | Type                 | Role                                                     |
//! |----------------------|----------------------------------------------------------|
//! | [`CsvWriter`]        | `agent_snapshots.csv`, `arrivals.csv`, `tick_summaries.csv` |
//! | [`SimOutputObserver`]| drives any [`OutputWriter`] from `sf_sim::SimObserver` hooks |
//! | [`ArrivalRecorder`]  | in-memory leg-time recording sessions                    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use sf_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod recorder;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use recorder::{ArrivalRecorder, RecordedTime};
pub use row::{AgentSnapshotRow, ArrivalRow, TickSummaryRow};
pub use writer::OutputWriter;
