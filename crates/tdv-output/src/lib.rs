//! `tdv-output` — analysis output writers for the rust_tdva framework.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                        |
//! |-----------|---------|------------------------------------------------------|
//! | *(none)*  | CSV     | `arc_metrics.csv`, `instance_summaries.csv`          |
//! | `sqlite`  | SQLite  | `analysis.db`                                        |
//! | `parquet` | Parquet | `arc_metrics.parquet`, `instance_summaries.parquet`  |
//!
//! All backends implement [`OutputWriter`]; [`write_report`] drives one of
//! them over a finished corpus report.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tdv_output::{write_report, CsvWriter};
//!
//! let report = tdv_analysis::run_corpus(&cases, &config);
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_report(&mut writer, &report)?;
//! ```

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::write_report;
pub use row::{ArcMetricRow, InstanceSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
