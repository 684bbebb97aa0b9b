//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `analysis.db` file in the configured output directory
//! with two tables: `arc_metrics` and `instance_summaries`.  Undefined
//! ratios are stored as NULL.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ArcMetricRow, InstanceSummaryRow, OutputResult};

/// Writes analysis output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `analysis.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("analysis.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS arc_metrics (
                 instance_name               TEXT    NOT NULL,
                 instance_type               TEXT    NOT NULL,
                 route_idx                   INTEGER NOT NULL,
                 arc_idx                     INTEGER NOT NULL,
                 node_from                   INTEGER NOT NULL,
                 node_to                     INTEGER NOT NULL,
                 departure_time              REAL    NOT NULL,
                 actual_travel_time          REAL    NOT NULL,
                 fastest_feasible_time       REAL    NOT NULL,
                 slowest_feasible_time       REAL    NOT NULL,
                 actual_distance             REAL    NOT NULL,
                 shortest_feasible_distance  REAL    NOT NULL,
                 longest_feasible_distance   REAL    NOT NULL,
                 ratio_to_min                REAL,
                 ratio_to_max                REAL,
                 ratio_to_min_dist           REAL,
                 ratio_to_max_dist           REAL,
                 decile_rank                 INTEGER NOT NULL,
                 decile_rank_distance        INTEGER NOT NULL,
                 proximity_category          TEXT    NOT NULL,
                 proximity_category_distance TEXT    NOT NULL,
                 num_feasible_arcs           INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS instance_summaries (
                 instance_name          TEXT PRIMARY KEY,
                 instance_type          TEXT    NOT NULL,
                 total_arcs             INTEGER NOT NULL,
                 total_routes           INTEGER NOT NULL,
                 avg_feasible_arcs      REAL    NOT NULL,
                 total_travel_time      REAL    NOT NULL,
                 near_optimal_pct       REAL    NOT NULL,
                 far_pct                REAL    NOT NULL,
                 avg_decile             REAL    NOT NULL,
                 avg_ratio_to_min       REAL,
                 avg_ratio_to_max       REAL,
                 near_optimal_pct_dist  REAL    NOT NULL,
                 far_pct_dist           REAL    NOT NULL,
                 avg_decile_dist        REAL    NOT NULL,
                 avg_ratio_to_min_dist  REAL,
                 avg_ratio_to_max_dist  REAL
             );",
        )?;

        Ok(Self {
            conn,
            finished: false,
        })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_arc_metrics(&mut self, rows: &[ArcMetricRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO arc_metrics VALUES \
                 (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, \
                  ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.instance_name,
                    row.instance_type,
                    row.route_idx,
                    row.arc_idx,
                    row.node_from,
                    row.node_to,
                    row.departure_time,
                    row.actual_travel_time,
                    row.fastest_feasible_time,
                    row.slowest_feasible_time,
                    row.actual_distance,
                    row.shortest_feasible_distance,
                    row.longest_feasible_distance,
                    row.ratio_to_min,
                    row.ratio_to_max,
                    row.ratio_to_min_dist,
                    row.ratio_to_max_dist,
                    row.decile_rank,
                    row.decile_rank_distance,
                    row.proximity_category,
                    row.proximity_category_distance,
                    row.num_feasible_arcs,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_instance_summary(&mut self, row: &InstanceSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO instance_summaries VALUES \
             (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
            rusqlite::params![
                row.instance_name,
                row.instance_type,
                row.total_arcs,
                row.total_routes,
                row.avg_feasible_arcs,
                row.total_travel_time,
                row.near_optimal_pct,
                row.far_pct,
                row.avg_decile,
                row.avg_ratio_to_min,
                row.avg_ratio_to_max,
                row.near_optimal_pct_dist,
                row.far_pct_dist,
                row.avg_decile_dist,
                row.avg_ratio_to_min_dist,
                row.avg_ratio_to_max_dist,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
