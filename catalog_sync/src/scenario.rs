//! Scenario controller: one-shot orchestration of a migration run.
//!
//! A run executes exactly one [`Scenario`] against the connection it is
//! handed and returns a [`RunReport`] describing what happened. No scenario
//! state persists between runs; data flows strictly downward through
//! schema → seed → normalize → clone, and CONVERT touches none of those.

use diesel::SqliteConnection;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::EngineResult;
use crate::migrate::{clone, colors, cutover, ddl};
use crate::migrate::ddl::{StatementOutcome, StatementReport};
use crate::migrate::seed;
use crate::profile::SeedProfile;

/// Run mode governing which migration steps execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Drop and recreate the schema, seed, materialize colors, clone.
    Recreate,
    /// Keep the schema, seed more rows, load stored colors, re-clone.
    Append,
    /// Only promote the normalized table to the production name.
    Convert,
}

/// What a completed run did.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-statement outcomes of the DDL batches (recreate runs only).
    pub ddl: Vec<StatementReport>,
    /// Rows inserted into the flat catalog.
    pub rows_seeded: u32,
    /// Entries in the color map used for backfill.
    pub colors_mapped: usize,
    /// Rows copied into the normalized table.
    pub rows_cloned: usize,
    /// Whether the cutover ran.
    pub promoted: bool,
}

/// Execute one complete run of the selected scenario.
///
/// Errors from seeding, normalization, cloning, or cutover propagate and
/// abort the run; DDL statement failures are reported (and logged as
/// warnings) but do not stop a recreate run.
pub fn run<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    scenario: Scenario,
    profile: &SeedProfile,
    seed_count: u32,
    rng: &mut R,
) -> EngineResult<RunReport> {
    let mut report = RunReport::default();

    if scenario == Scenario::Convert {
        info!("promoting normalized catalog to production name");
        cutover::promote(conn)?;
        report.promoted = true;
        return Ok(report);
    }

    if scenario == Scenario::Recreate {
        info!("dropping catalog tables");
        report.ddl.extend(log_outcomes(ddl::drop_all(conn)?));
        info!("creating reference and normalized tables");
        report
            .ddl
            .extend(log_outcomes(ddl::create_reference_and_normalized_tables(
                conn,
            )?));
        info!("creating flat catalog table");
        report.ddl.extend(log_outcomes(ddl::create_flat_table(conn)?));
    }

    info!(count = seed_count, "seeding flat catalog");
    report.rows_seeded = seed::seed(conn, rng, profile, seed_count)?;

    let map = if scenario == Scenario::Recreate {
        info!("materializing color entities");
        colors::materialize(conn)?
    } else {
        info!("loading stored color entities");
        colors::load(conn)?
    };
    report.colors_mapped = map.len();

    info!("cloning flat catalog into normalized table");
    report.rows_cloned = clone::clone_catalog(conn, &map)?;

    Ok(report)
}

fn log_outcomes(reports: Vec<StatementReport>) -> Vec<StatementReport> {
    for report in &reports {
        match &report.outcome {
            StatementOutcome::Applied => debug!(statement = report.label, "ddl applied"),
            StatementOutcome::Skipped { reason } => {
                debug!(statement = report.label, %reason, "ddl skipped")
            }
            StatementOutcome::Failed { message } => {
                warn!(
                    statement = report.label,
                    %message,
                    "ddl statement failed; continuing"
                )
            }
        }
    }
    reports
}
