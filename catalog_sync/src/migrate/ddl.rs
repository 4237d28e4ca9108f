//! Scenario-driven schema lifecycle.
//!
//! Drop/create statements run as best-effort batches: every statement of a
//! batch executes inside one transaction that commits regardless of
//! individual statement failures, and each statement's fate is reported as a
//! [`StatementOutcome`]. Benign lifecycle errors ("already exists", "no such
//! table") are classified as [`StatementOutcome::Skipped`]; anything else is
//! [`StatementOutcome::Failed`] and left to the caller to judge.

use diesel::{RunQueryDsl, SqliteConnection, sql_query};

use crate::error::EngineResult;

/// Fate of one DDL statement within a best-effort batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementOutcome {
    /// The statement executed successfully.
    Applied,
    /// The statement failed with a benign lifecycle error.
    Skipped {
        /// The store's message, e.g. "table flat_catalog already exists".
        reason: String,
    },
    /// The statement failed with a non-benign error; the batch continued.
    Failed {
        /// The store's error message.
        message: String,
    },
}

/// Outcome of one labeled DDL statement.
#[derive(Debug, Clone)]
pub struct StatementReport {
    /// Short human-readable label for the statement.
    pub label: &'static str,
    /// What happened when the statement ran.
    pub outcome: StatementOutcome,
}

impl StatementReport {
    /// True when the statement executed successfully.
    pub fn is_applied(&self) -> bool {
        self.outcome == StatementOutcome::Applied
    }

    /// True when the statement failed with a non-benign error.
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, StatementOutcome::Failed { .. })
    }
}

const DROP_TABLES: &[(&str, &str)] = &[
    ("drop normalized_catalog", "DROP TABLE normalized_catalog"),
    ("drop color_entity", "DROP TABLE color_entity"),
    ("drop flat_catalog", "DROP TABLE flat_catalog"),
];

const CREATE_REFERENCE_AND_NORMALIZED: &[(&str, &str)] = &[
    (
        "create color_entity",
        "CREATE TABLE color_entity (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(64) NOT NULL UNIQUE
        )",
    ),
    (
        "create normalized_catalog",
        "CREATE TABLE normalized_catalog (
            id INTEGER NOT NULL UNIQUE,
            name VARCHAR(255) NOT NULL,
            price_cents BIGINT NOT NULL DEFAULT 0,
            color_id INTEGER
                REFERENCES color_entity (id)
                ON DELETE CASCADE ON UPDATE CASCADE
        )",
    ),
];

const CREATE_FLAT: &[(&str, &str)] = &[(
    "create flat_catalog",
    "CREATE TABLE flat_catalog (
        id INTEGER NOT NULL UNIQUE,
        name TEXT NOT NULL,
        price_cents BIGINT NOT NULL DEFAULT 0,
        color TEXT NOT NULL
    )",
)];

/// Drop all three catalog tables, children before parents.
pub fn drop_all(conn: &mut SqliteConnection) -> EngineResult<Vec<StatementReport>> {
    apply_best_effort(conn, DROP_TABLES)
}

/// Create the color entity table and the (empty) normalized catalog table.
pub fn create_reference_and_normalized_tables(
    conn: &mut SqliteConnection,
) -> EngineResult<Vec<StatementReport>> {
    apply_best_effort(conn, CREATE_REFERENCE_AND_NORMALIZED)
}

/// Create the flat catalog table.
pub fn create_flat_table(conn: &mut SqliteConnection) -> EngineResult<Vec<StatementReport>> {
    apply_best_effort(conn, CREATE_FLAT)
}

/// Run a batch of DDL statements inside one committed transaction,
/// recording per-statement outcomes instead of aborting.
fn apply_best_effort(
    conn: &mut SqliteConnection,
    statements: &[(&'static str, &str)],
) -> EngineResult<Vec<StatementReport>> {
    let reports = conn.immediate_transaction::<_, diesel::result::Error, _>(|conn| {
        let mut reports = Vec::with_capacity(statements.len());
        for &(label, sql) in statements {
            let outcome = match sql_query(sql).execute(conn) {
                Ok(_) => StatementOutcome::Applied,
                Err(e) if is_benign_lifecycle_error(&e) => StatementOutcome::Skipped {
                    reason: e.to_string(),
                },
                Err(e) => StatementOutcome::Failed {
                    message: e.to_string(),
                },
            };
            reports.push(StatementReport { label, outcome });
        }
        Ok(reports)
    })?;
    Ok(reports)
}

// SQLite reports both conditions as generic database errors, so the message
// text is the only discriminator available.
fn is_benign_lifecycle_error(e: &diesel::result::Error) -> bool {
    let msg = e.to_string();
    msg.contains("already exists") || msg.contains("no such table")
}
