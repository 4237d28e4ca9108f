//! Cutover: promote the normalized table to the production name.

use diesel::prelude::*;
use diesel::sql_query;

use crate::error::{EngineError, EngineResult};

/// Name the production catalog answers to.
pub const PRODUCTION_TABLE: &str = "flat_catalog";
/// Archival name the displaced production table is renamed to.
pub const ARCHIVE_TABLE: &str = "flat_catalog_old";

/// Atomically swap the normalized table into the production name.
///
/// Both renames run inside one immediate transaction. SQLite DDL
/// participates in transactions, so if either rename fails the whole swap
/// rolls back and the production name still refers to the original table.
pub fn promote(conn: &mut SqliteConnection) -> EngineResult<()> {
    conn.immediate_transaction::<_, EngineError, _>(|conn| {
        sql_query("ALTER TABLE flat_catalog RENAME TO flat_catalog_old").execute(conn)?;
        sql_query("ALTER TABLE normalized_catalog RENAME TO flat_catalog").execute(conn)?;
        Ok(())
    })
}
