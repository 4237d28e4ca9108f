//! SQLite connection helpers.
//!
//! [`connect_sqlite`] opens the single connection a migration run owns and
//! applies connection-wide PRAGMAs. `foreign_keys=ON` is load-bearing here:
//! without it SQLite ignores the `ON DELETE CASCADE ON UPDATE CASCADE`
//! actions on `normalized_catalog.color_id`.
//!
//! Example:
//! ```no_run
//! use catalog_sync::db::connection::connect_sqlite;
//!
//! let path = std::env::temp_dir().join("catalog_sync_example.db");
//! let _conn = connect_sqlite(path.to_str().unwrap()).expect("open sqlite");
//! ```

use diesel::{Connection, RunQueryDsl, SqliteConnection, sql_query};

/// Open a SQLite connection and apply connection-wide PRAGMAs.
pub fn connect_sqlite(database_url: &str) -> anyhow::Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;

    sql_query("PRAGMA journal_mode=WAL;").execute(&mut conn)?;
    sql_query("PRAGMA foreign_keys=ON;").execute(&mut conn)?;
    sql_query("PRAGMA busy_timeout=5000;").execute(&mut conn)?;
    Ok(conn)
}
