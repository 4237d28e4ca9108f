//! Database utilities.
//!
//! Only connection handling lives here: [`connection::connect_sqlite`] opens
//! the run's single connection with WAL, `foreign_keys=ON`, and a 5000ms
//! busy_timeout. There is no migrations runner; the schema lifecycle is
//! scenario-driven and owned by [`crate::migrate::ddl`].

pub mod connection;
