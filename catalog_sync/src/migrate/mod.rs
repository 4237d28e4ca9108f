//! Migration pipeline (schema lifecycle, seeding, normalization, cloning, cutover).
//!
//! ## What this does
//! - Creates/drops the three catalog tables as **best-effort DDL batches**,
//!   reporting a per-statement [`ddl::StatementOutcome`] instead of failing
//!   the run on "already exists" / "no such table".
//! - Seeds the flat catalog with synthetic rows in batched inserts,
//!   continuing the id sequence from the current maximum.
//! - Extracts the color attribute into `color_entity` (or loads the stored
//!   mapping on append runs) and produces the in-memory [`colors::ColorMap`].
//! - Clones the flat catalog into the normalized table and backfills
//!   `color_id` with one scoped update per distinct color.
//! - Promotes the normalized table to the production name with an atomic
//!   two-rename cutover.
//!
//! ## Transactions & consistency
//! DDL batches and the cutover run inside a single **`BEGIN IMMEDIATE`**
//! transaction via `SqliteConnection::immediate_transaction`. The cutover is
//! all-or-nothing: SQLite DDL participates in transactions, so a failed
//! second rename leaves the production name untouched. Seeding and cloning
//! are not wrapped in a run-spanning transaction; each batched insert is a
//! single statement, so a failed batch cannot leave a partial id sequence.
//!
//! ## Ordering invariant
//! The [`colors::ColorMap`] must cover every color present in the flat
//! catalog before [`clone::clone_catalog`] backfills foreign keys; colors
//! missing from the map leave `color_id` NULL in the cloned rows.

pub mod clone;
pub mod colors;
pub mod cutover;
pub mod ddl;
pub mod seed;
