//! Bulk price adjustment scoped by color.
//!
//! Applies a percentage delta to every normalized row of one color group,
//! rounding the result up to the nearest multiple of the rounding unit
//! (10.00). The delta is converted to basis points so the whole computation
//! is exact integer arithmetic, both here and in the SQL that runs it:
//!
//! ```text
//! new = ceil(price_cents * (10_000 + bps) / (10_000 * UNIT)) * UNIT
//! ```
//!
//! The color group is resolved with a subquery against `color_entity`, i.e.
//! against persisted state rather than any in-memory mapping, so the
//! procedure works on whatever the store currently holds.

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Text};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

/// Rounding unit for adjusted prices, in cents (10.00).
pub const ROUND_UNIT_CENTS: i64 = 1_000;

const BPS_SCALE: i64 = 10_000;

/// Apply `delta_percent` to every normalized row of `color`, rounding up to
/// the nearest [`ROUND_UNIT_CENTS`]. Returns the number of rows updated.
///
/// A color with no entity row updates zero rows; that is reported in the
/// return value and a warning log, not as an error. Deltas below -100% (or
/// non-finite ones) are rejected; prices cannot go negative.
pub fn adjust_price(
    conn: &mut SqliteConnection,
    color: &str,
    delta_percent: f64,
) -> EngineResult<usize> {
    if !delta_percent.is_finite() {
        return Err(EngineError::InvalidDelta(delta_percent));
    }
    let bps = (delta_percent * 100.0).round() as i64;
    if bps < -BPS_SCALE {
        return Err(EngineError::InvalidDelta(delta_percent));
    }

    let numer = BPS_SCALE + bps;
    let denom = BPS_SCALE * ROUND_UNIT_CENTS;

    let updated = conn.immediate_transaction::<_, EngineError, _>(|conn| {
        let n = sql_query(
            "UPDATE normalized_catalog
             SET price_cents = ((price_cents * ? + ? - 1) / ?) * ?
             WHERE color_id = (SELECT id FROM color_entity WHERE name = ?)",
        )
        .bind::<BigInt, _>(numer)
        .bind::<BigInt, _>(denom)
        .bind::<BigInt, _>(denom)
        .bind::<BigInt, _>(ROUND_UNIT_CENTS)
        .bind::<Text, _>(color)
        .execute(conn)?;
        Ok(n)
    })?;

    if updated == 0 {
        warn!(color, "price adjustment matched no rows");
    } else {
        info!(color, rows = updated, delta_percent, "prices adjusted");
    }
    Ok(updated)
}
