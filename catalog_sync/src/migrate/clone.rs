//! Catalog cloner: flat rows into the normalized table.

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{Integer, Text};

use crate::error::EngineResult;
use crate::migrate::colors::ColorMap;

/// Rebuild the normalized catalog from the flat catalog.
///
/// Phases, in order: clear the normalized table, bulk-copy `id, name,
/// price_cents`, then backfill `color_id` with one scoped update per map
/// entry, so backfill cost tracks the number of distinct colors, not rows.
/// Rows whose color has no map entry keep a NULL `color_id`. The clear must
/// precede the copy; rerunning with unchanged inputs reproduces identical
/// contents. Returns the number of rows copied.
pub fn clone_catalog(conn: &mut SqliteConnection, map: &ColorMap) -> EngineResult<usize> {
    use crate::schema::normalized_catalog::dsl as nc;

    diesel::delete(nc::normalized_catalog).execute(conn)?;

    let copied = sql_query(
        "INSERT INTO normalized_catalog (id, name, price_cents)
         SELECT id, name, price_cents FROM flat_catalog",
    )
    .execute(conn)?;

    for (color, color_id) in map {
        sql_query(
            "UPDATE normalized_catalog SET color_id = ?
             WHERE id IN (SELECT id FROM flat_catalog WHERE color = ?)",
        )
        .bind::<Integer, _>(*color_id)
        .bind::<Text, _>(color.as_str())
        .execute(conn)?;
    }

    Ok(copied)
}
