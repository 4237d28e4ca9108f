//! Color attribute normalization.
//!
//! Builds the in-memory [`ColorMap`] consumed by the cloner, in one of two
//! mutually exclusive modes:
//! - [`materialize`] (recreate runs): discover distinct colors in the flat
//!   catalog and insert them into `color_entity`, capturing assigned ids.
//! - [`load`] (append runs): read the stored `(name, id)` pairs back.
//!
//! An empty entity table on load yields an empty map; the cloner then leaves
//! every `color_id` NULL. That is the recorded behavior, not an error.

use std::collections::BTreeMap;

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::{EngineError, EngineResult};
use crate::models::NewColor;

/// Mapping from color name to entity id, owned by a single migration run.
pub type ColorMap = BTreeMap<String, i32>;

/// Extract distinct colors from the flat catalog into `color_entity`.
///
/// Each distinct value is inserted and its store-assigned id recorded. A
/// uniqueness violation is surfaced as [`EngineError::DuplicateColor`];
/// DISTINCT semantics should make it impossible, and it is never suppressed.
pub fn materialize(conn: &mut SqliteConnection) -> EngineResult<ColorMap> {
    use crate::schema::color_entity::dsl as ce;
    use crate::schema::flat_catalog::dsl as fc;

    let distinct: Vec<String> = fc::flat_catalog.select(fc::color).distinct().load(conn)?;

    let mut map = ColorMap::new();
    for color in distinct {
        let assigned: i32 = diesel::insert_into(ce::color_entity)
            .values(NewColor { name: &color })
            .returning(ce::id)
            .get_result(conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    EngineError::DuplicateColor {
                        name: color.clone(),
                    }
                }
                other => EngineError::Db(other),
            })?;
        map.insert(color, assigned);
    }
    Ok(map)
}

/// Load the stored color entities into a [`ColorMap`].
pub fn load(conn: &mut SqliteConnection) -> EngineResult<ColorMap> {
    use crate::schema::color_entity::dsl as ce;

    let rows: Vec<(String, i32)> = ce::color_entity.select((ce::name, ce::id)).load(conn)?;
    Ok(rows.into_iter().collect())
}
