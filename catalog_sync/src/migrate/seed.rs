//! Bulk seeder for the flat catalog.
//!
//! Generates synthetic product rows: a strictly increasing id continuing
//! from the table's current maximum, a pseudo-random 20-character name, a
//! price uniform over the profile's cent range, and a color drawn uniformly
//! from the profile palette. The random source is caller-supplied so tests
//! can seed deterministically.

use diesel::dsl::max;
use diesel::prelude::*;
use rand::Rng;

use crate::error::EngineResult;
use crate::models::NewFlatProduct;
use crate::profile::SeedProfile;

// 4 binds per row; SQLite's default host-parameter limit is 999.
const INSERT_BATCH: usize = 200;

const NAME_LEN: usize = 20;
const HEX: &[u8; 16] = b"0123456789abcdef";

/// Insert `count` synthetic rows into the flat catalog.
///
/// The id sequence starts at `max(id) + 1`, or `0` when the table is empty,
/// and stays contiguous across batches. Each batch is a single multi-row
/// insert statement, so a failed batch never commits a partial id range.
/// Returns the number of rows inserted.
pub fn seed<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    profile: &SeedProfile,
    count: u32,
) -> EngineResult<u32> {
    use crate::schema::flat_catalog::dsl as fc;

    profile.validate()?;

    let start: i32 = fc::flat_catalog
        .select(max(fc::id))
        .first::<Option<i32>>(conn)?
        .map(|m| m + 1)
        .unwrap_or(0);

    let mut next_id = start;
    let mut remaining = count as usize;
    while remaining > 0 {
        let n = remaining.min(INSERT_BATCH);
        let mut batch = Vec::with_capacity(n);
        for _ in 0..n {
            batch.push(NewFlatProduct {
                id: next_id,
                name: random_name(rng),
                price_cents: rng.gen_range(profile.price_min_cents..=profile.price_max_cents),
                color: profile.colors[rng.gen_range(0..profile.colors.len())].clone(),
            });
            next_id += 1;
        }
        diesel::insert_into(fc::flat_catalog)
            .values(&batch)
            .execute(conn)?;
        remaining -= n;
    }

    Ok(count)
}

fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..NAME_LEN)
        .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
        .collect()
}
