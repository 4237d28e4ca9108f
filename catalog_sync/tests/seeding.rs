mod common;
use common::{count, count_where, seeded_rng, setup_db};

use catalog_sync::migrate::seed::seed;
use catalog_sync::profile::SeedProfile;
use diesel::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn empty_table_seeds_contiguously_from_zero() {
    let (_db, mut conn) = setup_db();

    // 450 crosses the insert batch boundary.
    let inserted = seed(&mut conn, &mut seeded_rng(), &SeedProfile::default(), 450).expect("seed");

    assert_eq!(inserted, 450);
    assert_eq!(count(&mut conn, "flat_catalog"), 450);
    assert_eq!(count_where(&mut conn, "flat_catalog", "id >= 0 AND id < 450"), 450);
    assert_eq!(count_where(&mut conn, "flat_catalog", "id = 0"), 1);
}

#[test]
fn seeding_continues_from_current_max_id() {
    let (_db, mut conn) = setup_db();
    common::insert_flat(&mut conn, &[(41, "existing", 1500, "red")]);

    seed(&mut conn, &mut seeded_rng(), &SeedProfile::default(), 10).expect("seed");

    assert_eq!(count(&mut conn, "flat_catalog"), 11);
    assert_eq!(count_where(&mut conn, "flat_catalog", "id >= 42 AND id < 52"), 10);
}

#[test]
fn zero_count_inserts_nothing() {
    let (_db, mut conn) = setup_db();

    let inserted = seed(&mut conn, &mut seeded_rng(), &SeedProfile::default(), 0).expect("seed");

    assert_eq!(inserted, 0);
    assert_eq!(count(&mut conn, "flat_catalog"), 0);
}

#[test]
fn identical_rng_seeds_produce_identical_rows() {
    use catalog_sync::schema::flat_catalog::dsl as fc;

    let load = |conn: &mut SqliteConnection| -> Vec<(i32, String, i64, String)> {
        fc::flat_catalog
            .order(fc::id.asc())
            .select((fc::id, fc::name, fc::price_cents, fc::color))
            .load(conn)
            .unwrap()
    };

    let (_db_a, mut conn_a) = setup_db();
    let mut rng_a = StdRng::seed_from_u64(1234);
    seed(&mut conn_a, &mut rng_a, &SeedProfile::default(), 100).unwrap();

    let (_db_b, mut conn_b) = setup_db();
    let mut rng_b = StdRng::seed_from_u64(1234);
    seed(&mut conn_b, &mut rng_b, &SeedProfile::default(), 100).unwrap();

    assert_eq!(load(&mut conn_a), load(&mut conn_b));
}

#[test]
fn generated_values_respect_the_profile() {
    let (_db, mut conn) = setup_db();
    let profile = SeedProfile {
        colors: vec!["teal".into(), "ochre".into()],
        price_min_cents: 5_000,
        price_max_cents: 6_000,
    };

    seed(&mut conn, &mut seeded_rng(), &profile, 200).expect("seed");

    assert_eq!(
        count_where(&mut conn, "flat_catalog", "color NOT IN ('teal','ochre')"),
        0
    );
    assert_eq!(
        count_where(
            &mut conn,
            "flat_catalog",
            "price_cents < 5000 OR price_cents > 6000"
        ),
        0
    );
    assert_eq!(count_where(&mut conn, "flat_catalog", "length(name) <> 20"), 0);
}

#[test]
fn invalid_profile_is_rejected_before_touching_the_table() {
    let (_db, mut conn) = setup_db();
    let profile = SeedProfile {
        colors: vec![],
        ..SeedProfile::default()
    };

    seed(&mut conn, &mut seeded_rng(), &profile, 10).unwrap_err();
    assert_eq!(count(&mut conn, "flat_catalog"), 0);
}
