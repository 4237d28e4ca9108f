#![allow(dead_code)]

use catalog_sync::db::connection::connect_sqlite;
use catalog_sync::migrate::ddl;
use catalog_sync::models::{NewColor, NewNormalizedProduct};
use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Text;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(QueryableByName)]
struct Cnt {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    cnt: i64,
}

pub struct TestDb {
    _dir: TempDir, // keep alive for the life of the test
    pub path: String,
}

/// Temp-file database with no schema; RECREATE and drop tests start here.
pub fn blank_db() -> (TestDb, SqliteConnection) {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("test.db");
    let path = p.to_string_lossy().to_string();

    let conn = connect_sqlite(&path).expect("connect");
    (TestDb { _dir: dir, path }, conn)
}

/// Temp-file database with all three catalog tables created and empty.
pub fn setup_db() -> (TestDb, SqliteConnection) {
    let (db, mut conn) = blank_db();

    let created = ddl::create_reference_and_normalized_tables(&mut conn).expect("create ref");
    assert!(created.iter().all(|r| r.is_applied()));
    let created = ddl::create_flat_table(&mut conn).expect("create flat");
    assert!(created.iter().all(|r| r.is_applied()));

    (db, conn)
}

pub fn count(conn: &mut SqliteConnection, table: &str) -> i64 {
    let row: Cnt = sql_query(format!("SELECT COUNT(*) AS cnt FROM {table}"))
        .get_result(conn)
        .unwrap();
    row.cnt
}

pub fn count_where(conn: &mut SqliteConnection, table: &str, predicate: &str) -> i64 {
    let row: Cnt = sql_query(format!(
        "SELECT COUNT(*) AS cnt FROM {table} WHERE {predicate}"
    ))
    .get_result(conn)
    .unwrap();
    row.cnt
}

pub fn table_exists(conn: &mut SqliteConnection, name: &str) -> bool {
    let row: Cnt =
        sql_query("SELECT COUNT(*) AS cnt FROM sqlite_master WHERE type='table' AND name = ?")
            .bind::<Text, _>(name)
            .get_result(conn)
            .unwrap();
    row.cnt == 1
}

pub fn fk_check_empty(conn: &mut SqliteConnection) {
    let row: Cnt = sql_query("SELECT COUNT(*) AS cnt FROM pragma_foreign_key_check")
        .get_result(conn)
        .unwrap();
    assert_eq!(row.cnt, 0, "foreign_key_check reported violations");
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0xC0FFEE)
}

/// Insert a color entity and return its assigned id.
pub fn insert_color(conn: &mut SqliteConnection, color: &str) -> i32 {
    use catalog_sync::schema::color_entity::dsl as ce;
    diesel::insert_into(ce::color_entity)
        .values(NewColor { name: color })
        .returning(ce::id)
        .get_result(conn)
        .expect("insert color")
}

/// Insert normalized rows directly, for tests that exercise price adjustment
/// without running the full pipeline.
pub fn insert_normalized(
    conn: &mut SqliteConnection,
    rows: &[(i32, &str, i64, Option<i32>)],
) {
    use catalog_sync::schema::normalized_catalog::dsl as nc;
    let rows: Vec<NewNormalizedProduct<'_>> = rows
        .iter()
        .map(|&(id, name, price_cents, color_id)| NewNormalizedProduct {
            id,
            name,
            price_cents,
            color_id,
        })
        .collect();
    diesel::insert_into(nc::normalized_catalog)
        .values(&rows)
        .execute(conn)
        .expect("insert normalized rows");
}

/// Insert flat rows directly, for cloner tests with hand-picked colors.
pub fn insert_flat(conn: &mut SqliteConnection, rows: &[(i32, &str, i64, &str)]) {
    use catalog_sync::models::NewFlatProduct;
    use catalog_sync::schema::flat_catalog::dsl as fc;
    let rows: Vec<NewFlatProduct> = rows
        .iter()
        .map(|&(id, name, price_cents, color)| NewFlatProduct {
            id,
            name: name.to_string(),
            price_cents,
            color: color.to_string(),
        })
        .collect();
    diesel::insert_into(fc::flat_catalog)
        .values(&rows)
        .execute(conn)
        .expect("insert flat rows");
}
