//! Diesel models mapping to the catalog schema.
//!
//! These types mirror the tables created by [`crate::migrate::ddl`] and
//! declared in [`crate::schema`]:
//! - [`crate::schema::flat_catalog`] — the denormalized production catalog
//! - [`crate::schema::color_entity`] — deduplicated color names with surrogate ids
//! - [`crate::schema::normalized_catalog`] — the redesigned catalog referencing
//!   color by foreign key (`ON DELETE CASCADE ON UPDATE CASCADE`)
//!
//! Prices are stored as integer cents (`price_cents`); `12.34` is `1234`.

use crate::schema::*;
use diesel::prelude::*;

/// A row in [`crate::schema::flat_catalog`]: one synthetic product.
///
/// Rows are written once by the bulk seeder and never mutated afterwards.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = flat_catalog, check_for_backend(diesel::sqlite::Sqlite))]
pub struct FlatProduct {
    /// Product id, unique and strictly increasing across seed runs.
    pub id: i32,
    /// Pseudo-random 20-character product name.
    pub name: String,
    /// Price in integer cents.
    pub price_cents: i64,
    /// Color attribute embedded as raw text.
    pub color: String,
}

/// Insertable form of [`FlatProduct`], built by the bulk seeder.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = flat_catalog)]
pub struct NewFlatProduct {
    /// Product id assigned by the seeder's id sequence.
    pub id: i32,
    /// Generated product name.
    pub name: String,
    /// Price in integer cents.
    pub price_cents: i64,
    /// Color name drawn from the seed profile palette.
    pub color: String,
}

/// A row in [`crate::schema::color_entity`].
///
/// `name` is unique; `id` is stable once assigned within a run.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = color_entity, check_for_backend(diesel::sqlite::Sqlite))]
pub struct Color {
    /// Surrogate id assigned by the store.
    pub id: i32,
    /// Unique color name.
    pub name: String,
}

/// Insertable form of [`Color`]; the store assigns the id.
#[derive(Debug, Insertable)]
#[diesel(table_name = color_entity)]
pub struct NewColor<'a> {
    /// Unique color name.
    pub name: &'a str,
}

/// A row in [`crate::schema::normalized_catalog`].
///
/// `id` mirrors the source [`FlatProduct::id`]; `color_id` is NULL when the
/// source color had no entry in the color map at clone time.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable)]
#[diesel(table_name = normalized_catalog, check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(Color, foreign_key = color_id))]
pub struct NormalizedProduct {
    /// Product id copied from the flat catalog.
    pub id: i32,
    /// Product name copied from the flat catalog.
    pub name: String,
    /// Price in integer cents.
    pub price_cents: i64,
    /// FK to [`Color::id`], nullable.
    pub color_id: Option<i32>,
}

/// Insertable form of [`NormalizedProduct`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = normalized_catalog)]
pub struct NewNormalizedProduct<'a> {
    /// Product id.
    pub id: i32,
    /// Product name.
    pub name: &'a str,
    /// Price in integer cents.
    pub price_cents: i64,
    /// FK to [`Color::id`], nullable.
    pub color_id: Option<i32>,
}
