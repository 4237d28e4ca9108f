//! Seed profile: parsing, normalization, and defaults.
//!
//! A TOML-backed profile describes what the bulk seeder generates:
//! - the color palette rows draw from (normalized to trimmed lowercase,
//!   de-duplicated while preserving order)
//! - the inclusive price range in integer cents
//!
//! The built-in [`Default`] profile reproduces the reference data set: the
//! fifteen stock color names and prices uniform over `[100.00, 1000.00]`.
//!
//! Entrypoints:
//! - Parse + normalize from a TOML string: [`load_profile_str`]
//! - Normalization of an already-built profile: [`normalize_profile`]

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};

/// Palette used when no profile is supplied.
pub const DEFAULT_COLORS: [&str; 15] = [
    "black",
    "blue",
    "green",
    "cyan",
    "magenta",
    "brown",
    "white",
    "grey",
    "light blue",
    "light green",
    "light cyan",
    "light magenta",
    "light brown",
    "light yellow",
    "light white",
];

/// Lower bound of the default price range, in cents (100.00).
pub const DEFAULT_PRICE_MIN_CENTS: i64 = 10_000;
/// Upper bound of the default price range, in cents (1000.00).
pub const DEFAULT_PRICE_MAX_CENTS: i64 = 100_000;

/// Configuration for the bulk seeder.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedProfile {
    /// Color palette; each seeded row draws one entry uniformly at random.
    pub colors: Vec<String>,
    /// Inclusive lower bound for generated prices, in cents.
    pub price_min_cents: i64,
    /// Inclusive upper bound for generated prices, in cents.
    pub price_max_cents: i64,
}

impl Default for SeedProfile {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            price_min_cents: DEFAULT_PRICE_MIN_CENTS,
            price_max_cents: DEFAULT_PRICE_MAX_CENTS,
        }
    }
}

impl SeedProfile {
    /// Checks the invariants the seeder relies on: a non-empty palette and a
    /// non-empty, non-negative price range.
    pub fn validate(&self) -> EngineResult<()> {
        if self.colors.is_empty() {
            return Err(EngineError::Profile("color palette is empty".into()));
        }
        if self.price_min_cents < 0 {
            return Err(EngineError::Profile(format!(
                "price_min_cents is negative: {}",
                self.price_min_cents
            )));
        }
        if self.price_min_cents > self.price_max_cents {
            return Err(EngineError::Profile(format!(
                "price range is empty: {} > {}",
                self.price_min_cents, self.price_max_cents
            )));
        }
        Ok(())
    }
}

/// Normalize a profile in place and validate it.
///
/// Palette entries are trimmed and lowercased; empty entries are rejected and
/// duplicates (after normalization) are removed, preserving first-occurrence
/// order. Returns the number of duplicate entries removed.
pub fn normalize_profile(profile: &mut SeedProfile) -> EngineResult<usize> {
    let before = profile.colors.len();
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(before);

    for raw in std::mem::take(&mut profile.colors) {
        let color = raw.trim().to_lowercase();
        if color.is_empty() {
            return Err(EngineError::Profile(
                "color name is empty after trimming".into(),
            ));
        }
        if seen.insert(color.clone()) {
            kept.push(color);
        }
    }
    profile.colors = kept;
    profile.validate()?;

    Ok(before - profile.colors.len())
}

/// Parse a TOML profile string and normalize it.
pub fn load_profile_str(s: &str) -> EngineResult<SeedProfile> {
    let mut profile: SeedProfile =
        toml::from_str(s).map_err(|e| EngineError::Profile(e.to_string()))?;
    normalize_profile(&mut profile)?;
    Ok(profile)
}
