use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_sync::price::adjust_price;
use catalog_sync::profile::{SeedProfile, load_profile_str};
use catalog_sync::scenario::{self, Scenario};

#[derive(Parser)]
#[command(version, about = "Catalog normalization CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run one migration scenario end to end
    Run {
        #[arg(long, value_enum)]
        scenario: ScenarioArg,
        /// Number of synthetic rows to seed (ignored by convert)
        #[arg(long, default_value_t = 500_000)]
        count: u32,
        /// Optional TOML seed profile (palette, price range)
        #[arg(long, value_name = "FILE")]
        profile: Option<String>,
        /// Seed for the random source, for reproducible data sets
        #[arg(long)]
        rng_seed: Option<u64>,
    },
    /// Apply a percentage price change to one color group
    AdjustPrice {
        #[arg(long)]
        color: String,
        /// Delta in percent, e.g. 5 or -2.5
        #[arg(long, allow_hyphen_values = true)]
        percent: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScenarioArg {
    Recreate,
    Append,
    Convert,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Recreate => Scenario::Recreate,
            ScenarioArg::Append => Scenario::Append,
            ScenarioArg::Convert => Scenario::Convert,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let db_url = shared_utils::env::database_url()?;
    let mut conn = catalog_sync::db::connection::connect_sqlite(&db_url)?;

    match cli.cmd {
        Cmd::Run {
            scenario,
            count,
            profile,
            rng_seed,
        } => {
            let profile = match profile {
                Some(path) => load_profile_str(&std::fs::read_to_string(&path)?)?,
                None => SeedProfile::default(),
            };
            let mut rng = match rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let report = scenario::run(&mut conn, scenario.into(), &profile, count, &mut rng)?;
            info!(
                rows_seeded = report.rows_seeded,
                colors_mapped = report.colors_mapped,
                rows_cloned = report.rows_cloned,
                promoted = report.promoted,
                "run complete"
            );
        }
        Cmd::AdjustPrice { color, percent } => {
            let rows = adjust_price(&mut conn, &color, percent)?;
            info!(%color, percent, rows, "price adjustment complete");
        }
    }

    Ok(())
}
