use std::{io, path::PathBuf};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use climbstats::{GradeScale, Rank};
use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Geometric, Normal};

#[derive(Parser, Debug)]
#[command(version, about = "Write a random climbing logbook as CSV to stdout")]
struct Cli {
    /// Number of entries, underscores allowed (10_000)
    #[arg(value_parser = parse_count)]
    entries: usize,

    /// Grade table CSV: label, rank
    #[arg(short, long, default_value = "data/grade_table.csv")]
    grades: PathBuf,

    /// Grade the climber usually climbs at
    #[arg(short, long, default_value = "6c")]
    target: String,

    /// Standard deviation in ranks
    #[arg(long, default_value_t = 2.0)]
    spread: f64,

    /// Number of distinct routes to pick from
    #[arg(short, long, default_value_t = 50)]
    routes: usize,
}

fn parse_count(s: &str) -> Result<usize, String> {
    s.replace('_', "")
        .parse()
        .map_err(|_| format!("expected an integer, got {s}"))
}

struct Route {
    name: String,
    grade: String,
}

struct Climber {
    ranks: Vec<Rank>,
    distribution: Normal<f64>,
}

impl Climber {
    fn new(scale: &GradeScale, target: &str, spread: f64) -> Result<Self> {
        ensure!(scale.contains(target), "target grade {target:?} is not in the grade table");
        let mean = scale.to_rank(target)?;
        let mut ranks: Vec<Rank> = scale.iter().map(|(_, rank)| rank).collect();
        ranks.sort_unstable();

        Ok(Self {
            ranks,
            distribution: Normal::new(f64::from(mean), spread)
                .with_context(|| format!("invalid spread {spread}"))?,
        })
    }

    /// Nearest rank present in the table.
    fn sample(&self, rng: &mut impl Rng) -> Rank {
        let x = self.distribution.sample(rng);

        self.ranks
            .iter()
            .copied()
            .min_by(|a, b| {
                (f64::from(*a) - x)
                    .abs()
                    .total_cmp(&(f64::from(*b) - x).abs())
            })
            .unwrap_or_default()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    ensure!(cli.routes > 0, "need at least one route");

    let scale = GradeScale::from_path(&cli.grades)
        .with_context(|| format!("could not load grade table {}", cli.grades.display()))?;
    ensure!(!scale.is_empty(), "grade table {} is empty", cli.grades.display());

    let climber = Climber::new(&scale, &cli.target, cli.spread)?;
    let retries = Geometric::new(0.5)?;
    let mut rng = rand::rng();

    let routes = (0..cli.routes)
        .map(|i| -> Result<Route> {
            let rank = climber.sample(&mut rng);
            Ok(Route {
                name: format!("Route {}", i + 1),
                grade: scale.to_label(rank)?.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("generated {} routes around {}", routes.len(), cli.target);

    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    for _ in 0..cli.entries {
        let route = &routes[rng.random_range(0..routes.len())];
        let attempts = 1 + retries.sample(&mut rng);
        writer.write_record([
            route.name.as_str(),
            route.grade.as_str(),
            attempts.to_string().as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
