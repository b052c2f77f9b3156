use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use roomatch::{
    sample_records, EncoderConfig, JsonFileSource, LifestyleDataset, MatchResult, MatchingPool,
    RecordSource, UserRecord,
};

/// Roommate compatibility scoring engine
#[derive(Parser, Debug)]
#[command(name = "roomatch")]
#[command(about = "Roommate compatibility scoring engine", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a pool from a JSON record file and preview matches
    Train {
        /// Path to a JSON array of questionnaire records
        #[arg(short, long)]
        records: PathBuf,

        /// How many matches to preview
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },
    /// Rank matches for one pool member
    Match {
        /// Path to a JSON array of questionnaire records
        #[arg(short, long)]
        records: PathBuf,

        /// Identity of the pool member to match
        #[arg(short, long)]
        user: String,

        /// How many matches to return
        #[arg(short, long, default_value_t = 5)]
        limit: usize,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Derive records from a student lifestyle CSV and rank a query against them
    Dataset {
        /// Path to the lifestyle CSV
        #[arg(short, long)]
        csv: PathBuf,

        /// How many derived records to print
        #[arg(long, default_value_t = 3)]
        samples: usize,

        /// Path to a single JSON questionnaire record to rank against the derived pool
        #[arg(short, long)]
        query: Option<PathBuf>,

        /// How many matches to return
        #[arg(short, long, default_value_t = 5)]
        limit: usize,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in sample records end to end
    Demo {
        /// How many matches to show per record
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting roomatch v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Train { records, limit } => train(&records, limit),
        Command::Match {
            records,
            user,
            limit,
            json,
        } => run_match(&records, &user, limit, json),
        Command::Dataset {
            csv,
            samples,
            query,
            limit,
            json,
        } => dataset(&csv, samples, query.as_deref(), limit, json),
        Command::Demo { limit } => demo(limit),
    }
}

fn train(path: &Path, limit: usize) -> anyhow::Result<()> {
    let records = load_records(path)?;
    info!("Loaded {} records from {}", records.len(), path.display());

    let pool = build_pool(&records);

    // Preview matches for the first record that made it into the pool
    let Some(first) = records.iter().find(|r| pool.get(&r.id).is_some()) else {
        warn!("No usable records, nothing to preview");
        return Ok(());
    };

    let matches = pool.find_matches_for(&first.id, limit)?;
    println!("Top matches for {} ({}):", first.full_name, first.id);
    print_matches(&matches);

    let stats = pool.stats();
    info!(
        "Pool stats: ready={}, candidates={}, dimensions={}",
        stats.ready, stats.candidates, stats.dimensions
    );
    Ok(())
}

fn run_match(path: &Path, user: &str, limit: usize, json: bool) -> anyhow::Result<()> {
    let records = load_records(path)?;
    let pool = build_pool(&records);

    let matches = pool.find_matches_for(user, limit)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        println!("Top matches for {}:", user);
        print_matches(&matches);
    }
    Ok(())
}

fn dataset(
    csv: &Path,
    samples: usize,
    query: Option<&Path>,
    limit: usize,
    json: bool,
) -> anyhow::Result<()> {
    let dataset = LifestyleDataset::from_file(csv)
        .with_context(|| format!("Failed to read dataset from {}", csv.display()))?;
    info!(
        "Parsed {} rows ({} skipped) from {}",
        dataset.len(),
        dataset.skipped(),
        csv.display()
    );

    let records = dataset.to_records();
    println!("Derived {} questionnaire records, for example:", records.len());
    for record in records.iter().take(samples) {
        println!(
            "  {}: age {}, budget {}, {}, cleanliness {}, study {}, social {}",
            record.id,
            record.age.unwrap_or(0),
            record.budget_range.as_deref().unwrap_or("-"),
            record.sleep_schedule.as_deref().unwrap_or("-"),
            record.cleanliness_level.as_deref().unwrap_or("-"),
            record.study_style.as_deref().unwrap_or("-"),
            record.introvert_extrovert.unwrap_or(0),
        );
    }

    let Some(query_path) = query else {
        return Ok(());
    };

    let raw = std::fs::read_to_string(query_path)
        .with_context(|| format!("Failed to read query record from {}", query_path.display()))?;
    let query_record: UserRecord = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed query record in {}", query_path.display()))?;

    let pool = build_pool(&records);
    let matches = pool.find_matches(&query_record, Some(query_record.id.as_str()), limit)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        println!(
            "Top matches for {} against the derived pool:",
            query_record.full_name
        );
        print_matches(&matches);
    }
    Ok(())
}

fn demo(limit: usize) -> anyhow::Result<()> {
    let records = sample_records();
    let pool = build_pool(&records);

    for record in &records {
        let matches = pool.find_matches_for(&record.id, limit)?;
        println!("Top matches for {} ({}):", record.full_name, record.id);
        print_matches(&matches);
    }

    let stats = pool.stats();
    info!(
        "Pool stats: ready={}, candidates={}, dimensions={}",
        stats.ready, stats.candidates, stats.dimensions
    );
    Ok(())
}

fn load_records(path: &Path) -> anyhow::Result<Vec<UserRecord>> {
    let source = JsonFileSource::new(path);
    let records = source
        .load_all()
        .with_context(|| format!("Failed to load records from {}", path.display()))?;
    Ok(records)
}

fn build_pool(records: &[UserRecord]) -> MatchingPool {
    let pool = MatchingPool::new(EncoderConfig::default());
    let summary = pool.build(records);
    info!(
        "Pool built: {} candidates, {} skipped",
        summary.loaded, summary.skipped
    );

    let diag = pool.diagnostics();
    let fallbacks = diag.budget_defaults + diag.cleanliness_defaults + diag.study_style_defaults;
    if fallbacks > 0 {
        warn!(
            "Applied mid-range defaults: budget={}, cleanliness={}, study_style={}",
            diag.budget_defaults, diag.cleanliness_defaults, diag.study_style_defaults
        );
    }

    pool
}

fn print_matches(matches: &[MatchResult]) {
    if matches.is_empty() {
        println!("  (no candidates)");
        return;
    }
    for (rank, result) in matches.iter().enumerate() {
        println!(
            "  {}. {} ({}) - {}% match",
            rank + 1,
            result.full_name,
            result.id,
            result.match_percentage
        );
    }
}
