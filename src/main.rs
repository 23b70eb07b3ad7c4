mod feed;

use chrono::Utc;
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use topic_trends::dates::{format_day, parse_day};
use topic_trends::keys::{story_key, topic_key};
use topic_trends::{
    format_score, merge_threads, trend_report, EngineConfig, Error, MergedTopic, Result,
    TrendReport, TrendTopic,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "topic-trends", about = "Topic deduplication and trend scoring")]
struct Cli {
    /// Config file (default: $TRENDS_CONFIG_PATH or config/trends.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank deduplicated stories across the feed's window.
    Trends(TrendsArgs),
    /// Merge one day's records into display threads.
    Threads(ThreadsArgs),
    /// Print the topic key and story key for a title.
    Key(KeyArgs),
    /// Write the default configuration.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct TrendsArgs {
    #[arg(long)]
    category: String,
    /// Record feed (JSON array, {"records": [...]}, or JSON lines); stdin if omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// Reference day, YYYY-MM-DD (default: today in the configured time zone)
    #[arg(long)]
    today: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct ThreadsArgs {
    #[arg(long)]
    category: String,
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    limit: Option<usize>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct KeyArgs {
    #[arg(long)]
    category: String,
    #[arg(long)]
    keyword: String,
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    summary: String,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/trends.toml")]
    path: PathBuf,
}

fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let (mut config, config_path) = EngineConfig::load(cli.config)?;
    tracing::debug!(config = ?config_path, "configuration loaded");

    match cli.command {
        Command::Trends(args) => {
            let records = feed::read_feed(args.input.as_deref())?;
            let today = resolve_day(args.today.as_deref(), &config)?;
            let report = trend_report(&records, &args.category, &today, &config);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Command::Threads(args) => {
            if let Some(limit) = args.limit {
                config.threads.limit = limit;
            }
            let records = feed::read_feed(args.input.as_deref())?;
            let date = resolve_day(args.date.as_deref(), &config)?;
            let threads = merge_threads(&records, &args.category, &date, &config);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&threads)?);
            } else {
                print_threads(&args.category, &date, &threads);
            }
        }
        Command::Key(args) => {
            println!(
                "topic key: {}",
                topic_key(&args.category, &args.keyword, &args.title)
            );
            let story = story_key(&args.title, &args.summary, &args.keyword);
            println!("story key: {}", story.as_deref().unwrap_or("none"));
        }
        Command::InitConfig(args) => {
            config.write(&args.path)?;
            println!("Wrote {}", args.path.display());
        }
    }

    Ok(())
}

/// The caller's day if given, else the current date in the configured zone.
fn resolve_day(arg: Option<&str>, config: &EngineConfig) -> Result<String> {
    if let Some(day) = arg {
        return parse_day(day)
            .map(format_day)
            .ok_or_else(|| Error::Input(format!("invalid date (YYYY-MM-DD): {}", day)));
    }
    let timezone = &config.calendar.timezone;
    let zone: Tz = timezone
        .parse()
        .map_err(|err| Error::Config(format!("invalid time zone {}: {}", timezone, err)))?;
    Ok(format_day(Utc::now().with_timezone(&zone).date_naive()))
}

fn print_report(report: &TrendReport) {
    println!(
        "Trends for {} on {} ({} stories)",
        report.category,
        report.today,
        report.topics.len()
    );
    for topic in &report.topics {
        print_topic(topic);
    }

    if !report.new_today.is_empty() {
        println!("\nNew today:");
        for topic in &report.new_today {
            println!("- {} ({} posts)", topic.title, topic.today_count);
        }
    }
    if !report.trending.is_empty() {
        println!("\nTrending:");
        for topic in &report.trending {
            println!(
                "- {} (score {}, {} total)",
                topic.title,
                format_score(topic.score),
                topic.total_count
            );
        }
    }
}

fn print_topic(topic: &TrendTopic) {
    let rank = topic
        .today_rank
        .map(|rank| format!("#{}", rank))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{:>4} [{:<6}] today {} | yesterday {} | score {} | {}d  {}",
        rank,
        topic.trend_state.label(),
        topic.today_count,
        topic.yesterday_count,
        format_score(topic.score),
        topic.ongoing_days,
        topic.title
    );
    if let Some(url) = topic.primary_url.as_deref() {
        println!("       {}", url);
    }
}

fn print_threads(category: &str, date: &str, threads: &[MergedTopic]) {
    println!("Threads for {} on {} ({})", category, date, threads.len());
    for thread in threads {
        println!(
            "\n{} posts  {}  ({})",
            thread.post_count,
            thread.topic_title,
            thread.platforms.join(", ")
        );
        if !thread.summary.is_empty() {
            println!("  {}", thread.summary);
        }
        for link in &thread.links {
            println!("  - {}: {}", link.label, link.url);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
