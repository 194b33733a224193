//! kvcollection CLI
//!
//! Reads `key<SEP>value` lines, builds a collection and prints it as a
//! JSON list of `[key, value]` pairs.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kvcollection::{default_compare, ops, Collection, CollectionError, Config, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// kvcollection CLI
#[derive(Parser, Debug)]
#[command(name = "kvcollection")]
#[command(about = "Build a key-value collection from text and print it as JSON pairs")]
#[command(version)]
struct Args {
    /// Input file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Separator between key and value
    #[arg(short, long, default_value = "=")]
    separator: char,

    /// What to do when a key appears more than once
    #[arg(short = 'd', long, value_enum, default_value = "last")]
    on_duplicate: Duplicate,

    /// Sort entries before printing
    #[arg(long, value_enum)]
    sort: Option<SortBy>,

    /// Reverse the entry order (applied after sorting)
    #[arg(short, long)]
    reverse: bool,

    /// Keep only N entries from the front (negative: from the back)
    #[arg(short, long, allow_hyphen_values = true)]
    take: Option<isize>,

    /// Print value → [keys] groups instead of the entries
    #[arg(short, long)]
    group: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Entries to pre-allocate room for
    #[arg(long, default_value = "0")]
    capacity: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Duplicate {
    /// Later lines overwrite earlier ones
    Last,
    /// The first line for a key is kept
    First,
    /// Values are parsed as integers and added
    Sum,
    /// Values are joined with ','
    Concat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SortBy {
    Key,
    Value,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kvcollection=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("kvcollection v{}", kvcollection::VERSION);

    let result = match &args.input {
        Some(path) => {
            tracing::info!("Reading entries from {}", path.display());
            File::open(path)
                .map_err(CollectionError::from)
                .and_then(|file| run(&args, BufReader::new(file)))
        }
        None => run(&args, io::stdin().lock()),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run<R: BufRead>(args: &Args, reader: R) -> Result<String> {
    let config = Config::builder()
        .initial_capacity(args.capacity)
        .label("cli")
        .build();
    config.validate()?;

    let lines = read_entries(reader, args.separator)?;
    tracing::info!("Read {} entries", lines.len());

    let combined = combine(lines, args.on_duplicate)?;

    let mut collection: Collection<String, String> = Collection::with_config(config);
    collection.extend(combined.into_entries());

    match args.sort {
        Some(SortBy::Key) => {
            collection.sort(|_, _, ka, kb| ka.cmp(kb));
        }
        Some(SortBy::Value) => {
            collection.sort(default_compare);
        }
        None => {}
    }
    if args.reverse {
        collection.reverse();
    }

    let selected = match args.take {
        Some(n) => {
            let keep: HashSet<String> = collection.first_keys(n).into_iter().collect();
            collection.filter(|_, k, _| keep.contains(k))
        }
        None => collection.clone(),
    };

    if args.group {
        let groups = ops::group_by(selected.entries(), |(_, value), _| value.clone());
        let keys_by_value = ops::map_values(&groups, |pairs, _, _| {
            pairs.iter().map(|(k, _)| k.clone()).collect::<Vec<_>>()
        });
        return render(&keys_by_value, args.pretty);
    }
    render(&selected, args.pretty)
}

/// Fold repeated keys according to the duplicate policy
fn combine(lines: Vec<Line>, policy: Duplicate) -> Result<Collection<String, String>> {
    if policy == Duplicate::Sum {
        let numbers = lines
            .into_iter()
            .map(|line| -> Result<(String, i64)> {
                let number = line.value.parse::<i64>().map_err(|_| CollectionError::InvalidEntry {
                    line: line.number,
                    reason: format!("value '{}' is not an integer", line.value),
                })?;
                Ok((line.key, number))
            })
            .collect::<Result<Vec<_>>>()?;
        let totals = ops::combine_entries(numbers, |a: i64, b, _| a.saturating_add(b));
        return Ok(ops::map_values(&totals, |total, _, _| total.to_string()));
    }

    let pairs = lines.into_iter().map(|line| (line.key, line.value));
    Ok(ops::combine_entries(pairs, |existing: String, incoming, _| match policy {
        Duplicate::First => existing,
        Duplicate::Concat => format!("{},{}", existing, incoming),
        Duplicate::Last | Duplicate::Sum => incoming,
    }))
}

fn render<V: serde::Serialize>(collection: &Collection<String, V>, pretty: bool) -> Result<String> {
    if pretty {
        collection.to_json_pretty()
    } else {
        collection.to_json()
    }
}

/// One parsed `key<SEP>value` line
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    /// 1-based line number in the input
    number: usize,
    key: String,
    value: String,
}

/// Parse `key<SEP>value` lines; blank lines and `#` comments are skipped
fn read_entries<R: BufRead>(reader: R, separator: char) -> Result<Vec<Line>> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (key, value) = trimmed.split_once(separator).ok_or_else(|| {
            CollectionError::InvalidEntry {
                line: index + 1,
                reason: format!("missing separator '{}'", separator),
            }
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(CollectionError::InvalidEntry {
                line: index + 1,
                reason: "empty key".to_string(),
            });
        }
        entries.push(Line {
            number: index + 1,
            key: key.to_string(),
            value: value.trim().to_string(),
        });
    }
    Ok(entries)
}
