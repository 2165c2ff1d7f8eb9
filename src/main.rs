use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rankshift::collection::{SortKey, group_by_field, sort_records};
use rankshift::json::{records_from_json, value_from_literal};
use rankshift::{RankChange, RankReorder, Record, ReorderConfig};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rankshift")]
#[command(about = "Reorder, sort and group JSON records by field")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Move the record at one position onto the rank of another
    Reorder {
        #[arg(long, default_value = "-")]
        input: PathBuf,
        #[arg(long)]
        rank_field: String,
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
        /// Fail on tied ranks inside the moved block
        #[arg(long)]
        strict: bool,
    },
    /// Like `reorder`, locating both records by identifier
    MoveId {
        #[arg(long, default_value = "-")]
        input: PathBuf,
        #[arg(long)]
        rank_field: String,
        #[arg(long)]
        id_field: String,
        #[arg(long)]
        from_id: String,
        #[arg(long)]
        to_id: String,
        #[arg(long)]
        strict: bool,
    },
    /// Stable sort by one or more `field[:asc|desc]` keys
    Sort {
        #[arg(long, default_value = "-")]
        input: PathBuf,
        #[arg(long = "by", required = true)]
        by: Vec<String>,
    },
    /// Group records by a field
    Group {
        #[arg(long, default_value = "-")]
        input: PathBuf,
        #[arg(long)]
        field: String,
    },
}

#[derive(Serialize)]
struct ReorderOutput<'a> {
    records: &'a [Record],
    changed: &'a [RankChange],
}

#[derive(Serialize)]
struct GroupOutput<'a> {
    key: serde_json::Value,
    records: Vec<&'a Record>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Reorder {
            input,
            rank_field,
            from,
            to,
            strict,
        } => {
            let mut records = load_records(&input)?;
            let changed = engine(strict)
                .reorder(&mut records, &rank_field, from, to)
                .with_context(|| format!("Failed to move record {} onto record {}", from, to))?;
            print_json(&ReorderOutput {
                records: &records,
                changed: &changed,
            })
        }
        Command::MoveId {
            input,
            rank_field,
            id_field,
            from_id,
            to_id,
            strict,
        } => {
            let mut records = load_records(&input)?;
            let source = value_from_literal(&from_id);
            let target = value_from_literal(&to_id);
            let changed = engine(strict)
                .reorder_by_id(&mut records, &rank_field, &id_field, &source, &target)
                .with_context(|| format!("Failed to move {} onto {}", from_id, to_id))?;
            print_json(&ReorderOutput {
                records: &records,
                changed: &changed,
            })
        }
        Command::Sort { input, by } => {
            let mut records = load_records(&input)?;
            let keys = by
                .iter()
                .map(|spec| SortKey::parse(spec))
                .collect::<rankshift::Result<Vec<_>>>()?;
            sort_records(&mut records, &keys)?;
            print_json(&records)
        }
        Command::Group { input, field } => {
            let records = load_records(&input)?;
            let groups = group_by_field(&records, &field)?
                .into_iter()
                .map(|group| {
                    let key = serde_json::from_str(&group.key)
                        .with_context(|| format!("Unreadable group key '{}'", group.key))?;
                    Ok(GroupOutput {
                        key,
                        records: group.items,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            print_json(&groups)
        }
    }
}

fn engine(strict: bool) -> RankReorder {
    let config = if strict {
        ReorderConfig::new().strict()
    } else {
        ReorderConfig::new()
    };
    RankReorder::new(config)
}

fn load_records(input: &Path) -> Result<Vec<Record>> {
    let text = if input == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read records from stdin")?;
        buffer
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read '{}'", input.display()))?
    };

    records_from_json(&text).map_err(|err| anyhow!("Invalid records in '{}': {}", input.display(), err))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}
