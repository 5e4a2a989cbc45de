/// Ledger Inspect: prints a persisted rating ledger ranked by score.
///
/// Usage: ledger_inspect --state-dir <dir> --category <nouns|adjectives|adverbs|verbs>
///                       [--ascending] [--limit <n>]
use clap::Parser;
use insult_engine::core::ledger::WordScores;
use insult_engine::core::selection::{rank_ascending, rank_descending};
use insult_engine::core::storage::{FileStore, LedgerStore};
use insult_engine::schema::category::Category;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Show the words of one rating ledger, best first.
#[derive(Parser, Debug)]
#[command(name = "ledger_inspect", version, about)]
struct Args {
    /// Directory holding the persisted <category>.ron records.
    #[arg(long, default_value = "ratings")]
    state_dir: PathBuf,

    /// Ledger to print: nouns, adjectives, adverbs or verbs.
    #[arg(long, default_value = "nouns", value_parser = parse_category)]
    category: Category,

    /// List the lowest rated words first.
    #[arg(long)]
    ascending: bool,

    /// Maximum number of words to print (0 = all).
    #[arg(short, long, default_value_t = 0)]
    limit: usize,
}

fn parse_category(name: &str) -> Result<Category, String> {
    Category::from_record_name(name).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.record_name()).collect();
        format!("expected one of {}", known.join(", "))
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let store = FileStore::new(&args.state_dir);
    let name = args.category.record_name();
    let scores = match store.read(name) {
        Ok(Some(bytes)) => WordScores::decode(name, &bytes).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        Ok(None) => {
            println!(
                "No {} ledger in '{}'",
                name,
                args.state_dir.display()
            );
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut pairs = scores.snapshot();
    if args.ascending {
        rank_ascending(&mut pairs);
    } else {
        rank_descending(&mut pairs);
    }
    let limit = if args.limit == 0 { pairs.len() } else { args.limit };

    println!("{} ({} rated words)", name, pairs.len());
    for pair in pairs.iter().take(limit) {
        println!("  {:>5}  {}", pair.score, pair.word);
    }
}
