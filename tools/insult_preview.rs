/// Insult Preview: interactive shell for generating and rating insults.
///
/// Usage: insult_preview [--config <file.ron>] [--words-dir <dir>] [--state-dir <dir>]
///                       [--seed <n>] [--global]
///
/// Commands:
///   insult|best|worst|good|bad|last <target>    generate an insult
///   rate <up|down|lmao|trash|N>                 rate the last insult in this scope
///   scope <id> | scope global                   switch conversation scope
///   stats                                       corpus sizes
///   top <nouns|adjectives> [n]                  highest rated words
///   help                                        list commands
///   quit                                        exit
use clap::Parser;
use insult_engine::core::selection::rank_descending;
use insult_engine::schema::category::Category;
use insult_engine::schema::rating::Rating;
use insult_engine::schema::scope::{Scope, ScopeMode};
use insult_engine::schema::strategy::Strategy;
use insult_engine::{EngineConfig, InsultEngine};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Generate and rate insults from the command line.
#[derive(Parser, Debug)]
#[command(name = "insult_preview", version, about)]
struct Args {
    /// RON engine configuration. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing <category>/all.txt word lists.
    #[arg(long)]
    words_dir: Option<PathBuf>,

    /// Directory for persisted rating ledgers.
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// RNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Share one "last insult" slot across all scopes.
    #[arg(long)]
    global: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => EngineConfig::load_from_ron(path).unwrap_or_else(|e| {
            eprintln!("Error reading config '{}': {}", path.display(), e);
            process::exit(1);
        }),
        None => EngineConfig::default(),
    };
    if let Some(dir) = args.words_dir {
        config.words_dir = dir;
    }
    if let Some(dir) = args.state_dir {
        config.state_dir = dir;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.global {
        config.scope_mode = ScopeMode::Global;
    }

    let mut engine = InsultEngine::from_config(&config);
    let mut scope = Scope::Global;

    println!("{}", engine.stats());
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("insult[{}]> ", scope);
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "stats" => println!("{}", engine.stats()),
            "rate" => {
                let Some(arg) = parts.get(1) else {
                    println!("No rating given");
                    continue;
                };
                let delta = match arg.parse::<Rating>() {
                    Ok(rating) => rating.delta(),
                    Err(err) => match arg.parse::<i64>() {
                        Ok(delta) => delta,
                        Err(_) => {
                            println!("{}", err);
                            continue;
                        }
                    },
                };
                match engine.rate(&scope, delta) {
                    Ok(()) => {
                        if let Some(pair) = engine.last_used(&scope) {
                            println!("Rated '{}' by {:+}", pair, delta);
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
            "scope" => match parts.get(1) {
                Some(&"global") => scope = Scope::Global,
                Some(id) => scope = Scope::channel(*id),
                None => println!("Current scope: {}", scope),
            },
            "top" => {
                let category = match parts.get(1).and_then(|n| Category::from_record_name(n)) {
                    Some(c) => c,
                    None => {
                        println!("Usage: top <nouns|adjectives> [n]");
                        continue;
                    }
                };
                let limit = parts.get(2).and_then(|n| n.parse().ok()).unwrap_or(10);
                let mut pairs = engine.ledger_snapshot(category);
                rank_descending(&mut pairs);
                for pair in pairs.iter().take(limit) {
                    println!("  {:>5}  {}", pair.score, pair.word);
                }
            }
            other => match other.parse::<Strategy>() {
                Ok(strategy) => {
                    if parts.len() < 2 {
                        println!("Usage: {} <target>", other);
                        continue;
                    }
                    let target = parts[1..].join(" ");
                    match engine.generate(strategy, &target, &scope) {
                        Ok(text) => println!("{}", text),
                        Err(e) => println!("{}", e),
                    }
                }
                Err(_) => println!("I do not have command `{}`", other),
            },
        }
    }

    if let Err(e) = engine.flush() {
        eprintln!("Error saving ratings: {}", e);
        process::exit(1);
    }
}

fn print_help() {
    println!("Commands:");
    for strategy in Strategy::ALL {
        println!("  {:<8} <target>  {}", strategy.name(), strategy.description());
    }
    println!("  rate <up|down|lmao|trash|N>  rate the last insult in this scope");
    println!("  scope <id|global>            switch conversation scope");
    println!("  stats                        corpus sizes");
    println!("  top <nouns|adjectives> [n]   highest rated words");
    println!("  help                         this list");
    println!("  quit                         exit");
}
