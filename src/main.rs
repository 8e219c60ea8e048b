use std::env;

use wordlist_builder::{BuildConfig, OutputFormat, WordlistBuilder};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} <source.jsonl.gz> <output-path> [--limit <N>] [--json]",
            args[0]
        );
        std::process::exit(1);
    }

    let mut config = BuildConfig::new(&args[1], &args[2]);

    // Parse --limit argument
    if let Some(limit_idx) = args.iter().position(|arg| arg == "--limit") {
        if let Some(limit_str) = args.get(limit_idx + 1) {
            match limit_str.parse::<usize>() {
                Ok(limit) if limit > 0 => config.limit = limit,
                _ => {
                    eprintln!("ERROR: Invalid --limit value: {}", limit_str);
                    std::process::exit(1);
                }
            }
        } else {
            eprintln!("ERROR: --limit flag requires an argument.");
            std::process::exit(1);
        }
    }

    if args.iter().any(|arg| arg == "--json") {
        config.format = OutputFormat::Json;
    }

    let output = config.output.clone();
    match WordlistBuilder::new(config).run() {
        Ok(report) => {
            println!("Wrote {} words to {}", report.entries_written, output.display());
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}
