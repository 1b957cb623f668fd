use std::io::Read;

use clap::Parser;
use prose_humanizer::{default_humanizer, HumanizeResponse};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "prose-humanizer",
    about = "Rewrite machine-generated prose into academic-register human prose",
    version
)]
struct Cli {
    /// File paths to humanize (reads stdin if none provided)
    files: Vec<String>,

    /// Seed the random source for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Print {original, humanized, success} as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn run(text: &str, cli: &Cli, rng: &mut dyn RngCore) {
    let humanized = match default_humanizer().humanize(text, rng) {
        Ok(humanized) => humanized,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        let response = HumanizeResponse {
            original: text.to_string(),
            humanized,
            success: true,
        };
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error encoding response: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{humanized}");
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    if cli.files.is_empty() {
        let mut input = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut input) {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        }
        run(&input, &cli, rng.as_mut());
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading {path}: {e}");
                std::process::exit(1);
            });
            run(&text, &cli, rng.as_mut());
        }
    }
}
