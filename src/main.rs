//! Henyo CLI - Let a genetic algorithm guess your word.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use henyo::{
    compute::{WordOracle, normalize_word},
    compute::evolution::Game,
    schema::{GameConfig, GenerationProgress, StopReason},
};

struct Args {
    word: Option<String>,
    config: Option<PathBuf>,
    seed: Option<u64>,
    history: Option<PathBuf>,
    example: bool,
}

fn main() {
    env_logger::init();

    let args = parse_args().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage();
        std::process::exit(1);
    });

    if args.example {
        print_example_config();
        return;
    }

    // Load configuration
    let mut config = match &args.config {
        Some(path) => {
            let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str::<GameConfig>(&config_str).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.random_seed = args.seed;
    }

    println!("Welcome to Henyo!");
    println!("{}", "=".repeat(50));

    let target_word = match args.word.as_deref() {
        Some(raw) => normalize_word(raw).unwrap_or_else(|e| {
            eprintln!("Invalid word: {}", e);
            std::process::exit(1);
        }),
        None => prompt_for_word().unwrap_or_else(|e| {
            eprintln!("Error reading word: {}", e);
            std::process::exit(1);
        }),
    };

    let oracle = WordOracle::new(&target_word);
    let mut game = Game::from_config(oracle, &config).unwrap_or_else(|e| {
        eprintln!("Error setting up game: {}", e);
        std::process::exit(1);
    });

    display_header(&target_word);

    let result = game
        .run_with_callback(display_generation_result)
        .unwrap_or_else(|e| {
            eprintln!("Evolution failed: {}", e);
            std::process::exit(1);
        });

    println!("{}", "-".repeat(50));
    match result.stop_reason {
        StopReason::Solved => {
            println!(
                "SUCCESS! Word guessed correctly in generation {}!",
                result.generations
            );
            println!("Final answer: {}", result.best.candidate);
        }
        StopReason::MaxGenerations => {
            println!("Maximum generations ({}) reached.", game.max_generations());
            println!(
                "Best guess: {} (Cost: {})",
                result.best.candidate, result.best.distance
            );
        }
    }
    println!("{}", "=".repeat(50));

    if let Some(path) = &args.history {
        if let Err(e) = result.history.save_json(path) {
            eprintln!("Error writing history: {}", e);
            std::process::exit(1);
        }
        println!("Cost history written to {}", path.display());
    }
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        word: None,
        config: None,
        seed: None,
        history: None,
        example: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--example" => args.example = true,
            "--config" => {
                let value = iter.next().ok_or("--config requires a path")?;
                args.config = Some(PathBuf::from(value));
            }
            "--history" => {
                let value = iter.next().ok_or("--history requires a path")?;
                args.history = Some(PathBuf::from(value));
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a number")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                args.seed = Some(seed);
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option: {}", flag)),
            word => {
                if args.word.is_some() {
                    return Err(format!("unexpected argument: {}", word));
                }
                args.word = Some(word.to_string());
            }
        }
    }

    Ok(args)
}

fn print_usage() {
    eprintln!("Usage: henyo [WORD] [--config config.json] [--seed N] [--history out.json]");
    eprintln!();
    eprintln!("A genetic algorithm guesses WORD (prompted for if omitted).");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config PATH   Game configuration file (JSON)");
    eprintln!("  --seed N        Random seed for a reproducible run");
    eprintln!("  --history PATH  Write the cost trajectory as JSON");
    eprintln!("  --example       Print the default configuration");
}

/// Ask on stdin until a valid word is entered.
fn prompt_for_word() -> io::Result<String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter the word to be guessed: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no word entered",
            ));
        };
        match normalize_word(&line?) {
            Ok(word) => return Ok(word),
            Err(e) => println!("{}. Please enter a valid word containing only letters.", e),
        }
    }
}

fn display_header(target_word: &str) {
    println!("\nWord to be guessed: {}", target_word);
    println!("{}", "-".repeat(40));
    println!("Generation | Best Guess | Cost Value");
    println!("{}", "-".repeat(40));
}

fn display_generation_result(progress: &GenerationProgress<'_>) {
    println!(
        "{:10} | {:10} | {:10}",
        progress.generation, progress.best.candidate, progress.best.distance
    );
}

fn print_example_config() {
    let config = GameConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
