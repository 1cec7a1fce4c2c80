//! CLI for generating and checking soroban practice problems.
//!
//! # Usage
//!
//! ```bash
//! # Five problems of class 3A with five terms each
//! soroban-gen generate 3A 5 --count 5
//!
//! # Reproducible JSON output
//! soroban-gen generate 2C 4 --seed 42 --json
//!
//! # Audit a stored question
//! soroban-gen check 1A 3 1 -2
//!
//! # Class catalogue and candidate tables
//! soroban-gen classes
//! soroban-gen table 2A
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use soroban_core::{check_sequence, registry, ClassId, ConfigError, Problem};
use soroban_generator::{GenerateError, GeneratorConfig, ProblemGenerator, MAX_ATTEMPTS_DEFAULT};

#[derive(Parser)]
#[command(name = "soroban-gen")]
#[command(
    about = "Generate soroban practice problems by difficulty class",
    long_about = None
)]
struct Cli {
    /// Log attempt details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate problems for a class
    Generate {
        /// Class name, e.g. 2C
        class: String,
        /// Terms per problem
        terms: usize,
        /// Number of problems
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Fixed seed (default: SOROBAN_SEED or entropy)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Attempts per problem before giving up
        #[arg(long, default_value_t = MAX_ATTEMPTS_DEFAULT)]
        max_attempts: u32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List every class
    Classes,
    /// Print a class's candidate table
    Table {
        class: String,
    },
    /// Check a sequence of terms against a class
    Check {
        class: String,
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
}

#[derive(Serialize)]
struct ProblemSet<'a> {
    class: ClassId,
    terms: usize,
    seed: u64,
    problems: &'a [Problem],
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            class,
            terms,
            count,
            seed,
            max_attempts,
            json,
        } => run_generate(&class, terms, count, seed, max_attempts, json),
        Commands::Classes => {
            print_classes();
            ExitCode::SUCCESS
        }
        Commands::Table { class } => match class.parse::<ClassId>() {
            Ok(id) => {
                print_table(id);
                ExitCode::SUCCESS
            }
            Err(e) => config_failure(&e),
        },
        Commands::Check { class, numbers } => run_check(&class, &numbers),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_generate(
    class: &str,
    terms: usize,
    count: usize,
    seed: Option<u64>,
    max_attempts: u32,
    json: bool,
) -> ExitCode {
    let id = match class.parse::<ClassId>() {
        Ok(id) => id,
        Err(e) => return config_failure(&e),
    };

    let mut config = GeneratorConfig::default().with_max_attempts(max_attempts.max(1));
    config.seed = seed;

    let mut generator = match ProblemGenerator::new(config) {
        Ok(g) => g,
        Err(e) => return generate_failure(&e),
    };

    let problems = match generator.generate_batch(id, terms, count) {
        Ok(problems) => problems,
        Err(e) => return generate_failure(&e),
    };

    if json {
        let set = ProblemSet {
            class: id,
            terms,
            seed: generator.seed(),
            problems: &problems,
        };
        match serde_json::to_string_pretty(&set) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: failed to serialize problems: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "Class {} ({}), {} terms, SOROBAN_SEED={}",
            id,
            id.config().title,
            terms,
            generator.seed()
        );
        for (i, problem) in problems.iter().enumerate() {
            let signed: Vec<String> = problem.numbers.iter().map(|n| format!("{:+}", n)).collect();
            println!("{:>3}. {} = {}", i + 1, signed.join(" "), problem.answer);
        }
    }

    ExitCode::SUCCESS
}

fn run_check(class: &str, numbers: &[i32]) -> ExitCode {
    let id = match class.parse::<ClassId>() {
        Ok(id) => id,
        Err(e) => return config_failure(&e),
    };

    let report = check_sequence(id.config(), numbers);
    print!("{}", report.format_report());

    if report.all_hold() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_classes() {
    println!(
        "{:<5} {:<34} {:>7} {:>4}  REQUIREMENT",
        "CLASS", "TITLE", "TERMS", "MAX"
    );
    for config in registry() {
        let requirement = match config.requirement {
            Some(req) => req
                .rules()
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join("; "),
            None => "-".to_string(),
        };
        println!(
            "{:<5} {:<34} {:>7} {:>4}  {}",
            config.id,
            config.title,
            format!("{}-{}", config.min_terms, config.max_terms),
            config.max_value,
            requirement
        );
    }
}

fn print_table(id: ClassId) {
    let config = id.config();
    println!("Class {} ({})", id, config.title);
    let moves: Vec<&str> = config.moves.iter().map(|m| m.description()).collect();
    println!("Moves: {}", moves.join(", "));
    println!("first: {:?}", config.table.first_terms());
    for (state, deltas) in config.table.entries() {
        println!("{:>5}: {:?}", state, deltas);
    }
}

fn config_failure(e: &ConfigError) -> ExitCode {
    eprintln!("Error: {}", e);
    eprintln!("Run `soroban-gen classes` to list classes and term ranges");
    ExitCode::from(2)
}

fn generate_failure(e: &GenerateError) -> ExitCode {
    eprintln!("Error: {}", e);
    if e.is_retryable() {
        eprintln!("Try a different term count or a larger --max-attempts");
        ExitCode::FAILURE
    } else {
        ExitCode::from(2)
    }
}
