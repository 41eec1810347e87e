//! Analyse a two-player game from the command line.
//!
//! Usage:
//!   cargo run --release --bin analyze_game -- [OPTIONS]
//!
//! Options:
//!   --game <NAME>        Built-in game: pd, bos, mp, hd or a full name (default: pd)
//!   --random <RxC>       Random game of the given shape instead, e.g. 3x2
//!   --seed <N>           Seed for --random (default: 0)
//!   --config <FILE>      Analysis configuration JSON file (optional)
//!   --p1 <PROBS>         Player 1 mixed strategy, comma separated
//!   --p2 <PROBS>         Player 2 mixed strategy, comma separated
//!   --mixed              Prompt for mixed strategies until valid ones are entered
//!   --json               Print the analysis as JSON
//!   --list               List the built-in games
//!
//! Set RUST_LOG=debug (or info) for traversal and analysis details.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use game_analyzer::analysis::{
    compute_expected_payoff, validate_distribution, AnalysisConfig, AnalysisReport,
};
use game_analyzer::extensive::{extensive_to_normal_form, GameTree};
use game_analyzer::games::{random_game_tree, ClassicGame};

fn parse_probs(s: &str) -> Option<Vec<f64>> {
    s.split(',').map(|p| p.trim().parse().ok()).collect()
}

/// Parse the value of `--p1`/`--p2`, naming the flag on failure.
fn parse_probs_arg(flag: &str, value: &str) -> Result<Vec<f64>, String> {
    parse_probs(value).ok_or_else(|| {
        format!(
            "Invalid probabilities for {}: {} (expected numbers separated by commas)",
            flag, value
        )
    })
}

fn parse_shape(s: &str) -> Option<(usize, usize)> {
    let (rows, cols) = s.split_once(['x', 'X'])?;
    Some((rows.trim().parse().ok()?, cols.trim().parse().ok()?))
}

/// Ask for a distribution over `labels` until a valid one is entered.
fn prompt_distribution(player: &str, labels: &[String], tolerance: f64) -> Option<Vec<f64>> {
    let stdin = io::stdin();
    loop {
        print!("{} probabilities for [{}]: ", player, labels.join(", "));
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        let Some(probs) = parse_probs(&line) else {
            println!("Please enter numbers separated by commas.");
            continue;
        };
        match validate_distribution(&probs, labels.len(), tolerance) {
            Ok(probs) => return Some(probs),
            Err(e) => println!("{}", e),
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut game_name = "pd".to_string();
    let mut random_shape: Option<(usize, usize)> = None;
    let mut seed: u64 = 0;
    let mut config_file: Option<String> = None;
    let mut p1: Option<Vec<f64>> = None;
    let mut p2: Option<Vec<f64>> = None;
    let mut interactive = false;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--game" | "-g" => {
                i += 1;
                if i < args.len() {
                    game_name = args[i].clone();
                }
            }
            "--random" | "-r" => {
                i += 1;
                if i < args.len() {
                    random_shape = parse_shape(&args[i]);
                    if random_shape.is_none() {
                        eprintln!("Invalid shape: {} (expected e.g. 3x2)", args[i]);
                        process::exit(2);
                    }
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or(0);
                }
            }
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            }
            "--p1" => {
                i += 1;
                if i < args.len() {
                    match parse_probs_arg("--p1", &args[i]) {
                        Ok(probs) => p1 = Some(probs),
                        Err(e) => {
                            eprintln!("{}", e);
                            process::exit(2);
                        }
                    }
                }
            }
            "--p2" => {
                i += 1;
                if i < args.len() {
                    match parse_probs_arg("--p2", &args[i]) {
                        Ok(probs) => p2 = Some(probs),
                        Err(e) => {
                            eprintln!("{}", e);
                            process::exit(2);
                        }
                    }
                }
            }
            "--mixed" | "-m" => {
                interactive = true;
            }
            "--json" => {
                json = true;
            }
            "--list" | "-l" => {
                for game in ClassicGame::ALL {
                    println!("{:<4} {}", game.alias(), game.name());
                }
                return;
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                process::exit(2);
            }
        }
        i += 1;
    }

    // Load configuration
    let config = match &config_file {
        Some(path) => {
            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Error reading config {}: {}", path, e);
                    process::exit(1);
                }
            };
            match AnalysisConfig::from_json(&text) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error loading config: {}", e);
                    process::exit(1);
                }
            }
        }
        None => AnalysisConfig::default(),
    };

    // Build the game
    let built: Result<(String, GameTree), String> = match random_shape {
        Some((rows, cols)) => random_game_tree(rows, cols, -5..=5, seed)
            .map(|tree| (format!("Random {}x{} game (seed {})", rows, cols, seed), tree))
            .map_err(|e| e.to_string()),
        None => game_name
            .parse::<ClassicGame>()
            .map_err(|e| e.to_string())
            .and_then(|game| {
                game.build()
                    .map(|tree| (game.name().to_string(), tree))
                    .map_err(|e| e.to_string())
            }),
    };
    let (title, tree) = match built {
        Ok(built) => built,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let report = match extensive_to_normal_form(&tree, &config.players)
        .and_then(|game| AnalysisReport::analyze(&game, &config))
    {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error analysing {}: {}", title, e);
            process::exit(1);
        }
    };

    if json {
        match report.to_json() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("=================================================");
    println!("  {} (Extensive Form)", title);
    println!("=================================================");
    println!();
    print!("{}", tree.root());
    println!();

    match report.render_table() {
        Ok(table) => println!("{}", table),
        Err(e) => eprintln!("Error rendering table: {}", e),
    }
    print!("{}", report);

    // Mixed strategies
    let [rows, cols] = &report.strategies;
    let tolerance = config.probability_tolerance;
    let mixed = if interactive {
        println!();
        println!("== Analyze Mixed Strategies ==");
        prompt_distribution(&report.players[0], rows, tolerance).and_then(|a| {
            prompt_distribution(&report.players[1], cols, tolerance).map(|b| (a, b))
        })
    } else {
        match (p1, p2) {
            (Some(a), Some(b)) => {
                match (
                    validate_distribution(&a, rows.len(), tolerance),
                    validate_distribution(&b, cols.len(), tolerance),
                ) {
                    (Ok(a), Ok(b)) => Some((a, b)),
                    (Err(e), _) | (_, Err(e)) => {
                        eprintln!("Invalid mixed strategy: {}", e);
                        process::exit(2);
                    }
                }
            }
            (None, None) => None,
            _ => {
                eprintln!("Both --p1 and --p2 are needed for a mixed profile");
                process::exit(2);
            }
        }
    };

    if let Some((a, b)) = mixed {
        match compute_expected_payoff(report.normal_form.payoffs(), &a, &b) {
            Ok((u1, u2)) => {
                println!();
                println!("Expected payoffs:");
                println!("  {}: {:.4}", report.players[0], u1);
                println!("  {}: {:.4}", report.players[1], u2);
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

fn print_help() {
    println!(
        r#"Two-Player Game Analyzer

USAGE:
    analyze_game [OPTIONS]

OPTIONS:
    -g, --game <NAME>       Built-in game: pd, bos, mp, hd or a full name (default: pd)
    -r, --random <RxC>      Random game of the given shape instead, e.g. 3x2
    -s, --seed <N>          Seed for --random (default: 0)
    -c, --config <FILE>     Analysis configuration JSON file
        --p1 <PROBS>        Player 1 mixed strategy, e.g. 0.5,0.5
        --p2 <PROBS>        Player 2 mixed strategy
    -m, --mixed             Prompt for mixed strategies until valid ones are entered
        --json              Print the analysis as JSON
    -l, --list              List the built-in games
    -h, --help              Print help

EXAMPLES:
    # Prisoner's Dilemma with everything printed
    analyze_game --game pd

    # Expected payoffs of a mixed profile in Matching Pennies
    analyze_game --game mp --p1 0.5,0.5 --p2 0.5,0.5

    # A random 3x3 game as JSON
    analyze_game --random 3x3 --seed 7 --json
"#
    );
}
