//! Genoscan CLI — mutant DNA screening
//!
//! Commands:
//!   genoscan check  — screen a DNA matrix and print the verdict
//!   genoscan stats  — show aggregate screening statistics
//!   genoscan demo   — screen bundled samples, show dedup + stats

use genoscan_core::{DnaRequest, JsonStore, ScreenError, ScreeningService};
use std::env;
use std::process::ExitCode;

const STORE_FILE: &str = "genoscan-records.json";

fn print_usage() {
    println!(
        r#"genoscan — mutant DNA screening

Usage: genoscan <command> [options]

Commands:
  check <ROW>...           Screen a DNA matrix given row by row
  check --file <path>      Screen a JSON request file: {{"dna": ["ATGC", ...]}}
  stats                    Show aggregate screening statistics
  demo                     Screen bundled samples, show dedup + stats

Examples:
  genoscan check AAAA CCCC TCAG GGTC
  genoscan check --file request.json
  genoscan stats
"#
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "check" => cmd_check(&args[2..]),
        "stats" => cmd_stats(),
        "demo" => cmd_demo(),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn open_service() -> Result<ScreeningService<JsonStore>, ScreenError> {
    Ok(ScreeningService::new(JsonStore::open(STORE_FILE)?))
}

fn cmd_check(args: &[String]) -> ExitCode {
    let request = match args {
        [flag, path] if flag.as_str() == "--file" => match read_request(path) {
            Ok(request) => request,
            Err(e) => {
                eprintln!("Cannot read request file {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        [] => {
            eprintln!("check needs rows or --file <path>");
            return ExitCode::FAILURE;
        }
        rows => DnaRequest::new(rows.iter().cloned()),
    };

    let svc = match open_service() {
        Ok(svc) => svc,
        Err(e) => {
            eprintln!("Cannot open record store: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match svc.screen_request(&request) {
        Ok(true) => {
            println!("MUTANT");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("HUMAN");
            ExitCode::SUCCESS
        }
        Err(ScreenError::InvalidDna(reason)) => {
            eprintln!("Rejected: {}", reason);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Screening failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_request(path: &str) -> Result<DnaRequest, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn cmd_stats() -> ExitCode {
    let svc = match open_service() {
        Ok(svc) => svc,
        Err(e) => {
            eprintln!("Cannot open record store: {}", e);
            return ExitCode::FAILURE;
        }
    };
    match svc.stats() {
        Ok(stats) => {
            println!("{}", serde_json::to_string_pretty(&stats).unwrap());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Stats failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_demo() -> ExitCode {
    let svc = match open_service() {
        Ok(svc) => svc,
        Err(e) => {
            eprintln!("Cannot open record store: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let samples: [(&str, [&str; 4]); 3] = [
        ("two horizontal runs", ["AAAA", "CCCC", "TCAG", "GGTC"]),
        ("no runs", ["ATGC", "CAGT", "TTAT", "AGAC"]),
        ("one run only", ["AAAA", "CAGT", "TTAT", "AGAC"]),
    ];

    for (label, rows) in &samples {
        match svc.screen_rows(rows) {
            Ok(true) => println!("{:<20} -> MUTANT", label),
            Ok(false) => println!("{:<20} -> HUMAN", label),
            Err(e) => {
                eprintln!("{:<20} -> error: {}", label, e);
                return ExitCode::FAILURE;
            }
        }
    }

    // Resubmit the first sample: resolved from the store, not rescanned.
    let _ = svc.screen_rows(&samples[0].1);
    println!(
        "scans this session: {} (1 resubmission deduped)",
        svc.scans_performed()
    );

    match svc.stats() {
        Ok(stats) => {
            println!("{}", serde_json::to_string_pretty(&stats).unwrap());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Stats failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
