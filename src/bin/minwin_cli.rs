use minwin::engine::MinwinEngine;
use minwin::render_trace::{pattern_legend, render_trace};
use minwin::window_search::WindowSearch;
use serde::Serialize;
use std::{env, fs};

fn usage() {
    eprintln!(
        "Usage:\n  \
  minwin_cli --version\n  \
  minwin_cli capabilities\n  \
  minwin_cli search SOURCE PATTERN\n  \
  minwin_cli trace SOURCE PATTERN\n  \
  minwin_cli legend PATTERN\n  \
  minwin_cli op '<operation-json>'\n\n  \
  Tip: pass @file.json instead of inline JSON"
    );
}

fn load_json_arg(value: &str) -> Result<String, String> {
    if let Some(path) = value.strip_prefix('@') {
        fs::read_to_string(path).map_err(|e| format!("Could not read JSON file '{path}': {e}"))
    } else {
        Ok(value.to_string())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Could not serialize JSON output: {e}"))?;
    println!("{text}");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        usage();
        return Err("Missing command".to_string());
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("minwin_cli {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "capabilities" => print_json(&MinwinEngine::capabilities()),
        "search" => {
            if args.len() <= 3 {
                usage();
                return Err("search requires: SOURCE PATTERN".to_string());
            }
            print_json(&WindowSearch::search(&args[2], &args[3]))
        }
        "trace" => {
            if args.len() <= 3 {
                usage();
                return Err("trace requires: SOURCE PATTERN".to_string());
            }
            let source = &args[2];
            let pattern = &args[3];
            let result = WindowSearch::search(source, pattern);
            for frame in render_trace(source, &result) {
                println!("{frame}\n");
            }
            if result.is_match() {
                println!(
                    "Minimal window \"{}\" at {}..={}",
                    result.result, result.start_index, result.end_index
                );
            } else {
                println!("No covering window exists");
            }
            Ok(())
        }
        "legend" => {
            if args.len() <= 2 {
                usage();
                return Err("legend requires: PATTERN".to_string());
            }
            print_json(&pattern_legend(&args[2]))
        }
        "op" => {
            if args.len() <= 2 {
                usage();
                return Err("Missing operation JSON".to_string());
            }
            let json = load_json_arg(&args[2])?;
            let engine = MinwinEngine::new();
            let output = engine.apply_json(&json).map_err(|e| e.to_string())?;
            print_json(&output)
        }
        _ => {
            usage();
            Err(format!("Unknown command '{command}'"))
        }
    }
}
