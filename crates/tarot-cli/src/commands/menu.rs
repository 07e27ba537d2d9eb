use std::io::{self, BufRead, Write};

use colored::Colorize;

use tarot_core::render::banner;
use tarot_core::{Oracle, Response};

pub fn run(deck: &str, seed: Option<u64>) -> Result<(), String> {
    let (kind, catalog) = super::load(deck)?;
    let mut oracle = Oracle::new(&catalog, &super::config(kind, seed));

    println!("{}", banner(kind));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        println!();
        println!("{}", oracle.menu());
        print!("\nEnter choice (1-{}): ", oracle.menu_len());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match oracle.process(&line) {
            Ok(Response::Output(text)) => {
                if !text.is_empty() {
                    println!("\n{text}");
                }
            }
            Ok(Response::Farewell(text)) => {
                println!("\n{text}\n");
                break;
            }
            Err(e) => {
                tracing::debug!(input = line.trim(), "rejected menu input");
                println!("\n{}", format!("{e}. Try again.").yellow());
            }
        }
    }

    Ok(())
}
