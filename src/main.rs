// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use termrank::load::{load_path, Format};
use termrank::{Entry, PrefixIndex};

mod cli;
use cli::display;
use cli::{Cli, Commands};

/// JSON shape of `search --json`.
#[derive(Serialize)]
struct SearchOutput<'a> {
    prefix: &'a str,
    count: usize,
    matches: Vec<Entry>,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.format.map(Format::from);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Search {
            file,
            prefix,
            limit,
            json,
        } => {
            let index = open_index(&file, format)?;
            if json {
                let output = SearchOutput {
                    prefix: &prefix,
                    count: index.count(&prefix),
                    matches: index.top_matches(&prefix, limit),
                };
                serde_json::to_writer_pretty(&mut out, &output)?;
                writeln!(out)?;
            } else {
                answer(&mut out, &index, &prefix, limit)?;
            }
        }
        Commands::Interactive { file, limit } => {
            let index = open_index(&file, format)?;
            for line in io::stdin().lock().lines() {
                let prefix = line.context("failed to read prefix from stdin")?;
                answer(&mut out, &index, &prefix, limit)?;
                out.flush()?;
            }
        }
        Commands::Inspect { file } => {
            let entries = load_path(&file, format).with_context(|| format!("loading {}", file))?;
            inspect(&mut out, &file, &entries)?;
        }
    }

    Ok(())
}

fn open_index(file: &str, format: Option<Format>) -> Result<PrefixIndex> {
    let entries = load_path(file, format).with_context(|| format!("loading {}", file))?;
    Ok(PrefixIndex::build(entries))
}

/// `N matches` followed by the top `limit` results.
fn answer(out: &mut impl Write, index: &PrefixIndex, prefix: &str, limit: usize) -> Result<()> {
    let results = index.top_matches(prefix, limit);
    writeln!(out, "{}", display::match_count(index.count(prefix)))?;
    for entry in &results {
        writeln!(out, "{}", display::result_line(entry, prefix))?;
    }
    Ok(())
}

fn inspect(out: &mut impl Write, file: &str, entries: &[Entry]) -> Result<()> {
    let total: u128 = entries.iter().map(|e| u128::from(e.weight())).sum();
    let min = entries.iter().map(Entry::weight).min();
    let max = entries.iter().map(Entry::weight).max();
    let longest = entries.iter().map(Entry::char_len).max().unwrap_or(0);

    let mut initials: Vec<char> = entries.iter().filter_map(|e| e.text().chars().next()).collect();
    initials.sort_unstable();
    initials.dedup();

    let or_dash = |value: Option<u64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());

    writeln!(out, "{}", display::section_top(file))?;
    for (label, value) in [
        ("entries", entries.len().to_string()),
        ("distinct first characters", initials.len().to_string()),
        ("longest text (chars)", longest.to_string()),
        ("min weight", or_dash(min)),
        ("max weight", or_dash(max)),
        ("total weight", total.to_string()),
    ] {
        writeln!(out, "{}", display::row(&display::stat(label, &value)))?;
    }
    writeln!(out, "{}", display::section_bot())?;
    Ok(())
}
