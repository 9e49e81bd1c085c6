//! Interactive Level Ancestor driver (spec §6's CLI contract).
//!
//! Reads one line of whitespace-separated `parent[]`, builds the chosen LA
//! variant, then repeatedly reads `v d` pairs and prints the query result,
//! terminating on the first line that isn't exactly two whitespace-
//! separated integers.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use level_ancestor::{Kind, LevelAncestor};

#[derive(Parser)]
#[command(about = "Level Ancestor query driver")]
struct Args {
    /// Which algorithm to build.
    #[arg(long, value_enum, default_value_t = VariantArg::Optimal)]
    variant: VariantArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Table,
    JumpPointers,
    Ladder,
    JumpAndLadder,
    Optimal,
}

impl From<VariantArg> for Kind {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Table => Kind::Table,
            VariantArg::JumpPointers => Kind::JumpPointers,
            VariantArg::Ladder => Kind::Ladder,
            VariantArg::JumpAndLadder => Kind::JumpAndLadder,
            VariantArg::Optimal => Kind::Optimal,
        }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(first) = lines.next() else {
        return Ok(());
    };
    let parent: Vec<i64> = match parse_parent_line(&first?) {
        Some(p) => p,
        None => return Ok(()),
    };

    let la = match LevelAncestor::new_with_kind(parent, args.variant.into()) {
        Ok(la) => la,
        Err(e) => {
            eprintln!("failed to build: {e}");
            std::process::exit(1);
        }
    };

    for line in lines {
        let line = line?;
        let Some((v, d)) = parse_query_line(&line) else {
            break;
        };
        match la.query(v, d) {
            Ok(Some(ancestor)) => writeln!(out, "{ancestor}")?,
            Ok(None) => writeln!(out, "-1")?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }

    Ok(())
}

fn parse_parent_line(line: &str) -> Option<Vec<i64>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    tokens.iter().map(|t| t.parse::<i64>().ok()).collect()
}

fn parse_query_line(line: &str) -> Option<(usize, i64)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return None;
    }
    let v = tokens[0].parse::<usize>().ok()?;
    let d = tokens[1].parse::<i64>().ok()?;
    Some((v, d))
}
