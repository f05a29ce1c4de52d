//! CLI for maze generation

use std::io::{self, BufRead};

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use room_maze::MazeGenerator;
use tracing_subscriber::EnvFilter;

/// How the finished maze is printed
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Style {
    /// Space separated symbols: `#` wall, `.` path, `S` start, `E` exit, `@` treasure
    Ascii,
    /// Emoji squares
    Emoji,
}

/// Generate a maze with a single route through isolated rooms
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows. If omitted, rows and columns are read from stdin.
    #[arg(requires = "cols")]
    rows: Option<usize>,

    /// Number of columns
    cols: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Output style
    #[arg(long, value_enum, default_value_t = Style::Ascii)]
    style: Style,

    /// Log generation steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Read `rows cols` from a single line
fn read_size(input: impl BufRead) -> anyhow::Result<(usize, usize)> {
    let line = input
        .lines()
        .next()
        .ok_or_else(|| anyhow!("Expected maze size on stdin"))?
        .context("Could not read maze size")?;
    let mut numbers = line.split_whitespace().map(|n| {
        n.parse::<usize>()
            .with_context(|| format!("Invalid maze dimension `{}`", n))
    });
    match (numbers.next(), numbers.next()) {
        (Some(rows), Some(cols)) => Ok((rows?, cols?)),
        _ => Err(anyhow!("Expected two numbers: rows and columns")),
    }
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let (rows, cols) = match (args.rows, args.cols) {
        (Some(rows), Some(cols)) => (rows, cols),
        _ => read_size(io::stdin().lock())?,
    };

    let mut gen = MazeGenerator::new(args.seed);
    let maze = gen.generate_maze(rows, cols)?;
    match args.style {
        Style::Ascii => print!("{}", maze.grid),
        Style::Emoji => println!("{}", maze.grid.render_emojis()),
    }
    Ok(())
}
