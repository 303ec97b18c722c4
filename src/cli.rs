//! Command-line front end
//!
//! `demo` replays the reference scenarios, `run` drives a scripted session
//! on an integer buffer and `config` prints the effective configuration.

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::str::FromStr;
use tracing::info;

use crate::buffer::RingBuffer;
use crate::config::Config;
use crate::dump::dump_buffer;
use crate::errors::RingBufferError;
use crate::telemetry::{init_tracing, init_tracing_verbose};

#[derive(Parser)]
#[command(name = "circular-buffer")]
#[command(about = "Fixed-capacity ring buffer with overwrite-on-full semantics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log buffer operations to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the built-in scenarios and check their outcomes
    Demo,

    /// Run a scripted session: push:<int>, pop, dump, clear
    Run {
        /// Buffer capacity (defaults to buffer.capacity from the config)
        #[arg(short = 'n', long)]
        capacity: Option<usize>,

        /// Operations, applied left to right
        #[arg(value_name = "OP")]
        ops: Vec<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// One step of a scripted session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Push(i64),
    Pop,
    Dump,
    Clear,
}

impl FromStr for Op {
    type Err = RingBufferError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "pop" => Ok(Op::Pop),
            "dump" => Ok(Op::Dump),
            "clear" => Ok(Op::Clear),
            other => {
                let value = other
                    .strip_prefix("push:")
                    .ok_or_else(|| RingBufferError::InvalidOperation(other.to_string()))?;
                value.trim().parse().map(Op::Push).map_err(|_| {
                    RingBufferError::InvalidOperation(format!("{other}: not an integer"))
                })
            }
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_tracing_verbose();
    } else {
        init_tracing();
    }

    let config = Config::load(cli.config.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo => run_demo(&mut out),
        Commands::Run { capacity, ops } => {
            let capacity = capacity.unwrap_or(config.buffer.capacity);
            run_script(&mut out, capacity, &ops)
        }
        Commands::Config => {
            write!(out, "{}", config.to_toml()?)?;
            Ok(())
        }
    }
}

/// Execute `ops` against a fresh `i64` buffer of `capacity` slots.
///
/// All operations are parsed before the buffer is touched, so a typo late
/// in the script produces no partial output.
pub fn run_script<W: Write>(out: &mut W, capacity: usize, ops: &[String]) -> Result<()> {
    let ops = ops
        .iter()
        .map(|s| s.parse::<Op>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to parse script")?;

    let mut buffer = RingBuffer::new(capacity).context("Failed to create buffer")?;
    info!(capacity, steps = ops.len(), "Running script");

    for op in ops {
        match op {
            Op::Push(value) => {
                if let Some(old) = buffer.push_evicting(value) {
                    writeln!(out, "Evicted: {old}")?;
                }
            }
            Op::Pop => match buffer.pop() {
                Some(value) => writeln!(out, "Got: {value}")?,
                None => writeln!(out, "Got: nothing")?,
            },
            Op::Dump => write!(out, "{}", dump_buffer(&buffer))?,
            Op::Clear => buffer.clear(),
        }
    }

    buffer.destroy();
    Ok(())
}

/// Replay the reference scenarios, failing on the first broken expectation.
pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "--- Scenario 1: Put and get ---")?;
    demo_put_and_get(out)?;

    writeln!(out, "\n--- Scenario 2: Filling and emptying the buffer ---")?;
    demo_fill_and_drain(out)?;

    writeln!(out, "\n--- Scenario 3: Empty buffer operations ---")?;
    demo_empty(out)?;

    writeln!(out, "\n--- Scenario 4: Single element buffer ---")?;
    demo_single_slot(out)?;

    writeln!(out, "\n--- Scenario 5: Overwrite when full ---")?;
    demo_overwrite(out)?;

    Ok(())
}

fn pop_value(buffer: &mut RingBuffer<i32>) -> Result<i32> {
    buffer.pop().context("Expected a value but the buffer was empty")
}

fn contents(buffer: &RingBuffer<i32>) -> Vec<i32> {
    buffer.iter().copied().collect()
}

fn demo_put_and_get<W: Write>(out: &mut W) -> Result<()> {
    let mut buffer = RingBuffer::new(5)?;
    buffer.push(10);
    buffer.push(20);
    write!(out, "{buffer}")?;

    let first = pop_value(&mut buffer)?;
    writeln!(out, "Got: {first}")?;
    write!(out, "{buffer}")?;

    buffer.push(30);
    write!(out, "{buffer}")?;

    let second = pop_value(&mut buffer)?;
    writeln!(out, "Got: {second}")?;
    let third = pop_value(&mut buffer)?;
    writeln!(out, "Got: {third}")?;
    write!(out, "{buffer}")?;

    ensure!(
        (first, second, third) == (10, 20, 30),
        "put and get: expected 10, 20, 30 but got {first}, {second}, {third}"
    );
    ensure!(buffer.is_empty(), "put and get: buffer should be empty");
    buffer.destroy();
    Ok(())
}

fn demo_fill_and_drain<W: Write>(out: &mut W) -> Result<()> {
    let mut buffer = RingBuffer::new(5)?;
    for value in [40, 50, 60, 70, 80] {
        buffer.push(value);
    }
    write!(out, "{buffer}")?;
    ensure!(buffer.is_full(), "fill: buffer should be full");
    ensure!(
        contents(&buffer) == [40, 50, 60, 70, 80],
        "fill: unexpected contents {:?}",
        contents(&buffer)
    );

    let r1 = pop_value(&mut buffer)?;
    let r2 = pop_value(&mut buffer)?;
    writeln!(out, "Got: {r1}, {r2}")?;
    write!(out, "{buffer}")?;
    ensure!((r1, r2) == (40, 50), "drain: expected 40, 50 but got {r1}, {r2}");
    ensure!(!buffer.is_full(), "drain: buffer should not be full");
    ensure!(!buffer.is_empty(), "drain: buffer should not be empty");

    buffer.push(10);
    buffer.push(20);
    write!(out, "{buffer}")?;
    ensure!(
        contents(&buffer) == [60, 70, 80, 10, 20],
        "refill: unexpected contents {:?}",
        contents(&buffer)
    );
    ensure!(buffer.is_full(), "refill: buffer should be full");
    buffer.destroy();
    Ok(())
}

fn demo_empty<W: Write>(out: &mut W) -> Result<()> {
    let mut buffer: RingBuffer<i32> = RingBuffer::new(3)?;
    ensure!(buffer.is_empty(), "empty: new buffer should be empty");
    ensure!(buffer.pop().is_none(), "empty: pop should yield nothing");
    write!(out, "{buffer}")?;
    buffer.destroy();
    Ok(())
}

fn demo_single_slot<W: Write>(out: &mut W) -> Result<()> {
    let mut buffer = RingBuffer::new(1)?;
    buffer.push(100);
    ensure!(buffer.is_full(), "single: one push should fill the buffer");
    write!(out, "{buffer}")?;

    let first = pop_value(&mut buffer)?;
    ensure!(first == 100, "single: expected 100 but got {first}");
    ensure!(buffer.is_empty(), "single: buffer should be empty");

    buffer.push(10);
    write!(out, "{buffer}")?;
    let second = pop_value(&mut buffer)?;
    ensure!(second == 10, "single: expected 10 but got {second}");
    ensure!(buffer.is_empty(), "single: buffer should be empty");
    buffer.destroy();
    Ok(())
}

fn demo_overwrite<W: Write>(out: &mut W) -> Result<()> {
    let mut buffer = RingBuffer::new(5)?;
    for value in [40, 50, 60, 70, 80] {
        buffer.push(value);
    }
    let evicted = buffer.push_evicting(10);
    if let Some(old) = evicted {
        writeln!(out, "Evicted: {old}")?;
    }
    write!(out, "{buffer}")?;

    ensure!(evicted == Some(40), "overwrite: expected 40 to be evicted");
    ensure!(buffer.is_full(), "overwrite: buffer should stay full");
    ensure!(
        contents(&buffer) == [50, 60, 70, 80, 10],
        "overwrite: unexpected contents {:?}",
        contents(&buffer)
    );
    buffer.destroy();
    Ok(())
}
