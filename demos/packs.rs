//! Packs Example
//!
//! Prints the optimal packing for an order next to the incorrect candidates.
//!
//! Use `-x` to specify the number of items ordered
//! Use `-s` to specify comma separated pack sizes, e.g. `-s 23,31,53`

use std::{io, io::Write, time::Instant};

use anyhow::Result;
use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};

use packing::{prelude::*, utils::ExamplePackArgs};

/// Packs Example
pub fn main() -> Result<()> {
    let args = ExamplePackArgs::parse();

    let packer = Packer::with_sizes(args.sizes.unwrap_or_default());

    let start = Instant::now();

    let plan = packer.plan(args.quantity);

    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    plan.write_to(&mut handle)?;

    writeln!(
        handle,
        "\nSolution: {} ({}s)",
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )?;

    Ok(())
}
