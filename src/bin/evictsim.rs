//! evictsim CLI - runs an eviction policy over a page trace and renders each
//! step, or drops into an interactive menu mirroring the classic classroom
//! program.
//!
//! All rendering, pacing (`--delay-ms`), and user interaction live here; the
//! library core stays deterministic and time-free.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;

use evictsim::common::config::{DEFAULT_CAPACITY, REFERENCE_TRACE};
use evictsim::{Driver, EngineKind, Outcome, PageId, RunReport};

#[derive(Debug, Parser)]
#[command(name = "evictsim", about = "Simulate FIFO/LRU/LFU page replacement")]
struct Args {
    /// Eviction policy to run (FIFO, LRU, or LFU). Omit for interactive mode.
    #[arg(short, long)]
    policy: Option<String>,

    /// Number of cache slots.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Comma-separated page trace; defaults to the bundled reference trace.
    #[arg(long, value_delimiter = ',')]
    pages: Option<Vec<u32>>,

    /// Milliseconds to pause between rendered steps.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

fn main() {
    let args = Args::parse();

    let pages: Vec<PageId> = args
        .pages
        .clone()
        .unwrap_or_else(|| REFERENCE_TRACE.to_vec())
        .into_iter()
        .map(PageId::new)
        .collect();

    let result = match &args.policy {
        Some(name) => name
            .parse::<EngineKind>()
            .and_then(|kind| run_policy(kind, args.capacity, &pages, args.delay_ms)),
        None => interactive_loop(&args, &pages),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Menu loop: read a policy name, replay the trace under it, repeat.
fn interactive_loop(args: &Args, pages: &[PageId]) -> evictsim::Result<()> {
    loop {
        print!("Enter a policy to simulate (FIFO, LRU, LFU) or 0 to exit: ");
        if io::stdout().flush().is_err() {
            return Ok(());
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return Ok(());
        }
        let input = input.trim();

        match input {
            "" => continue,
            "0" | "quit" | "exit" => return Ok(()),
            _ => match input.parse::<EngineKind>() {
                Ok(kind) => run_policy(kind, args.capacity, pages, args.delay_ms)?,
                // Bad selections never touch engine state; just re-prompt.
                Err(e) => println!("{e}"),
            },
        }
    }
}

/// Run one full simulation, rendering every step and the run summary.
fn run_policy(
    kind: EngineKind,
    capacity: usize,
    pages: &[PageId],
    delay_ms: u64,
) -> evictsim::Result<()> {
    println!("{kind} Page Replacement Simulation:");
    println!(
        "Pages to be requested: [{}]",
        pages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let driver: Driver<PageId> = Driver::new(kind, capacity)?;
    let report = driver.run(pages, |_, _, outcome| {
        render_step(outcome);
        if delay_ms > 0 {
            thread::sleep(Duration::from_millis(delay_ms));
        }
    });

    render_summary(&report);
    Ok(())
}

fn render_step(outcome: &Outcome<PageId>) {
    let marker = if outcome.hit { "hit  " } else { "fault" };
    match &outcome.evicted {
        Some(victim) => println!(
            "{marker}  Cache state: {} (evicted {victim})",
            render_snapshot(&outcome.snapshot)
        ),
        None => println!("{marker}  Cache state: {}", render_snapshot(&outcome.snapshot)),
    }
}

fn render_summary(report: &RunReport<PageId>) {
    println!("Total page faults: {}", report.stats.faults);
    println!("Total page hits: {}", report.stats.hits);

    if let Some(frequencies) = &report.frequencies {
        // Stable order for display: follow the final snapshot slots.
        let listed = report
            .final_snapshot
            .iter()
            .flatten()
            .filter_map(|page| frequencies.get(page).map(|count| format!("{page}: {count}")))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Page frequencies: {{{listed}}}");
    }
    println!();
}

/// Format a snapshot like `[8, 2, 6, -, -]`, `-` marking empty slots.
fn render_snapshot(snapshot: &[Option<PageId>]) -> String {
    let slots = snapshot
        .iter()
        .map(|slot| slot.map_or_else(|| "-".to_string(), |page| page.to_string()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{slots}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_snapshot_marks_empty_slots() {
        let snapshot = vec![Some(PageId::new(8)), None, Some(PageId::new(2))];
        assert_eq!(render_snapshot(&snapshot), "[8, -, 2]");
    }

    #[test]
    fn test_render_snapshot_empty_cache() {
        let snapshot: Vec<Option<PageId>> = vec![None, None];
        assert_eq!(render_snapshot(&snapshot), "[-, -]");
    }
}
