//! Demo entry point: selects over a JSON task file or the built-in sample
//! set and prints the report.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use interval_select::models::{sample_tasks, Task};
use interval_select::report::SelectionReport;
use interval_select::selector::{GreedySelector, SelectionMetrics};

#[derive(Parser)]
#[command(name = "interval-select")]
#[command(about = "Select a maximum set of non-overlapping tasks", long_about = None)]
struct Cli {
    /// JSON file with an array of tasks; omit to run the built-in sample.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Append selection metrics to the report.
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tasks: Vec<Task> = match &cli.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => sample_tasks(),
    };

    println!("=== Smart Task Scheduler - Activity Selection ===");
    println!("Total Tasks: {}", tasks.len());

    let selection = match GreedySelector::new().select(&tasks) {
        Ok(selection) => selection,
        Err(errors) => {
            let lines: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            bail!("invalid task set:\n  {}", lines.join("\n  "));
        }
    };

    println!("{}", SelectionReport::new(&tasks, &selection));

    if cli.metrics {
        let m = SelectionMetrics::calculate(&selection, &tasks);
        println!();
        println!("=== Selection Metrics ===");
        println!(
            "Selected: {}/{} ({:.0}%)",
            m.selected_count,
            m.candidate_count,
            m.selection_rate * 100.0
        );
        println!(
            "Busy time: {:.2} over span {:.2} (utilization {:.2})",
            m.busy_time, m.span, m.utilization
        );
        println!(
            "Average profit: {:.2}   Average duration: {:.2}",
            m.avg_profit, m.avg_duration
        );
        println!("High-priority tasks selected: {}", m.high_priority_count);
    }

    Ok(())
}
