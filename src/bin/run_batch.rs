//! Run projections for a batch of scenarios from CSV
//!
//! Usage: run_batch [scenarios.csv] [output.csv]
//!
//! Writes one summary row per scenario. Crossover and equity doubling months
//! are written as -1 when they do not occur within 30 years.

use anyhow::{Context, Result};
use clap::Parser;
use sba504_calculator::{inputs::load_scenarios, scenario::NamedResult, ScenarioRunner};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Project every scenario in a CSV file and write a summary CSV
#[derive(Parser, Debug)]
#[command(name = "run_batch", version, about)]
struct Args {
    /// Scenario CSV to read
    #[arg(default_value = "scenarios.csv")]
    input: PathBuf,

    /// Summary CSV to write
    #[arg(default_value = "batch_output.csv")]
    output: PathBuf,
}

fn month_or_sentinel(month: Option<u32>) -> i64 {
    month.map(i64::from).unwrap_or(-1)
}

fn write_summary<W: Write>(out: &mut W, results: &[NamedResult]) -> Result<()> {
    writeln!(out, "Name,TotalPayment,AvgTaxBenefit,EffectivePayment,InitialRent,CrossoverMonth,EquityAtMilestone,EquityDoublingMonth")?;

    for named in results {
        let r = &named.result;
        writeln!(
            out,
            "{},{:.2},{:.2},{:.2},{:.2},{},{:.2},{}",
            named.name,
            r.payments.total_payment,
            r.payments.average_tax_benefit,
            r.payments.effective_payment,
            r.scenario.rent.initial_monthly_rent,
            month_or_sentinel(r.crossover_month),
            r.equity_at_milestone,
            month_or_sentinel(r.equity_doubling_month),
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input.display());
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("failed to load scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    for named in &scenarios {
        if let Err(e) = named.inputs.validate() {
            log::warn!("Scenario '{}' is outside calculator ranges: {}", named.name, e);
        }
    }

    let runner = ScenarioRunner::new();
    let proj_start = Instant::now();
    let results = runner.run_named(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    write_summary(&mut file, &results)?;
    println!("Output written to {}", args.output.display());

    let crossed = results.iter().filter(|n| n.result.crossover_month.is_some()).count();
    println!("\nBatch Summary:");
    println!("  Scenarios: {}", results.len());
    println!("  With crossover within 30 years: {}", crossed);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
