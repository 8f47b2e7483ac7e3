//! SBA 504 Calculator CLI
//!
//! Command-line interface for a single buy-vs-rent projection

use anyhow::{Context, Result};
use clap::Parser;
use sba504_calculator::{
    projection::{ProjectionConfig, ProjectionResult},
    Assumptions, CalculatorInputs, MortgageTerm, PropertyType, ScenarioRunner,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Compare buying commercial real estate with an SBA 504 loan against renting
#[derive(Parser, Debug)]
#[command(name = "sba504_calculator", version, about)]
struct Cli {
    /// Purchase price of the property
    #[arg(long, default_value_t = 1_000_000.0)]
    purchase_price: f64,

    /// Property type (office, retail, industrial, mixed-use)
    #[arg(long, default_value = "office")]
    property_type: PropertyType,

    /// Estimated annual appreciation (%)
    #[arg(long, default_value_t = 2.0)]
    appreciation: f64,

    /// Down payment (% of purchase price)
    #[arg(long, default_value_t = 10.0)]
    down_payment: f64,

    /// First mortgage interest rate (%)
    #[arg(long, default_value_t = 6.0)]
    first_mortgage_rate: f64,

    /// SBA/CDC loan interest rate (%)
    #[arg(long, default_value_t = 5.0)]
    sba_rate: f64,

    /// First mortgage term in years (7, 10 or 25)
    #[arg(long, default_value_t = 10)]
    first_mortgage_term: u32,

    /// Current monthly rent
    #[arg(long, default_value_t = 5_000.0)]
    rent: f64,

    /// Expected annual rent increase (%)
    #[arg(long, default_value_t = 3.0)]
    rent_increase: f64,

    /// Expected occupancy period in years
    #[arg(long, default_value_t = 10)]
    occupancy: u32,

    /// Income tax bracket (%)
    #[arg(long, default_value_t = 25.0)]
    tax_bracket: f64,

    /// JSON file overriding the fixed SBA 504 assumptions
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Print the full projection as JSON
    #[arg(long)]
    json: bool,

    /// Write the payment comparison series to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the amortization schedules of both loans to this CSV file
    #[arg(long)]
    schedule: Option<PathBuf>,
}

impl Cli {
    fn inputs(&self) -> Result<CalculatorInputs> {
        Ok(CalculatorInputs {
            purchase_price: self.purchase_price,
            property_type: self.property_type,
            appreciation_rate_pct: self.appreciation,
            down_payment_pct: self.down_payment,
            first_mortgage_rate_pct: self.first_mortgage_rate,
            sba_rate_pct: self.sba_rate,
            first_mortgage_term: MortgageTerm::try_from(self.first_mortgage_term)?,
            monthly_rent: self.rent,
            annual_rent_increase_pct: self.rent_increase,
            occupancy_years: self.occupancy,
            tax_bracket_pct: self.tax_bracket,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let inputs = cli.inputs()?;
    inputs.validate().context("invalid calculator inputs")?;

    let assumptions = match &cli.assumptions {
        Some(path) => Assumptions::from_json_path(path)
            .with_context(|| format!("failed to load assumptions from {}", path.display()))?,
        None => Assumptions::default_sba504(),
    };

    let runner = ScenarioRunner::with_config(assumptions, ProjectionConfig::default());
    let result = runner.run(&inputs);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&inputs, &result);
    }

    if let Some(path) = &cli.output {
        write_payment_csv(path, &result)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nPayment comparison written to: {}", path.display());
    }

    if let Some(path) = &cli.schedule {
        write_schedule_csv(path, &result)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Amortization schedules written to: {}", path.display());
    }

    Ok(())
}

fn format_duration(months: u32) -> String {
    let years = months / 12;
    let rem = months % 12;
    let plural = |n: u32, unit: &str| format!("{} {}{}", n, unit, if n == 1 { "" } else { "s" });
    if years == 0 {
        plural(rem, "month")
    } else if rem == 0 {
        plural(years, "year")
    } else {
        format!("{} and {}", plural(years, "year"), plural(rem, "month"))
    }
}

fn print_report(inputs: &CalculatorInputs, result: &ProjectionResult) {
    let payments = &result.payments;
    let scenario = &result.scenario;
    let insights = result.summary();

    println!("SBA 504 Real Estate Loan Calculator");
    println!("===================================\n");

    println!("Property: {} at ${:.0}", inputs.property_type, inputs.purchase_price);
    println!("  Down Payment:   ${:>12.0} ({:.1}%)", scenario.property.down_payment, inputs.down_payment_pct);
    println!("  First Mortgage: ${:>12.0} at {:.3}% over {} years",
        scenario.first_mortgage.principal,
        scenario.first_mortgage.annual_rate_pct,
        scenario.first_mortgage.term_years);
    println!("  SBA/CDC Loan:   ${:>12.0} at {:.3}% over {} years",
        scenario.sba_loan.principal,
        scenario.sba_loan.annual_rate_pct,
        scenario.sba_loan.term_years);
    println!();

    println!("Payment Breakdown:");
    println!("  {:<28} ${:>10.2}", "First Mortgage Payment", payments.first_mortgage_payment);
    println!("  {:<28} ${:>10.2}", "SBA/CDC Payment", payments.sba_payment);
    println!("  {:<28} ${:>10.2}", "Property Tax", payments.property_tax);
    println!("  {:<28} ${:>10.2}", "Insurance", payments.insurance);
    println!("  {}", "-".repeat(40));
    println!("  {:<28} ${:>10.2}", "Total Monthly Payment", payments.total_payment);
    println!("  {:<28} -${:>9.2}", "Tax Benefits (year 1 avg)", payments.average_tax_benefit);
    println!("  {:<28} ${:>10.2}", "Effective Monthly Payment", payments.effective_payment);
    println!();

    println!("Key Insights:");
    if insights.monthly_difference >= 0.0 {
        println!("  Buying initially costs ${:.0} more per month than renting", insights.monthly_difference);
    } else {
        println!("  Buying initially costs ${:.0} less per month than renting", -insights.monthly_difference);
    }
    match result.crossover_month {
        Some(month) => println!("  Buying becomes cheaper than renting after {}", format_duration(month)),
        None => println!("  Buying does not become cheaper than renting within 30 years"),
    }
    println!("  Equity after {} months: ${:.0} (${:.0} above the down payment)",
        result.equity_milestone_month, result.equity_at_milestone, insights.equity_gain_at_milestone);
    match result.equity_doubling_month {
        Some(month) => println!("  Equity reaches twice the down payment in month {}", month),
        None => println!("  Equity does not reach twice the down payment within 30 years"),
    }
    println!("  Tax benefits reduce the monthly payment by about {:.2}%", insights.tax_benefit_share_pct);
    println!();

    println!("Equity Building:");
    println!("{:>5} {:>14} {:>14} {:>14} {:>14}", "Year", "Down Payment", "Principal", "Appreciation", "Total");
    println!("{}", "-".repeat(65));
    for row in &result.equity_building {
        println!("{:>5} {:>14.0} {:>14.0} {:>14.0} {:>14.0}",
            row.year, row.down_payment, row.principal_paid, row.appreciation, row.total());
    }
}

fn write_payment_csv(path: &Path, result: &ProjectionResult) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Month,BuyPayment,RentPayment")?;
    for row in &result.payment_comparison {
        writeln!(file, "{},{:.2},{:.2}", row.month, row.buy_payment, row.rent_payment)?;
    }
    Ok(())
}

fn write_schedule_csv(path: &Path, result: &ProjectionResult) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Loan,Month,Payment,Interest,Principal,Balance")?;

    let loans = [
        ("FirstMortgage", &result.scenario.first_mortgage),
        ("SBA", &result.scenario.sba_loan),
    ];
    for (name, loan) in loans {
        for row in loan.schedule() {
            writeln!(file, "{},{},{:.2},{:.2},{:.2},{:.2}",
                name, row.month, row.payment, row.interest, row.principal, row.remaining_balance)?;
        }
    }
    Ok(())
}
