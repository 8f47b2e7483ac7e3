//! Load batches of calculator inputs from CSV
//!
//! Expected header:
//! `Name,PurchasePrice,PropertyType,Appreciation,DownPaymentPct,FirstMortgageRate,SbaRate,FirstMortgageTerm,MonthlyRent,RentIncrease,OccupancyYears,TaxBracket`

use csv::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::data::{CalculatorInputs, MortgageTerm, PropertyType};
use crate::error::Result;

/// Calculator inputs tagged with a scenario name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedInputs {
    pub name: String,
    pub inputs: CalculatorInputs,
}

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "PurchasePrice")]
    purchase_price: f64,
    #[serde(rename = "PropertyType")]
    property_type: String,
    #[serde(rename = "Appreciation")]
    appreciation: f64,
    #[serde(rename = "DownPaymentPct")]
    down_payment_pct: f64,
    #[serde(rename = "FirstMortgageRate")]
    first_mortgage_rate: f64,
    #[serde(rename = "SbaRate")]
    sba_rate: f64,
    #[serde(rename = "FirstMortgageTerm")]
    first_mortgage_term: u32,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: f64,
    #[serde(rename = "RentIncrease")]
    rent_increase: f64,
    #[serde(rename = "OccupancyYears")]
    occupancy_years: u32,
    #[serde(rename = "TaxBracket")]
    tax_bracket: f64,
}

impl CsvRow {
    fn into_named(self) -> Result<NamedInputs> {
        let property_type: PropertyType = self.property_type.parse()?;
        let first_mortgage_term = MortgageTerm::try_from(self.first_mortgage_term)?;

        Ok(NamedInputs {
            name: self.name,
            inputs: CalculatorInputs {
                purchase_price: self.purchase_price,
                property_type,
                appreciation_rate_pct: self.appreciation,
                down_payment_pct: self.down_payment_pct,
                first_mortgage_rate_pct: self.first_mortgage_rate,
                sba_rate_pct: self.sba_rate,
                first_mortgage_term,
                monthly_rent: self.monthly_rent,
                annual_rent_increase_pct: self.rent_increase,
                occupancy_years: self.occupancy_years,
                tax_bracket_pct: self.tax_bracket,
            },
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedInputs>> {
    let reader = Reader::from_path(path.as_ref())?;
    let scenarios = read_rows(reader)?;
    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.as_ref().display());
    Ok(scenarios)
}

/// Load scenarios from any reader (string buffer, stdin, ...)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedInputs>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<NamedInputs>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_named()?);
    }

    Ok(scenarios)
}
