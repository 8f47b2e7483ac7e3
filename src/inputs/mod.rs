//! Calculator inputs, scenario model, and CSV scenario loading

mod data;
mod model;
pub mod loader;

pub use data::{CalculatorInputs, MortgageTerm, PropertyType};
pub use model::{PropertyScenario, RentScenario, Scenario, TaxProfile};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedInputs};
