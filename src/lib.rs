//! SBA 504 Calculator - buy-vs-rent estimator for owner-occupied commercial real estate
//!
//! This library provides:
//! - Loan math for the first mortgage and SBA/CDC portions (payment, amortization, principal paid)
//! - Rent projection, tax benefit, and equity estimates
//! - The crossover search for when owning becomes cheaper than renting
//! - A projection engine and batch runner producing the full calculator report

pub mod error;
pub mod loan;
pub mod inputs;
pub mod assumptions;
pub mod analysis;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use loan::LoanTerms;
pub use inputs::{CalculatorInputs, MortgageTerm, PropertyType, Scenario};
pub use assumptions::Assumptions;
pub use analysis::crossover_month;
pub use projection::{ProjectionEngine, ProjectionConfig, ProjectionResult};
pub use scenario::ScenarioRunner;
