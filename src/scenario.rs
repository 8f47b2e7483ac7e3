//! Scenario runner for batch projections
//!
//! Holds assumptions and projection config once, then evaluates any number of
//! independent input sets. Batches run in parallel; every projection is pure.

use rayon::prelude::*;

use crate::assumptions::Assumptions;
use crate::inputs::{CalculatorInputs, NamedInputs};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Projection result tagged with the scenario name it came from
#[derive(Debug, Clone)]
pub struct NamedResult {
    pub name: String,
    pub result: ProjectionResult,
}

/// Pre-configured runner for single and batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.run_batch(&[CalculatorInputs::default(), cheaper_rent]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Runner with default SBA 504 assumptions and report shape
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::default(),
        }
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self::with_config(assumptions, ProjectionConfig::default())
    }

    pub fn with_config(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions, config),
        }
    }

    /// Run a single projection
    pub fn run(&self, inputs: &CalculatorInputs) -> ProjectionResult {
        self.engine.project(inputs)
    }

    /// Run many input sets in parallel, preserving input order
    pub fn run_batch(&self, inputs: &[CalculatorInputs]) -> Vec<ProjectionResult> {
        log::info!("Running {} projections", inputs.len());
        inputs.par_iter().map(|i| self.engine.project(i)).collect()
    }

    /// Run named scenarios in parallel, preserving input order
    pub fn run_named(&self, scenarios: &[NamedInputs]) -> Vec<NamedResult> {
        log::info!("Running {} named scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|s| NamedResult {
                name: s.name.clone(),
                result: self.engine.project(&s.inputs),
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
