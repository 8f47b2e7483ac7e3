//! AWS Lambda handler for single buy-vs-rent projections
//!
//! Accepts calculator inputs (and optional assumption overrides) as JSON and
//! returns the full projection plus headline insights. Missing input fields
//! take the calculator defaults.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use sba504_calculator::{
    projection::{Insights, ProjectionResult},
    Assumptions, CalculatorInputs, ScenarioRunner,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Input for one projection
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectionRequest {
    pub inputs: CalculatorInputs,

    /// Overrides for the fixed SBA 504 assumptions
    pub assumptions: Option<Assumptions>,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ProjectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn project(request: ProjectionRequest) -> ProjectionResponse {
    let start = Instant::now();

    if let Err(e) = request.inputs.validate() {
        log::warn!("Rejected request: {}", e);
        return ProjectionResponse {
            result: None,
            insights: None,
            execution_time_ms: start.elapsed().as_millis() as u64,
            error: Some(e.to_string()),
        };
    }

    let runner = ScenarioRunner::with_assumptions(request.assumptions.unwrap_or_default());
    let result = runner.run(&request.inputs);
    let insights = result.summary();

    ProjectionResponse {
        result: Some(result),
        insights: Some(insights),
        execution_time_ms: start.elapsed().as_millis() as u64,
        error: None,
    }
}

async fn handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    log::info!("Handling request {}", event.context.request_id);
    Ok(project(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
