//! Projection engine producing the full calculator report

mod engine;
mod result;

pub use engine::{ProjectionEngine, ProjectionConfig};
pub use result::{
    EquityRow, Insights, PaymentBreakdown, PaymentComparisonRow, ProjectionResult, YearsMonths,
};
