//! Shared application service layer for the flooding calculator.
//!
//! Loads and validates scenario files, evaluates their columns serially or
//! across a rayon pool, and renders the outcomes as text or JSON. The CLI is
//! a thin shell over this crate.

pub mod error;
pub mod report;
pub mod run_service;
pub mod scenario_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use report::{ReportFormat, ReportOptions, render, render_json, render_text};
pub use run_service::{
    RunMode, ScenarioFailure, ScenarioOutcome, ensure_all_succeeded, evaluate_all,
    evaluate_all_parallel, evaluate_scenario, run_file,
};
pub use scenario_service::{
    ScenarioSummary, build_spec, get_scenario, list_scenarios, load_scenarios, save_scenarios,
    validate_scenarios,
};
