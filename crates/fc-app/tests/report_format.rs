use fc_app::{
    ReportFormat, ReportOptions, RunMode, ScenarioFailure, ScenarioOutcome, render, render_text,
    run_file,
};
use fc_column::ColumnError;
use fc_project::reference_scenarios;

fn reference_outcomes() -> Vec<ScenarioOutcome> {
    run_file(&reference_scenarios(), None, RunMode::Serial).unwrap()
}

#[test]
fn text_report_for_reference_set() {
    let text = render_text(&reference_outcomes(), false);
    let expected = "\
Base Column Simulation Results:
Flooding Velocity (ft/s): 4.56
Operating Velocity (ft/s): 2.69
Flooding Percentage: 58.99%

Scaled Column Simulation Results:
Flooding Velocity (ft/s): 4.56
Operating Velocity (ft/s): 3.58
Flooding Percentage: 78.48%

Optimal Scheme Simulation Results:
Flooding Velocity (ft/s): 5.65
Operating Velocity (ft/s): 3.13
Flooding Percentage: 55.44%
";
    assert_eq!(text, expected);
}

#[test]
fn detailed_text_includes_intermediates() {
    let outcomes = reference_outcomes();
    let text = render_text(&outcomes[..1], true);
    assert!(text.contains("Cross-Sectional Area (m^2): 2.1630"), "{text}");
    assert!(text.contains("Flow Parameter Flv: 0.0701"), "{text}");
    assert!(text.contains("Capacity Factor Csbf (ft/s): 0.2749"), "{text}");
    assert!(!text.contains("Warning"));
}

#[test]
fn failed_scenario_renders_error() {
    let outcome = ScenarioOutcome {
        id: "bad".to_string(),
        name: "Bad Column".to_string(),
        outcome: Err(ScenarioFailure::Column(ColumnError::DivisionByZero {
            what: "vapor mass flow",
        })),
    };
    let text = render_text(&[outcome], false);
    assert!(text.starts_with("Bad Column Simulation Failed:\n"));
    assert!(text.contains("vapor mass flow"));
}

#[test]
fn json_report_lists_every_scenario() {
    let options = ReportOptions {
        format: ReportFormat::Json,
        details: false,
    };
    let json = render(&reference_outcomes(), options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let entries = value.as_array().unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["base", "scaled", "optimal"]);

    let base = &entries[0]["result"];
    let pct = base["flooding_percentage"].as_f64().unwrap();
    assert!((pct - 58.989_972_109).abs() < 1e-6);
    assert!(entries[0].get("details").is_none());
    assert!(entries[0].get("error").is_none());
}

#[test]
fn json_details_carry_flow_rates() {
    let options = ReportOptions {
        format: ReportFormat::Json,
        details: true,
    };
    let json = render(&reference_outcomes(), options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let details = &value[0]["details"];
    assert!(details["flow_rates"]["vapor_mole_flow"].as_f64().unwrap() > 0.0);
    assert!(details["flv"].as_f64().is_some());
}
