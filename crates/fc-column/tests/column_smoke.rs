//! Integration tests for fc-column on the reference column set.

use fc_column::{ColumnError, ColumnParams, ColumnSpec, simulate, simulate_detailed};

fn base() -> ColumnParams {
    ColumnParams {
        diameter: 1.8,
        distillate_mole_flow: 103.75,
        bottoms_mole_flow: 86.087,
        distillate_mass_flow: 5700.0,
        bottoms_mass_flow: 4300.0,
        reflux_ratio: 2.25,
        boilup_ratio: 3.77,
        liquid_density: 723.15,
        vapor_density: 2.9,
        molecular_weight: 54.93,
        surface_tension: 25.9,
    }
}

fn optimal() -> ColumnParams {
    ColumnParams {
        distillate_mole_flow: 103.75 * 1.33,
        bottoms_mole_flow: 86.087 * 1.33,
        distillate_mass_flow: 5700.0 * 1.33,
        bottoms_mass_flow: 4300.0 * 1.33,
        reflux_ratio: 1.05,
        boilup_ratio: 2.378,
        liquid_density: 742.0,
        vapor_density: 2.09,
        surface_tension: 29.6,
        ..base()
    }
}

fn two_decimals(v: f64) -> String {
    format!("{v:.2}")
}

#[test]
fn base_column() {
    let r = simulate(&ColumnSpec::new(base()).unwrap()).unwrap();
    assert_eq!(two_decimals(r.flooding_velocity), "4.56");
    assert_eq!(two_decimals(r.operating_velocity), "2.69");
    assert_eq!(two_decimals(r.flooding_percentage), "58.99");
}

#[test]
fn scaled_column_with_higher_boilup() {
    let spec = ColumnSpec::new(ColumnParams {
        boilup_ratio: 3.78,
        ..base()
    })
    .unwrap()
    .scale_flows(1.33)
    .unwrap();
    let r = simulate(&spec).unwrap();
    assert_eq!(two_decimals(r.flooding_velocity), "4.56");
    assert_eq!(two_decimals(r.operating_velocity), "3.58");
    assert_eq!(two_decimals(r.flooding_percentage), "78.48");
}

#[test]
fn optimal_scheme() {
    let r = simulate(&ColumnSpec::new(optimal()).unwrap()).unwrap();
    assert_eq!(two_decimals(r.flooding_velocity), "5.65");
    assert_eq!(two_decimals(r.operating_velocity), "3.13");
    assert_eq!(two_decimals(r.flooding_percentage), "55.44");
}

#[test]
fn uniform_flow_scaling_moves_only_operating_side() {
    let base_spec = ColumnSpec::new(base()).unwrap();
    let k = 1.33;
    let before = simulate(&base_spec).unwrap();
    let after = simulate(&base_spec.scale_flows(k).unwrap()).unwrap();

    // Flv depends on the bottoms/vapor ratio only
    assert!((after.flooding_velocity - before.flooding_velocity).abs() < 1e-9);
    // Vapor velocity through a fixed area grows with the traffic
    assert!((after.operating_velocity / before.operating_velocity - k).abs() < 1e-9);
    assert!((after.flooding_percentage / before.flooding_percentage - k).abs() < 1e-9);
}

#[test]
fn invalid_construction() {
    let zero_diameter = ColumnSpec::new(ColumnParams {
        diameter: 0.0,
        ..base()
    });
    assert!(matches!(
        zero_diameter,
        Err(ColumnError::InvalidParameter { .. })
    ));

    let inverted = ColumnSpec::new(ColumnParams {
        liquid_density: 2.0,
        vapor_density: 2.9,
        ..base()
    });
    assert!(matches!(inverted, Err(ColumnError::InvalidParameter { .. })));
}

#[test]
fn no_vapor_mass_traffic() {
    let spec = ColumnSpec::new(ColumnParams {
        distillate_mass_flow: 0.0,
        ..base()
    })
    .unwrap();
    assert!(matches!(
        simulate(&spec),
        Err(ColumnError::DivisionByZero { .. })
    ));
}

#[test]
fn concurrent_evaluations_match_serial() {
    let specs: Vec<ColumnSpec> = (0..16)
        .map(|i| {
            ColumnSpec::new(ColumnParams {
                reflux_ratio: 0.5 + 0.25 * i as f64,
                ..base()
            })
            .unwrap()
        })
        .collect();

    let serial: Vec<_> = specs.iter().map(|s| simulate(s).unwrap()).collect();

    let threaded: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = specs
            .iter()
            .map(|s| scope.spawn(move || simulate(s).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial, threaded);
}

#[test]
fn detailed_output_reports_flow_parameter() {
    let d = simulate_detailed(&ColumnSpec::new(optimal()).unwrap()).unwrap();
    assert!((d.flv - 0.065_973_659).abs() < 1e-8, "flv = {}", d.flv);
    assert!(!d.flv_outside_correlation_range);
}
