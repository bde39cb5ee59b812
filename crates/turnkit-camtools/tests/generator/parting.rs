use super::{assert_continuous, radial_cuts};
use turnkit_camtools::{generate_parting_toolpath, generate_toolpath};
use turnkit_core::{AxisDirection, MachineConfig, OperationConfiguration, OperationType, TPoint};

fn parting_scenario() -> OperationConfiguration {
    OperationConfiguration {
        outer_distance: 10.0,
        inner_distance: 0.0,
        cut_depth_per_pass: 4.0,
        axial_start_position: 5.0,
        feed_distance: 1.0,
        retract_distance: 2.0,
        clearance_distance: 1.0,
        ..OperationConfiguration::new(OperationType::Parting)
    }
}

#[test]
fn test_parting_plunge_depths() {
    let machine = MachineConfig::default();
    let op = parting_scenario();
    let seq = generate_parting_toolpath(&op, &machine);

    // ceil(10 / 4) = 3 passes
    assert_eq!(seq.len(), 1 + 3 * 2 + 4);
    assert_continuous(&seq);

    let depths: Vec<f64> = radial_cuts(&seq, op.feedrate).iter().map(|t| t.end().x).collect();
    assert_eq!(depths, vec![6.0, 2.0, 0.0]);
    assert!(seq.iter().all(|t| t.start().z == 5.0 && t.end().z == 5.0));
}

#[test]
fn test_parting_staging_radii() {
    let machine = MachineConfig::default();
    let seq = generate_parting_toolpath(&parting_scenario(), &machine);
    assert_eq!(seq.first_point(), Some(TPoint::new(14.0, 5.0)));
    assert_eq!(seq.as_slice()[0].end(), TPoint::new(13.0, 5.0));
    assert_eq!(seq.as_slice()[1].end(), TPoint::new(11.0, 5.0));
    assert_eq!(seq.last_point(), Some(TPoint::new(14.0, 5.0)));
}

#[test]
fn test_final_retreat_uses_retract_rate() {
    let machine = MachineConfig {
        retract_feed_rate: 650.0,
        ..MachineConfig::default()
    };
    let op = parting_scenario();
    let seq = generate_parting_toolpath(&op, &machine);
    let moves = seq.as_slice();
    let retreat = &moves[moves.len() - 2];
    assert_eq!(retreat.start(), TPoint::new(0.0, 5.0));
    assert_eq!(retreat.end(), TPoint::new(13.0, 5.0));
    assert_eq!(retreat.feed_rate(), 650.0);
}

#[test]
fn test_parting_start_offset() {
    let machine = MachineConfig::default();
    let op = OperationConfiguration {
        axial_start_offset: -2.0,
        ..parting_scenario()
    };
    let seq = generate_toolpath(&op, &machine);
    assert!(seq.iter().all(|t| t.end().z == 3.0));
}

#[test]
fn test_parting_negative_x() {
    let machine = MachineConfig {
        x_axis_direction: AxisDirection::Negative,
        ..MachineConfig::default()
    };
    let op = OperationConfiguration {
        outer_distance: -10.0,
        feed_distance: -1.0,
        retract_distance: -2.0,
        clearance_distance: -1.0,
        ..parting_scenario()
    };
    let seq = generate_parting_toolpath(&op, &machine);
    let depths: Vec<f64> = radial_cuts(&seq, op.feedrate).iter().map(|t| t.end().x).collect();
    assert_eq!(depths, vec![-6.0, -2.0, 0.0]);
}

#[test]
fn test_zero_cut_depth_single_plunge() {
    let machine = MachineConfig::default();
    let op = OperationConfiguration {
        cut_depth_per_pass: 0.0,
        ..parting_scenario()
    };
    let seq = generate_parting_toolpath(&op, &machine);
    assert_eq!(seq.len(), 5);
    assert_eq!(seq.as_slice()[2].end(), TPoint::new(0.0, 5.0));
}
