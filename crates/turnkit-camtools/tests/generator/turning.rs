use super::{assert_continuous, axial_cuts};
use turnkit_camtools::generate_turning_toolpath;
use turnkit_core::{AxisDirection, MachineConfig, OperationConfiguration, OperationType, TPoint};

fn turning_op(outer: f64, inner: f64, stepover: f64) -> OperationConfiguration {
    OperationConfiguration {
        outer_distance: outer,
        inner_distance: inner,
        stepover,
        ..OperationConfiguration::new(OperationType::Turning)
    }
}

#[test]
fn test_pass_count_and_final_radius() {
    let machine = MachineConfig::default();
    let op = turning_op(10.0, 0.0, 3.0);
    let seq = generate_turning_toolpath(&op, &machine);

    // ceil(10 / 3) = 4 passes
    assert_eq!(seq.len(), 1 + 5 * 3 + 5);
    assert_continuous(&seq);

    let radii: Vec<f64> = axial_cuts(&seq, op.feedrate).iter().map(|t| t.start().x).collect();
    assert_eq!(radii, vec![7.0, 4.0, 1.0, 0.0]);
}

#[test]
fn test_cuts_span_start_to_end() {
    let machine = MachineConfig::default();
    let op = OperationConfiguration {
        axial_start_position: 40.0,
        axial_end_position: 5.0,
        axial_end_offset: 0.5,
        ..turning_op(12.0, 8.0, 2.0)
    };
    let seq = generate_turning_toolpath(&op, &machine);
    for cut in axial_cuts(&seq, op.feedrate) {
        assert_eq!(cut.start().z, 40.0);
        assert_eq!(cut.end().z, 5.5);
    }
}

#[test]
fn test_staging_points() {
    let machine = MachineConfig::default();
    let op = turning_op(10.0, 5.0, 5.0);
    let seq = generate_turning_toolpath(&op, &machine);
    let moves = seq.as_slice();

    // Single pass: approach, then feed in, cut, retract, exit.
    assert_eq!(moves.len(), 6);
    assert_eq!(moves[0].start(), TPoint::new(18.0, 10.0));
    assert_eq!(moves[0].end(), TPoint::new(16.0, 10.0));
    assert_eq!(moves[1].end(), TPoint::new(11.0, 10.0));
    assert_eq!(moves[2].end(), TPoint::new(5.0, 10.0));
    assert_eq!(moves[3].end(), TPoint::new(5.0, 0.0));
    assert_eq!(moves[4].end(), TPoint::new(16.0, 0.0));
    assert_eq!(moves[5].end(), TPoint::new(18.0, 0.0));

    assert_eq!(moves[2].feed_rate(), op.feedrate);
    assert_eq!(moves[4].feed_rate(), machine.retract_feed_rate);
    assert_eq!(moves[5].feed_rate(), machine.rapid_feed_rate);
}

#[test]
fn test_negative_x_flips_increment() {
    let positive = MachineConfig::default();
    let negative = MachineConfig {
        x_axis_direction: AxisDirection::Negative,
        ..MachineConfig::default()
    };
    let op = OperationConfiguration {
        outer_distance: -10.0,
        inner_distance: 0.0,
        feed_distance: -1.0,
        retract_distance: -5.0,
        clearance_distance: -2.0,
        stepover: 3.0,
        ..OperationConfiguration::new(OperationType::Turning)
    };
    let seq = generate_turning_toolpath(&op, &negative);
    let radii: Vec<f64> = axial_cuts(&seq, op.feedrate).iter().map(|t| t.start().x).collect();
    assert_eq!(radii, vec![-7.0, -4.0, -1.0, 0.0]);

    let mirrored = generate_turning_toolpath(&turning_op(10.0, 0.0, 3.0), &positive);
    assert_eq!(seq.len(), mirrored.len());
}

#[test]
fn test_outer_equals_inner() {
    let machine = MachineConfig::default();
    let seq = generate_turning_toolpath(&turning_op(6.0, 6.0, 2.0), &machine);
    assert_eq!(seq.len(), 6);
    assert_eq!(axial_cuts(&seq, 100.0).len(), 1);
}
