use super::{assert_continuous, radial_cuts};
use turnkit_camtools::{generate_facing_toolpath, generate_toolpath};
use turnkit_core::{AxisDirection, MachineConfig, OperationConfiguration, OperationType, TPoint};

fn facing_op() -> OperationConfiguration {
    OperationConfiguration::new(OperationType::Facing)
}

#[test]
fn test_default_facing_sequence() {
    let machine = MachineConfig::default();
    let op = facing_op();
    let seq = generate_facing_toolpath(&op, &machine);

    // Two passes: 1 approach + 5 per intermediate pass + 5 final + 1 exit.
    assert_eq!(seq.len(), 12);
    assert_continuous(&seq);

    let moves = seq.as_slice();
    // Backoff Z sits one unit behind the start face.
    assert_eq!(moves[0].start(), TPoint::new(18.0, 11.0));
    assert_eq!(moves[0].end(), TPoint::new(16.0, 11.0));
    assert_eq!(moves[1].end(), TPoint::new(16.0, 5.0));
    assert_eq!(moves[2].end(), TPoint::new(11.0, 5.0));
    assert_eq!(moves[3].end(), TPoint::new(5.0, 5.0));
    assert_eq!(moves[4].end(), TPoint::new(5.0, 11.0));
    assert_eq!(moves[5].end(), TPoint::new(16.0, 11.0));
    assert_eq!(seq.last_point(), Some(TPoint::new(18.0, 11.0)));
}

#[test]
fn test_facing_feed_rates() {
    let machine = MachineConfig::default();
    let op = OperationConfiguration {
        feedrate: 80.0,
        ..facing_op()
    };
    let seq = generate_facing_toolpath(&op, &machine);
    let rates: Vec<f64> = seq.iter().take(6).map(|t| t.feed_rate()).collect();
    assert_eq!(rates, vec![2000.0, 2000.0, 2000.0, 80.0, 500.0, 500.0]);
}

#[test]
fn test_facing_final_pass_lands_on_end() {
    let machine = MachineConfig::default();
    let op = OperationConfiguration {
        axial_start_position: 10.0,
        axial_end_position: 2.5,
        stepover: 3.0,
        ..facing_op()
    };
    let seq = generate_facing_toolpath(&op, &machine);
    let faces: Vec<f64> = radial_cuts(&seq, op.feedrate).iter().map(|t| t.start().z).collect();
    assert_eq!(faces, vec![7.0, 4.0, 2.5]);
}

#[test]
fn test_facing_offsets_shift_positions() {
    let machine = MachineConfig::default();
    let op = OperationConfiguration {
        axial_start_offset: 1.0,
        axial_end_offset: -0.5,
        stepover: 6.0,
        ..facing_op()
    };
    let seq = generate_facing_toolpath(&op, &machine);
    let faces: Vec<f64> = radial_cuts(&seq, op.feedrate).iter().map(|t| t.start().z).collect();
    assert_eq!(faces, vec![5.0, -0.5]);
    assert_eq!(seq.first_point().map(|p| p.z), Some(12.0));
}

#[test]
fn test_facing_negative_z() {
    let machine = MachineConfig {
        z_axis_direction: AxisDirection::Negative,
        ..MachineConfig::default()
    };
    let op = OperationConfiguration {
        axial_start_position: 0.0,
        axial_end_position: 10.0,
        ..facing_op()
    };
    let seq = generate_facing_toolpath(&op, &machine);
    assert_continuous(&seq);
    assert_eq!(seq.first_point().map(|p| p.z), Some(-1.0));
    let faces: Vec<f64> = radial_cuts(&seq, op.feedrate).iter().map(|t| t.start().z).collect();
    assert_eq!(faces, vec![5.0, 10.0]);
}

#[test]
fn test_facing_zero_span_single_pass() {
    let machine = MachineConfig::default();
    let op = OperationConfiguration {
        axial_start_position: 4.0,
        axial_end_position: 4.0,
        ..facing_op()
    };
    let seq = generate_toolpath(&op, &machine);
    assert_eq!(seq.len(), 7);
    assert_eq!(radial_cuts(&seq, op.feedrate).len(), 1);
}

#[test]
fn test_facing_zero_stepover_does_not_hang() {
    let machine = MachineConfig::default();
    let op = OperationConfiguration {
        stepover: 0.0,
        ..facing_op()
    };
    let seq = generate_toolpath(&op, &machine);
    assert_eq!(seq.len(), 7);
    assert!(seq.iter().all(|t| t.start().x.is_finite() && t.end().z.is_finite()));
}
