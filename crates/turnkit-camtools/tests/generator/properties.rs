use super::{assert_continuous, axial_cuts};
use proptest::prelude::*;
use turnkit_camtools::{generate_toolpath, pass_count, RadialStages};
use turnkit_core::{
    AxisDirection, MachineConfig, OperationConfiguration, OperationType, ToolpathSequence,
};

fn negative_x() -> MachineConfig {
    MachineConfig {
        x_axis_direction: AxisDirection::Negative,
        ..MachineConfig::default()
    }
}

fn negative_z() -> MachineConfig {
    MachineConfig {
        z_axis_direction: AxisDirection::Negative,
        ..MachineConfig::default()
    }
}

fn mirror_radii(op: &OperationConfiguration) -> OperationConfiguration {
    OperationConfiguration {
        outer_distance: -op.outer_distance,
        inner_distance: -op.inner_distance,
        feed_distance: -op.feed_distance,
        retract_distance: -op.retract_distance,
        clearance_distance: -op.clearance_distance,
        ..op.clone()
    }
}

fn mirror_axial(op: &OperationConfiguration) -> OperationConfiguration {
    OperationConfiguration {
        axial_start_position: -op.axial_start_position,
        axial_end_position: -op.axial_end_position,
        axial_start_offset: -op.axial_start_offset,
        axial_end_offset: -op.axial_end_offset,
        ..op.clone()
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn operation() -> impl Strategy<Value = OperationConfiguration> {
    (
        prop_oneof![
            Just(OperationType::Facing),
            Just(OperationType::Turning),
            Just(OperationType::Parting),
        ],
        0.0f64..50.0,
        0.0f64..1.0,
        0.1f64..5.0,
        0.1f64..10.0,
        0.1f64..5.0,
        (-20.0f64..20.0, 0.0f64..40.0),
        0.2f64..6.0,
        0.2f64..6.0,
    )
        .prop_map(
            |(kind, outer, inner_ratio, feed, retract, clearance, (z_start, length), stepover, cut_depth)| {
                OperationConfiguration {
                    outer_distance: outer,
                    inner_distance: outer * inner_ratio,
                    feed_distance: feed,
                    retract_distance: retract,
                    clearance_distance: clearance,
                    axial_start_position: z_start,
                    axial_end_position: z_start - length,
                    stepover,
                    cut_depth_per_pass: cut_depth,
                    ..OperationConfiguration::new(kind)
                }
            },
        )
}

fn assert_x_mirrored(a: &ToolpathSequence, b: &ToolpathSequence) {
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(b.iter()) {
        assert!(close(p.start().x, -q.start().x) && close(p.end().x, -q.end().x));
        assert!(close(p.start().z, q.start().z) && close(p.end().z, q.end().z));
        assert_eq!(p.feed_rate(), q.feed_rate());
    }
}

proptest! {
    #[test]
    fn staging_radii_are_ordered(
        outer in 0.0f64..100.0,
        feed in 0.001f64..10.0,
        retract in 0.001f64..10.0,
        clearance in 0.001f64..10.0,
    ) {
        let op = OperationConfiguration {
            outer_distance: outer,
            feed_distance: feed,
            retract_distance: retract,
            clearance_distance: clearance,
            ..OperationConfiguration::default()
        };
        let stages = RadialStages::compose(&op);
        prop_assert!(stages.clearance > stages.retract);
        prop_assert!(stages.retract > stages.feed);
        prop_assert!(stages.feed > stages.outer);
    }

    #[test]
    fn pass_count_covers_span(span in -500.0f64..500.0, step in 0.1f64..50.0) {
        let passes = pass_count(span, step);
        prop_assert!(passes >= 1);
        prop_assert!(passes as f64 * step >= span.abs() - 1e-9);
        if passes > 1 {
            prop_assert!(((passes - 1) as f64) * step <= span.abs() + 1e-9);
        }
    }

    #[test]
    fn sequences_are_continuous(op in operation()) {
        let seq = generate_toolpath(&op, &MachineConfig::default());
        prop_assert!(!seq.is_empty());
        assert_continuous(&seq);
    }

    #[test]
    fn flipping_x_mirrors_radial_moves(op in operation()) {
        let positive = generate_toolpath(&op, &MachineConfig::default());
        let negative = generate_toolpath(&mirror_radii(&op), &negative_x());
        assert_x_mirrored(&positive, &negative);
    }

    #[test]
    fn flipping_z_mirrors_axial_moves(op in operation()) {
        let positive = generate_toolpath(&op, &MachineConfig::default());
        let negative = generate_toolpath(&mirror_axial(&op), &negative_z());
        prop_assert_eq!(positive.len(), negative.len());
        for (p, q) in positive.iter().zip(negative.iter()) {
            prop_assert!(close(p.start().z, -q.start().z) && close(p.end().z, -q.end().z));
            prop_assert!(close(p.start().x, q.start().x) && close(p.end().x, q.end().x));
        }
    }

    #[test]
    fn turning_finishes_on_inner_radius(op in operation()) {
        let op = OperationConfiguration { operation_type: OperationType::Turning, ..op };
        prop_assume!(op.axial_start_position != op.axial_end_position);
        let seq = generate_toolpath(&op, &MachineConfig::default());
        let cuts = axial_cuts(&seq, op.feedrate);
        prop_assert_eq!(cuts.len(), pass_count(op.outer_distance - op.inner_distance, op.stepover));
        prop_assert_eq!(cuts.last().map(|t| t.start().x), Some(op.inner_distance));
    }

    #[test]
    fn unsupported_operations_yield_nothing(op in operation(), kind in prop_oneof![
        Just(OperationType::Contouring),
        Just(OperationType::Threading),
        Just(OperationType::Drilling),
    ]) {
        let op = OperationConfiguration { operation_type: kind, ..op };
        prop_assert!(generate_toolpath(&op, &MachineConfig::default()).is_empty());
    }
}
