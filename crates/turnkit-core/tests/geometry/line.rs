use turnkit_core::{Geometry, Line, Point2D, Segment};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_distance_to_horizontal_line() {
    let line = Line::from_coords(0.0, 0.0, 4.0, 0.0);
    assert!(approx(line.distance(&Point2D::new(2.0, 3.0)), 3.0));
    assert!(approx(line.distance(&Point2D::new(6.0, 0.0)), 2.0));
    assert!(approx(line.distance(&Point2D::new(0.0, 0.0)), 0.0));
}

#[test]
fn test_distance_to_diagonal_line() {
    let line = Line::from_coords(0.0, 0.0, 2.0, 2.0);
    let expected = 2.0_f64.sqrt();
    assert!(approx(line.distance(&Point2D::new(2.0, 0.0)), expected));
}

#[test]
fn test_degenerate_line() {
    let line = Line::from_coords(3.0, 3.0, 3.0, 3.0);
    for point in [Point2D::new(0.0, 0.0), Point2D::new(3.0, 3.0), Point2D::new(-2.0, 15.0)] {
        let d = line.distance(&point);
        assert!(d.is_finite());
        assert!(approx(d, point.distance_to(&Point2D::new(3.0, 3.0))));
    }
    assert_eq!(Segment::Line(line), Segment::Line(Line::from_coords(3.0, 3.0, 3.0, 3.0)));
}

#[test]
fn test_cloned_segment_equals_original() {
    let original = Segment::Line(Line::from_coords(1.0, 2.0, 3.0, 4.0));
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy = copy.transform(&[turnkit_core::Transform::translate(1.0, 0.0)]);
    assert_ne!(copy, original);
    assert_eq!(original.start(), Point2D::new(1.0, 2.0));
}

#[test]
fn test_geometry_json() {
    let mut geometry = Geometry::default();
    geometry.push(Line::from_coords(0.0, 10.0, 30.0, 10.0));
    geometry.push(Line::from_coords(30.0, 10.0, 30.0, 0.0));

    let json = serde_json::to_string(&geometry).unwrap();
    let restored: Geometry = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, geometry);
    assert!(restored.segments[1].as_line().is_some_and(Line::is_vertical));
}
