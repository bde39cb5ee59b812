use std::f64::consts::FRAC_PI_2;
use turnkit_core::{Line, Point2D, Transform};

fn close(a: Point2D, b: Point2D) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn test_transform_order_is_preserved() {
    let p = Point2D::new(1.0, 0.0);
    let a = p.transform(&[Transform::rotate(FRAC_PI_2), Transform::translate(1.0, 0.0)]);
    let b = p.transform(&[Transform::translate(1.0, 0.0), Transform::rotate(FRAC_PI_2)]);
    assert!(!close(a, b));
}

#[test]
fn test_inch_drawing_mirrored_to_right_chuck() {
    let line = Line::from_coords(1.0, 0.5, 2.0, 0.5);
    let moved = line.transform(&[
        Transform::scale(25.4, 25.4),
        Transform::mirror_x(),
        Transform::translate(100.0, 0.0),
    ]);
    assert!(close(moved.p1, Point2D::new(74.6, 12.7)));
    assert!(close(moved.p2, Point2D::new(49.2, 12.7)));
    assert!(moved.is_horizontal());
}
