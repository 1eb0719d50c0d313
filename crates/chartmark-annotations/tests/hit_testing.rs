use std::f64::consts::FRAC_PI_2;

use chartmark_annotations::{
    is_point_on_drawing, AnnotationShape, Drawing, DrawingManager, DrawingStyle, EllipseDrawing,
    IconDrawing, LineDrawing, PencilDrawing, RectangleDrawing, TextDrawing,
};
use chartmark_core::{distance_to_segment, Point};

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> RectangleDrawing {
    RectangleDrawing::new(Point::new(x0, y0), Point::new(x1, y1), DrawingStyle::default())
}

#[test]
fn test_rectangle_interior_hit_and_far_miss() {
    let mut manager = DrawingManager::new();
    manager.add(rect(0.0, 0.0, 10.0, 10.0));

    let hit = manager.hit_test(Point::new(5.0, 5.0), 2.0).unwrap();
    assert_eq!(hit.index, 0);
    assert!(manager.hit_test(Point::new(50.0, 50.0), 2.0).is_none());
}

#[test]
fn test_rectangle_tolerance_inflates_box() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    assert!(r.hit_test(Point::new(12.0, 5.0), 2.0));
    assert!(!r.hit_test(Point::new(12.5, 5.0), 2.0));
}

#[test]
fn test_pencil_polyline_distance() {
    let pencil = PencilDrawing::new(
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        DrawingStyle::default(),
    );
    let d = distance_to_segment(Point::new(5.0, 3.0), pencil.points[0], pencil.points[1]);
    assert!((d - 3.0).abs() < 1e-12);

    let drawing = Drawing::from(pencil);
    assert!(is_point_on_drawing(Point::new(5.0, 3.0), &drawing, 5.0));
    assert!(!is_point_on_drawing(Point::new(5.0, 10.0), &drawing, 5.0));
}

#[test]
fn test_topmost_drawing_wins() {
    let mut manager = DrawingManager::new();
    manager.add(rect(0.0, 0.0, 20.0, 20.0));
    manager.add(rect(10.0, 10.0, 30.0, 30.0));

    assert_eq!(manager.hit_test(Point::new(15.0, 15.0), 0.0).unwrap().index, 1);
    // Only the first rectangle covers this point.
    assert_eq!(manager.hit_test(Point::new(5.0, 5.0), 0.0).unwrap().index, 0);
}

#[test]
fn test_rotated_rectangle_uses_its_frame() {
    // 40x10 box centered on (20, 5), stood upright by a quarter turn.
    let r = RectangleDrawing {
        angle: FRAC_PI_2,
        ..rect(0.0, 0.0, 40.0, 10.0)
    };
    assert!(r.hit_test(Point::new(20.0, 20.0), 0.0));
    assert!(!r.hit_test(Point::new(35.0, 5.0), 0.0));
}

#[test]
fn test_ellipse_interior_and_tolerance() {
    let e = EllipseDrawing::new(
        Point::new(0.0, 0.0),
        Point::new(20.0, 10.0),
        DrawingStyle::default(),
    );
    assert!(e.hit_test(Point::new(10.0, 5.0), 0.0));
    assert!(!e.hit_test(Point::new(19.0, 9.0), 0.0));
    assert!(e.hit_test(Point::new(19.0, 9.0), 8.0));
}

#[test]
fn test_flat_ellipse_keeps_minimum_radius() {
    let e = EllipseDrawing::new(
        Point::new(0.0, 5.0),
        Point::new(20.0, 5.0),
        DrawingStyle::default(),
    );
    assert!(e.hit_test(Point::new(10.0, 5.5), 0.0));
}

#[test]
fn test_text_glyph_box_estimate() {
    let text = TextDrawing::at(Point::new(100.0, 100.0), "abcd", DrawingStyle::default());
    // Four characters at 8px make a 32x16 box.
    assert!(text.hit_test(Point::new(130.0, 110.0), 0.0));
    assert!(!text.hit_test(Point::new(139.0, 110.0), 0.0));
    assert!(text.hit_test(Point::new(139.0, 110.0), 8.0));
    assert!(!text.hit_test(Point::new(110.0, 117.0), 0.0));
}

#[test]
fn test_rotated_text_pivots_on_anchor() {
    let text = TextDrawing {
        angle: FRAC_PI_2,
        ..TextDrawing::at(Point::new(100.0, 100.0), "abcd", DrawingStyle::default())
    };
    // Local (20, 10) lands at (90, 120) after a quarter turn about the anchor.
    assert!(text.hit_test(Point::new(90.0, 120.0), 0.0));
    assert!(!text.hit_test(Point::new(120.0, 110.0), 0.0));
}

#[test]
fn test_empty_text_occupies_one_cell() {
    let text = TextDrawing {
        text: String::new(),
        ..TextDrawing::at(Point::new(0.0, 0.0), "x", DrawingStyle::default())
    };
    assert!(text.hit_test(Point::new(7.0, 8.0), 0.0));
    assert!(!text.hit_test(Point::new(9.0, 8.0), 0.0));
}

#[test]
fn test_icon_square_box() {
    let icon = IconDrawing::at(Point::new(50.0, 50.0), "*", Some(16.0), DrawingStyle::default());
    assert!(icon.hit_test(Point::new(57.0, 57.0), 0.0));
    assert!(!icon.hit_test(Point::new(60.0, 50.0), 0.0));
    assert!(icon.hit_test(Point::new(60.0, 50.0), 2.0));
}

#[test]
fn test_incomplete_shapes_are_skipped() {
    let mut manager = DrawingManager::new();
    manager.add(LineDrawing {
        start: Some(Point::new(0.0, 0.0)),
        end: None,
        style: DrawingStyle::default(),
    });
    manager.add(TextDrawing {
        x: Some(0.0),
        ..TextDrawing::default()
    });
    manager.add(PencilDrawing::new(vec![Point::new(0.0, 0.0)], DrawingStyle::default()));

    assert!(manager.hit_test(Point::new(0.0, 0.0), 8.0).is_none());
    assert!(manager.iter().all(|d| d.bounding_box().is_none() || !d.is_complete()));
}
