use chartmark_annotations::{
    Drawing, DrawingManager, DrawingStyle, LineDrawing, RectangleDrawing, TextDrawing,
};
use chartmark_core::{Point, Theme};

fn hline(y: f64) -> LineDrawing {
    LineDrawing::new(Point::new(0.0, y), Point::new(100.0, y), DrawingStyle::default())
}

fn start_y(drawing: &Drawing) -> f64 {
    match drawing {
        Drawing::Line(l) => l.start.unwrap().y,
        other => panic!("unexpected {:?}", other.kind()),
    }
}

#[test]
fn test_undo_reverts_add() {
    let mut manager = DrawingManager::new();
    manager.add(hline(0.0));
    let before = manager.drawings().to_vec();

    let added = Drawing::from(hline(10.0));
    assert_eq!(manager.add(added.clone()), 1);
    assert_eq!(manager.undo(), Some(added));
    assert_eq!(manager.drawings(), before.as_slice());
}

#[test]
fn test_undo_on_empty_list() {
    let mut manager = DrawingManager::new();
    assert!(manager.undo().is_none());
    assert!(manager.is_empty());
}

#[test]
fn test_erase_preserves_order_of_the_rest() {
    let mut manager = DrawingManager::new();
    for y in [0.0, 10.0, 20.0, 30.0] {
        manager.add(hline(y));
    }

    let erased = manager.erase_at(Point::new(50.0, 10.0), 2.0).unwrap();
    assert_eq!(erased.index, 1);
    assert_eq!(start_y(&erased.drawing), 10.0);

    let remaining: Vec<f64> = manager.iter().map(start_y).collect();
    assert_eq!(remaining, vec![0.0, 20.0, 30.0]);
}

#[test]
fn test_erase_takes_topmost() {
    let mut manager = DrawingManager::new();
    manager.add(hline(0.0));
    manager.add(hline(1.0));

    let erased = manager.erase_at(Point::new(50.0, 0.5), 2.0).unwrap();
    assert_eq!(erased.index, 1);
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_erase_miss_leaves_list_alone() {
    let mut manager = DrawingManager::new();
    manager.add(hline(0.0));
    assert!(manager.erase_at(Point::new(50.0, 40.0), 2.0).is_none());
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_out_of_range_index_is_noop() {
    let mut manager = DrawingManager::new();
    manager.add(hline(0.0));
    let before = manager.drawings().to_vec();
    let base = Drawing::from(hline(5.0));

    assert!(manager.translate(3, 1.0, 1.0).is_none());
    assert!(manager.rotate(1, 0.5).is_none());
    assert!(manager
        .resize_to(7, Some(&base), Point::default(), 0.0, 2.0, 2.0)
        .is_none());
    assert!(manager.get(9).is_none());
    assert_eq!(manager.drawings(), before.as_slice());
}

#[test]
fn test_transforms_replace_the_slot() {
    let mut manager = DrawingManager::new();
    manager.add(hline(0.0));
    manager.add(hline(10.0));

    let moved = manager.translate(1, 0.0, 5.0).cloned().unwrap();
    assert_eq!(start_y(&moved), 15.0);
    assert_eq!(manager.get(1), Some(&moved));
    assert_eq!(start_y(manager.get(0).unwrap()), 0.0);
}

#[test]
fn test_resize_scales_from_snapshot() {
    let mut manager = DrawingManager::new();
    let original = RectangleDrawing::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        DrawingStyle::default(),
    );
    manager.add(original.clone());
    let base = Drawing::from(original);

    // Two updates from the same snapshot do not compound.
    manager.resize_to(0, Some(&base), Point::default(), 0.0, 2.0, 2.0);
    let second = manager
        .resize_to(0, Some(&base), Point::default(), 0.0, 2.0, 2.0)
        .cloned()
        .unwrap();
    let Drawing::Rectangle(r) = second else {
        panic!("variant changed");
    };
    assert_eq!(r.end, Some(Point::new(20.0, 20.0)));

    // Without a snapshot the current value is scaled.
    manager.resize_to(0, None, Point::default(), 0.0, 2.0, 2.0);
    let Some(Drawing::Rectangle(r)) = manager.get(0) else {
        panic!("variant changed");
    };
    assert_eq!(r.end, Some(Point::new(40.0, 40.0)));
}

#[test]
fn test_clear_empties_list() {
    let mut manager = DrawingManager::new();
    manager.add(hline(0.0));
    manager.add(TextDrawing::at(Point::new(1.0, 1.0), "a", DrawingStyle::default()));
    manager.clear();
    assert!(manager.is_empty());
    assert!(manager.hit_test(Point::new(1.0, 1.0), 8.0).is_none());
}

#[test]
fn test_bounding_box_passthrough() {
    let manager = DrawingManager::new();
    let line = Drawing::from(hline(4.0));
    let bbox = manager.bounding_box(&line).unwrap();
    assert_eq!((bbox.min_x, bbox.max_x), (0.0, 100.0));
    assert_eq!(manager.center(&line), Point::new(50.0, 4.0));

    let incomplete = Drawing::from(TextDrawing::default());
    assert!(manager.bounding_box(&incomplete).is_none());
}

#[test]
fn test_set_theme_replaces_theme() {
    let mut manager = DrawingManager::new();
    let theme = Theme {
        stroke: "#ffffff".to_string(),
        ..Theme::default()
    };
    manager.set_theme(theme.clone());
    assert_eq!(manager.theme(), &theme);
}
