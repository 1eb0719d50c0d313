use chartmark::{init_logging, DrawingManager, DrawingStyle, Point};
use chartmark::annotations::LineDrawing;

#[test]
fn test_init_logging_only_once() {
    assert!(init_logging().is_ok());
    assert!(init_logging().is_err());

    // Logging is live; manager operations emit events without panicking.
    let mut manager = DrawingManager::new();
    manager.add(LineDrawing::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        DrawingStyle::default(),
    ));
    assert!(manager.undo().is_some());
}
