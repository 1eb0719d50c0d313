use chartmark_annotations::{
    draw_selection, AnnotationShape, ArrowDrawing, Drawing, DrawingManager, DrawingStyle,
    IconDrawing, LineDrawing, PixmapSurface, ProjectionDrawing, RecordingSurface,
    RectangleDrawing, Surface, SurfaceCommand, SurfaceError, TextAlign, TextBaseline,
    TextDrawing,
};
use chartmark_core::{Point, Theme};

fn position(commands: &[SurfaceCommand], wanted: &SurfaceCommand) -> usize {
    commands
        .iter()
        .position(|c| c == wanted)
        .unwrap_or_else(|| panic!("{:?} not recorded", wanted))
}

fn render(manager: &DrawingManager, draft: Option<&Drawing>) -> Vec<SurfaceCommand> {
    let mut surface = RecordingSurface::new();
    manager.render(&mut surface, draft);
    surface.take_commands()
}

#[test]
fn test_paints_in_list_order_with_draft_last() {
    let mut manager = DrawingManager::new();
    manager.add(RectangleDrawing::new(
        Point::new(10.0, 10.0),
        Point::new(30.0, 30.0),
        DrawingStyle::default(),
    ));
    manager.add(LineDrawing::new(
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
        DrawingStyle::default(),
    ));
    let draft = Drawing::from(LineDrawing::new(
        Point::new(70.0, 70.0),
        Point::new(90.0, 90.0),
        DrawingStyle::default(),
    ));

    let commands = render(&manager, Some(&draft));
    assert_eq!(commands[0], SurfaceCommand::Clear);
    let rect_at = position(&commands, &SurfaceCommand::Translate { dx: 20.0, dy: 20.0 });
    let line_at = position(&commands, &SurfaceCommand::MoveTo { x: 0.0, y: 0.0 });
    let draft_at = position(&commands, &SurfaceCommand::MoveTo { x: 70.0, y: 70.0 });
    assert!(rect_at < line_at);
    assert!(line_at < draft_at);
    assert_eq!(commands.last(), Some(&SurfaceCommand::Restore));
}

#[test]
fn test_render_starts_each_frame_from_clear() {
    let mut manager = DrawingManager::new();
    manager.add(LineDrawing::new(
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
        DrawingStyle::default(),
    ));
    let mut surface = RecordingSurface::new();
    manager.render(&mut surface, None);
    manager.render(&mut surface, None);

    let clears = surface
        .commands()
        .iter()
        .filter(|c| **c == SurfaceCommand::Clear)
        .count();
    assert_eq!(clears, 1);
    assert_eq!(surface.stroke_count(), 1);
}

#[test]
fn test_incomplete_shapes_draw_nothing() {
    let mut manager = DrawingManager::new();
    manager.add(LineDrawing {
        start: Some(Point::new(0.0, 0.0)),
        end: None,
        style: DrawingStyle::default(),
    });
    manager.add(TextDrawing::default());
    assert_eq!(render(&manager, None), vec![SurfaceCommand::Clear]);
}

#[test]
fn test_theme_fills_missing_style() {
    let mut manager = DrawingManager::new();
    manager.add(LineDrawing::new(
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
        DrawingStyle::default(),
    ));
    let commands = render(&manager, None);
    let theme = Theme::default();
    assert!(commands.contains(&SurfaceCommand::SetStrokeColor(theme.stroke)));
    assert!(commands.contains(&SurfaceCommand::SetLineWidth(2.0)));
    assert!(commands.contains(&SurfaceCommand::SetGlobalAlpha(1.0)));
    assert!(!commands.iter().any(|c| matches!(c, SurfaceCommand::SetLineDash(_))));
}

#[test]
fn test_own_style_wins_over_theme() {
    let mut manager = DrawingManager::new();
    let style = DrawingStyle {
        color: Some("#123456".to_string()),
        width: Some(5.0),
        opacity: Some(0.4),
        dash: Some(vec![2.0, 2.0]),
        fill: None,
    };
    manager.add(LineDrawing::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0), style));
    let commands = render(&manager, None);
    assert!(commands.contains(&SurfaceCommand::SetStrokeColor("#123456".to_string())));
    assert!(commands.contains(&SurfaceCommand::SetLineWidth(5.0)));
    assert!(commands.contains(&SurfaceCommand::SetGlobalAlpha(0.4)));
    assert!(commands.contains(&SurfaceCommand::SetLineDash(vec![2.0, 2.0])));
}

#[test]
fn test_rotation_applies_only_when_set() {
    let mut manager = DrawingManager::new();
    manager.add(RectangleDrawing::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        DrawingStyle::default(),
    ));
    let flat = render(&manager, None);
    assert!(!flat.iter().any(|c| matches!(c, SurfaceCommand::Rotate { .. })));

    manager.rotate(0, 0.25);
    let turned = render(&manager, None);
    let translate_at = position(&turned, &SurfaceCommand::Translate { dx: 5.0, dy: 5.0 });
    let rotate_at = position(&turned, &SurfaceCommand::Rotate { angle: 0.25 });
    assert!(translate_at < rotate_at);
    // The box is drawn about the translated origin.
    assert!(turned.contains(&SurfaceCommand::MoveTo { x: -5.0, y: -5.0 }));
}

#[test]
fn test_arrow_head_fill_follows_style() {
    let mut manager = DrawingManager::new();
    manager.add(ArrowDrawing::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        DrawingStyle::default(),
    ));
    let hollow = render(&manager, None);
    assert!(!hollow.contains(&SurfaceCommand::Fill));
    assert_eq!(
        hollow.iter().filter(|c| **c == SurfaceCommand::Stroke).count(),
        2
    );
    // First barb: 10px back from the tip at pi/8 off the shaft.
    let barb = hollow
        .iter()
        .find_map(|c| match c {
            SurfaceCommand::LineTo { x, y } if *x < 5.0 => Some((*x, *y)),
            _ => None,
        })
        .unwrap();
    let expected = (
        10.0 - 10.0 * (-std::f64::consts::PI / 8.0).cos(),
        -10.0 * (-std::f64::consts::PI / 8.0).sin(),
    );
    assert!((barb.0 - expected.0).abs() < 1e-9);
    assert!((barb.1 - expected.1).abs() < 1e-9);

    manager.clear();
    manager.add(ArrowDrawing::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        DrawingStyle {
            fill: Some("#ff0000".to_string()),
            ..DrawingStyle::default()
        },
    ));
    assert!(render(&manager, None).contains(&SurfaceCommand::Fill));
}

#[test]
fn test_projection_defaults_and_label() {
    let mut manager = DrawingManager::new();
    manager.add(ProjectionDrawing::new(
        Point::new(0.0, 0.0),
        Point::new(40.0, 20.0),
        Some("Target".to_string()),
        DrawingStyle::default(),
    ));
    let commands = render(&manager, None);
    let theme = Theme::default();

    assert!(commands.contains(&SurfaceCommand::SetStrokeColor(theme.projection.clone())));
    assert!(commands.contains(&SurfaceCommand::SetFillColor(theme.projection)));
    let dash_at = position(&commands, &SurfaceCommand::SetLineDash(vec![8.0, 6.0]));
    let solid_at = position(&commands, &SurfaceCommand::SetLineDash(Vec::new()));
    let label_at = position(
        &commands,
        &SurfaceCommand::FillText {
            text: "Target".to_string(),
            x: 46.0,
            y: 14.0,
        },
    );
    assert!(dash_at < solid_at && solid_at < label_at);
    assert!(commands.contains(&SurfaceCommand::SetTextBaseline(TextBaseline::Bottom)));
    assert!(commands.contains(&SurfaceCommand::SetFont("11px/1 sans-serif".to_string())));
}

#[test]
fn test_text_and_icon_commands() {
    let mut manager = DrawingManager::new();
    manager.add(TextDrawing {
        text: String::new(),
        ..TextDrawing::at(Point::new(3.0, 4.0), "x", DrawingStyle::default())
    });
    manager.add(IconDrawing::at(
        Point::new(50.0, 60.0),
        "*",
        Some(20.0),
        DrawingStyle::default(),
    ));
    let commands = render(&manager, None);
    let theme = Theme::default();

    assert!(commands.contains(&SurfaceCommand::Translate { dx: 3.0, dy: 4.0 }));
    assert!(commands.contains(&SurfaceCommand::SetFont("12px/1 sans-serif".to_string())));
    assert!(commands.contains(&SurfaceCommand::SetTextBaseline(TextBaseline::Top)));
    assert!(commands.contains(&SurfaceCommand::FillText {
        text: "Note".to_string(),
        x: 0.0,
        y: 0.0,
    }));
    assert!(commands.contains(&SurfaceCommand::SetFillColor(theme.text)));

    assert!(commands.contains(&SurfaceCommand::SetFont("20px/1 sans-serif".to_string())));
    assert!(commands.contains(&SurfaceCommand::SetTextAlign(TextAlign::Center)));
    assert!(commands.contains(&SurfaceCommand::SetTextBaseline(TextBaseline::Middle)));
}

#[test]
fn test_selection_overlay() {
    let rect = Drawing::from(RectangleDrawing::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        DrawingStyle::default(),
    ));
    let bbox = rect.bounding_box().unwrap();
    let theme = Theme::default();
    let mut surface = RecordingSurface::new();
    draw_selection(&mut surface, &bbox, &theme);

    let commands = surface.commands();
    assert!(commands.contains(&SurfaceCommand::SetLineDash(vec![6.0, 4.0])));
    assert!(commands.contains(&SurfaceCommand::SetStrokeColor(theme.selection.clone())));
    assert_eq!(commands.iter().filter(|c| **c == SurfaceCommand::Fill).count(), 4);
    assert_eq!(surface.stroke_count(), 1);
    // Handle squares are centered on the corners.
    assert!(commands.contains(&SurfaceCommand::MoveTo { x: 6.0, y: 6.0 }));
}

#[test]
fn test_pixmap_surface_rejects_empty_size() {
    assert_eq!(
        PixmapSurface::new(0, 10).err(),
        Some(SurfaceError::InvalidDimensions {
            width: 0,
            height: 10
        })
    );
}

#[test]
fn test_pixmap_surface_fills_rectangle() {
    let mut manager = DrawingManager::new();
    manager.add(RectangleDrawing::new(
        Point::new(10.0, 10.0),
        Point::new(30.0, 30.0),
        DrawingStyle {
            color: Some("#ff0000".to_string()),
            fill: Some("#ff0000".to_string()),
            ..DrawingStyle::default()
        },
    ));
    let mut surface = PixmapSurface::new(40, 40).unwrap();
    manager.render(&mut surface, None);

    assert_eq!(surface.pixel(20, 20), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(2, 2).map(|p| p[3]), Some(0));
    assert_eq!(surface.pixel(40, 0), None);

    manager.clear();
    manager.render(&mut surface, None);
    assert_eq!(surface.pixel(20, 20).map(|p| p[3]), Some(0));
}

#[test]
fn test_pixmap_surface_state_is_scoped() {
    let mut surface = PixmapSurface::new(20, 20).unwrap();
    surface.save();
    surface.translate(100.0, 100.0);
    surface.restore();
    surface.set_fill_color("#00ff00");
    surface.begin_path();
    surface.rect(0.0, 0.0, 20.0, 20.0);
    surface.fill();
    assert_eq!(surface.pixel(10, 10), Some([0, 255, 0, 255]));
}

#[test]
fn test_empty_icon_draws_default_glyph() {
    let mut manager = DrawingManager::new();
    manager.add(IconDrawing::at(
        Point::new(10.0, 10.0),
        "",
        None,
        DrawingStyle::default(),
    ));
    let commands = render(&manager, None);

    let texts: Vec<&str> = commands
        .iter()
        .filter_map(|c| match c {
            SurfaceCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["\u{1F600}"]);
}

#[test]
fn test_pixmap_pixel_outside_surface() {
    let surface = PixmapSurface::new(40, 30).unwrap();
    assert!(surface.pixel(39, 29).is_some());
    assert_eq!(surface.pixel(40, 0), None);
    assert_eq!(surface.pixel(0, 30), None);
    assert_eq!(surface.pixel(u32::MAX, u32::MAX), None);
}
