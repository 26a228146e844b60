//! Behavior of decorated frames driven through pointer events

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use nalgebra::Point2;
use oxide_core::element::Element;
use oxide_core::geometry::{Rect, MAX_COORDINATE};
use oxide_core::host::{HostRequest, RecordingHost};
use oxide_core::input::PointerEvent;
use oxide_core::paint::PaintCommand;
use oxide_core::region::FrameRegion;
use oxide_core::update::Update;
use oxide_theme::error::SkinError;
use oxide_theme::metrics::{FrameRole, SkinMetrics};
use oxide_theme::skin::default::DefaultSkin;
use oxide_theme::skin::slate::SlateSkin;
use oxide_theme::skin::Skin;
use oxide_widgets::frame::Frame;
use oxide_widgets::icon::NoIcons;

#[derive(Debug)]
struct FlatSkin {
    metrics: SkinMetrics,
}

impl FlatSkin {
    fn new() -> Self {
        let mut metrics = DefaultSkin::new().metrics().clone();
        metrics.parent_title_bar_height = 0;
        Self { metrics }
    }
}

impl Skin for FlatSkin {
    fn name(&self) -> &str {
        "flat"
    }

    fn metrics(&self) -> &SkinMetrics {
        &self.metrics
    }
}

fn parent_frame() -> Frame<RecordingHost> {
    Frame::new(FrameRole::Parent, Arc::new(DefaultSkin::new()), RecordingHost::new()).unwrap()
}

fn screen_center(frame: &Frame<RecordingHost>, region: FrameRegion) -> Point2<i32> {
    let rect = frame.geometry().screen_rect(region);
    Point2::new(rect.left + rect.width / 2, rect.top + rect.height / 2)
}

fn click(frame: &mut Frame<RecordingHost>, position: Point2<i32>) {
    frame.handle_pointer(PointerEvent::Move { position });
    frame.handle_pointer(PointerEvent::Down { position });
    frame.handle_pointer(PointerEvent::Up { position });
}

#[test]
fn test_close_callback_runs_once_per_press() {
    let mut frame = parent_frame();
    let closes = Rc::new(Cell::new(0));
    let counter = closes.clone();
    frame.set_close_action(move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    });

    let close = screen_center(&frame, FrameRegion::CloseButton);
    click(&mut frame, close);
    assert_eq!(closes.get(), 1);

    click(&mut frame, close);
    assert_eq!(closes.get(), 2);
    assert_eq!(frame.host().count(&HostRequest::Dispose), 0);
}

#[test]
fn test_default_close_requests_dispose_once() {
    let mut frame = parent_frame();

    let close = screen_center(&frame, FrameRegion::CloseButton);
    click(&mut frame, close);

    assert_eq!(frame.host().count(&HostRequest::Dispose), 1);
    assert_eq!(frame.host().count(&HostRequest::Iconify), 0);
}

#[test]
fn test_default_minimize_requests_iconify() {
    let mut frame = parent_frame();

    let minimize = screen_center(&frame, FrameRegion::MinimizeButton);
    click(&mut frame, minimize);

    assert_eq!(frame.host().count(&HostRequest::Iconify), 1);
}

#[test]
fn test_button_selected_while_pressed() {
    let mut frame = parent_frame();
    let close = screen_center(&frame, FrameRegion::CloseButton);

    frame.handle_pointer(PointerEvent::Down { position: close });
    assert!(frame.close_button().is_selected());

    // release away from the button still reaches it
    frame.handle_pointer(PointerEvent::Up {
        position: Point2::new(0, 0),
    });
    assert!(!frame.close_button().is_selected());
}

#[test]
fn test_failing_close_action_still_selects() {
    let mut frame = parent_frame();
    frame.set_close_action(|_| Err(anyhow::anyhow!("dispose refused")));

    let close = screen_center(&frame, FrameRegion::CloseButton);
    frame.handle_pointer(PointerEvent::Down { position: close });

    assert!(frame.close_button().is_selected());
}

#[test]
fn test_drag_title_moves_frame() {
    let mut frame = parent_frame();
    let before = *frame.geometry();

    frame.handle_pointer(PointerEvent::Down {
        position: Point2::new(500, 80),
    });
    let update = frame.handle_pointer(PointerEvent::Move {
        position: Point2::new(520, 70),
    });

    assert!(update.contains(Update::MOVE));
    assert_eq!(frame.content_area(), Rect::new(320, 90, 640, 380));
    assert_eq!(frame.geometry().outer_frame, Rect::new(313, 47, 654, 430));
    assert_eq!(frame.geometry().decoration_pane, before.decoration_pane);
    assert_eq!(frame.host().last_bounds(), Some(frame.geometry().outer_frame));

    frame.handle_pointer(PointerEvent::Up {
        position: Point2::new(520, 70),
    });
    frame.handle_pointer(PointerEvent::Move {
        position: Point2::new(600, 100),
    });
    assert_eq!(frame.content_area(), Rect::new(320, 90, 640, 380));
}

#[test]
fn test_drag_keeps_following_outside_handle() {
    let mut frame = parent_frame();

    frame.handle_pointer(PointerEvent::Down {
        position: Point2::new(500, 80),
    });
    frame.handle_pointer(PointerEvent::Move {
        position: Point2::new(500, 1000),
    });

    assert_eq!(frame.content_area().top, 1020);
}

#[test]
fn test_focus_loss_ends_drag() {
    let mut frame = parent_frame();

    frame.handle_pointer(PointerEvent::Down {
        position: Point2::new(500, 80),
    });
    frame.handle_pointer(PointerEvent::FocusLost);
    frame.handle_pointer(PointerEvent::Move {
        position: Point2::new(550, 80),
    });

    assert!(!frame.drag_handle().is_dragging());
    assert_eq!(frame.content_area(), Rect::new(300, 100, 640, 380));
}

#[test]
fn test_enter_without_button_ends_drag() {
    let mut frame = parent_frame();

    frame.handle_pointer(PointerEvent::Down {
        position: Point2::new(500, 80),
    });
    frame.handle_pointer(PointerEvent::Exit);
    frame.handle_pointer(PointerEvent::Enter { primary_down: false });
    frame.handle_pointer(PointerEvent::Move {
        position: Point2::new(550, 80),
    });

    assert_eq!(frame.content_area(), Rect::new(300, 100, 640, 380));
}

#[test]
fn test_set_title_pads_label() {
    let mut frame = parent_frame();
    let update = frame.set_title("Inventory");

    assert_eq!(update, Update::TITLE | Update::DRAW);
    assert_eq!(frame.title(), "Inventory");
    assert_eq!(frame.drag_handle().label(), " Inventory");
    assert_eq!(frame.host().last_title(), Some("Inventory"));

    let text = frame.paint().commands().iter().find_map(|command| match command {
        PaintCommand::Text { text, .. } => Some(text.clone()),
        _ => None,
    });
    assert_eq!(text.as_deref(), Some(" Inventory"));
}

#[test]
fn test_set_bounds_overloads_agree() {
    let mut first = parent_frame();
    let mut second = parent_frame();

    first.set_bounds(10, 20, 300, 200);
    second.set_bounds_rect(Rect::new(10, 20, 300, 200));

    assert_eq!(first.geometry(), second.geometry());
    assert_eq!(first.content_area(), Rect::new(10, 20, 300, 200));
}

#[test]
fn test_center_in_viewport_centers_content() {
    let mut frame = parent_frame();
    frame.center_in_viewport(1280, 1024);

    assert_eq!(frame.content_area(), Rect::new(320, 322, 640, 380));
    assert_eq!(frame.host().last_bounds(), Some(frame.geometry().outer_frame));
}

#[test]
fn test_center_in_viewport_odd_width() {
    let mut frame = parent_frame();
    frame.set_bounds(0, 0, 641, 381);
    frame.center_in_viewport(1920, 1080);

    // 960 - 320 and 540 - 190
    assert_eq!(frame.content_area(), Rect::new(640, 350, 641, 381));
}

#[test]
fn test_set_bounds_with_extreme_width() {
    let mut frame = parent_frame();
    let update = frame.set_bounds(0, 0, i32::MAX, 100);

    assert!(update.contains(Update::LAYOUT));
    assert_eq!(frame.content_area(), Rect::new(0, 0, MAX_COORDINATE, 100));
    assert_eq!(frame.geometry().content_screen_rect(), frame.content_area());
    assert_eq!(frame.close_button().bounds(), frame.geometry().close_button);
    assert_eq!(frame.host().last_bounds(), Some(frame.geometry().outer_frame));
}

#[test]
fn test_set_skin_keeps_content() {
    let mut frame = parent_frame();
    let content = frame.content_area();
    let pane_height = frame.geometry().decoration_pane.height;

    let update = frame.set_skin(Arc::new(SlateSkin::new())).unwrap();

    assert!(update.contains(Update::LAYOUT));
    assert_eq!(frame.skin().name(), "slate");
    assert_eq!(frame.content_area(), content);
    // h 30 -> 24 and d 6 -> 4: 3d + h drops from 48 to 36
    assert_eq!(frame.geometry().decoration_pane.height, pane_height - 12);
    assert_eq!(frame.close_button().bounds(), frame.geometry().close_button);
}

#[test]
fn test_invalid_skin_keeps_previous() {
    let mut frame = parent_frame();
    let before = *frame.geometry();

    let result = frame.set_skin(Arc::new(FlatSkin::new()));

    assert!(matches!(result, Err(SkinError::InvalidMetric { .. })));
    assert_eq!(frame.skin().name(), "default");
    assert_eq!(*frame.geometry(), before);
}

#[test]
fn test_invalid_skin_rejected_at_creation() {
    let result = Frame::new(FrameRole::Parent, Arc::new(FlatSkin::new()), RecordingHost::new());
    assert!(result.is_err());
}

#[test]
fn test_child_frame_uses_child_metrics() {
    let frame = Frame::new(FrameRole::Child, Arc::new(DefaultSkin::new()), RecordingHost::new()).unwrap();

    assert_eq!(frame.geometry().close_button.height, 18);
    assert_eq!(frame.close_button().glyph().map(|glyph| glyph.size), Some(18));
}

#[test]
fn test_frame_without_icons() {
    let frame = parent_frame().with_icons(NoIcons);

    assert!(frame.close_button().glyph().is_none());
    let glyphs = frame
        .paint()
        .commands()
        .iter()
        .filter(|command| matches!(command, PaintCommand::Glyph { .. }))
        .count();
    assert_eq!(glyphs, 0);
}
