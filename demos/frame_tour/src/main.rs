use std::sync::Arc;

use oxide::prelude::*;
use oxide_core::window::CursorIcon;

/// Host that logs every request instead of talking to a window system.
#[derive(Default)]
struct LoggingHost {
    disposed: bool,
}

impl FrameHost for LoggingHost {
    fn set_window_title(&mut self, title: &str) {
        log::info!("title: {:?}", title);
    }

    fn set_outer_bounds(&mut self, bounds: Rect) {
        log::info!(
            "window at ({}, {}) size {}x{}",
            bounds.left,
            bounds.top,
            bounds.width,
            bounds.height
        );
    }

    fn set_cursor(&mut self, cursor: CursorIcon) {
        log::info!("cursor: {:?}", cursor);
    }

    fn request_iconify(&mut self) {
        log::info!("iconify requested");
    }

    fn request_dispose(&mut self) {
        log::info!("dispose requested");
        self.disposed = true;
    }
}

fn center(frame: &Frame<LoggingHost>, region: FrameRegion) -> Point2<i32> {
    let rect = frame.geometry().screen_rect(region);
    Point2::new(rect.left + rect.width / 2, rect.top + rect.height / 2)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let registry = SkinRegistry::new();
    let mut frame = Frame::from_env(FrameRole::Parent, &registry, LoggingHost::default())?;
    log::info!("skin '{}', available: {:?}", frame.skin().name(), registry.names());

    frame.set_title("Frame Tour");
    frame.center_in_viewport(1920, 1080);

    // Drag the title strip 40 px right and 25 px up
    let grab = center(&frame, FrameRegion::TitleHandle);
    frame.handle_pointer(PointerEvent::Move { position: grab });
    frame.handle_pointer(PointerEvent::Down { position: grab });
    let drop = grab + Vector2::new(40, -25);
    frame.handle_pointer(PointerEvent::Move { position: drop });
    frame.handle_pointer(PointerEvent::Up { position: drop });
    log::info!("content after drag: {:?}", frame.content_area());

    let update = frame.set_skin(Arc::new(SlateSkin::new()))?;
    log::info!("skin swap: {:?}, content still {:?}", update, frame.content_area());

    let list = frame.paint();
    log::info!("display list has {} commands", list.len());
    for command in &list {
        log::debug!("{:?}", command);
    }

    let close = center(&frame, FrameRegion::CloseButton);
    frame.handle_pointer(PointerEvent::Move { position: close });
    frame.handle_pointer(PointerEvent::Down { position: close });
    frame.handle_pointer(PointerEvent::Up { position: close });

    if frame.host().disposed {
        log::info!("frame closed");
    }
    Ok(())
}
