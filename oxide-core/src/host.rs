use winit::window::CursorIcon;

use crate::geometry::Rect;

/// The windowing side of a decorated frame.
///
/// A frame never creates, moves or closes a window itself. It computes what should happen
/// and asks its host, which is free to honor the request later.
pub trait FrameHost {
    /// Set the title of the native window (task bar, window list).
    fn set_window_title(&mut self, title: &str);

    /// Place the native window at the given outer bounds, in screen space.
    fn set_outer_bounds(&mut self, bounds: Rect);

    /// Show the given cursor.
    fn set_cursor(&mut self, cursor: CursorIcon);

    /// Ask for the frame to be iconified.
    fn request_iconify(&mut self);

    /// Ask for the frame to be disposed.
    fn request_dispose(&mut self);
}

/// A request made to a [RecordingHost].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    /// [FrameHost::set_window_title]
    Title(String),
    /// [FrameHost::set_outer_bounds]
    Bounds(Rect),
    /// [FrameHost::set_cursor]
    Cursor(CursorIcon),
    /// [FrameHost::request_iconify]
    Iconify,
    /// [FrameHost::request_dispose]
    Dispose,
}

/// A headless host that records every request in order.
///
/// Useful for tests and for driving frames without a display.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    requests: Vec<HostRequest>,
}

impl RecordingHost {
    /// Create an empty recording host.
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests so far.
    pub fn requests(&self) -> &[HostRequest] {
        &self.requests
    }

    /// How many requests equal `request`.
    pub fn count(&self, request: &HostRequest) -> usize {
        self.requests.iter().filter(|r| *r == request).count()
    }

    /// The last outer bounds requested, if any.
    pub fn last_bounds(&self) -> Option<Rect> {
        self.requests.iter().rev().find_map(|request| match request {
            HostRequest::Bounds(bounds) => Some(*bounds),
            _ => None,
        })
    }

    /// The last cursor requested, if any.
    pub fn last_cursor(&self) -> Option<CursorIcon> {
        self.requests.iter().rev().find_map(|request| match request {
            HostRequest::Cursor(cursor) => Some(*cursor),
            _ => None,
        })
    }

    /// The last title requested, if any.
    pub fn last_title(&self) -> Option<&str> {
        self.requests.iter().rev().find_map(|request| match request {
            HostRequest::Title(title) => Some(title.as_str()),
            _ => None,
        })
    }

    /// Forget all recorded requests.
    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

impl FrameHost for RecordingHost {
    fn set_window_title(&mut self, title: &str) {
        self.requests.push(HostRequest::Title(title.to_string()));
    }

    fn set_outer_bounds(&mut self, bounds: Rect) {
        self.requests.push(HostRequest::Bounds(bounds));
    }

    fn set_cursor(&mut self, cursor: CursorIcon) {
        self.requests.push(HostRequest::Cursor(cursor));
    }

    fn request_iconify(&mut self) {
        self.requests.push(HostRequest::Iconify);
    }

    fn request_dispose(&mut self) {
        self.requests.push(HostRequest::Dispose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut host = RecordingHost::new();
        host.set_outer_bounds(Rect::new(1, 2, 3, 4));
        host.request_dispose();
        host.set_outer_bounds(Rect::new(5, 6, 7, 8));

        assert_eq!(host.requests().len(), 3);
        assert_eq!(host.count(&HostRequest::Dispose), 1);
        assert_eq!(host.last_bounds(), Some(Rect::new(5, 6, 7, 8)));
        assert_eq!(host.last_cursor(), None);
    }
}
