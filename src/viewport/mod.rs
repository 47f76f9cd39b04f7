//! Transient viewport signal: scroll offset and current route.
//!
//! Never persisted. The signal observes scroll events while the shell is
//! mounted and exposes the derived "past threshold" boolean the header
//! resolver consumes; recomputation is O(1) per event, so no extra
//! debouncing exists beyond the underlying event cadence. Navigation
//! explicitly resets the scroll position to the top of the new view.

use crate::presentation::{header_visual_context, VisualContext};

/// Scroll offset (in viewport units) past which the header switches to its
/// scrolled treatment.
pub const SCROLL_THRESHOLD: u32 = 50;

/// Live scroll-and-route observation feeding the presentation resolvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportSignal {
    path: String,
    scroll_offset: u32,
}

impl ViewportSignal {
    /// A signal positioned at the top of the home route.
    pub fn new() -> Self {
        Self {
            path: "/".into(),
            scroll_offset: 0,
        }
    }

    /// Record the latest scroll offset.
    pub fn observe_scroll(&mut self, offset: u32) {
        self.scroll_offset = offset;
    }

    /// Record a route change. Scroll resets to the top of the new view.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.scroll_offset = 0;
    }

    /// The current route path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The current scroll offset.
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Whether the scroll offset is past [`SCROLL_THRESHOLD`].
    pub fn is_past_threshold(&self) -> bool {
        self.scroll_offset > SCROLL_THRESHOLD
    }

    /// Whether the current route is the home page.
    pub fn is_home(&self) -> bool {
        self.path == "/"
    }

    /// The header's visual context for the current route and scroll state.
    pub fn header_context(&self) -> VisualContext {
        header_visual_context(self.is_home(), self.is_past_threshold())
    }
}

impl Default for ViewportSignal {
    fn default() -> Self {
        Self::new()
    }
}
