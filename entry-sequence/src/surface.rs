//! The page regions the controller drives.

use crate::phase::Phase;

/// Side effects on the page. Every method defaults to doing nothing, so a
/// page that lacks a region (no overlay image, no main content element)
/// simply skips that part of the sequence.
pub trait Surface {
    /// Clear and reassign the overlay animation source.
    fn restart_overlay(&mut self) {}

    fn set_overlay_visible(&mut self, _visible: bool) {}

    /// Replace the body's state class.
    fn set_phase(&mut self, _phase: Phase) {}

    /// Drop the scroll lock held while the intro is showing.
    fn unlock_scroll(&mut self) {}

    /// Remove `aria-hidden` from the main content region.
    fn reveal_page(&mut self) {}

    /// Set `aria-hidden="true"` on the intro region.
    fn hide_intro(&mut self) {}

    /// Fade out the opaque cover.
    fn release_cover(&mut self) {}

    fn scroll_to_top(&mut self) {}

    /// Smooth-scroll the timeline section to the top of the viewport.
    fn scroll_to_timeline(&mut self) {}
}

/// A page with none of the expected regions.
impl Surface for () {}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn restart_overlay(&mut self) {
        (**self).restart_overlay()
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        (**self).set_overlay_visible(visible)
    }

    fn set_phase(&mut self, phase: Phase) {
        (**self).set_phase(phase)
    }

    fn unlock_scroll(&mut self) {
        (**self).unlock_scroll()
    }

    fn reveal_page(&mut self) {
        (**self).reveal_page()
    }

    fn hide_intro(&mut self) {
        (**self).hide_intro()
    }

    fn release_cover(&mut self) {
        (**self).release_cover()
    }

    fn scroll_to_top(&mut self) {
        (**self).scroll_to_top()
    }

    fn scroll_to_timeline(&mut self) {
        (**self).scroll_to_timeline()
    }
}

/// One call made on a [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCall {
    RestartOverlay,
    OverlayVisible(bool),
    Phase(Phase),
    UnlockScroll,
    RevealPage,
    HideIntro,
    ReleaseCover,
    ScrollToTop,
    ScrollToTimeline,
}

/// Surface that remembers every call, for headless runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recorder {
    pub calls: Vec<SurfaceCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, call: SurfaceCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    /// Phases in the order they were applied.
    pub fn phases(&self) -> Vec<Phase> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Phase(phase) => Some(*phase),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn restart_overlay(&mut self) {
        self.calls.push(SurfaceCall::RestartOverlay);
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.calls.push(SurfaceCall::OverlayVisible(visible));
    }

    fn set_phase(&mut self, phase: Phase) {
        self.calls.push(SurfaceCall::Phase(phase));
    }

    fn unlock_scroll(&mut self) {
        self.calls.push(SurfaceCall::UnlockScroll);
    }

    fn reveal_page(&mut self) {
        self.calls.push(SurfaceCall::RevealPage);
    }

    fn hide_intro(&mut self) {
        self.calls.push(SurfaceCall::HideIntro);
    }

    fn release_cover(&mut self) {
        self.calls.push(SurfaceCall::ReleaseCover);
    }

    fn scroll_to_top(&mut self) {
        self.calls.push(SurfaceCall::ScrollToTop);
    }

    fn scroll_to_timeline(&mut self) {
        self.calls.push(SurfaceCall::ScrollToTimeline);
    }
}
