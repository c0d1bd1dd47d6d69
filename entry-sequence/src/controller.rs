//! Owns one page load's state and applies transitions to a [`Surface`].

use crate::phase::{EntryState, Motion, Phase};
use crate::surface::Surface;
use crate::timer::TimerQueue;
use crate::timings::{TimingError, Timings};
use crate::transition::{transition, Effect, Event, Gesture};
use std::time::Duration;

pub struct EntryController<S: Surface> {
    state: EntryState,
    timings: Timings,
    timers: TimerQueue,
    surface: S,
}

impl<S: Surface> EntryController<S> {
    pub fn new(surface: S, motion: Motion, timings: Timings) -> Result<Self, TimingError> {
        timings.validate()?;
        Ok(Self {
            state: EntryState::new(motion),
            timings,
            timers: TimerQueue::new(),
            surface,
        })
    }

    pub fn with_default_timings(surface: S, motion: Motion) -> Self {
        Self {
            state: EntryState::new(motion),
            timings: Timings::default(),
            timers: TimerQueue::new(),
            surface,
        }
    }

    pub fn state(&self) -> &EntryState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Virtual time since the controller was created.
    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    /// No timers left to fire.
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// Feed a user gesture. Returns whether it started the sequence.
    pub fn trigger(&mut self, gesture: Gesture) -> bool {
        self.handle(Event::Gesture(gesture))
    }

    /// The scroll-down button was pressed. Only does anything once the page
    /// is open.
    pub fn scroll_down(&mut self) -> bool {
        self.handle(Event::ScrollDown)
    }

    /// Apply one event now. Returns false when the event did not apply.
    pub fn handle(&mut self, event: Event) -> bool {
        let step = transition(&self.state, event, &self.timings);
        if step.is_ignored() {
            log::trace!("ignored {:?} in {}", event, self.state.phase);
            return false;
        }

        if step.state.phase != self.state.phase {
            log::debug!(
                "{} -> {} at {:?}",
                self.state.phase,
                step.state.phase,
                self.timers.now()
            );
            self.surface.set_phase(step.state.phase);
        }
        self.state = step.state;

        for effect in step.effects {
            self.apply(effect);
        }
        true
    }

    /// Advance the virtual clock, firing every timer that falls due, in
    /// order. Timers scheduled by those events fire too if they land inside
    /// the window.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.timers.now() + elapsed;
        while let Some(event) = self.timers.pop_due(until) {
            self.handle(event);
        }
        self.timers.settle(until);
    }

    /// Sleep through the remaining timers on the tokio clock. Each wait is
    /// measured from when the previous one finished, so ordering holds even
    /// if the runtime drifts.
    pub async fn run_to_completion(&mut self) {
        while let Some(due) = self.timers.next_due() {
            let wait = due.saturating_sub(self.timers.now());
            tokio::time::sleep(wait).await;
            self.advance(wait);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::RestartOverlay => self.surface.restart_overlay(),
            Effect::ShowOverlay => self.surface.set_overlay_visible(true),
            Effect::HideOverlay => self.surface.set_overlay_visible(false),
            Effect::Schedule { after, event } => self.timers.schedule(after, event),
            Effect::UnlockScroll => self.surface.unlock_scroll(),
            Effect::RevealPage => self.surface.reveal_page(),
            Effect::HideIntro => self.surface.hide_intro(),
            Effect::ReleaseCover => self.surface.release_cover(),
            Effect::ScrollToTop => self.surface.scroll_to_top(),
            Effect::ScrollToTimeline => self.surface.scroll_to_timeline(),
        }
    }
}
