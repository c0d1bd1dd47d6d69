//! The pure transition function.
//!
//! `transition` never touches the page: it takes the current state and one
//! event and returns the next state plus the effects the caller must apply,
//! in order. Events that do not apply to the current state come back as an
//! ignored step with no effects, which is what makes repeated triggers safe.

use crate::phase::{EntryState, Motion, Phase};
use crate::timings::{OverlayHide, Timings};
use std::time::Duration;

/// A key as reported by the browser's `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Other,
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            _ => Key::Other,
        }
    }

    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// User input that can start the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Click or tap on the intro surface.
    Pointer,
    /// A key pressed anywhere on the page. `intro_active` is false when the
    /// intro region is missing or already `aria-hidden`.
    Key { key: Key, intro_active: bool },
}

impl Gesture {
    pub fn key(key: Key, intro_active: bool) -> Self {
        Gesture::Key { key, intro_active }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Gesture(Gesture),
    /// The overlay animation has had time to play once.
    EnvelopeElapsed,
    OverlayHideDue,
    FadeCompleted,
    ReducedMotionElapsed,
    CoverReleaseDue,
    /// The scroll-down button on the opened page was pressed.
    ScrollDown,
}

/// Something the caller has to do to the page or the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Clear and reassign the animation source so playback starts at frame zero.
    RestartOverlay,
    ShowOverlay,
    HideOverlay,
    Schedule { after: Duration, event: Event },
    /// Let the document scroll again.
    UnlockScroll,
    /// Make the main content visible to users and assistive technology.
    RevealPage,
    /// Mark the intro surface aria-hidden.
    HideIntro,
    /// Fade out the opaque cover.
    ReleaseCover,
    ScrollToTop,
    /// Smooth-scroll the timeline section into view.
    ScrollToTimeline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: EntryState,
    pub effects: Vec<Effect>,
}

impl Step {
    fn ignored(state: &EntryState) -> Self {
        Self {
            state: *state,
            effects: Vec::new(),
        }
    }

    pub fn is_ignored(&self) -> bool {
        self.effects.is_empty()
    }
}

pub fn transition(state: &EntryState, event: Event, timings: &Timings) -> Step {
    match (state.phase, event) {
        (Phase::Intro, Event::Gesture(gesture)) => {
            if let Gesture::Key { key, intro_active } = gesture {
                if !key.activates() || !intro_active {
                    return Step::ignored(state);
                }
            }
            start(state, timings)
        }

        (Phase::PlayingEnvelope, Event::EnvelopeElapsed) => {
            let mut effects = Vec::with_capacity(2);
            if let OverlayHide::Early(after) = timings.overlay_hide {
                effects.push(Effect::Schedule {
                    after,
                    event: Event::OverlayHideDue,
                });
            }
            effects.push(Effect::Schedule {
                after: timings.fade,
                event: Event::FadeCompleted,
            });
            Step {
                state: EntryState {
                    phase: Phase::Entering,
                    cover_visible: true,
                    ..*state
                },
                effects,
            }
        }

        (Phase::Entering, Event::OverlayHideDue) if state.overlay_visible => Step {
            state: EntryState {
                overlay_visible: false,
                ..*state
            },
            effects: vec![Effect::HideOverlay],
        },

        (Phase::Entering, Event::FadeCompleted) if state.motion == Motion::Full => {
            open(state, timings)
        }

        (Phase::Entering, Event::ReducedMotionElapsed) if state.motion == Motion::Reduced => {
            open(state, timings)
        }

        (Phase::Opened, Event::CoverReleaseDue) if state.cover_visible => Step {
            state: EntryState {
                cover_visible: false,
                ..*state
            },
            effects: vec![Effect::ReleaseCover],
        },

        (Phase::Opened, Event::ScrollDown) => Step {
            state: *state,
            effects: vec![Effect::ScrollToTimeline],
        },

        _ => Step::ignored(state),
    }
}

fn start(state: &EntryState, timings: &Timings) -> Step {
    match state.motion {
        Motion::Reduced => Step {
            state: EntryState {
                phase: Phase::Entering,
                cover_visible: true,
                ..*state
            },
            effects: vec![Effect::Schedule {
                after: timings.reduced_motion_delay,
                event: Event::ReducedMotionElapsed,
            }],
        },
        Motion::Full => Step {
            state: EntryState {
                phase: Phase::PlayingEnvelope,
                overlay_visible: true,
                ..*state
            },
            effects: vec![
                Effect::RestartOverlay,
                Effect::ShowOverlay,
                Effect::Schedule {
                    after: timings.envelope,
                    event: Event::EnvelopeElapsed,
                },
            ],
        },
    }
}

fn open(state: &EntryState, timings: &Timings) -> Step {
    let mut effects = Vec::with_capacity(6);
    if state.overlay_visible {
        effects.push(Effect::HideOverlay);
    }
    effects.extend([Effect::UnlockScroll, Effect::RevealPage, Effect::HideIntro]);

    // with full motion the page fades in under the cover before it lifts
    let cover_visible = match state.motion {
        Motion::Full => {
            effects.push(Effect::Schedule {
                after: timings.cover_release,
                event: Event::CoverReleaseDue,
            });
            true
        }
        Motion::Reduced => {
            effects.push(Effect::ReleaseCover);
            false
        }
    };
    effects.push(Effect::ScrollToTop);

    Step {
        state: EntryState {
            phase: Phase::Opened,
            overlay_visible: false,
            cover_visible,
            ..*state
        },
        effects,
    }
}
