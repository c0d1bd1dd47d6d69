use std::fmt;

/// Where the page is in its opening sequence.
///
/// Phases only ever move forward: `Intro → PlayingEnvelope → Entering →
/// Opened`. Reduced motion goes `Intro → Entering → Opened`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Intro,
    PlayingEnvelope,
    Entering,
    Opened,
}

impl Phase {
    /// Class name the page body carries while in this phase.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::PlayingEnvelope => "playing-envelope",
            Phase::Entering => "entering",
            Phase::Opened => "opened",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Opened
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's motion preference, read once when the page loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    Full,
    Reduced,
}

impl Motion {
    /// `prefers-reduced-motion: reduce` matched or not.
    pub fn from_preference(prefers_reduced: bool) -> Self {
        if prefers_reduced {
            Motion::Reduced
        } else {
            Motion::Full
        }
    }
}

/// Complete state of one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryState {
    pub phase: Phase,
    pub overlay_visible: bool,
    /// The opaque cover laid over the page from `entering` until shortly
    /// after the page opens.
    pub cover_visible: bool,
    pub motion: Motion,
}

impl EntryState {
    pub fn new(motion: Motion) -> Self {
        Self {
            phase: Phase::Intro,
            overlay_visible: false,
            cover_visible: false,
            motion,
        }
    }

    /// Opened with nothing left on top of the page.
    pub fn is_settled(&self) -> bool {
        self.phase.is_terminal() && !self.overlay_visible && !self.cover_visible
    }
}

impl Default for EntryState {
    fn default() -> Self {
        Self::new(Motion::default())
    }
}
