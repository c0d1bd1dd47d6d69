//! Tunable delays for the opening sequence.

use crate::phase::Motion;
use std::time::Duration;
use thiserror::Error;

/// When the overlay disappears relative to the fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHide {
    /// This long after the fade starts; must land strictly inside the fade.
    Early(Duration),
    /// Together with the fade completing.
    OnFadeComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Roughly the length of one loop of the overlay animation.
    pub envelope: Duration,
    /// Duration of the fade to the opaque cover.
    pub fade: Duration,
    pub overlay_hide: OverlayHide,
    /// Pause before opening when animations are turned off.
    pub reduced_motion_delay: Duration,
    /// How long the cover stays up once the page has opened, so the page
    /// starts fading in underneath it.
    pub cover_release: Duration,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimingError {
    #[error("envelope duration must be greater than zero")]
    ZeroEnvelope,

    #[error("fade duration must be greater than zero")]
    ZeroFade,

    #[error("overlay would hide as the fade starts, exposing the page")]
    HideBeforeFade,

    #[error("overlay hides {hide:?} into a {fade:?} fade; it must hide before the fade ends")]
    HideAfterFade { hide: Duration, fade: Duration },
}

impl Timings {
    /// Hide the overlay partway through the fade so the animation never
    /// gets to start a second loop.
    pub const fn early_hide() -> Self {
        Self {
            envelope: Duration::from_millis(800),
            fade: Duration::from_millis(650),
            overlay_hide: OverlayHide::Early(Duration::from_millis(260)),
            reduced_motion_delay: Duration::from_millis(200),
            cover_release: Duration::from_millis(60),
        }
    }

    /// Keep the overlay up until the cover is fully opaque.
    pub const fn hide_on_fade_complete() -> Self {
        Self {
            envelope: Duration::from_millis(1100),
            fade: Duration::from_millis(450),
            overlay_hide: OverlayHide::OnFadeComplete,
            reduced_motion_delay: Duration::from_millis(200),
            cover_release: Duration::from_millis(60),
        }
    }

    pub fn validate(&self) -> Result<(), TimingError> {
        if self.envelope.is_zero() {
            return Err(TimingError::ZeroEnvelope);
        }
        if self.fade.is_zero() {
            return Err(TimingError::ZeroFade);
        }
        if let OverlayHide::Early(hide) = self.overlay_hide {
            if hide.is_zero() {
                return Err(TimingError::HideBeforeFade);
            }
            if hide >= self.fade {
                return Err(TimingError::HideAfterFade {
                    hide,
                    fade: self.fade,
                });
            }
        }
        Ok(())
    }

    /// Time from the trigger until the page is open.
    pub fn total(&self, motion: Motion) -> Duration {
        match motion {
            Motion::Full => self.envelope + self.fade,
            Motion::Reduced => self.reduced_motion_delay,
        }
    }

    /// Time from the trigger until the cover is gone too.
    pub fn settled(&self, motion: Motion) -> Duration {
        match motion {
            Motion::Full => self.total(motion) + self.cover_release,
            Motion::Reduced => self.total(motion),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::early_hide()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(Timings::early_hide().validate(), Ok(()));
        assert_eq!(Timings::hide_on_fade_complete().validate(), Ok(()));
        assert_eq!(Timings::default(), Timings::early_hide());
    }

    #[test]
    fn test_early_hide_must_fall_inside_fade() {
        let mut timings = Timings::early_hide();
        timings.overlay_hide = OverlayHide::Early(timings.fade);
        assert!(matches!(
            timings.validate(),
            Err(TimingError::HideAfterFade { .. })
        ));

        timings.overlay_hide = OverlayHide::Early(Duration::ZERO);
        assert_eq!(timings.validate(), Err(TimingError::HideBeforeFade));
    }

    #[test]
    fn test_zero_durations_rejected() {
        let timings = Timings {
            envelope: Duration::ZERO,
            ..Timings::early_hide()
        };
        assert_eq!(timings.validate(), Err(TimingError::ZeroEnvelope));

        let timings = Timings {
            fade: Duration::ZERO,
            ..Timings::hide_on_fade_complete()
        };
        assert_eq!(timings.validate(), Err(TimingError::ZeroFade));
    }

    #[test]
    fn test_total() {
        let timings = Timings::early_hide();
        assert_eq!(timings.total(Motion::Full), Duration::from_millis(1450));
        assert_eq!(timings.total(Motion::Reduced), Duration::from_millis(200));
        assert_eq!(timings.settled(Motion::Full), Duration::from_millis(1510));
        assert_eq!(timings.settled(Motion::Reduced), Duration::from_millis(200));
    }
}
