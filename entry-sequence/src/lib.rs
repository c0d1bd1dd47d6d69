//! Opening sequence of the invitation page.
//!
//! A click or Enter/Space on the intro plays the envelope overlay, fades to
//! an opaque cover and then reveals the page, lifting the cover a moment
//! later. The whole sequence runs at most once per page load. Once open, the
//! scroll-down button brings the timeline into view.
//!
//! ```text
//! intro --gesture--> playing-envelope --envelope--> entering --fade--> opened
//!   \                                                  ^
//!    `--gesture (reduced motion)-----------------------'
//! ```

pub mod controller;
pub mod phase;
pub mod surface;
pub mod timer;
pub mod timings;
pub mod transition;

pub use controller::EntryController;
pub use phase::{EntryState, Motion, Phase};
pub use surface::{Recorder, Surface, SurfaceCall};
pub use timer::TimerQueue;
pub use timings::{OverlayHide, TimingError, Timings};
pub use transition::{transition, Effect, Event, Gesture, Key, Step};
