//! Eartrain - An interval ear-training library for Rust
//!
//! This library provides the interval catalog, playback planning, and test
//! session state machine for building ear-training drills.

pub mod catalog;
pub mod playback;
pub mod session;
pub mod settings;
pub mod timer;

// Re-export commonly used types at the crate root
pub use catalog::{Interval, IntervalCatalog, UnknownInterval};
pub use playback::{BUSY_GRACE_SECONDS, NoteEnvelope, NotePlayRequest, PlayPlan, PlaybackMode};
pub use session::{
    FeedbackKind, FrequencyPair, Notification, SessionState, SessionUpdate, StreakCounters,
    TestSession,
};
pub use settings::{IntervalAvailability, MAX_NOTE_DURATION, MIN_NOTE_DURATION, SettingsStore};
pub use timer::BusyTimer;

#[cfg(feature = "macros")]
pub use eartrain_macros::interval;
