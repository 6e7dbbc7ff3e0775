//! Session settings: root pitch, note length, playback mode, and which
//! intervals are in the draw pool.
//!
//! All writes go through validating setters. Out-of-range values are
//! clamped or ignored rather than stored, so the rest of the crate can
//! treat the stored values as always usable.

use crate::catalog::IntervalCatalog;
use crate::playback::PlaybackMode;

/// Shortest allowed note duration in seconds.
pub const MIN_NOTE_DURATION: f64 = 0.1;

/// Longest allowed note duration in seconds.
pub const MAX_NOTE_DURATION: f64 = 2.0;

/// Default root frequency in Hz (middle C).
pub const DEFAULT_ROOT_FREQUENCY: f64 = 261.63;

/// Default note duration in seconds.
pub const DEFAULT_NOTE_DURATION: f64 = 0.75;

/// Whether the enabled set can supply a test interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalAvailability {
    /// At least one interval is enabled
    Ready,

    /// The enabled set is empty; new tests cannot start
    NoneAvailable,
}

/// Validated storage for the knobs a trainer exposes.
///
/// Every guessable interval starts enabled. Setters return the value that
/// was actually stored, which may differ from the argument when clamping
/// applies.
///
/// # Examples
///
/// ```
/// use eartrain::SettingsStore;
///
/// let mut settings = SettingsStore::new();
/// assert_eq!(settings.root_frequency(), 261.63);
/// assert_eq!(settings.note_duration(), 0.75);
///
/// // Durations clamp to the supported range
/// assert_eq!(settings.set_note_duration(3.0), 2.0);
///
/// // Nonsense root frequencies are ignored
/// assert_eq!(settings.set_root_frequency(-5.0), 261.63);
/// ```
#[derive(Debug, Clone)]
pub struct SettingsStore {
    catalog: IntervalCatalog,
    root_frequency: f64,
    note_duration: f64,
    mode: PlaybackMode,
    enabled: Vec<String>,
    replay_incorrect_guess: bool,
    auto_advance: bool,
}

impl SettingsStore {
    /// Creates a store with the defaults: middle C root, 0.75 s notes,
    /// melodic mode, every guessable interval enabled, and both behavior
    /// toggles off.
    pub fn new() -> Self {
        let catalog = IntervalCatalog::standard();
        let enabled = catalog
            .guessable()
            .iter()
            .map(|i| i.name.to_string())
            .collect();

        Self {
            catalog,
            root_frequency: DEFAULT_ROOT_FREQUENCY,
            note_duration: DEFAULT_NOTE_DURATION,
            mode: PlaybackMode::default(),
            enabled,
            replay_incorrect_guess: false,
            auto_advance: false,
        }
    }

    /// Returns the root frequency in Hz.
    pub fn root_frequency(&self) -> f64 {
        self.root_frequency
    }

    /// Sets the root frequency and returns the stored value.
    ///
    /// Non-finite or non-positive values are ignored; the previous value
    /// stays in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use eartrain::SettingsStore;
    ///
    /// let mut settings = SettingsStore::new();
    /// assert_eq!(settings.set_root_frequency(440.0), 440.0);
    /// assert_eq!(settings.set_root_frequency(f64::NAN), 440.0);
    /// assert_eq!(settings.set_root_frequency(0.0), 440.0);
    /// ```
    pub fn set_root_frequency(&mut self, hz: f64) -> f64 {
        if hz.is_finite() && hz > 0.0 {
            self.root_frequency = hz;
        }
        self.root_frequency
    }

    /// Returns the note duration in seconds.
    pub fn note_duration(&self) -> f64 {
        self.note_duration
    }

    /// Sets the note duration, clamped to
    /// [`MIN_NOTE_DURATION`]..=[`MAX_NOTE_DURATION`], and returns the
    /// stored value. `NaN` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use eartrain::SettingsStore;
    ///
    /// let mut settings = SettingsStore::new();
    /// assert_eq!(settings.set_note_duration(0.05), 0.1);
    /// assert_eq!(settings.set_note_duration(3.0), 2.0);
    /// assert_eq!(settings.set_note_duration(0.5), 0.5);
    /// ```
    pub fn set_note_duration(&mut self, seconds: f64) -> f64 {
        if !seconds.is_nan() {
            self.note_duration = seconds.clamp(MIN_NOTE_DURATION, MAX_NOTE_DURATION);
        }
        self.note_duration
    }

    /// Returns the playback mode.
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Sets the playback mode.
    pub fn set_mode(&mut self, mode: PlaybackMode) {
        self.mode = mode;
    }

    /// Returns the enabled interval names in their current order.
    ///
    /// The order is the display order for defaults; intervals re-enabled
    /// after being turned off move to the end.
    pub fn enabled_intervals(&self) -> &[String] {
        &self.enabled
    }

    /// Returns true if the named interval is enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.iter().any(|n| n == name)
    }

    /// Flips one interval in or out of the enabled set and reports the
    /// availability afterwards.
    ///
    /// Enabling appends to the end of the list. Names the catalog does not
    /// know are refused with `None`, so the enabled set always stays a
    /// subset of the catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use eartrain::{IntervalAvailability, SettingsStore};
    ///
    /// let mut settings = SettingsStore::new();
    /// assert_eq!(settings.toggle_interval("Unison"), Some(IntervalAvailability::Ready));
    /// assert!(!settings.is_enabled("Unison"));
    ///
    /// settings.toggle_interval("Unison");
    /// assert_eq!(settings.enabled_intervals().last().map(String::as_str), Some("Unison"));
    ///
    /// // Unknown names leave the set untouched
    /// assert_eq!(settings.toggle_interval("Major 9th"), None);
    /// ```
    pub fn toggle_interval(&mut self, name: &str) -> Option<IntervalAvailability> {
        if !self.catalog.contains(name) {
            return None;
        }
        match self.enabled.iter().position(|n| n == name) {
            Some(index) => {
                self.enabled.remove(index);
            }
            None => self.enabled.push(name.to_string()),
        }
        Some(self.availability())
    }

    /// Reports whether any interval is enabled.
    pub fn availability(&self) -> IntervalAvailability {
        if self.enabled.is_empty() {
            IntervalAvailability::NoneAvailable
        } else {
            IntervalAvailability::Ready
        }
    }

    /// Returns true if a wrong guess should be demonstrated by playing the
    /// guessed interval.
    pub fn replay_incorrect_guess(&self) -> bool {
        self.replay_incorrect_guess
    }

    /// Sets whether a wrong guess plays the guessed interval as a
    /// demonstration.
    pub fn set_replay_incorrect_guess(&mut self, on: bool) {
        self.replay_incorrect_guess = on;
    }

    /// Returns true if a correct guess should immediately start the next
    /// test.
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// Sets whether a correct guess immediately starts the next test.
    pub fn set_auto_advance(&mut self, on: bool) {
        self.auto_advance = on;
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
