//! Playback planning: turning a root/target frequency pair into timed note
//! requests.
//!
//! Nothing in this module produces sound. A [`PlayPlan`] is a pure
//! description (which frequencies, when, for how long) that an audio
//! backend renders and a session uses to size its busy window.

/// How the two notes of an interval are arranged in time.
///
/// # Examples
///
/// ```
/// use eartrain::PlaybackMode;
///
/// assert_eq!(PlaybackMode::Melodic.toggled(), PlaybackMode::Harmonic);
/// assert_eq!(PlaybackMode::default(), PlaybackMode::Melodic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Root first, then the target, one after the other
    #[default]
    Melodic,

    /// Root and target together
    Harmonic,
}

impl PlaybackMode {
    /// Returns the other mode.
    pub fn toggled(&self) -> Self {
        match self {
            PlaybackMode::Melodic => PlaybackMode::Harmonic,
            PlaybackMode::Harmonic => PlaybackMode::Melodic,
        }
    }
}

/// A single note to be rendered: frequency, onset, and length.
///
/// Offsets are relative to the start of the plan, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotePlayRequest {
    /// Frequency in Hz
    pub frequency: f64,

    /// Onset relative to the start of the plan, in seconds
    pub start_offset: f64,

    /// Sounding length in seconds (excludes the release tail)
    pub duration: f64,
}

/// The amplitude contour every scheduled note follows.
///
/// A note ramps linearly from silence to `peak` over `attack` seconds,
/// then decays linearly across the rest of the note, reaching silence
/// `release` seconds after the nominal duration. The two ramps meet at the
/// peak; there is no sustain plateau. The voice can be reclaimed
/// `stop_margin` seconds after the nominal duration, slightly past the end
/// of the decay.
///
/// # Examples
///
/// ```
/// use eartrain::playback::NoteEnvelope;
///
/// let env = NoteEnvelope::standard();
/// assert_eq!(env.gain_at(0.0, 0.75), 0.0);
/// assert_eq!(env.gain_at(0.01, 0.75), 0.5);
/// assert!(env.gain_at(0.40, 0.75) < 0.5); // already decaying mid-note
/// assert_eq!(env.gain_at(0.80, 0.75), 0.0);
/// assert_eq!(env.stop_at(0.75), 0.85);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEnvelope {
    /// Seconds from onset to full level
    pub attack: f64,

    /// Peak gain, a linear amplitude factor
    pub peak: f64,

    /// Seconds from nominal duration to silence
    pub release: f64,

    /// Seconds past nominal duration before the voice is reclaimed
    pub stop_margin: f64,
}

impl NoteEnvelope {
    /// Returns the contour used for all interval playback: 10 ms attack to
    /// a 0.5 peak, a decay that reaches silence 50 ms after the nominal
    /// duration, voice reclaimed 100 ms after it.
    pub const fn standard() -> Self {
        Self {
            attack: 0.01,
            peak: 0.5,
            release: 0.05,
            stop_margin: 0.1,
        }
    }

    /// Samples the gain `elapsed` seconds into a note of the given nominal
    /// duration.
    ///
    /// Piecewise linear: rising during the attack, then falling in one
    /// straight segment from the peak to zero at
    /// [`fade_end`](Self::fade_end). Zero before the onset and after the
    /// fade ends.
    pub fn gain_at(&self, elapsed: f64, duration: f64) -> f64 {
        if elapsed <= 0.0 {
            return 0.0;
        }
        if elapsed < self.attack {
            return self.peak * (elapsed / self.attack);
        }
        let fade_end = self.fade_end(duration);
        if elapsed < fade_end {
            return self.peak * ((fade_end - elapsed) / (fade_end - self.attack));
        }
        0.0
    }

    /// Returns when the decay reaches silence, relative to onset.
    pub fn fade_end(&self, duration: f64) -> f64 {
        duration + self.release
    }

    /// Returns when the voice may be reclaimed, relative to onset.
    pub fn stop_at(&self, duration: f64) -> f64 {
        duration + self.stop_margin
    }
}

impl Default for NoteEnvelope {
    fn default() -> Self {
        Self::standard()
    }
}

/// Seconds added to a plan's total duration to size the busy window.
///
/// The grace period covers the release tails and scheduling slop so that
/// the session never re-arms while audio is still sounding.
pub const BUSY_GRACE_SECONDS: f64 = 0.2;

/// A complete playback description for one interval: the note requests in
/// onset order plus the derived timing totals.
///
/// Plans are produced by [`schedule`] and are plain data; comparing two
/// plans compares their requests.
///
/// # Examples
///
/// ```
/// use eartrain::{PlaybackMode, playback};
///
/// let plan = playback::schedule(261.63, 392.00, PlaybackMode::Melodic, 0.75);
/// assert_eq!(plan.requests().len(), 2);
/// assert_eq!(plan.total_duration(), 1.5);
/// assert_eq!(plan.busy_duration(), 1.7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlayPlan {
    requests: Vec<NotePlayRequest>,
    total_duration: f64,
}

impl PlayPlan {
    /// Returns the note requests in onset order.
    pub fn requests(&self) -> &[NotePlayRequest] {
        &self.requests
    }

    /// Returns the time from the first onset to the end of the last nominal
    /// duration, in seconds. Release tails are not included.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Returns how long the session stays busy for this plan:
    /// [`total_duration`](Self::total_duration) plus
    /// [`BUSY_GRACE_SECONDS`].
    pub fn busy_duration(&self) -> f64 {
        self.total_duration + BUSY_GRACE_SECONDS
    }
}

/// Builds the play plan for an interval.
///
/// Melodic mode plays the root for `note_duration` seconds and the target
/// for the same length immediately after, so the plan spans twice the note
/// duration. Harmonic mode starts both notes together and the plan spans a
/// single note duration.
///
/// Scheduling does not validate its inputs; the frequencies are rendered
/// as given.
///
/// # Arguments
///
/// * `root_hz` - Frequency of the root note in Hz
/// * `target_hz` - Frequency of the interval note in Hz
/// * `mode` - Melodic (sequential) or harmonic (simultaneous)
/// * `note_duration` - Nominal length of each note in seconds
///
/// # Examples
///
/// ```
/// use eartrain::{PlaybackMode, playback};
///
/// let plan = playback::schedule(261.63, 523.26, PlaybackMode::Harmonic, 0.5);
/// let starts: Vec<f64> = plan.requests().iter().map(|r| r.start_offset).collect();
/// assert_eq!(starts, vec![0.0, 0.0]);
/// assert_eq!(plan.total_duration(), 0.5);
/// ```
pub fn schedule(root_hz: f64, target_hz: f64, mode: PlaybackMode, note_duration: f64) -> PlayPlan {
    let requests = match mode {
        PlaybackMode::Melodic => vec![
            NotePlayRequest {
                frequency: root_hz,
                start_offset: 0.0,
                duration: note_duration,
            },
            NotePlayRequest {
                frequency: target_hz,
                start_offset: note_duration,
                duration: note_duration,
            },
        ],
        PlaybackMode::Harmonic => vec![
            NotePlayRequest {
                frequency: root_hz,
                start_offset: 0.0,
                duration: note_duration,
            },
            NotePlayRequest {
                frequency: target_hz,
                start_offset: 0.0,
                duration: note_duration,
            },
        ],
    };

    let total_duration = requests
        .iter()
        .map(|r| r.start_offset + r.duration)
        .fold(0.0_f64, f64::max);

    PlayPlan {
        requests,
        total_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_melodic_plan_is_sequential() {
        let plan = schedule(261.63, 392.00, PlaybackMode::Melodic, 0.75);
        let requests = plan.requests();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].frequency, 261.63);
        assert_eq!(requests[0].start_offset, 0.0);
        assert_eq!(requests[0].duration, 0.75);
        assert_eq!(requests[1].frequency, 392.00);
        assert_eq!(requests[1].start_offset, 0.75);
        assert_eq!(requests[1].duration, 0.75);
        assert_eq!(plan.total_duration(), 1.5);
    }

    #[test]
    fn test_harmonic_plan_is_simultaneous() {
        let plan = schedule(261.63, 392.00, PlaybackMode::Harmonic, 0.75);
        let requests = plan.requests();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].start_offset, 0.0);
        assert_eq!(requests[1].start_offset, 0.0);
        assert_eq!(requests[1].frequency, 392.00);
        assert_eq!(plan.total_duration(), 0.75);
    }

    #[test]
    fn test_busy_duration_adds_grace() {
        let melodic = schedule(261.63, 392.00, PlaybackMode::Melodic, 0.75);
        assert!((melodic.busy_duration() - 1.7).abs() < 1e-12);

        let harmonic = schedule(261.63, 392.00, PlaybackMode::Harmonic, 0.75);
        assert!((harmonic.busy_duration() - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_root_note_always_first_and_at_zero() {
        for mode in [PlaybackMode::Melodic, PlaybackMode::Harmonic] {
            let plan = schedule(110.0, 220.0, mode, 0.3);
            assert_eq!(plan.requests()[0].frequency, 110.0);
            assert_eq!(plan.requests()[0].start_offset, 0.0);
        }
    }

    #[test]
    fn test_unison_plan_repeats_the_root() {
        // The scheduler does not special-case equal frequencies
        let plan = schedule(440.0, 440.0, PlaybackMode::Melodic, 0.5);
        assert_eq!(plan.requests()[0].frequency, 440.0);
        assert_eq!(plan.requests()[1].frequency, 440.0);
        assert_eq!(plan.total_duration(), 1.0);
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(PlaybackMode::Melodic.toggled(), PlaybackMode::Harmonic);
        assert_eq!(PlaybackMode::Harmonic.toggled(), PlaybackMode::Melodic);
    }

    #[test]
    fn test_envelope_attack_ramp() {
        let env = NoteEnvelope::standard();
        assert_eq!(env.gain_at(0.0, 0.75), 0.0);
        assert!((env.gain_at(0.005, 0.75) - 0.25).abs() < 1e-12);
        assert_eq!(env.gain_at(0.01, 0.75), 0.5);
    }

    #[test]
    fn test_envelope_decays_through_the_note() {
        let env = NoteEnvelope::standard();

        // After the attack the gain falls in one straight line from the
        // peak at 0.01 s to zero at duration + release; nothing is held
        let mid = env.gain_at(0.4, 0.75);
        assert!((mid - 0.5 * ((0.8 - 0.4) / (0.8 - 0.01))).abs() < 1e-12);
        assert!(mid < 0.5);

        // Halfway down the segment the gain is half the peak
        let halfway = (0.01 + 0.8) / 2.0;
        assert!((env.gain_at(halfway, 0.75) - 0.25).abs() < 1e-12);

        // Strictly decreasing across the note body
        assert!(env.gain_at(0.5, 0.75) < env.gain_at(0.4, 0.75));
        assert!(env.gain_at(0.75, 0.75) < env.gain_at(0.5, 0.75));
    }

    #[test]
    fn test_envelope_reaches_silence_at_fade_end() {
        let env = NoteEnvelope::standard();
        // Still audible at the nominal duration, a sliver left just before
        // the fade ends, silent from fade_end on
        assert!(env.gain_at(0.75, 0.75) > 0.0);
        let near_end = env.gain_at(0.775, 0.75);
        assert!(near_end > 0.0 && near_end < 0.02);
        assert_eq!(env.gain_at(0.80, 0.75), 0.0);
        assert_eq!(env.gain_at(1.0, 0.75), 0.0);
    }

    #[test]
    fn test_envelope_timing_points() {
        let env = NoteEnvelope::standard();
        assert_eq!(env.fade_end(0.75), 0.80);
        assert_eq!(env.stop_at(0.75), 0.85);
        assert!(env.stop_at(0.75) > env.fade_end(0.75));
    }

    #[test]
    fn test_plans_with_same_inputs_are_equal() {
        let a = schedule(261.63, 311.13, PlaybackMode::Melodic, 0.75);
        let b = schedule(261.63, 311.13, PlaybackMode::Melodic, 0.75);
        assert_eq!(a, b);
    }
}
