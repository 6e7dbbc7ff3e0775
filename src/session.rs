//! The interval-testing session: a single-threaded state machine that picks
//! intervals, scores guesses, tracks streaks, and reports everything it does
//! as typed notifications.
//!
//! A session never blocks and never touches a clock or an audio device.
//! Each operation returns a [`SessionUpdate`] describing what the host
//! should present (notifications) and what it should render
//! (an optional [`PlayPlan`]). While a plan is sounding the session is
//! *busy* and drops test operations until the host reports completion
//! through [`TestSession::finish_playback`], typically driven by a
//! [`BusyTimer`](crate::BusyTimer) or a real audio-completion callback.
//!
//! # Examples
//!
//! ```
//! use eartrain::{SettingsStore, TestSession};
//!
//! let mut session = TestSession::new(SettingsStore::new());
//!
//! let update = session.start_new_test();
//! assert!(update.playback.is_some());
//!
//! // ...the host renders the plan, then reports completion...
//! session.finish_playback();
//!
//! // Peek at the answer so the guess below is guaranteed correct
//! let answer = session.active_interval().unwrap().to_string();
//! session.submit_guess(&answer);
//! assert_eq!(session.streaks().current, 1);
//! ```

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use crate::catalog::IntervalCatalog;
use crate::playback::{self, PlayPlan, PlaybackMode};
use crate::settings::{IntervalAvailability, SettingsStore};

/// How a feedback message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Neutral guidance ("Listen carefully to the interval!")
    Info,

    /// A correct guess
    Correct,

    /// An incorrect guess
    Incorrect,
}

/// One thing the host should present as a result of an operation.
///
/// Notifications replace direct UI manipulation: the session reports *what
/// happened* and the host decides how to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A user-facing message
    Feedback { message: String, kind: FeedbackKind },

    /// The streak counters changed
    StreakUpdate { current: u32, high: u32 },

    /// The session entered (true) or left (false) its busy window
    BusyChanged(bool),

    /// The enabled interval set crossed into or out of emptiness
    Availability(IntervalAvailability),
}

impl Notification {
    fn info(message: impl Into<String>) -> Self {
        Notification::Feedback {
            message: message.into(),
            kind: FeedbackKind::Info,
        }
    }
}

/// What one session operation produced: notifications to present and,
/// when something should sound, a playback plan to render.
///
/// An empty update means the operation was dropped (attempted while busy)
/// or had nothing to report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionUpdate {
    /// Presentation events in the order they should be handled
    pub notifications: Vec<Notification>,

    /// A plan for the audio backend, when the operation scheduled sound
    pub playback: Option<PlayPlan>,
}

impl SessionUpdate {
    /// An update with nothing to present and nothing to play.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the update carries no notifications and no plan.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty() && self.playback.is_none()
    }
}

/// Consecutive-correct-guess counters.
///
/// `current` resets to zero on any wrong guess; `high` only ever rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakCounters {
    /// Correct guesses since the last wrong one
    pub current: u32,

    /// The highest value `current` has reached
    pub high: u32,
}

/// The frequencies of the most recently played test interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyPair {
    /// Root note frequency in Hz
    pub root: f64,

    /// Interval note frequency in Hz
    pub target: f64,
}

/// The session's externally visible phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No test in progress
    Idle,

    /// A test is waiting for a guess
    Armed,

    /// Playback is sounding; test operations are dropped
    Busy,
}

/// An interval ear-training session.
///
/// Generic over its random source so tests can inject a seeded generator;
/// the default is the thread-local RNG.
///
/// All mutation goes through the operation methods, each of which returns a
/// [`SessionUpdate`]. Settings may be changed at any time (including while
/// busy) and affect only future scheduling.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use eartrain::{SettingsStore, TestSession};
///
/// // Deterministic session for a test
/// let rng = StdRng::seed_from_u64(7);
/// let mut session = TestSession::with_rng(SettingsStore::new(), rng);
/// assert!(session.start_new_test().playback.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct TestSession<R: Rng = ThreadRng> {
    catalog: IntervalCatalog,
    settings: SettingsStore,
    active_interval: Option<String>,
    last_played: Option<FrequencyPair>,
    busy: bool,
    streaks: StreakCounters,
    rng: R,
}

impl TestSession<ThreadRng> {
    /// Creates a session over the given settings, drawing randomness from
    /// the thread-local generator.
    pub fn new(settings: SettingsStore) -> Self {
        Self::with_rng(settings, rand::thread_rng())
    }
}

impl Default for TestSession<ThreadRng> {
    fn default() -> Self {
        Self::new(SettingsStore::new())
    }
}

impl<R: Rng> TestSession<R> {
    /// Creates a session with a caller-supplied random source.
    ///
    /// # Arguments
    ///
    /// * `settings` - Initial settings; the session takes ownership
    /// * `rng` - Random source used to pick test intervals
    pub fn with_rng(settings: SettingsStore, rng: R) -> Self {
        Self {
            catalog: IntervalCatalog::standard(),
            settings,
            active_interval: None,
            last_played: None,
            busy: false,
            streaks: StreakCounters::default(),
            rng,
        }
    }

    /// Picks a fresh interval from the enabled set and schedules it.
    ///
    /// The enabled set, root frequency, mode, and note duration are all
    /// read at call time. On success the session arms itself with the
    /// picked interval, remembers the frequency pair for replay, and goes
    /// busy until [`finish_playback`](Self::finish_playback).
    ///
    /// Dropped (empty update) while busy. With an empty enabled set the
    /// session stays idle and only a feedback message is returned.
    pub fn start_new_test(&mut self) -> SessionUpdate {
        if self.busy {
            return SessionUpdate::empty();
        }

        let picked = self
            .settings
            .enabled_intervals()
            .choose(&mut self.rng)
            .cloned();
        let Some(name) = picked else {
            return SessionUpdate {
                notifications: vec![Notification::info(
                    "Select at least one interval to start a test.",
                )],
                playback: None,
            };
        };

        let root = self.settings.root_frequency();
        let target = self.catalog.frequency_for(root, &name);
        let pair = FrequencyPair { root, target };

        self.active_interval = Some(name);
        self.last_played = Some(pair);

        let mut notifications = vec![Notification::info("Listen carefully to the interval!")];
        let plan = self.begin_playback(pair, &mut notifications);

        SessionUpdate {
            notifications,
            playback: Some(plan),
        }
    }

    /// Replays the most recent test interval.
    ///
    /// The frequency pair is replayed exactly as stored, even if the root
    /// frequency has changed since; mode and note duration are read live.
    /// Replaying does not change the active test or the streaks.
    ///
    /// Dropped while busy. Before any test has been played, returns only a
    /// feedback message.
    pub fn replay(&mut self) -> SessionUpdate {
        if self.busy {
            return SessionUpdate::empty();
        }

        let Some(pair) = self.last_played else {
            return SessionUpdate {
                notifications: vec![Notification::info("Please play a new test first.")],
                playback: None,
            };
        };

        let mut notifications = vec![Notification::info("Replaying the last interval...")];
        let plan = self.begin_playback(pair, &mut notifications);

        SessionUpdate {
            notifications,
            playback: Some(plan),
        }
    }

    /// Scores a guess against the active test.
    ///
    /// A correct guess (exact, case-sensitive name match) disarms the test
    /// and extends the streak; when auto-advance is enabled it also starts
    /// the next test in the same update. A wrong guess resets the
    /// current streak but keeps the test active so the user can replay or
    /// guess again; when the incorrect-guess demonstration is enabled, the
    /// guessed interval is scheduled against the live root so the user can
    /// hear what they chose.
    ///
    /// Dropped while busy. Without an active test, returns only a feedback
    /// message.
    pub fn submit_guess(&mut self, guess: &str) -> SessionUpdate {
        if self.busy {
            return SessionUpdate::empty();
        }

        let Some(expected) = self.active_interval.clone() else {
            return SessionUpdate {
                notifications: vec![Notification::info("Please play an interval first!")],
                playback: None,
            };
        };

        if guess == expected {
            self.active_interval = None;
            self.streaks.current += 1;
            if self.streaks.current > self.streaks.high {
                self.streaks.high = self.streaks.current;
            }

            let mut update = SessionUpdate {
                notifications: vec![
                    Notification::Feedback {
                        message: format!("Correct! You heard a {}.", expected),
                        kind: FeedbackKind::Correct,
                    },
                    self.streak_update(),
                ],
                playback: None,
            };

            if self.settings.auto_advance() {
                let next = self.start_new_test();
                update.notifications.extend(next.notifications);
                update.playback = next.playback;
            }

            update
        } else {
            self.streaks.current = 0;

            let mut notifications = vec![
                Notification::Feedback {
                    message: format!(
                        "Oops! You guessed {}, but it was a {}. Try replaying it or start a new test!",
                        guess, expected
                    ),
                    kind: FeedbackKind::Incorrect,
                },
                self.streak_update(),
            ];

            let mut demo_plan = None;
            if self.settings.replay_incorrect_guess() {
                // Demonstration playback: the guessed interval against the
                // live root. The stored pair and active test are untouched.
                let root = self.settings.root_frequency();
                let target = self.catalog.frequency_for(root, guess);
                notifications.push(Notification::info(format!(
                    "Here is what a {} would have sounded like.",
                    guess
                )));
                let plan = self.begin_playback(FrequencyPair { root, target }, &mut notifications);
                demo_plan = Some(plan);
            }

            SessionUpdate {
                notifications,
                playback: demo_plan,
            }
        }
    }

    /// Reports that the current playback has finished sounding.
    ///
    /// This is the only way out of the busy window. Hosts call it from a
    /// [`BusyTimer`](crate::BusyTimer) or from a real audio-completion
    /// signal. No-op (empty update) when the session is not busy, so stray
    /// or duplicate completions are harmless.
    pub fn finish_playback(&mut self) -> SessionUpdate {
        if !self.busy {
            return SessionUpdate::empty();
        }
        self.busy = false;
        SessionUpdate {
            notifications: vec![Notification::BusyChanged(false)],
            playback: None,
        }
    }

    /// Flips one interval in or out of the draw pool.
    ///
    /// The store refuses names not in the catalog, which surfaces here as
    /// an empty update. Effective toggles report the resulting availability
    /// so hosts can enable or disable their start control. Allowed while
    /// busy; the pool is re-read on the next test anyway.
    pub fn toggle_interval(&mut self, name: &str) -> SessionUpdate {
        match self.settings.toggle_interval(name) {
            Some(availability) => SessionUpdate {
                notifications: vec![Notification::Availability(availability)],
                playback: None,
            },
            None => SessionUpdate::empty(),
        }
    }

    /// Sets the root frequency for future tests. See
    /// [`SettingsStore::set_root_frequency`].
    pub fn set_root_frequency(&mut self, hz: f64) -> f64 {
        self.settings.set_root_frequency(hz)
    }

    /// Sets the note duration for future scheduling, returning the clamped
    /// value. See [`SettingsStore::set_note_duration`].
    pub fn set_note_duration(&mut self, seconds: f64) -> f64 {
        self.settings.set_note_duration(seconds)
    }

    /// Sets the playback mode for future scheduling.
    pub fn set_mode(&mut self, mode: PlaybackMode) {
        self.settings.set_mode(mode);
    }

    /// Enables or disables the incorrect-guess demonstration.
    pub fn set_replay_incorrect_guess(&mut self, on: bool) {
        self.settings.set_replay_incorrect_guess(on);
    }

    /// Enables or disables auto-advance after a correct guess.
    pub fn set_auto_advance(&mut self, on: bool) {
        self.settings.set_auto_advance(on);
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Returns the catalog this session draws from.
    pub fn catalog(&self) -> &IntervalCatalog {
        &self.catalog
    }

    /// Returns the session's phase: busy, armed, or idle.
    pub fn state(&self) -> SessionState {
        if self.busy {
            SessionState::Busy
        } else if self.active_interval.is_some() {
            SessionState::Armed
        } else {
            SessionState::Idle
        }
    }

    /// Returns true while scheduled playback is sounding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns the interval awaiting a guess, if any.
    pub fn active_interval(&self) -> Option<&str> {
        self.active_interval.as_deref()
    }

    /// Returns the frequencies of the most recently played test.
    pub fn last_played(&self) -> Option<FrequencyPair> {
        self.last_played
    }

    /// Returns the streak counters.
    pub fn streaks(&self) -> StreakCounters {
        self.streaks
    }

    fn streak_update(&self) -> Notification {
        Notification::StreakUpdate {
            current: self.streaks.current,
            high: self.streaks.high,
        }
    }

    fn begin_playback(
        &mut self,
        pair: FrequencyPair,
        notifications: &mut Vec<Notification>,
    ) -> PlayPlan {
        let plan = playback::schedule(
            pair.root,
            pair.target,
            self.settings.mode(),
            self.settings.note_duration(),
        );
        self.busy = true;
        notifications.push(Notification::BusyChanged(true));
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(settings: SettingsStore) -> TestSession<StdRng> {
        TestSession::with_rng(settings, StdRng::seed_from_u64(17))
    }

    /// Settings with a single enabled interval, for deterministic picks.
    fn solo_settings(name: &str) -> SettingsStore {
        let mut settings = SettingsStore::new();
        let others: Vec<String> = settings
            .enabled_intervals()
            .iter()
            .filter(|n| n.as_str() != name)
            .cloned()
            .collect();
        for other in &others {
            settings.toggle_interval(other);
        }
        settings
    }

    fn feedback_messages(update: &SessionUpdate) -> Vec<String> {
        update
            .notifications
            .iter()
            .filter_map(|n| match n {
                Notification::Feedback { message, .. } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_start_arms_and_goes_busy() {
        let mut session = seeded(SettingsStore::new());
        assert_eq!(session.state(), SessionState::Idle);

        let update = session.start_new_test();
        assert_eq!(session.state(), SessionState::Busy);
        assert!(session.active_interval().is_some());
        assert!(session.last_played().is_some());
        assert!(update.playback.is_some());
        assert!(
            update
                .notifications
                .contains(&Notification::BusyChanged(true))
        );
        assert_eq!(
            feedback_messages(&update),
            vec!["Listen carefully to the interval!"]
        );
    }

    #[test]
    fn test_start_picks_from_enabled_pool() {
        let mut settings = SettingsStore::new();
        for name in ["Unison", "Minor 2nd", "Major 2nd", "Minor 3rd", "Major 3rd"] {
            settings.toggle_interval(name);
        }
        let pool: Vec<String> = settings.enabled_intervals().to_vec();
        let mut session = seeded(settings);

        for _ in 0..25 {
            session.start_new_test();
            let active = session.active_interval().unwrap().to_string();
            assert!(pool.contains(&active), "picked {} outside pool", active);
            session.finish_playback();
            session.submit_guess(&active);
        }
    }

    #[test]
    fn test_single_interval_pool_is_deterministic() {
        let mut session = seeded(solo_settings("Perfect 5th"));
        session.start_new_test();

        assert_eq!(session.active_interval(), Some("Perfect 5th"));
        let pair = session.last_played().unwrap();
        assert_eq!(pair.root, 261.63);
        assert!((pair.target - 392.00).abs() < 0.01);
    }

    #[test]
    fn test_start_with_empty_pool_stays_idle() {
        let mut settings = SettingsStore::new();
        let names: Vec<String> = settings.enabled_intervals().to_vec();
        for name in &names {
            settings.toggle_interval(name);
        }
        let mut session = seeded(settings);

        let update = session.start_new_test();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(update.playback.is_none());
        assert_eq!(
            feedback_messages(&update),
            vec!["Select at least one interval to start a test."]
        );
    }

    #[test]
    fn test_operations_while_busy_are_dropped() {
        let mut session = seeded(solo_settings("Octave"));
        session.start_new_test();
        assert!(session.is_busy());

        assert!(session.start_new_test().is_empty());
        assert!(session.replay().is_empty());
        assert!(session.submit_guess("Octave").is_empty());

        // The dropped guess changed nothing
        assert_eq!(session.streaks(), StreakCounters::default());
        assert_eq!(session.active_interval(), Some("Octave"));
    }

    #[test]
    fn test_finish_playback_fires_once() {
        let mut session = seeded(SettingsStore::new());
        session.start_new_test();

        let update = session.finish_playback();
        assert_eq!(
            update.notifications,
            vec![Notification::BusyChanged(false)]
        );
        assert_eq!(session.state(), SessionState::Armed);

        assert!(session.finish_playback().is_empty());
    }

    #[test]
    fn test_replay_before_any_test() {
        let mut session = seeded(SettingsStore::new());
        let update = session.replay();
        assert!(update.playback.is_none());
        assert_eq!(
            feedback_messages(&update),
            vec!["Please play a new test first."]
        );
    }

    #[test]
    fn test_replay_freezes_pitches_but_reads_settings_live() {
        let mut session = seeded(solo_settings("Perfect 5th"));
        session.start_new_test();
        session.finish_playback();

        session.set_root_frequency(440.0);
        session.set_mode(PlaybackMode::Harmonic);
        session.set_note_duration(0.3);

        let update = session.replay();
        let plan = update.playback.as_ref().unwrap();
        let requests = plan.requests();

        // Frozen pair: still the original C4 root and its fifth
        assert_eq!(requests[0].frequency, 261.63);
        assert!((requests[1].frequency - 392.00).abs() < 0.01);
        // Live mode and duration
        assert_eq!(requests[1].start_offset, 0.0);
        assert_eq!(requests[0].duration, 0.3);
        assert_eq!(
            feedback_messages(&update),
            vec!["Replaying the last interval..."]
        );
    }

    #[test]
    fn test_replay_is_idempotent_when_settings_unchanged() {
        let mut session = seeded(solo_settings("Minor 3rd"));
        session.start_new_test();
        session.finish_playback();

        let first = session.replay().playback.unwrap();
        session.finish_playback();
        let second = session.replay().playback.unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_guess_without_active_test() {
        let mut session = seeded(SettingsStore::new());
        let update = session.submit_guess("Octave");
        assert_eq!(
            feedback_messages(&update),
            vec!["Please play an interval first!"]
        );
        assert_eq!(session.streaks(), StreakCounters::default());
    }

    #[test]
    fn test_correct_guess_disarms_and_extends_streak() {
        let mut session = seeded(solo_settings("Major 3rd"));
        session.start_new_test();
        session.finish_playback();

        let update = session.submit_guess("Major 3rd");
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.active_interval(), None);
        assert_eq!(session.streaks(), StreakCounters { current: 1, high: 1 });
        assert!(update.notifications.contains(&Notification::Feedback {
            message: "Correct! You heard a Major 3rd.".to_string(),
            kind: FeedbackKind::Correct,
        }));
        assert!(
            update
                .notifications
                .contains(&Notification::StreakUpdate { current: 1, high: 1 })
        );
    }

    #[test]
    fn test_incorrect_guess_resets_current_keeps_high() {
        let mut session = seeded(solo_settings("Perfect 4th"));

        // Build a streak of two
        for _ in 0..2 {
            session.start_new_test();
            session.finish_playback();
            session.submit_guess("Perfect 4th");
        }
        assert_eq!(session.streaks(), StreakCounters { current: 2, high: 2 });

        session.start_new_test();
        session.finish_playback();
        let update = session.submit_guess("Tritone");

        assert_eq!(session.streaks(), StreakCounters { current: 0, high: 2 });
        assert!(
            update
                .notifications
                .contains(&Notification::StreakUpdate { current: 0, high: 2 })
        );
        assert_eq!(
            feedback_messages(&update),
            vec![
                "Oops! You guessed Tritone, but it was a Perfect 4th. Try replaying it or start a new test!"
            ]
        );
    }

    #[test]
    fn test_incorrect_guess_keeps_test_active() {
        let mut session = seeded(solo_settings("Minor 6th"));
        session.start_new_test();
        session.finish_playback();

        session.submit_guess("Major 6th");
        assert_eq!(session.state(), SessionState::Armed);

        // The same test can still be answered
        session.submit_guess("Minor 6th");
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.streaks().current, 1);
    }

    #[test]
    fn test_case_sensitive_matching() {
        let mut session = seeded(solo_settings("Octave"));
        session.start_new_test();
        session.finish_playback();

        session.submit_guess("octave");
        assert_eq!(session.state(), SessionState::Armed);
        assert_eq!(session.streaks().current, 0);
    }

    #[test]
    fn test_auto_advance_chains_next_test() {
        let mut settings = solo_settings("Major 2nd");
        settings.set_auto_advance(true);
        let mut session = seeded(settings);

        session.start_new_test();
        session.finish_playback();
        let update = session.submit_guess("Major 2nd");

        // One update carries the result and the next challenge
        assert!(update.playback.is_some());
        assert_eq!(session.state(), SessionState::Busy);
        assert_eq!(session.active_interval(), Some("Major 2nd"));
        let messages = feedback_messages(&update);
        assert_eq!(
            messages,
            vec![
                "Correct! You heard a Major 2nd.",
                "Listen carefully to the interval!"
            ]
        );
    }

    #[test]
    fn test_incorrect_guess_demo_playback() {
        let mut settings = solo_settings("Perfect 5th");
        settings.set_replay_incorrect_guess(true);
        let mut session = seeded(settings);

        session.start_new_test();
        session.finish_playback();
        let before = session.last_played().unwrap();

        let update = session.submit_guess("Octave");

        // The demo plays the guessed interval against the live root
        let plan = update.playback.as_ref().unwrap();
        assert_eq!(plan.requests()[0].frequency, 261.63);
        assert_eq!(plan.requests()[1].frequency, 261.63 * 2.0);
        assert!(session.is_busy());
        assert!(feedback_messages(&update).contains(&String::from(
            "Here is what a Octave would have sounded like."
        )));

        // The real test is untouched by the demonstration
        assert_eq!(session.last_played(), Some(before));
        session.finish_playback();
        assert_eq!(session.active_interval(), Some("Perfect 5th"));
    }

    #[test]
    fn test_unknown_guess_demo_falls_back_to_root() {
        let mut settings = solo_settings("Minor 2nd");
        settings.set_replay_incorrect_guess(true);
        let mut session = seeded(settings);

        session.start_new_test();
        session.finish_playback();
        let update = session.submit_guess("Not An Interval");

        let plan = update.playback.unwrap();
        assert_eq!(plan.requests()[0].frequency, 261.63);
        assert_eq!(plan.requests()[1].frequency, 261.63);
    }

    #[test]
    fn test_toggle_unknown_interval_is_ignored() {
        let mut session = seeded(SettingsStore::new());
        let update = session.toggle_interval("Major 9th");
        assert!(update.is_empty());
        assert_eq!(session.settings().enabled_intervals().len(), 13);
    }

    #[test]
    fn test_toggle_reports_availability_transitions() {
        let mut session = seeded(SettingsStore::new());
        let names: Vec<String> = session.settings().enabled_intervals().to_vec();

        let mut last = SessionUpdate::empty();
        for name in &names {
            last = session.toggle_interval(name);
        }
        assert_eq!(
            last.notifications,
            vec![Notification::Availability(
                IntervalAvailability::NoneAvailable
            )]
        );

        let update = session.toggle_interval("Octave");
        assert_eq!(
            update.notifications,
            vec![Notification::Availability(IntervalAvailability::Ready)]
        );
    }

    #[test]
    fn test_settings_changes_apply_to_next_test() {
        let mut session = seeded(solo_settings("Octave"));
        session.set_root_frequency(440.0);
        assert_eq!(session.set_note_duration(3.0), 2.0);
        session.set_mode(PlaybackMode::Harmonic);

        let update = session.start_new_test();
        let plan = update.playback.unwrap();
        assert_eq!(plan.requests()[0].frequency, 440.0);
        assert_eq!(plan.requests()[1].frequency, 880.0);
        assert_eq!(plan.requests()[1].start_offset, 0.0);
        assert_eq!(plan.total_duration(), 2.0);
    }

    #[test]
    fn test_state_walkthrough() {
        let mut session = seeded(solo_settings("Tritone"));
        assert_eq!(session.state(), SessionState::Idle);

        session.start_new_test();
        assert_eq!(session.state(), SessionState::Busy);

        session.finish_playback();
        assert_eq!(session.state(), SessionState::Armed);

        session.submit_guess("Tritone");
        assert_eq!(session.state(), SessionState::Idle);
    }
}
