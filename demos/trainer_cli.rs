//! Interactive interval ear trainer.
//!
//! SPACE plays a new test interval and the letter keys submit a guess.
//! R replays the last interval, T flips melodic/harmonic, [ and ] nudge
//! the note duration, N toggles auto-advance, X toggles the wrong-guess
//! demonstration. Press Q or ESC to quit.

mod common;

use anyhow::Result;
use common::{ExampleAudioState, KeyAction, PlanPlayer, is_quit_key, run_interactive_example};
use crossterm::{
    ExecutableCommand,
    cursor::MoveTo,
    event::{KeyCode, KeyEvent, KeyEventKind},
    terminal::{Clear, ClearType},
};
use eartrain::{
    BusyTimer, FeedbackKind, IntervalCatalog, Notification, PlaybackMode, SessionUpdate,
    SettingsStore, StreakCounters, TestSession,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{Write, stdout};

/// One key per guessable interval, in catalog order.
const GUESS_KEYS: &str = "abcdefghijklm";

struct TrainerState {
    session: TestSession<StdRng>,
    timer: BusyTimer,
    player: PlanPlayer,
    feedback: String,
}

impl TrainerState {
    fn new() -> Self {
        // ThreadRng is not Send, so the shared state uses a seeded StdRng
        let session = TestSession::with_rng(SettingsStore::new(), StdRng::from_entropy());
        Self {
            session,
            timer: BusyTimer::new(),
            player: PlanPlayer::new(),
            feedback: String::from("Press SPACE to hear your first interval."),
        }
    }

    /// Folds an operation's update into the display and the audio queue.
    fn apply(&mut self, update: SessionUpdate) {
        let mut messages = Vec::new();
        for notification in update.notifications {
            if let Notification::Feedback { message, kind } = notification {
                messages.push(match kind {
                    FeedbackKind::Correct => format!("✓ {}", message),
                    FeedbackKind::Incorrect => format!("✗ {}", message),
                    FeedbackKind::Info => message,
                });
            }
        }
        if !messages.is_empty() {
            self.feedback = messages.join(" ");
        }
        if let Some(plan) = update.playback {
            self.timer.arm(plan.busy_duration());
            self.player.play(&plan);
        }
    }

    fn snapshot(&self) -> UiSnapshot {
        let settings = self.session.settings();
        UiSnapshot {
            mode: settings.mode(),
            duration: settings.note_duration(),
            root: settings.root_frequency(),
            auto_advance: settings.auto_advance(),
            wrong_guess_demo: settings.replay_incorrect_guess(),
            streaks: self.session.streaks(),
            busy: self.session.is_busy(),
            feedback: self.feedback.clone(),
        }
    }
}

impl ExampleAudioState for TrainerState {
    fn set_sample_rate(&mut self, sample_rate: f64) {
        self.player.set_sample_rate(sample_rate);
    }

    fn next_sample(&mut self) -> f64 {
        self.player.next_sample()
    }
}

/// Display fields copied out of the state so the mutex is released before
/// any terminal writes happen.
struct UiSnapshot {
    mode: PlaybackMode,
    duration: f64,
    root: f64,
    auto_advance: bool,
    wrong_guess_demo: bool,
    streaks: StreakCounters,
    busy: bool,
    feedback: String,
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn draw_ui(snapshot: &UiSnapshot) -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(Clear(ClearType::All))?;

    stdout.execute(MoveTo(0, 0))?;
    write!(
        stdout,
        "Interval Trainer | SPACE=new test  R=replay  T=mode  [ ]=duration  Q=quit"
    )?;

    stdout.execute(MoveTo(0, 1))?;
    write!(
        stdout,
        "mode: {:?}   duration: {:.2}s   root: {:.2} Hz",
        snapshot.mode, snapshot.duration, snapshot.root
    )?;

    stdout.execute(MoveTo(0, 2))?;
    write!(
        stdout,
        "auto-advance (n): {}   wrong-guess demo (x): {}",
        on_off(snapshot.auto_advance),
        on_off(snapshot.wrong_guess_demo)
    )?;

    stdout.execute(MoveTo(0, 3))?;
    write!(
        stdout,
        "streak: {} (best {}){}",
        snapshot.streaks.current,
        snapshot.streaks.high,
        if snapshot.busy { "   [playing]" } else { "" }
    )?;

    stdout.execute(MoveTo(0, 5))?;
    write!(stdout, "> {}", snapshot.feedback)?;

    let catalog = IntervalCatalog::standard();
    let mut lines = vec![String::new(), String::new()];
    for (i, interval) in catalog.guessable().iter().enumerate() {
        let key = (b'a' + i as u8) as char;
        let line = if i < 7 { &mut lines[0] } else { &mut lines[1] };
        line.push_str(&format!("{}={}  ", key, interval.name));
    }
    stdout.execute(MoveTo(0, 7))?;
    write!(stdout, "guess: {}", lines[0])?;
    stdout.execute(MoveTo(0, 8))?;
    write!(stdout, "       {}", lines[1])?;

    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    run_interactive_example(
        TrainerState::new(),
        |state| {
            let snapshot = state.lock().unwrap().snapshot();
            draw_ui(&snapshot)
        },
        |state| {
            // Deliver the playback-finished event once the busy window ends
            let mut guard = state.lock().unwrap();
            if guard.timer.poll() {
                let update = guard.session.finish_playback();
                guard.apply(update);
                let snapshot = guard.snapshot();
                drop(guard);
                draw_ui(&snapshot)?;
            }
            Ok(())
        },
        |state, key_event: &KeyEvent| {
            if key_event.kind != KeyEventKind::Press {
                return Ok(KeyAction::Continue);
            }
            if is_quit_key(key_event.code) {
                return Ok(KeyAction::Exit);
            }

            let mut guard = state.lock().unwrap();
            if let KeyCode::Char(c) = key_event.code {
                match c.to_ascii_lowercase() {
                    ' ' => {
                        let update = guard.session.start_new_test();
                        guard.apply(update);
                    }
                    'r' => {
                        let update = guard.session.replay();
                        guard.apply(update);
                    }
                    't' => {
                        let mode = guard.session.settings().mode().toggled();
                        guard.session.set_mode(mode);
                    }
                    '[' => {
                        let shorter = guard.session.settings().note_duration() - 0.05;
                        guard.session.set_note_duration(shorter);
                    }
                    ']' => {
                        let longer = guard.session.settings().note_duration() + 0.05;
                        guard.session.set_note_duration(longer);
                    }
                    'n' => {
                        let on = !guard.session.settings().auto_advance();
                        guard.session.set_auto_advance(on);
                    }
                    'x' => {
                        let on = !guard.session.settings().replay_incorrect_guess();
                        guard.session.set_replay_incorrect_guess(on);
                    }
                    other => {
                        if let Some(index) = GUESS_KEYS.find(other) {
                            let name = guard.session.catalog().guessable()[index].name;
                            let update = guard.session.submit_guess(name);
                            guard.apply(update);
                        }
                    }
                }
            }

            let snapshot = guard.snapshot();
            drop(guard);
            draw_ui(&snapshot)?;
            Ok(KeyAction::Continue)
        },
    )?;

    println!("\nGoodbye!");
    Ok(())
}
