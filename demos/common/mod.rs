//! Common utilities for audio demos.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eartrain::{NoteEnvelope, PlayPlan};
use std::io::stdout;
use std::panic;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Trait for audio state that can generate samples.
/// Types implementing this trait can be used as audio sources in the demos.
pub trait ExampleAudioState: Send + 'static {
    /// Called once with the output stream's actual sample rate before any
    /// samples are requested.
    fn set_sample_rate(&mut self, sample_rate: f64);

    fn next_sample(&mut self) -> f64;
}

/// One sounding note from a plan.
struct PlanVoice {
    frequency: f64,
    start_at: f64,
    duration: f64,
}

/// Renders [`PlayPlan`]s as sine voices shaped by the standard
/// [`NoteEnvelope`].
///
/// Feed plans in with [`play`](Self::play); the player keeps a wall clock
/// in sample time, starts each note at its scheduled offset, and drops
/// voices once their envelope has fully faded.
pub struct PlanPlayer {
    sample_rate: f64,
    envelope: NoteEnvelope,
    clock: f64,
    voices: Vec<PlanVoice>,
}

impl PlanPlayer {
    pub fn new() -> Self {
        Self {
            sample_rate: 44100.0,
            envelope: NoteEnvelope::standard(),
            clock: 0.0,
            voices: Vec::new(),
        }
    }

    /// Queues every note of the plan, offsets relative to now.
    pub fn play(&mut self, plan: &PlayPlan) {
        for request in plan.requests() {
            self.voices.push(PlanVoice {
                frequency: request.frequency,
                start_at: self.clock + request.start_offset,
                duration: request.duration,
            });
        }
    }

    #[allow(dead_code)]
    pub fn is_silent(&self) -> bool {
        self.voices.is_empty()
    }
}

impl Default for PlanPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleAudioState for PlanPlayer {
    fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
    }

    fn next_sample(&mut self) -> f64 {
        let now = self.clock;
        self.clock += 1.0 / self.sample_rate;

        let envelope = self.envelope;
        self.voices
            .retain(|v| now - v.start_at < envelope.stop_at(v.duration));

        let mut sample = 0.0;
        for voice in &self.voices {
            let elapsed = now - voice.start_at;
            if elapsed <= 0.0 {
                continue;
            }
            let gain = envelope.gain_at(elapsed, voice.duration);
            sample += (std::f64::consts::TAU * voice.frequency * elapsed).sin() * gain;
        }

        // Headroom for two simultaneous voices at peak
        sample * 0.5
    }
}

/// Key handling result that controls the event loop
#[allow(dead_code)]
pub enum KeyAction {
    /// Continue the event loop
    Continue,
    /// Exit the event loop
    Exit,
}

/// Runs an interactive audio demo with terminal UI.
///
/// This function handles all the boilerplate:
/// - Audio device setup and stream creation
/// - Terminal raw mode and alternate screen
/// - Panic hook for terminal cleanup
/// - Event loop with key polling and a periodic tick
///
/// # Arguments
///
/// * `state` - The audio state
/// * `initial_ui` - Closure to draw the initial UI
/// * `tick` - Closure called every loop iteration, for timers and redraws
/// * `key_handler` - Closure that handles key events and returns whether to continue or exit
#[allow(dead_code)]
pub fn run_interactive_example<S, F, T, K>(
    state: S,
    initial_ui: F,
    tick: T,
    key_handler: K,
) -> Result<()>
where
    S: ExampleAudioState,
    F: FnOnce(&Arc<Mutex<S>>) -> Result<()>,
    T: Fn(&Arc<Mutex<S>>) -> Result<()>,
    K: Fn(&Arc<Mutex<S>>, &KeyEvent) -> Result<KeyAction>,
{
    // Setup audio
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;

    let config = device.default_output_config()?;
    let state = Arc::new(Mutex::new(state));

    // Start audio stream
    let _stream = match config.sample_format() {
        SampleFormat::F32 => create_audio_stream::<f32, S>(&device, &config.into(), state.clone())?,
        SampleFormat::I16 => create_audio_stream::<i16, S>(&device, &config.into(), state.clone())?,
        SampleFormat::U16 => create_audio_stream::<u16, S>(&device, &config.into(), state.clone())?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    // Draw initial UI
    initial_ui(&state)?;

    // Event loop
    loop {
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key_event) = event::read()?
        {
            match key_handler(&state, &key_event)? {
                KeyAction::Continue => {}
                KeyAction::Exit => break,
            }
        }
        tick(&state)?;
    }

    // Cleanup terminal
    cleanup_terminal();

    Ok(())
}

/// Creates an audio stream that pulls samples from the audio state.
pub fn create_audio_stream<T, S>(
    device: &cpal::Device,
    config: &StreamConfig,
    state: Arc<Mutex<S>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
    S: ExampleAudioState,
{
    let channels = config.channels as usize;
    state
        .lock()
        .unwrap()
        .set_sample_rate(config.sample_rate.0 as f64);

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut state = state.lock().unwrap();
            for frame in data.chunks_mut(channels) {
                let sample = state.next_sample();
                let value: T = T::from_sample(sample);
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

/// Cleans up terminal state (cursor, alternate screen, raw mode).
#[allow(dead_code)]
fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Helper to check if a key code is a quit key (Q, ESC).
#[allow(dead_code)]
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
